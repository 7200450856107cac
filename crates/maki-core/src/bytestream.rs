/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A simple implementation of a bytestream reader
//! and writer.
//!
//! This module contains two main structs that help in
//! byte reading and byte writing
//!
//! Useful for a lot of binary formats, the reader works
//! over a borrowed slice and the writer over an owned `Vec`
pub use reader::{ZByteIoError, ZByteReader};
pub use writer::ZByteWriter;

mod reader;
mod writer;
