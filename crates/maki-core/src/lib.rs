/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the maki codec and asset tools
//!
//! It currently contains
//!
//! - A bytestream reader and writer with little endian aware reads and writes
//! - Encoder and decoder options
//! - A logging facade which compiles to nothing without the `log` feature
//!
//! This library is `#[no_std]` with `alloc` needed for the `Vec` backed writer.
//!
//! # Features
//!  - `std`: Enables `std::error::Error` implementations.
//!  - `log`: Routes the logging macros to the `log` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bytestream;
pub mod log;
pub mod options;
