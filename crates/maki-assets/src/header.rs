/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! C header emission
use alloc::string::{String, ToString};
use core::fmt::Write;

use crate::errors::AssetErrors;

/// Turn `name` into a valid C identifier
///
/// Anything outside `[A-Za-z0-9_]` becomes `_` and a leading digit
/// is prefixed with `_`.
pub fn sanitize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 1);

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        out.push('_');
    }
    out.extend(name.chars().map(|c| {
        if c.is_ascii_alphanumeric() || c == '_' {
            c
        } else {
            '_'
        }
    }));
    out
}

/// Renders a byte buffer as a C header containing one array
///
/// ```text
/// #ifndef ICON
/// #define ICON
/// const unsigned char icon[3] = {1,2,3};
/// #endif
/// ```
#[derive(Clone, Debug)]
pub struct HeaderWriter {
    name:  String,
    guard: String
}

impl HeaderWriter {
    /// Create a writer for an array called `name`
    ///
    /// # Errors
    /// If `name` is empty
    pub fn new(name: &str) -> Result<HeaderWriter, AssetErrors> {
        if name.is_empty() {
            return Err(AssetErrors::InvalidVariableName(name.to_string()));
        }
        let name = sanitize_name(name);
        let guard = name.to_ascii_uppercase();

        Ok(HeaderWriter { name, guard })
    }

    /// Derive the array name from the header's output path
    ///
    /// `assets/splash-screen.h` gives `splash_screen`
    pub fn from_output_path(path: &str) -> Result<HeaderWriter, AssetErrors> {
        let base = path.rsplit(['/', '\\']).next().unwrap_or(path);
        let stem = base.strip_suffix(".h").unwrap_or(base);

        if stem.is_empty() {
            return Err(AssetErrors::InvalidVariableName(path.to_string()));
        }
        HeaderWriter::new(stem)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn guard(&self) -> &str {
        &self.guard
    }

    /// Render `data` as the complete header text
    pub fn render(&self, data: &[u8]) -> String {
        // "255," is the widest entry
        let mut out = String::with_capacity(data.len() * 4 + 2 * self.guard.len() + 64);

        out.push_str("#ifndef ");
        out.push_str(&self.guard);
        out.push('\n');
        out.push_str("#define ");
        out.push_str(&self.guard);
        out.push('\n');

        let _ = write!(out, "const unsigned char {}[{}] = {{", self.name, data.len());

        for (pos, byte) in data.iter().enumerate() {
            if pos != 0 {
                out.push(',');
            }
            let _ = write!(out, "{byte}");
        }
        out.push_str("};\n#endif\n");
        out
    }
}
