/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Decoder options
///
/// Limits here are checked before any output buffer is allocated,
/// so they can be used to guard against hostile inputs that declare
/// huge outputs.
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum number of bytes a single decoded frame, or the whole
    /// decoded envelope, may expand to
    ///
    /// - Default value: 1 GiB
    max_output_size: usize,
    /// Treat recoverable inconsistencies as errors
    ///
    /// When set, the decoder confirms that the decoded length matches
    /// the size recorded in the envelope and that the bits after the
    /// frequency table terminator are zero.
    ///
    /// - Default value: true
    strict_mode:     bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions {
            max_output_size: 1 << 30,
            strict_mode:     true
        }
    }
}

impl DecoderOptions {
    /// Get the maximum output size the decoder will produce
    pub const fn get_max_output_size(&self) -> usize {
        self.max_output_size
    }
    /// Set the maximum output size the decoder will produce
    ///
    /// # Example
    /// ```
    /// use maki_core::options::DecoderOptions;
    /// let options = DecoderOptions::default().set_max_output_size(1024);
    /// assert_eq!(options.get_max_output_size(), 1024);
    /// ```
    pub const fn set_max_output_size(mut self, size: usize) -> Self {
        self.max_output_size = size;
        self
    }
    /// Return true if the decoder should reject inconsistencies
    /// it could otherwise skip over
    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }
    /// Set whether the decoder should be in strict mode
    pub const fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}
