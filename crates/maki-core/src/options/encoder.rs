/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Options respected by the encoder
#[derive(Debug, Copy, Clone)]
pub struct EncoderOptions {
    /// Maximum number of rounds the encoder will apply
    /// before giving up on further shrinking
    ///
    /// The round count is stored in a single byte, hence
    /// this can never exceed `255`
    ///
    /// - Default value: 255
    max_rounds: u8
}

impl Default for EncoderOptions {
    fn default() -> Self {
        EncoderOptions { max_rounds: u8::MAX }
    }
}

impl EncoderOptions {
    /// Get the maximum number of rounds the encoder may apply
    pub const fn get_max_rounds(&self) -> u8 {
        self.max_rounds
    }
    /// Set the maximum number of rounds the encoder may apply
    ///
    /// A value of zero means no round can be applied, which
    /// makes every encode fail.
    ///
    /// # Example
    /// ```
    /// use maki_core::options::EncoderOptions;
    /// let options = EncoderOptions::default().set_max_rounds(2);
    /// assert_eq!(options.get_max_rounds(), 2);
    /// ```
    pub const fn set_max_rounds(mut self, rounds: u8) -> Self {
        self.max_rounds = rounds;
        self
    }
}
