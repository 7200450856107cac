/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use maki_assets::PixelFormat;

use crate::cmd_args::DEFAULT_DIMENSION;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub width:          usize,
    pub height:         usize,
    pub format:         PixelFormat,
    pub compress:       bool,
    pub verify:         bool,
    pub override_files: bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            width:          DEFAULT_DIMENSION,
            height:         DEFAULT_DIMENSION,
            format:         PixelFormat::Rgb565,
            compress:       true,
            verify:         false,
            override_files: false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(width) = options.get_one::<usize>("width") {
        cmd_options.width = *width;
    }
    if let Some(height) = options.get_one::<usize>("height") {
        cmd_options.height = *height;
    }
    if options.get_flag("grayscale") {
        info!("Packing pixels as grayscale");
        cmd_options.format = PixelFormat::Grayscale;
    }
    if options.get_flag("uncompressed") {
        info!("Skipping Huffman compression");
        cmd_options.compress = false;
    }
    if options.get_flag("verify") {
        cmd_options.verify = true;
    }
    if options.get_flag("all-yes") {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use maki_assets::PixelFormat;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::parse_options;

    #[test]
    fn flags_reach_options() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "maki",
                "-i",
                "a.png",
                "-o",
                "a.h",
                "--grayscale",
                "--uncompressed",
                "--width",
                "128",
                "-y"
            ])
            .unwrap();
        let options = parse_options(&matches);

        assert_eq!(options.format, PixelFormat::Grayscale);
        assert_eq!(options.width, 128);
        assert_eq!(options.height, 240);
        assert!(!options.compress);
        assert!(options.override_files);
        assert!(!options.verify);
    }
}
