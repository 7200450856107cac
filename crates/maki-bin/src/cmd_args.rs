/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

/// Panel size of the display the assets are made for
pub const DEFAULT_DIMENSION: usize = 240;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("maki")
        .about("Convert an image into a Huffman compressed C header")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input image to read pixels from")
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Header file to write, must end with .h")
            .required(true))
        .arg(Arg::new("all-yes")
            .short('y')
            .long("yes")
            .action(ArgAction::SetTrue)
            .help("Overwrite the output without asking"))
        .arg(Arg::new("width")
            .long("width")
            .help_heading("IMAGE")
            .help("Width to resize the image to")
            .value_parser(value_parser!(usize))
            .default_value("240"))
        .arg(Arg::new("height")
            .long("height")
            .help_heading("IMAGE")
            .help("Height to resize the image to")
            .value_parser(value_parser!(usize))
            .default_value("240"))
        .arg(Arg::new("grayscale")
            .long("grayscale")
            .help_heading("IMAGE")
            .action(ArgAction::SetTrue)
            .help("Store one byte per pixel instead of RGB565")
            .long_help("Store the floor of the channel average, one byte per pixel, instead of two byte RGB565"))
        .arg(Arg::new("uncompressed")
            .long("uncompressed")
            .help_heading("COMPRESSION")
            .action(ArgAction::SetTrue)
            .help("Write packed pixels without Huffman coding"))
        .arg(Arg::new("max-rounds")
            .long("max-rounds")
            .help_heading("COMPRESSION")
            .help("Upper bound on the number of Huffman rounds")
            .value_parser(value_parser!(u8).range(1..))
            .default_value("255"))
        .arg(Arg::new("verify")
            .long("verify")
            .help_heading("COMPRESSION")
            .action(ArgAction::SetTrue)
            .help("Decompress the result and compare it with the packed pixels"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display sizes and round counts"))
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn defaults() {
        let matches = create_cmd_args()
            .try_get_matches_from(["maki", "-i", "icon.png", "-o", "icon.h"])
            .unwrap();

        assert_eq!(matches.get_one::<usize>("width"), Some(&240));
        assert_eq!(matches.get_one::<usize>("height"), Some(&240));
        assert_eq!(matches.get_one::<u8>("max-rounds"), Some(&255));
        assert!(!matches.get_flag("grayscale"));
        assert!(!matches.get_flag("uncompressed"));
    }

    #[test]
    fn zero_rounds_is_rejected() {
        let result = create_cmd_args().try_get_matches_from([
            "maki",
            "-i",
            "icon.png",
            "-o",
            "icon.h",
            "--max-rounds",
            "0"
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn output_is_required() {
        assert!(create_cmd_args()
            .try_get_matches_from(["maki", "-i", "icon.png"])
            .is_err());
    }
}
