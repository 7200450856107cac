/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fs::OpenOptions;
use std::io::{stdin, BufRead, BufWriter, Write};
use std::path::Path;

use clap::ArgMatches;
use log::{debug, info};
use maki_assets::{pack_pixels, HeaderWriter};
use maki_core::options::EncoderOptions;
use maki_huffman::{MakiDecoder, MakiEncoder};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::cmd_parsers::{get_decoder_options, get_encoder_options};
use crate::errors::MakiBinErrors;
use crate::file_io::MakiFile;

/// What ended up in the header
#[derive(Debug, Clone)]
pub struct AssetOutput {
    pub bytes:      Vec<u8>,
    pub packed_len: usize,
    /// `None` if compression was skipped
    pub rounds:     Option<u8>
}

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), MakiBinErrors> {
    info!("Creating workflow from input");

    let in_file = args
        .get_raw("in")
        .and_then(|mut x| x.next())
        .ok_or_else(|| MakiBinErrors::Generic(String::from("No input file given")))?;
    let out_file = args
        .get_raw("out")
        .and_then(|mut x| x.next())
        .ok_or_else(|| MakiBinErrors::Generic(String::from("No output file given")))?;

    verify_file_paths(in_file, out_file, cmd_opts)?;

    let header = HeaderWriter::from_output_path(&out_file.to_string_lossy())?;
    debug!("Array name: {}", header.name());

    let rgb = MakiFile::new(in_file.to_os_string()).load_rgb(cmd_opts.width, cmd_opts.height)?;

    let output = build_asset(&rgb, cmd_opts, get_encoder_options(args))?;

    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(out_file)?;

    let mut writer = BufWriter::new(file);
    writer.write_all(header.render(&output.bytes).as_bytes())?;
    writer.flush()?;

    info!("Packed pixels: {} bytes", output.packed_len);
    match output.rounds {
        Some(rounds) => info!(
            "Compressed to {} bytes in {} round(s), {:.2}% of packed size",
            output.bytes.len(),
            rounds,
            100.0 * output.bytes.len() as f64 / output.packed_len.max(1) as f64
        ),
        None => info!("Stored {} bytes uncompressed", output.bytes.len())
    }
    info!("Wrote {:?}", out_file);

    Ok(())
}

/// Pack `rgb` and, unless disabled, compress it
pub fn build_asset(
    rgb: &[u8], cmd_opts: &CmdOptions, encoder_options: EncoderOptions
) -> Result<AssetOutput, MakiBinErrors> {
    let packed = pack_pixels(rgb, cmd_opts.format)?;
    let packed_len = packed.len();

    if !cmd_opts.compress {
        return Ok(AssetOutput {
            bytes: packed,
            packed_len,
            rounds: None
        });
    }
    let compressed = MakiEncoder::new_with_options(&packed, encoder_options).encode()?;
    let rounds = compressed.first().copied();

    if cmd_opts.verify {
        let decoded =
            MakiDecoder::new_with_options(&compressed, get_decoder_options(packed_len)).decode()?;

        if decoded != packed {
            return Err(MakiBinErrors::VerificationFailed);
        }
        info!("Verified round trip of {} bytes", packed_len);
    }
    Ok(AssetOutput {
        bytes: compressed,
        packed_len,
        rounds
    })
}

fn verify_file_paths(p0: &OsStr, p1: &OsStr, cmd_opts: &CmdOptions) -> Result<(), MakiBinErrors> {
    if p0 == p1 {
        return Err(MakiBinErrors::Generic(format!(
            "Cannot use {:?} as both input and output",
            p0
        )));
    }
    let in_path = Path::new(p0);
    let out_path = Path::new(p1);

    if !in_path.exists() {
        return Err(MakiBinErrors::Generic(format!(
            "Path {:?}, does not exist",
            in_path
        )));
    }

    if !in_path.is_file() {
        return Err(MakiBinErrors::Generic(format!(
            "Path {:?} is not a file",
            in_path
        )));
    }

    if out_path.extension() != Some(OsStr::new("h")) {
        return Err(MakiBinErrors::Generic(format!(
            "Output {:?} must be a .h file",
            out_path
        )));
    }

    if out_path.exists() {
        if cmd_opts.override_files {
            info!("Overwriting path {:?} ", p1);
        } else {
            println!("File {:?} exists, overwrite [y/N]", out_path);
            let mut result = String::new();

            stdin().lock().read_line(&mut result)?;

            if result.trim() != "y" {
                return Err(MakiBinErrors::Generic(format!(
                    "Not overwriting file {:?}",
                    out_path
                )));
            }
        }
    }
    Ok(())
}
