// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Example: hide and reveal a message in a raw sample file.
//!
//! The file is treated as a flat array of carrier samples (for instance raw
//! RGBA pixel data dumped by an image tool).
use std::fs;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!("Usage: hide_in_samples <samples.raw> <message> <out.raw>");
        eprintln!("       hide_in_samples --decode <samples.raw> <length>");
        std::process::exit(1);
    }

    if args[1] == "--decode" {
        let samples = fs::read(&args[2]).expect("Could not read sample file");
        let len: usize = args[3].parse().expect("Length must be a non-negative integer");
        match hamming_stego::decode_text(&samples, len) {
            Ok(text) => println!("Decoded message: {text}"),
            Err(e) => eprintln!("Decode failed: {e}"),
        }
    } else {
        let samples = fs::read(&args[1]).expect("Could not read sample file");
        let message = &args[2];
        println!(
            "Carrier: {} samples, room for {} bytes",
            samples.len(),
            hamming_stego::group_capacity(samples.len())
        );

        let stego = match hamming_stego::encode_text(&samples, message) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Encode failed: {e}");
                std::process::exit(1);
            }
        };
        fs::write(&args[3], &stego).expect("Could not write output");
        println!("Stego samples written to: {}", args[3]);
        println!("Decode with: --decode {} {}", args[3], message.len());
    }
}
