//! This example shows you how to convert a pattern file into a PNG file.

#![allow(missing_docs)]

use std::process::ExitCode;

use image::RgbImage;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let full_repeat = args.iter().any(|a| a == "--full-repeat");
    let paths: Vec<&String> = args.iter().skip(1).filter(|a| *a != "--full-repeat").collect();

    if paths.len() != 2 {
        eprintln!("Usage: {} <input.pat> <output.png> [--full-repeat]", args[0]);

        return ExitCode::FAILURE;
    }

    let input_path = paths[0];
    let output_path = paths[1];

    let data = match std::fs::read(input_path) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("Failed to read input file: {err}");

            return ExitCode::FAILURE;
        }
    };

    let pattern = match nedpat::decode(&data) {
        Ok(pattern) => pattern,
        Err(err) => {
            eprintln!("Failed to decode pattern: {err}");

            return ExitCode::FAILURE;
        }
    };

    println!(
        "Decoded: {}x{} pattern, {} colors, drop {}",
        pattern.width(),
        pattern.height(),
        pattern.palette().len(),
        pattern.drop()
    );

    let image = RgbImage::from(nedpat::render(&pattern, full_repeat));

    if let Err(err) = image.save(output_path) {
        eprintln!("Failed to save PNG: {err}");

        return ExitCode::FAILURE;
    }

    eprintln!("Saved: {output_path}");

    ExitCode::SUCCESS
}
