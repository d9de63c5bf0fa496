//! This example shows you how to convert an image into a pattern file.

#![allow(missing_docs)]

use std::process::ExitCode;

use nedpat::{MAX_COLORS, PixelGrid};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if !(3..=5).contains(&args.len()) {
        eprintln!(
            "Usage: {} <input.png> <output.pat> [max_colors] [drop]",
            args[0]
        );

        return ExitCode::FAILURE;
    }

    let input_path = &args[1];
    let output_path = &args[2];

    let max_colors = match args.get(3).map(|s| s.parse::<usize>()) {
        None => MAX_COLORS,
        Some(Ok(n)) => n,
        Some(Err(err)) => {
            eprintln!("Invalid color count: {err}");

            return ExitCode::FAILURE;
        }
    };

    let drop = match args.get(4).map(|s| s.parse::<u16>()) {
        None => None,
        Some(Ok(n)) => Some(n),
        Some(Err(err)) => {
            eprintln!("Invalid drop: {err}");

            return ExitCode::FAILURE;
        }
    };

    let image = match image::open(input_path) {
        Ok(image) => image,
        Err(err) => {
            eprintln!("Failed to read input image: {err}");

            return ExitCode::FAILURE;
        }
    };

    let grid = PixelGrid::from(&image);

    let pattern = match nedpat::from_image(&grid, max_colors) {
        Ok(pattern) => pattern,
        Err(err) => {
            eprintln!("Failed to quantize image: {err}");

            return ExitCode::FAILURE;
        }
    };

    let pattern = match drop {
        // Without a drop the image height is used, i.e. a full drop.
        None => pattern,
        Some(drop) => match pattern.with_drop_repeat(drop) {
            Ok(pattern) => pattern,
            Err(err) => {
                eprintln!("Failed to apply drop: {err}");

                return ExitCode::FAILURE;
            }
        },
    };

    if let Err(err) = std::fs::write(output_path, nedpat::encode(&pattern)) {
        eprintln!("Failed to write pattern file: {err}");

        return ExitCode::FAILURE;
    }

    eprintln!(
        "Saved: {output_path} ({} colors)",
        pattern.palette().len()
    );

    ExitCode::SUCCESS
}
