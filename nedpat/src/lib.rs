/*!
A memory-safe, pure-Rust codec for Ned Graphics pattern (`.pat`) files.

`.pat` files store a textile design as a small swatch of palette indices
together with a palette of up to 256 colors and the drop used when the
swatch is repeated across fabric. This crate decodes and encodes such files,
renders patterns into pixel grids (optionally as a full repeat) and builds
patterns from pixel grids by quantizing them to a bounded palette.

Compressed `.pat` files are not supported.

# Example
```rust,no_run
use nedpat::{decode, encode, from_image, render};

let data = std::fs::read("design.pat").unwrap();
let pattern = decode(&data).unwrap();

println!("{}x{} pattern", pattern.width(), pattern.height());

// One pixel per cell, and the whole repeat unit.
let swatch = render(&pattern, false);
let repeat = render(&pattern, true);
assert_eq!(swatch.width(), u32::from(pattern.width()));
assert_eq!(repeat.width(), u32::from(pattern.repeat_width()));

// Back from pixels to a pattern with at most 16 colors.
let quantized = from_image(&swatch, 16).unwrap();
std::fs::write("design-16.pat", encode(&quantized)).unwrap();
```

# Cargo features
- `image` (default): conversions between [`PixelGrid`] and the buffers of the
  `image` crate.
- `logging`: forward diagnostics to the `log` crate.

# Safety
This crate forbids unsafe code via a crate-level attribute.
*/

#![forbid(unsafe_code)]

#[macro_use]
mod log;

mod decode;
mod encode;
mod error;
mod format;
#[cfg(feature = "image")]
mod integration;
mod palette;
mod pattern;
mod quantize;
mod raster;
mod reader;
mod writer;

pub use decode::{DecodeSettings, decode, decode_with};
pub use encode::encode;
pub use error::{Error, FormatError, ParseError, Result, ValueError};
pub use format::MAX_COLORS;
pub use palette::{Palette, Rgb};
pub use pattern::Pattern;
pub use quantize::from_image;
pub use raster::{PixelGrid, render};
