//! Decoding `.pat` buffers into patterns.

use crate::error::{ParseError, bail};
use crate::format::{
    BLANK_TAG, BLUE_PLANE, CELLS_OFFSET, DROP_OFFSET, EXTENSION_OFFSET, EXTENSION_TAG,
    GREEN_PLANE, HEADER_LEN, HEIGHT_OFFSET, MAX_COLORS, RED_PLANE, WIDTH_OFFSET,
};
use crate::palette::{Palette, Rgb};
use crate::pattern::Pattern;
use crate::reader::Reader;

/// Settings that control how lenient the decoder is.
#[derive(Copy, Clone, Debug, Default)]
pub struct DecodeSettings {
    /// Reject buffers with bytes after the cell section.
    ///
    /// When disabled, such bytes are ignored.
    pub strict: bool,
}

/// The fields of the fixed-size header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Header {
    width: u16,
    height: u16,
    drop: u16,
    /// The stored repeat unit, or `None` if it follows from the drop.
    repeat: Option<(u16, u16)>,
    num_colors: usize,
}

/// Decode a pattern with the default settings.
pub fn decode(data: &[u8]) -> Result<Pattern, ParseError> {
    decode_with(data, &DecodeSettings::default())
}

/// Decode a pattern from the bytes of a `.pat` file.
///
/// The header determines the exact offset and length of the palette and cell
/// sections, so the whole buffer is interpreted in a single pass. Cross-checks
/// between the sections are left to [`Pattern::new`].
pub fn decode_with(data: &[u8], settings: &DecodeSettings) -> Result<Pattern, ParseError> {
    let mut reader = Reader::new(data);
    let header = read_header(&mut reader)?;
    let palette = read_palette(&mut reader, header.num_colors)?;

    reader.jump(CELLS_OFFSET);
    let num_cells = usize::from(header.width) * usize::from(header.height);
    let cells = reader
        .read_bytes(num_cells)
        .ok_or(ParseError::UnexpectedEof)?
        .to_vec();

    let trailing = reader.remaining();
    if trailing > 0 {
        if settings.strict {
            bail!(ParseError::TrailingData);
        }

        lwarn!("ignoring {} bytes after the cell section", trailing);
    }

    let (repeat_width, repeat_height) = header.repeat.unwrap_or((header.width, header.height));
    let pattern = Pattern::new(
        header.width,
        header.height,
        repeat_width,
        repeat_height,
        cells,
        palette,
    )?;

    let pattern = match header.repeat {
        Some(_) => pattern.with_drop(header.drop)?,
        None => pattern.with_drop_repeat(header.drop)?,
    };

    Ok(pattern)
}

fn read_header(reader: &mut Reader<'_>) -> Result<Header, ParseError> {
    // Check the full header up front so truncated files fail the same way
    // no matter which field is cut off.
    if reader.peek_bytes(HEADER_LEN).is_none() {
        bail!(ParseError::UnexpectedEof);
    }

    reader.jump(WIDTH_OFFSET);
    let width = reader.read_u16_be().ok_or(ParseError::UnexpectedEof)?;
    reader.jump(HEIGHT_OFFSET);
    let height = reader.read_u16_be().ok_or(ParseError::UnexpectedEof)?;
    reader.jump(DROP_OFFSET);
    let drop = reader.read_u16_le().ok_or(ParseError::UnexpectedEof)?;

    reader.jump(EXTENSION_OFFSET);
    let tag: [u8; 4] = reader.read_array().ok_or(ParseError::UnexpectedEof)?;

    match tag {
        EXTENSION_TAG => {
            let repeat_width = reader.read_u16_le().ok_or(ParseError::UnexpectedEof)?;
            let repeat_height = reader.read_u16_le().ok_or(ParseError::UnexpectedEof)?;
            let num_colors = usize::from(reader.read_u16_le().ok_or(ParseError::UnexpectedEof)?);

            if num_colors > MAX_COLORS {
                bail!(ParseError::TooManyColors);
            }

            Ok(Header {
                width,
                height,
                drop,
                repeat: Some((repeat_width, repeat_height)),
                num_colors,
            })
        }
        BLANK_TAG => {
            ldebug!("no extension block, treating as a legacy pattern file");

            // Legacy writers do not bound the drop.
            let drop = if drop > height {
                lwarn!("drop {} exceeds height {}, using a full drop", drop, height);
                height
            } else {
                drop
            };

            Ok(Header {
                width,
                height,
                drop,
                repeat: None,
                num_colors: MAX_COLORS,
            })
        }
        _ => Err(ParseError::UnknownExtension),
    }
}

fn read_palette(reader: &mut Reader<'_>, num_colors: usize) -> Result<Palette, ParseError> {
    let greens = read_plane(reader, GREEN_PLANE, num_colors)?;
    let reds = read_plane(reader, RED_PLANE, num_colors)?;
    let blues = read_plane(reader, BLUE_PLANE, num_colors)?;

    let colors = reds
        .iter()
        .zip(greens)
        .zip(blues)
        .map(|((&r, &g), &b)| Rgb::new(r, g, b))
        .collect();

    Ok(Palette::new(colors)?)
}

fn read_plane<'a>(
    reader: &mut Reader<'a>,
    offset: usize,
    num_colors: usize,
) -> Result<&'a [u8], ParseError> {
    reader.jump(offset);
    reader
        .read_bytes(num_colors)
        .ok_or(ParseError::UnexpectedEof)
}
