//! Encoding patterns into `.pat` buffers.

use crate::format::{
    BLUE_PLANE, CELLS_OFFSET, DROP_OFFSET, EXTENSION_OFFSET, EXTENSION_TAG, GREEN_PLANE,
    HEIGHT_OFFSET, RED_PLANE, WIDTH_OFFSET,
};
use crate::pattern::Pattern;
use crate::writer::Writer;

/// Encode a pattern into the bytes of a `.pat` file.
///
/// The output always carries the extension block, so decoding it yields the
/// same pattern again. Palette slots past the palette length and all reserved
/// header bytes are left zero, which makes the output deterministic.
pub fn encode(pattern: &Pattern) -> Vec<u8> {
    let mut writer = Writer::new(CELLS_OFFSET + pattern.cells().len());

    writer.write_u16_be(WIDTH_OFFSET, pattern.width());
    writer.write_u16_be(HEIGHT_OFFSET, pattern.height());
    writer.write_u16_le(DROP_OFFSET, pattern.drop());

    writer.write_bytes(EXTENSION_OFFSET, &EXTENSION_TAG);
    writer.write_u16_le(EXTENSION_OFFSET + 4, pattern.repeat_width());
    writer.write_u16_le(EXTENSION_OFFSET + 6, pattern.repeat_height());
    // A palette holds at most 256 colors.
    writer.write_u16_le(EXTENSION_OFFSET + 8, pattern.palette().len() as u16);

    for (i, color) in pattern.palette().iter().enumerate() {
        writer.write_byte(GREEN_PLANE + i, color.g);
        writer.write_byte(RED_PLANE + i, color.r);
        writer.write_byte(BLUE_PLANE + i, color.b);
    }

    writer.write_bytes(CELLS_OFFSET, pattern.cells());

    writer.finish()
}
