//! Byte layout of a `.pat` file.
//!
//! A file is a 512 byte header, four 256 byte palette planes and one byte
//! per cell. The planes are stored green first, then red, then blue; the
//! fourth plane is unused.

/// The maximum number of palette entries a file can hold.
pub const MAX_COLORS: usize = 256;

/// Size of the fixed header.
pub(crate) const HEADER_LEN: usize = 512;

/// Offset of the width, `u16` big-endian.
pub(crate) const WIDTH_OFFSET: usize = 0;
/// Offset of the height, `u16` big-endian.
pub(crate) const HEIGHT_OFFSET: usize = 2;
/// Offset of the drop, `u16` little-endian.
pub(crate) const DROP_OFFSET: usize = 30;

/// Offset of the extension block carrying the repeat unit and color count.
///
/// Files written by the original tool leave these bytes blank.
pub(crate) const EXTENSION_OFFSET: usize = 500;
pub(crate) const EXTENSION_TAG: [u8; 4] = *b"NPAT";
pub(crate) const BLANK_TAG: [u8; 4] = [0; 4];

/// Size of a single palette plane.
pub(crate) const PLANE_LEN: usize = MAX_COLORS;
pub(crate) const GREEN_PLANE: usize = HEADER_LEN;
pub(crate) const RED_PLANE: usize = GREEN_PLANE + PLANE_LEN;
pub(crate) const BLUE_PLANE: usize = RED_PLANE + PLANE_LEN;
/// Offset of the first cell, right after the unused fourth plane.
pub(crate) const CELLS_OFFSET: usize = BLUE_PLANE + 2 * PLANE_LEN;
