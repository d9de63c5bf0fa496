//! Colors and the color table of a pattern.

use crate::error::FormatError;
use crate::format::MAX_COLORS;
use bytemuck::{Pod, Zeroable};

/// An 8-bit RGB color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Rgb {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

impl Rgb {
    /// Create a new color from its components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The squared Euclidean distance to another color.
    #[inline]
    pub fn distance_squared(self, other: Self) -> u32 {
        let d = |a: u8, b: u8| {
            let d = u32::from(a.abs_diff(b));
            d * d
        };

        d(self.r, other.r) + d(self.g, other.g) + d(self.b, other.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

/// An ordered color table holding at most [`MAX_COLORS`] entries.
///
/// Cells of a [`Pattern`](crate::Pattern) refer to entries by their position.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Build a palette from an ordered list of colors.
    pub fn new(colors: Vec<Rgb>) -> Result<Self, FormatError> {
        if colors.len() > MAX_COLORS {
            return Err(FormatError::TooManyColors);
        }

        Ok(Self { colors })
    }

    /// Return the color stored at `index`.
    pub fn color_at(&self, index: usize) -> Result<Rgb, FormatError> {
        self.colors
            .get(index)
            .copied()
            .ok_or(FormatError::ColorIndexOutOfRange)
    }

    /// Return the number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Return the colors in palette order.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Iterate over the colors in palette order.
    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.colors.iter().copied()
    }

    /// Return the index of the entry closest to `color`.
    ///
    /// Ties go to the lowest index. Returns `None` for an empty palette.
    pub fn nearest(&self, color: Rgb) -> Option<u8> {
        let mut best: Option<(usize, u32)> = None;

        for (idx, entry) in self.colors.iter().enumerate() {
            let dist = entry.distance_squared(color);

            if best.is_none_or(|(_, d)| dist < d) {
                best = Some((idx, dist));

                if dist == 0 {
                    break;
                }
            }
        }

        // Indices are below `MAX_COLORS`, so they always fit.
        best.and_then(|(idx, _)| u8::try_from(idx).ok())
    }
}
