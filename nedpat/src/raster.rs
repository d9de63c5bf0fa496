//! Rendering patterns into pixel grids.

use crate::palette::Rgb;
use crate::pattern::Pattern;

/// A row-major grid of RGB pixels.
///
/// This is the boundary type towards image codecs: patterns are rendered into
/// it and quantized from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// Create a grid from row-major pixels.
    ///
    /// Returns `None` if the number of pixels is not `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Option<Self> {
        let expected = (width as usize).checked_mul(height as usize)?;

        if pixels.len() != expected {
            return None;
        }

        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a grid from pixels the caller already sized correctly.
    pub(crate) fn from_raw_parts(width: u32, height: u32, pixels: Vec<Rgb>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);

        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a grid from packed `RGB8` bytes.
    ///
    /// Returns `None` if the buffer does not hold exactly `width * height`
    /// pixels.
    pub fn from_rgb8(width: u32, height: u32, data: &[u8]) -> Option<Self> {
        let pixels: &[Rgb] = bytemuck::try_cast_slice(data).ok()?;
        Self::new(width, height, pixels.to_vec())
    }

    /// The width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// The pixels in row-major order.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// The pixels as packed `RGB8` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Consume the grid, returning the pixels as packed `RGB8` bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

/// Render a pattern into a pixel grid.
///
/// Without `full_repeat`, the output has one pixel per cell. With it, the
/// output covers the whole repeat unit: the swatch is copied sideways, every
/// copy shifted down by the pattern's drop relative to the one before it, and
/// the rows wrap around the swatch height.
pub fn render(pattern: &Pattern, full_repeat: bool) -> PixelGrid {
    let colors = pattern.palette().colors();
    // Cells always resolve, so this does not need to fall back.
    let native: Vec<Rgb> = pattern
        .cells()
        .iter()
        .map(|&c| colors[usize::from(c)])
        .collect();

    let width = u32::from(pattern.width());
    let height = u32::from(pattern.height());

    if !full_repeat {
        return PixelGrid::from_raw_parts(width, height, native);
    }

    let repeat_width = u32::from(pattern.repeat_width());
    let repeat_height = u32::from(pattern.repeat_height());

    // An empty swatch always has an empty repeat unit.
    if width == 0 || height == 0 {
        return PixelGrid::from_raw_parts(repeat_width, repeat_height, Vec::new());
    }

    let drop = u32::from(pattern.drop()) % height;
    let mut pixels = Vec::with_capacity(repeat_width as usize * repeat_height as usize);

    for y in 0..repeat_height {
        for x in 0..repeat_width {
            let copy = x / width;
            let shift = (copy % height) * drop % height;
            let src_x = x % width;
            let src_y = (y % height + height - shift) % height;

            pixels.push(native[(src_y * width + src_x) as usize]);
        }
    }

    PixelGrid::from_raw_parts(repeat_width, repeat_height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn checkerboard(repeat_width: u16, repeat_height: u16) -> Pattern {
        let palette = Palette::new(vec![RED, BLUE]).unwrap();
        Pattern::new(2, 2, repeat_width, repeat_height, vec![0, 1, 1, 0], palette).unwrap()
    }

    #[test]
    fn native_render() {
        let grid = render(&checkerboard(2, 2), false);
        assert_eq!((grid.width(), grid.height()), (2, 2));
        assert_eq!(grid.pixels(), &[RED, BLUE, BLUE, RED]);
    }

    #[test]
    fn straight_repeat() {
        let grid = render(&checkerboard(4, 2), true);
        assert_eq!((grid.width(), grid.height()), (4, 2));
        assert_eq!(
            grid.pixels(),
            &[RED, BLUE, RED, BLUE, BLUE, RED, BLUE, RED]
        );
    }

    #[test]
    fn half_drop_repeat() {
        // One column, three rows: A B C.
        let a = Rgb::new(1, 1, 1);
        let b = Rgb::new(2, 2, 2);
        let c = Rgb::new(3, 3, 3);
        let palette = Palette::new(vec![a, b, c]).unwrap();
        let pattern = Pattern::new(1, 3, 3, 3, vec![0, 1, 2], palette)
            .unwrap()
            .with_drop(1)
            .unwrap();

        let grid = render(&pattern, true);
        // Every column is the previous one shifted down by one row.
        assert_eq!(grid.pixels(), &[a, c, b, b, a, c, c, b, a]);
    }

    #[test]
    fn repeat_smaller_than_swatch() {
        let grid = render(&checkerboard(1, 1), true);
        assert_eq!(grid.pixels(), &[RED]);
    }

    #[test]
    fn grid_construction() {
        assert!(PixelGrid::new(2, 2, vec![RED; 3]).is_none());

        let grid = PixelGrid::from_rgb8(2, 1, &[255, 0, 0, 0, 0, 255]).unwrap();
        assert_eq!(grid.pixel(1, 0), Some(BLUE));
        assert_eq!(grid.pixel(2, 0), None);
        assert_eq!(grid.as_bytes(), &[255, 0, 0, 0, 0, 255]);
        assert!(PixelGrid::from_rgb8(2, 1, &[0; 5]).is_none());
    }
}
