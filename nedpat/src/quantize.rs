//! Building patterns from pixel grids.

use crate::error::{Result, ValueError, bail};
use crate::format::MAX_COLORS;
use crate::palette::{Palette, Rgb};
use crate::pattern::Pattern;
use crate::raster::PixelGrid;
use rustc_hash::FxHashMap;

/// Build a pattern from a pixel grid, using at most `max_colors` colors.
///
/// Requests above [`MAX_COLORS`] are capped, since no palette can be larger.
///
/// The palette is made of the most frequent colors of the image, with ties
/// going to the color that appears first in row-major order. Every pixel is
/// then mapped to its nearest palette entry, so images with no more than
/// `max_colors` distinct colors convert losslessly.
///
/// The pattern has the dimensions of the image, the image itself is the
/// repeat unit, and copies line up without a drop. Use
/// [`Pattern::with_drop_repeat`] for a dropped repeat.
///
/// Invalid arguments are reported as [`Error::Value`](crate::Error::Value).
pub fn from_image(image: &PixelGrid, max_colors: usize) -> Result<Pattern> {
    if max_colors == 0 {
        bail!(ValueError::ZeroMaxColors);
    }

    let max_colors = max_colors.min(MAX_COLORS);

    let width = u16::try_from(image.width()).map_err(|_| ValueError::ImageTooLarge)?;
    let height = u16::try_from(image.height()).map_err(|_| ValueError::ImageTooLarge)?;

    let mut colors = ranked_colors(image.pixels());

    if colors.len() > max_colors {
        ldebug!(
            "dropping {} of {} distinct colors",
            colors.len() - max_colors,
            colors.len()
        );

        colors.truncate(max_colors);
    }

    let palette = Palette::new(colors)?;
    let cells = map_pixels(image.pixels(), &palette);

    Ok(Pattern::new(width, height, width, height, cells, palette)?)
}

/// Return the distinct colors, most frequent first.
fn ranked_colors(pixels: &[Rgb]) -> Vec<Rgb> {
    // Color -> (count, first occurrence).
    let mut stats: FxHashMap<Rgb, (usize, usize)> = FxHashMap::default();

    for (pos, &pixel) in pixels.iter().enumerate() {
        stats.entry(pixel).or_insert((0, pos)).0 += 1;
    }

    let mut ranked: Vec<_> = stats.into_iter().collect();
    ranked.sort_unstable_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
        count_b.cmp(count_a).then(first_a.cmp(first_b))
    });

    ranked.into_iter().map(|(color, _)| color).collect()
}

fn map_pixels(pixels: &[Rgb], palette: &Palette) -> Vec<u8> {
    let mut cache: FxHashMap<Rgb, u8> = FxHashMap::default();

    pixels
        .iter()
        .map(|&pixel| {
            *cache
                .entry(pixel)
                // Not empty, since the image has at least one pixel here.
                .or_insert_with(|| palette.nearest(pixel).unwrap_or(0))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);
    const DARK_RED: Rgb = Rgb::new(200, 0, 0);

    fn grid(width: u32, height: u32, pixels: Vec<Rgb>) -> PixelGrid {
        PixelGrid::new(width, height, pixels).unwrap()
    }

    #[test]
    fn invalid_arguments() {
        let image = grid(1, 1, vec![RED]);
        assert_eq!(from_image(&image, 0), Err(Error::Value(ValueError::ZeroMaxColors)));

        let wide = grid(70_000, 0, Vec::new());
        assert_eq!(from_image(&wide, 4), Err(Error::Value(ValueError::ImageTooLarge)));
    }

    #[test]
    fn lossless_when_palette_fits() {
        let image = grid(2, 2, vec![RED, BLUE, BLUE, RED]);
        let pattern = from_image(&image, 16).unwrap();

        assert_eq!(pattern.palette().colors(), &[RED, BLUE]);
        assert_eq!(pattern.cells(), &[0, 1, 1, 0]);
        assert_eq!((pattern.repeat_width(), pattern.repeat_height()), (2, 2));
        assert!(pattern.is_full_drop());
    }

    #[test]
    fn frequency_ranking() {
        let image = grid(4, 1, vec![BLUE, RED, RED, DARK_RED]);
        assert_eq!(ranked_colors(image.pixels()), vec![RED, BLUE, DARK_RED]);

        let pattern = from_image(&image, 2).unwrap();
        assert_eq!(pattern.palette().colors(), &[RED, BLUE]);
        // Dark red falls back to the nearest kept color.
        assert_eq!(pattern.cells(), &[1, 0, 0, 0]);
    }

    #[test]
    fn palette_size_is_capped() {
        let pixels: Vec<Rgb> = (0..300_u32)
            .map(|i| Rgb::new((i % 256) as u8, (i / 256) as u8, 0))
            .collect();
        let image = grid(300, 1, pixels);

        let pattern = from_image(&image, 300).unwrap();
        assert_eq!(pattern.palette().len(), MAX_COLORS);

        let single = from_image(&grid(1, 1, vec![RED]), 1000).unwrap();
        assert_eq!(single.palette().colors(), &[RED]);
    }

    #[test]
    fn empty_image() {
        let pattern = from_image(&grid(0, 0, Vec::new()), 4).unwrap();
        assert!(pattern.palette().is_empty());
        assert!(pattern.cells().is_empty());
    }
}
