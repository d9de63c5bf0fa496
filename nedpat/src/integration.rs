//! Integration with the [image] crate.

use crate::palette::Rgb;
use crate::raster::PixelGrid;
use ::image::{DynamicImage, RgbImage};

impl From<PixelGrid> for RgbImage {
    fn from(grid: PixelGrid) -> Self {
        let (width, height) = (grid.width(), grid.height());

        // A grid always holds `width * height` pixels, so the buffer fits.
        Self::from_raw(width, height, grid.into_bytes())
            .unwrap_or_else(|| Self::new(width, height))
    }
}

impl From<&RgbImage> for PixelGrid {
    fn from(image: &RgbImage) -> Self {
        let (width, height) = image.dimensions();
        let pixels = image.pixels().map(|p| Rgb::from(p.0)).collect();

        Self::from_raw_parts(width, height, pixels)
    }
}

impl From<&DynamicImage> for PixelGrid {
    /// Convert any image, discarding the alpha channel.
    fn from(image: &DynamicImage) -> Self {
        Self::from(&image.to_rgb8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::Rgb as ImageRgb;

    #[test]
    fn to_rgb_image() {
        let grid = PixelGrid::new(2, 1, vec![Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)]).unwrap();
        let image = RgbImage::from(grid);

        assert_eq!(image.dimensions(), (2, 1));
        assert_eq!(image.get_pixel(0, 0), &ImageRgb([1, 2, 3]));
        assert_eq!(image.get_pixel(1, 0), &ImageRgb([4, 5, 6]));

        let empty = RgbImage::from(PixelGrid::new(0, 3, Vec::new()).unwrap());
        assert_eq!(empty.dimensions(), (0, 3));
    }

    #[test]
    fn from_dynamic_image() {
        let mut image = RgbImage::new(1, 2);
        image.put_pixel(0, 1, ImageRgb([9, 8, 7]));
        let dynamic = DynamicImage::ImageRgb8(image).to_rgba8();

        let grid = PixelGrid::from(&DynamicImage::ImageRgba8(dynamic));
        assert_eq!(grid.pixel(0, 1), Some(Rgb::new(9, 8, 7)));
        assert_eq!(grid.pixel(0, 0), Some(Rgb::new(0, 0, 0)));
    }
}
