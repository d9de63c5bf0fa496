//! The in-memory pattern model.

use crate::error::FormatError;
use crate::palette::{Palette, Rgb};

/// A validated pattern: a grid of palette indices plus repeat metadata.
///
/// A `Pattern` is checked once when it is built, so every value of this type
/// satisfies the following:
/// - there are exactly `width * height` cells, stored row-major,
/// - every cell resolves in the palette,
/// - the drop is at most the height,
/// - an empty swatch never declares a non-empty repeat unit.
///
/// Patterns are immutable; rebuild one to change it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Pattern {
    width: u16,
    height: u16,
    repeat_width: u16,
    repeat_height: u16,
    drop: u16,
    cells: Vec<u8>,
    palette: Palette,
}

impl Pattern {
    /// Build a new pattern.
    ///
    /// The drop is initialized to the full drop (the height), which makes the
    /// swatch tile straight across the repeat unit.
    pub fn new(
        width: u16,
        height: u16,
        repeat_width: u16,
        repeat_height: u16,
        cells: Vec<u8>,
        palette: Palette,
    ) -> Result<Self, FormatError> {
        if cells.len() != usize::from(width) * usize::from(height) {
            return Err(FormatError::CellCountMismatch);
        }

        if cells.iter().any(|&c| usize::from(c) >= palette.len()) {
            return Err(FormatError::ColorIndexOutOfRange);
        }

        let empty_swatch = width == 0 || height == 0;
        let empty_repeat = repeat_width == 0 || repeat_height == 0;

        if empty_swatch && !empty_repeat {
            return Err(FormatError::EmptyRepeatSource);
        }

        Ok(Self {
            width,
            height,
            repeat_width,
            repeat_height,
            drop: height,
            cells,
            palette,
        })
    }

    /// Return the pattern with a different drop, keeping its repeat unit.
    ///
    /// The drop is the number of rows each successive horizontal copy of the
    /// swatch is shifted down by. Both `0` and the height mean no shift.
    pub fn with_drop(mut self, drop: u16) -> Result<Self, FormatError> {
        if drop > self.height {
            return Err(FormatError::DropOutOfRange);
        }

        self.drop = drop;

        Ok(self)
    }

    /// Return the pattern with a different drop and the repeat unit that
    /// belongs to it.
    ///
    /// The swatch is copied sideways until the accumulated drop wraps around
    /// the full height once: the repeat unit is `width * (height / drop)`
    /// wide (`width` for a drop of `0`) and `height` tall. This is the repeat
    /// of pattern files that do not store one.
    pub fn with_drop_repeat(self, drop: u16) -> Result<Self, FormatError> {
        let mut pattern = self.with_drop(drop)?;

        if pattern.width == 0 || pattern.height == 0 {
            pattern.repeat_width = 0;
            pattern.repeat_height = 0;

            return Ok(pattern);
        }

        // Non-zero, since the drop is at most the height.
        let copies = if drop == 0 { 1 } else { pattern.height / drop };

        pattern.repeat_width = pattern
            .width
            .checked_mul(copies)
            .ok_or(FormatError::RepeatTooLarge)?;
        pattern.repeat_height = pattern.height;

        Ok(pattern)
    }

    /// The width of the swatch in cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// The height of the swatch in cells.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The width of the repeat unit.
    pub fn repeat_width(&self) -> u16 {
        self.repeat_width
    }

    /// The height of the repeat unit.
    pub fn repeat_height(&self) -> u16 {
        self.repeat_height
    }

    /// The vertical shift between horizontal copies of the swatch.
    pub fn drop(&self) -> u16 {
        self.drop
    }

    /// Whether copies of the swatch line up without a vertical shift.
    pub fn is_full_drop(&self) -> bool {
        self.drop == 0 || self.drop == self.height
    }

    /// The palette indices of all cells, row-major.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// The palette of the pattern.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The palette index of the cell at `(x, y)`.
    pub fn cell(&self, x: u16, y: u16) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = usize::from(y) * usize::from(self.width) + usize::from(x);
        self.cells.get(idx).copied()
    }

    /// The resolved color of the cell at `(x, y)`.
    pub fn color(&self, x: u16, y: u16) -> Option<Rgb> {
        let index = self.cell(x, y)?;
        self.palette.color_at(usize::from(index)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_colors() -> Palette {
        Palette::new(vec![Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)]).unwrap()
    }

    #[test]
    fn build_checks_cell_count() {
        assert_eq!(
            Pattern::new(2, 2, 2, 2, vec![0, 1, 1], two_colors()),
            Err(FormatError::CellCountMismatch)
        );
    }

    #[test]
    fn build_checks_indices() {
        assert_eq!(
            Pattern::new(2, 1, 2, 1, vec![0, 2], two_colors()),
            Err(FormatError::ColorIndexOutOfRange)
        );
    }

    #[test]
    fn empty_pattern() {
        let pattern = Pattern::new(0, 0, 0, 0, Vec::new(), Palette::default()).unwrap();
        assert!(pattern.cells().is_empty());
        assert_eq!(pattern.cell(0, 0), None);

        assert_eq!(
            Pattern::new(0, 3, 4, 3, Vec::new(), Palette::default()),
            Err(FormatError::EmptyRepeatSource)
        );
    }

    #[test]
    fn cell_lookup() {
        let pattern = Pattern::new(2, 2, 2, 2, vec![0, 1, 1, 0], two_colors()).unwrap();
        assert_eq!(pattern.cell(1, 0), Some(1));
        assert_eq!(pattern.cell(2, 0), None);
        assert_eq!(pattern.color(0, 1), Some(Rgb::new(0, 0, 255)));
    }

    #[test]
    fn drop_defaults_to_height() {
        let pattern = Pattern::new(2, 2, 2, 2, vec![0; 4], two_colors()).unwrap();
        assert_eq!(pattern.drop(), 2);
        assert!(pattern.is_full_drop());

        let pattern = pattern.with_drop(1).unwrap();
        assert_eq!(pattern.drop(), 1);
        assert!(!pattern.is_full_drop());

        assert_eq!(pattern.with_drop(3), Err(FormatError::DropOutOfRange));
    }

    #[test]
    fn drop_repeat() {
        let swatch = |width: u16, height: u16| {
            let cells = vec![0; usize::from(width) * usize::from(height)];
            Pattern::new(width, height, width, height, cells, two_colors()).unwrap()
        };
        let repeat = |pattern: Pattern| (pattern.repeat_width(), pattern.repeat_height());

        assert_eq!(repeat(swatch(10, 8).with_drop_repeat(8).unwrap()), (10, 8));
        assert_eq!(repeat(swatch(10, 8).with_drop_repeat(0).unwrap()), (10, 8));
        assert_eq!(repeat(swatch(10, 8).with_drop_repeat(2).unwrap()), (40, 8));
        assert_eq!(repeat(swatch(10, 9).with_drop_repeat(4).unwrap()), (20, 9));
        assert_eq!(repeat(swatch(3, 0).with_drop_repeat(0).unwrap()), (0, 0));

        let pattern = swatch(10, 8).with_drop_repeat(2).unwrap();
        assert_eq!(pattern.drop(), 2);

        assert_eq!(
            swatch(2, 2).with_drop_repeat(3),
            Err(FormatError::DropOutOfRange)
        );
        assert_eq!(
            swatch(40_000, 2).with_drop_repeat(1),
            Err(FormatError::RepeatTooLarge)
        );
    }
}
