//! Pixel buffer cell values.

use std::fmt;

use super::Rgb;

/// A single cell of the canvas pixel buffer.
///
/// Cells start as binary markers from the pattern generator and become
/// colours once the colorizer has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Pattern marker, `0` (background) or `1` (foreground).
    Binary(u8),
    /// Colorized pixel.
    Colour(Rgb),
}

impl Cell {
    pub const OFF: Self = Cell::Binary(0);
    pub const ON: Self = Cell::Binary(1);

    /// Whether this cell is a foreground marker.
    pub fn is_foreground(self) -> bool {
        self == Cell::ON
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::OFF
    }
}

impl From<bool> for Cell {
    fn from(bit: bool) -> Self {
        Cell::Binary(bit as u8)
    }
}

/// Writes the token used in the pixel-map body.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Binary(bit) => write!(f, "{}", bit),
            Cell::Colour(rgb) => write!(f, "{}", rgb),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_tokens() {
        assert_eq!(Cell::ON.to_string(), "1");
        assert_eq!(Cell::OFF.to_string(), "0");
        assert_eq!(Cell::Colour(Rgb::new(7, 8, 9)).to_string(), "  7   8   9");
    }

    #[test]
    fn test_only_one_is_foreground() {
        assert!(Cell::ON.is_foreground());
        assert!(!Cell::OFF.is_foreground());
        assert!(!Cell::Binary(2).is_foreground());
        assert!(!Cell::Colour(Rgb::WHITE).is_foreground());
    }
}
