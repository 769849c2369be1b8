//! Canvas: image settings plus the mutable pixel buffer.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::colour::MAX_CHANNEL;
use super::Cell;

/// Declared colour mode of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColourMode {
    /// Black and white (`P1`) output.
    #[default]
    #[serde(alias = "bw")]
    #[value(alias = "bw")]
    Monochrome,
    /// Full colour (`P3`) output.
    #[serde(rename = "colored", alias = "256")]
    #[value(name = "colored", alias = "256")]
    Colour,
}

impl fmt::Display for ColourMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColourMode::Monochrome => write!(f, "monochrome"),
            ColourMode::Colour => write!(f, "colored"),
        }
    }
}

/// A colour bound that was repaired during canvas construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourWarning {
    /// `min_color` was above `max_color` and was reset to 0.
    MinAboveMax { min: i32, max: i32 },
    /// `min_color` was negative and was raised to 0.
    MinBelowZero { min: i32 },
    /// `max_color` exceeded 255 and was lowered to 255.
    MaxAboveLimit { max: i32 },
    /// `max_color` was negative and was raised to 1.
    MaxBelowZero { max: i32 },
}

impl ColourWarning {
    /// Machine-readable warning code.
    pub fn code(&self) -> &'static str {
        match self {
            ColourWarning::MinAboveMax { .. } => "rorschach::colour::min-above-max",
            ColourWarning::MinBelowZero { .. } => "rorschach::colour::min-below-zero",
            ColourWarning::MaxAboveLimit { .. } => "rorschach::colour::max-above-limit",
            ColourWarning::MaxBelowZero { .. } => "rorschach::colour::max-below-zero",
        }
    }
}

impl fmt::Display for ColourWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColourWarning::MinAboveMax { min, max } => write!(
                f,
                "min-color {} cannot be larger than max-color {}, reducing to 0 as a fallback",
                min, max
            ),
            ColourWarning::MinBelowZero { min } => write!(
                f,
                "min-color {} cannot go below 0, increasing to 0 as a fallback",
                min
            ),
            ColourWarning::MaxAboveLimit { max } => write!(
                f,
                "max-color {} cannot go beyond {}, reducing to {} as a fallback",
                max, MAX_CHANNEL, MAX_CHANNEL
            ),
            ColourWarning::MaxBelowZero { max } => write!(
                f,
                "max-color {} cannot go below 0, increasing to 1 as a fallback",
                max
            ),
        }
    }
}

/// Repair colour bounds into `0 <= min <= max <= 255`.
///
/// Returns the effective bounds and one warning per repair applied.
pub fn repair_colour_bounds(min: i32, max: i32) -> (i32, i32, Vec<ColourWarning>) {
    let mut warnings = Vec::new();
    let (mut min_color, mut max_color) = (min, max);

    if min_color > max_color {
        warnings.push(ColourWarning::MinAboveMax {
            min: min_color,
            max: max_color,
        });
        min_color = 0;
    }

    if min_color < 0 {
        warnings.push(ColourWarning::MinBelowZero { min: min_color });
        min_color = 0;
    }

    if max_color > MAX_CHANNEL {
        warnings.push(ColourWarning::MaxAboveLimit { max: max_color });
        max_color = MAX_CHANNEL;
    }

    if max_color < 0 {
        warnings.push(ColourWarning::MaxBelowZero { max: max_color });
        max_color = 1;
    }

    // Clamping max can drop it below a previously valid min.
    if min_color > max_color {
        warnings.push(ColourWarning::MinAboveMax {
            min: min_color,
            max: max_color,
        });
        min_color = 0;
    }

    (min_color, max_color, warnings)
}

/// Image settings and the pixel buffer that the pipeline stages mutate.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    size: usize,
    scale: usize,
    min_color: i32,
    max_color: i32,
    mode: ColourMode,
    output: PathBuf,
    pixels: Vec<Vec<Cell>>,
}

impl Canvas {
    /// Create a canvas, repairing out-of-range colour bounds.
    ///
    /// The buffer starts as `size` rows of `size / 2` zero markers, the half
    /// pattern that the generator mirrors. A `scale` of zero is treated as 1.
    pub fn new(
        size: usize,
        scale: usize,
        min_color: i32,
        max_color: i32,
        mode: ColourMode,
        output: impl Into<PathBuf>,
    ) -> (Self, Vec<ColourWarning>) {
        let (min_color, max_color, warnings) = repair_colour_bounds(min_color, max_color);

        let canvas = Self {
            size,
            scale: scale.max(1),
            min_color,
            max_color,
            mode,
            output: output.into(),
            pixels: vec![vec![Cell::OFF; size / 2]; size],
        };

        (canvas, warnings)
    }

    /// Logical pattern size before mirroring and scaling.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Replication factor per logical pixel.
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Effective lower colour bound.
    pub fn min_color(&self) -> i32 {
        self.min_color
    }

    /// Effective upper colour bound.
    pub fn max_color(&self) -> i32 {
        self.max_color
    }

    pub fn mode(&self) -> ColourMode {
        self.mode
    }

    /// Destination file.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Width of a generated row: `2 * (size / 2) + size % 2`.
    pub fn mirrored_width(&self) -> usize {
        2 * (self.size / 2) + self.size % 2
    }

    pub fn pixels(&self) -> &[Vec<Cell>] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut Vec<Vec<Cell>> {
        &mut self.pixels
    }

    /// Replace the whole buffer, returning the previous one.
    pub fn replace_pixels(&mut self, pixels: Vec<Vec<Cell>>) -> Vec<Vec<Cell>> {
        std::mem::replace(&mut self.pixels, pixels)
    }

    /// Current buffer width in cells.
    pub fn width(&self) -> usize {
        self.pixels.first().map_or(0, |r| r.len())
    }

    /// Current buffer height in cells.
    pub fn height(&self) -> usize {
        self.pixels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(size: usize, min: i32, max: i32) -> (Canvas, Vec<ColourWarning>) {
        Canvas::new(size, 1, min, max, ColourMode::Monochrome, "out.ppm")
    }

    #[test]
    fn test_valid_bounds_untouched() {
        let (c, warnings) = canvas(4, 10, 200);
        assert_eq!(c.min_color(), 10);
        assert_eq!(c.max_color(), 200);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_min_above_max_resets_min() {
        let (c, warnings) = canvas(4, 200, 50);
        assert_eq!((c.min_color(), c.max_color()), (0, 50));
        assert_eq!(
            warnings,
            vec![ColourWarning::MinAboveMax { min: 200, max: 50 }]
        );
    }

    #[test]
    fn test_max_above_limit_clamped() {
        let (c, warnings) = canvas(4, 0, 300);
        assert_eq!(c.max_color(), 255);
        assert_eq!(warnings, vec![ColourWarning::MaxAboveLimit { max: 300 }]);
    }

    #[test]
    fn test_negative_max_becomes_one() {
        let (c, warnings) = canvas(4, 0, -5);
        assert_eq!(c.min_color(), 0);
        assert_eq!(c.max_color(), 1);
        // min 0 > max -5 fires first, then the max repair
        assert_eq!(
            warnings,
            vec![
                ColourWarning::MinAboveMax { min: 0, max: -5 },
                ColourWarning::MaxBelowZero { max: -5 },
            ]
        );
    }

    #[test]
    fn test_min_above_clamped_max() {
        let (c, warnings) = canvas(4, 300, 400);
        assert_eq!((c.min_color(), c.max_color()), (0, 255));
        assert_eq!(
            warnings,
            vec![
                ColourWarning::MaxAboveLimit { max: 400 },
                ColourWarning::MinAboveMax { min: 300, max: 255 },
            ]
        );
    }

    #[test]
    fn test_repaired_bounds_always_ordered() {
        for min in [-300, -1, 0, 1, 50, 254, 255, 256, 300, 1000] {
            for max in [-300, -1, 0, 1, 50, 254, 255, 256, 300, 1000] {
                let (lo, hi, _) = repair_colour_bounds(min, max);
                assert!(0 <= lo && lo <= hi && hi <= 255, "({}, {}) -> ({}, {})", min, max, lo, hi);
            }
        }
    }

    #[test]
    fn test_negative_min_raised() {
        let (c, warnings) = canvas(4, -20, 100);
        assert_eq!(c.min_color(), 0);
        assert_eq!(warnings, vec![ColourWarning::MinBelowZero { min: -20 }]);
    }

    #[test]
    fn test_initial_buffer_is_half_width() {
        let (c, _) = canvas(5, 0, 255);
        assert_eq!(c.height(), 5);
        assert_eq!(c.width(), 2);
        assert!(c.pixels().iter().flatten().all(|&cell| cell == Cell::OFF));
    }

    #[test]
    fn test_mirrored_width() {
        for size in 1..20 {
            let (c, _) = canvas(size, 0, 255);
            assert_eq!(c.mirrored_width(), 2 * (size / 2) + size % 2);
            assert_eq!(c.mirrored_width(), size);
        }
    }

    #[test]
    fn test_zero_scale_treated_as_one() {
        let (c, _) = Canvas::new(4, 0, 0, 255, ColourMode::Colour, "x.ppm");
        assert_eq!(c.scale(), 1);
    }

    #[test]
    fn test_colour_mode_spelled_colored() {
        assert_eq!(ColourMode::Colour.to_string(), "colored");
        assert_eq!(serde_yaml::to_string(&ColourMode::Colour).unwrap().trim(), "colored");
        assert_eq!(
            serde_yaml::from_str::<ColourMode>("colored").unwrap(),
            ColourMode::Colour
        );
    }

    #[test]
    fn test_warning_messages() {
        let w = ColourWarning::MaxAboveLimit { max: 300 };
        assert_eq!(w.code(), "rorschach::colour::max-above-limit");
        assert!(w.to_string().contains("cannot go beyond 255"));
    }
}
