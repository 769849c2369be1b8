//! Colour triple, channel formatting, and random colour generation.

use std::fmt;

use rand::Rng;

/// Largest value a colour channel can hold.
pub const MAX_CHANNEL: i32 = 255;

/// An RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new colour from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Draw a colour with every channel uniform in `lower..=upper`.
    ///
    /// Bounds are clamped into the channel range first. When the clamped
    /// range is empty (`lower > upper`) every channel is `upper`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, lower: i32, upper: i32) -> Self {
        let upper = upper.clamp(0, MAX_CHANNEL);
        let lower = lower.clamp(0, MAX_CHANNEL).min(upper);
        let mut channel = || rng.gen_range(lower..=upper) as u8;
        Self::new(channel(), channel(), channel())
    }

    /// Darken every channel by the same amount, stopping at zero.
    pub fn muted(self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_sub(amount),
            self.g.saturating_sub(amount),
            self.b.saturating_sub(amount),
        )
    }

    /// Copy the red channel into green and blue.
    pub fn keep_red(self) -> Self {
        Self::new(self.r, self.r, self.r)
    }

    /// Copy the green channel into red and blue.
    pub fn keep_green(self) -> Self {
        Self::new(self.g, self.g, self.g)
    }

    /// Copy the blue channel into red and green.
    pub fn keep_blue(self) -> Self {
        Self::new(self.b, self.b, self.b)
    }

    /// Convert to an RGB array.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Formats as three fixed-width channels joined by single spaces,
/// e.g. `"  7  42 255"`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            format_channel(self.r),
            format_channel(self.g),
            format_channel(self.b)
        )
    }
}

/// Right-align a channel value in a three character field.
pub fn format_channel(value: u8) -> String {
    format!("{:>3}", value)
}
