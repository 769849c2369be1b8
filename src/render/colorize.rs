//! Colorizing a binary pattern into foreground/background colours.

use rand::Rng;

use crate::types::{Canvas, Cell, Rgb};

/// Distance below `max_color` that separates dark foregrounds from light backgrounds.
pub const COLOUR_BAND: i32 = 50;

/// Range of the amount subtracted from a foreground to get a coloured background.
pub const MUTE_RANGE: std::ops::RangeInclusive<u8> = 25..=75;

/// Colorizer switches that sit on top of the declared colour mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColourOptions {
    /// Draw a new foreground colour after every foreground pixel.
    pub rainbow: bool,
    /// Derive the background from a bright foreground instead of a grey.
    pub colored_backgrounds: bool,
}

/// Pick the image-wide foreground and background colours.
pub fn choose_colours<R: Rng + ?Sized>(
    rng: &mut R,
    min_color: i32,
    max_color: i32,
    colored_backgrounds: bool,
) -> (Rgb, Rgb) {
    if colored_backgrounds {
        let fg = Rgb::random(rng, max_color - COLOUR_BAND, max_color);
        let mute = rng.gen_range(MUTE_RANGE);
        (fg, fg.muted(mute))
    } else {
        let fg = Rgb::random(rng, min_color, max_color - COLOUR_BAND);
        let bg = Rgb::random(rng, max_color - COLOUR_BAND, max_color);
        (fg, greyscale(rng, bg))
    }
}

/// Collapse a colour to grey by keeping one channel.
///
/// Red wins a one-in-three draw; failing that, green and blue split a coin flip.
fn greyscale<R: Rng + ?Sized>(rng: &mut R, colour: Rgb) -> Rgb {
    if rng.gen_ratio(1, 3) {
        colour.keep_red()
    } else if rng.gen_bool(0.5) {
        colour.keep_green()
    } else {
        colour.keep_blue()
    }
}

/// Replace every binary marker in the canvas with a colour.
///
/// `1` markers become the foreground and everything else the background.
/// In rainbow mode a new foreground is drawn after each foreground pixel in
/// scan order; the background never changes.
pub fn colorize<R: Rng + ?Sized>(canvas: &mut Canvas, options: ColourOptions, rng: &mut R) {
    let (min_color, max_color) = (canvas.min_color(), canvas.max_color());
    let (mut fg, bg) = choose_colours(rng, min_color, max_color, options.colored_backgrounds);

    for cell in canvas.pixels_mut().iter_mut().flatten() {
        if cell.is_foreground() {
            *cell = Cell::Colour(fg);
            if options.rainbow {
                fg = Rgb::random(rng, min_color, max_color - COLOUR_BAND);
            }
        } else {
            *cell = Cell::Colour(bg);
        }
    }
}
