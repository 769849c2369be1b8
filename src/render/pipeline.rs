//! The generation pipeline: pattern, optional colorize, scale, write.

use rand::Rng;

use crate::error::Result;
use crate::types::{Canvas, ColourMode};

use super::{colorize, generate_pattern, scale_canvas, write_ppm, ColourOptions, PixelFormat};

/// Decide the output format for a colour mode and colorizer switches.
///
/// Rainbow and coloured backgrounds force colour output in any mode.
pub fn output_format(mode: ColourMode, options: ColourOptions) -> PixelFormat {
    if mode == ColourMode::Colour || options.rainbow || options.colored_backgrounds {
        PixelFormat::Pixmap
    } else {
        PixelFormat::Bitmap
    }
}

/// Run every in-memory stage on the canvas and return the format to write.
pub fn render<R: Rng + ?Sized>(canvas: &mut Canvas, options: ColourOptions, rng: &mut R) -> PixelFormat {
    let format = output_format(canvas.mode(), options);

    generate_pattern(canvas, rng);
    if format == PixelFormat::Pixmap {
        colorize(canvas, options, rng);
    }
    scale_canvas(canvas);

    format
}

/// Render the canvas and write it to its output path.
pub fn make_image<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    options: ColourOptions,
    rng: &mut R,
) -> Result<PixelFormat> {
    let format = render(canvas, options, rng);
    write_ppm(canvas, format, canvas.output())?;
    Ok(format)
}
