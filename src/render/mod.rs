//! Rendering module for rorschach.
//!
//! This module turns a canvas into an inkblot: pattern generation,
//! colorizing, integer scaling, and pixel map output.

mod colorize;
mod pattern;
mod pipeline;
mod ppm;
mod scale;

pub use colorize::{choose_colours, colorize, ColourOptions, COLOUR_BAND, MUTE_RANGE};
pub use pattern::{generate_pattern, mirrored_row};
pub use pipeline::{make_image, output_format, render};
pub use ppm::{encode_ppm, write_ppm, PixelFormat};
pub use scale::{scale_canvas, scale_pixels};
