//! rorschach - Symmetric inkblot generator
//!
//! A library for generating randomized, horizontally mirrored bitmap images
//! and writing them as plain-text pixel maps (`P1` / `P3`).

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use config::{Settings, CONFIG_FILENAME};
pub use error::{RorschachError, Result};
pub use render::{
    colorize, encode_ppm, generate_pattern, make_image, output_format, scale_canvas,
    scale_pixels, write_ppm, ColourOptions, PixelFormat,
};
pub use types::{format_channel, Canvas, Cell, ColourMode, ColourWarning, Rgb};
