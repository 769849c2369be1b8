//! Core domain types for rorschach.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Rgb` - colour triples and channel formatting
//! - `Cell` - pixel buffer values, binary markers or colours
//! - `Canvas` - image settings plus the pixel buffer

mod canvas;
mod cell;
mod colour;

pub use canvas::{repair_colour_bounds, Canvas, ColourMode, ColourWarning};
pub use cell::Cell;
pub use colour::{format_channel, Rgb, MAX_CHANNEL};
