//! Plain-text pixel map output (`P1` bitmaps and `P3` pixmaps).
//!
//! Layout:
//!
//! ```text
//! P3            <- format marker
//! 40 40         <- width height of the scaled buffer
//! 255           <- colour depth (P3 only)
//! 200 200 200  200 200 200  ...
//! ```
//!
//! Cell tokens on a row are separated by two spaces.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{RorschachError, Result};
use crate::types::Canvas;

/// Separator between cell tokens on a row.
const CELL_SEPARATOR: &str = "  ";

/// Which pixel map flavour to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Plain bitmap, `0`/`1` cells.
    Bitmap,
    /// Plain pixmap, RGB cells with a colour depth line.
    Pixmap,
}

impl PixelFormat {
    /// Header magic number.
    pub fn magic(self) -> &'static str {
        match self {
            PixelFormat::Bitmap => "P1",
            PixelFormat::Pixmap => "P3",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.magic())
    }
}

/// Encode the canvas buffer as a pixel map into any writer.
pub fn encode_ppm<W: Write>(canvas: &Canvas, format: PixelFormat, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", format.magic())?;
    writeln!(out, "{} {}", canvas.width(), canvas.height())?;

    if format == PixelFormat::Pixmap {
        writeln!(out, "{}", canvas.max_color())?;
    }

    for row in canvas.pixels() {
        let mut cells = row.iter();
        if let Some(first) = cells.next() {
            write!(out, "{}", first)?;
            for cell in cells {
                write!(out, "{}{}", CELL_SEPARATOR, cell)?;
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Write the canvas to `path` as a pixel map.
///
/// The file is created (or truncated), written in full, and flushed before
/// the handle is dropped. A failed write can leave a partial file behind.
pub fn write_ppm(canvas: &Canvas, format: PixelFormat, path: &Path) -> Result<()> {
    let io_error = |action: &str, e: std::io::Error| RorschachError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to {} pixel map: {}", action, e),
    };

    let file = File::create(path).map_err(|e| io_error("create", e))?;
    let mut out = BufWriter::new(file);

    encode_ppm(canvas, format, &mut out).map_err(|e| io_error("write", e))?;
    out.flush().map_err(|e| io_error("flush", e))?;

    Ok(())
}
