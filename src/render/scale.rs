//! Integer upscaling of the pixel buffer.

use crate::types::{Canvas, Cell};

/// Scale a pixel grid by an integer factor.
///
/// Each source cell becomes a `scale × scale` block (nearest-neighbour).
pub fn scale_pixels(pixels: &[Vec<Cell>], scale: usize) -> Vec<Vec<Cell>> {
    if scale <= 1 {
        return pixels.to_vec();
    }

    pixels
        .iter()
        .flat_map(|row| {
            let scaled_row: Vec<Cell> = row
                .iter()
                .flat_map(|&cell| std::iter::repeat(cell).take(scale))
                .collect();
            std::iter::repeat(scaled_row).take(scale)
        })
        .collect()
}

/// Scale the canvas buffer in place by the canvas scale factor.
pub fn scale_canvas(canvas: &mut Canvas) {
    let scaled = scale_pixels(canvas.pixels(), canvas.scale());
    canvas.replace_pixels(scaled);
}
