//! Symmetric random pattern generation.

use rand::Rng;

use crate::types::{Canvas, Cell};

/// Build one mirrored row from a random half row.
///
/// Odd `size` gets an extra random centre bit.
pub fn mirrored_row<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Vec<Cell> {
    let half: Vec<Cell> = (0..size / 2).map(|_| Cell::from(rng.gen::<bool>())).collect();

    let mut row = Vec::with_capacity(size);
    row.extend_from_slice(&half);
    if size % 2 != 0 {
        row.push(Cell::from(rng.gen::<bool>()));
    }
    row.extend(half.iter().rev());
    row
}

/// Fill the canvas with a fresh inkblot pattern.
///
/// Each row is independently mirrored around its centre; rows are not
/// symmetric with each other. The previous buffer is discarded.
pub fn generate_pattern<R: Rng + ?Sized>(canvas: &mut Canvas, rng: &mut R) {
    let size = canvas.size();
    let rows = (0..size).map(|_| mirrored_row(rng, size)).collect();
    canvas.replace_pixels(rows);
}
