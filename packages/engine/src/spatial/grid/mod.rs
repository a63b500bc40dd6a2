//! Grid - one flat row-major buffer of cells
//!
//! `y` grows downward (the gravity direction). The backing `Vec<CellId>` is
//! exposed so JS can build a zero-copy view over it.

use crate::domain::cell::{CellId, CELL_EMPTY};

mod accessors;
mod indexing;

/// Largest grid side. Matches the default WebGPU `maxTextureDimension2D`,
/// and keeps `width * height` well inside a 32-bit `usize`.
pub const MAX_GRID_DIM: u32 = 8192;

/// Clamp one grid side into `1..=MAX_GRID_DIM`.
#[inline]
pub fn clamp_dim(n: u32) -> u32 {
    n.clamp(1, MAX_GRID_DIM)
}

pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    pub cells: Vec<CellId>,
}

impl Grid {
    /// Create an empty grid. Each side clamps into `1..=MAX_GRID_DIM`.
    pub fn new(width: u32, height: u32) -> Self {
        let width = clamp_dim(width);
        let height = clamp_dim(height);
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            cells: vec![CELL_EMPTY; size],
        }
    }
}
