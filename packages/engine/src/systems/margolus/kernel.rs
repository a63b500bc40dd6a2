//! Margolus sand rule for a single 2x2 block
//!
//! ```text
//!   A B
//!   C D      (y grows downward)
//! ```
//!
//! Pure function of the four cells, their boundary mask and one roll in
//! `[0, 1)`. Dispatch (which blocks, which buffers) lives in `dispatch.rs`.

use crate::domain::cell::{CellId, CELL_EMPTY, CELL_OCCUPIED};

pub const A: usize = 0;
pub const B: usize = 1;
pub const C: usize = 2;
pub const D: usize = 3;

/// Substeps the user probability is spread over.
const PHASES_PER_CYCLE: f32 = 4.0;

/// Kernel definition: data only, rebuilt when the probability knob changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KernelParams {
    /// Per-phase toppling probability `p`.
    pub topple_p: f32,
}

impl KernelParams {
    /// Build from the user-facing per-tick probability `v`.
    pub fn from_user_probability(v: f32) -> Self {
        Self { topple_p: per_phase_probability(v) }
    }
}

impl Default for KernelParams {
    fn default() -> Self {
        Self { topple_p: 0.0 }
    }
}

/// `p = 1 - (1 - v)^(1/4)`: four compounded phases topple with probability `v`.
pub fn per_phase_probability(v: f32) -> f32 {
    let v = if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
    1.0 - (1.0 - v).powf(1.0 / PHASES_PER_CYCLE)
}

/// Four cells of a block plus which of them lie inside the grid.
///
/// Cells outside the grid hold `CELL_OCCUPIED` and are never moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    pub cells: [CellId; 4],
    pub interior: [bool; 4],
}

impl Block {
    /// Fully interior block.
    pub fn new(a: CellId, b: CellId, c: CellId, d: CellId) -> Self {
        Self {
            cells: [a, b, c, d],
            interior: [true; 4],
        }
    }

    pub fn with_mask(cells: [CellId; 4], interior: [bool; 4]) -> Self {
        let mut cells = cells;
        for i in 0..4 {
            if !interior[i] {
                cells[i] = CELL_OCCUPIED;
            }
        }
        Self { cells, interior }
    }

    /// Movable grain at slot `i`.
    #[inline]
    fn sand(&self, i: usize) -> bool {
        self.interior[i] && self.cells[i] != CELL_EMPTY
    }

    #[inline]
    fn occupied(&self, i: usize) -> bool {
        self.cells[i] != CELL_EMPTY
    }

    #[inline]
    fn empty(&self, i: usize) -> bool {
        self.cells[i] == CELL_EMPTY
    }

    #[inline]
    fn shift(&mut self, from: usize, to: usize) {
        self.cells[from] = CELL_EMPTY;
        self.cells[to] = CELL_OCCUPIED;
    }

    /// Grains held by interior cells.
    pub fn mass(&self) -> u32 {
        (0..4).filter(|&i| self.sand(i)).count() as u32
    }
}

/// Apply the sand rule to one block.
///
/// 1. vertical fall, each column independently
/// 2. diagonal fall when straight down is blocked
/// 3. a full column beside an empty column topples (swaps) when `roll < p`
///
/// A full column over an empty one belongs to step 3 only; otherwise step 2
/// would collapse every two-high tower regardless of `p`.
pub fn apply_block(block: Block, roll: f32, params: &KernelParams) -> Block {
    let mut out = block;

    if out.sand(A) && out.empty(C) {
        out.shift(A, C);
    }
    if out.sand(B) && out.empty(D) {
        out.shift(B, D);
    }

    let left_tower = out.sand(A) && out.sand(C) && out.empty(B) && out.empty(D);
    let right_tower = out.sand(B) && out.sand(D) && out.empty(A) && out.empty(C);

    if left_tower || right_tower {
        if roll < params.topple_p {
            out.cells.swap(A, B);
            out.cells.swap(C, D);
        }
        return out;
    }

    if out.sand(A) && out.occupied(C) && out.empty(D) {
        out.shift(A, D);
    } else if out.sand(B) && out.occupied(D) && out.empty(C) {
        out.shift(B, C);
    }

    out
}
