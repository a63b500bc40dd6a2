//! Boundary policy - what lies beyond the grid edge
//!
//! Shared by the update and paint kernels. Every out-of-grid coordinate reads
//! as `CELL_OCCUPIED` and is never written:
//! - below the last row: solid floor
//! - left/right of the grid: wall mask for blocks straddling the edge
//! - above the first row: ceiling mask (only reachable by the offset block row)
//!
//! Masked cells are immovable. A block may treat them as obstacles but never
//! move them, so mass can neither leave through an edge nor be pulled in
//! from one.

use crate::domain::cell::{CellId, CELL_OCCUPIED};

use super::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    Interior,
    Floor,
    Wall,
    Ceiling,
}

impl Boundary {
    #[inline]
    pub fn classify(width: u32, height: u32, x: i32, y: i32) -> Boundary {
        // Floor wins over the walls so the bottom corners read as floor.
        if y >= height as i32 {
            Boundary::Floor
        } else if x < 0 || x >= width as i32 {
            Boundary::Wall
        } else if y < 0 {
            Boundary::Ceiling
        } else {
            Boundary::Interior
        }
    }

    #[inline]
    pub fn is_interior(self) -> bool {
        self == Boundary::Interior
    }
}

/// Read through the boundary policy.
#[inline]
pub fn read(grid: &Grid, x: i32, y: i32) -> CellId {
    match Boundary::classify(grid.width(), grid.height(), x, y) {
        Boundary::Interior => grid.get(x as u32, y as u32),
        _ => CELL_OCCUPIED,
    }
}

/// Write through the boundary policy. Returns false (and writes nothing)
/// for masked coordinates.
#[inline]
pub fn write(grid: &mut Grid, x: i32, y: i32, cell: CellId) -> bool {
    if !Boundary::classify(grid.width(), grid.height(), x, y).is_interior() {
        return false;
    }
    grid.set(x as u32, y as u32, cell);
    true
}
