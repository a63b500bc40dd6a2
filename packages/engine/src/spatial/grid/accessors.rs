use super::*;
use crate::domain::cell::normalize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Grid {
    /// Cell at an in-bounds coordinate. Out-of-range reads go through
    /// `spatial::boundary` instead.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> CellId {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, cell: CellId) {
        let idx = self.index(x, y);
        self.cells[idx] = normalize(cell);
    }

    pub fn clear(&mut self) {
        self.cells.fill(CELL_EMPTY);
    }

    pub fn as_slice(&self) -> &[CellId] {
        &self.cells
    }

    /// Raw pointer for JS interop (`Uint8Array` view over wasm memory).
    pub fn cells_ptr(&self) -> *const CellId {
        self.cells.as_ptr()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> u32 {
        #[cfg(feature = "parallel")]
        {
            self.cells
                .par_iter()
                .filter(|&&c| c != CELL_EMPTY)
                .count() as u32
        }

        #[cfg(not(feature = "parallel"))]
        {
            self.cells.iter().filter(|&&c| c != CELL_EMPTY).count() as u32
        }
    }
}
