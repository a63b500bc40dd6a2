//! GridStore - ping-pong pair of equally sized grids
//!
//! `front` is authoritative (display and paint read it); `back` is the write
//! target of the next phase dispatch. Role swap is the only mutation of the
//! pairing and only happens after a dispatch has completed.
//!
//! Dispatches borrow the store for their whole duration, so the buffers
//! cannot be reallocated while one is running.

use log::debug;

use crate::domain::cell::CellId;

use super::boundary;
use super::grid::{clamp_dim, Grid};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferRole {
    Front,
    Back,
}

pub struct GridStore {
    buffers: [Grid; 2],
    front: usize,
}

impl GridStore {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffers: [Grid::new(width, height), Grid::new(width, height)],
            front: 0,
        }
    }

    /// Replace both buffers with fresh empty grids. Dimensions clamp into
    /// `1..=MAX_GRID_DIM`.
    pub fn allocate(&mut self, width: u32, height: u32) {
        let width = clamp_dim(width);
        let height = clamp_dim(height);
        debug!(
            "grid store: reallocating {}x{} -> {}x{}",
            self.width(),
            self.height(),
            width,
            height
        );
        // Old grids drop here, before any new dispatch can see the store.
        self.buffers = [Grid::new(width, height), Grid::new(width, height)];
        self.front = 0;
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.buffers[0].width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.buffers[0].height()
    }

    #[inline]
    fn slot(&self, role: BufferRole) -> usize {
        match role {
            BufferRole::Front => self.front,
            BufferRole::Back => self.front ^ 1,
        }
    }

    pub fn buffer(&self, role: BufferRole) -> &Grid {
        &self.buffers[self.slot(role)]
    }

    pub fn buffer_mut(&mut self, role: BufferRole) -> &mut Grid {
        let slot = self.slot(role);
        &mut self.buffers[slot]
    }

    #[inline]
    pub fn front(&self) -> &Grid {
        self.buffer(BufferRole::Front)
    }

    #[inline]
    pub fn front_mut(&mut self) -> &mut Grid {
        self.buffer_mut(BufferRole::Front)
    }

    /// Borrow front for reading and back for writing at the same time.
    pub fn split(&mut self) -> (&Grid, &mut Grid) {
        let (first, second) = self.buffers.split_at_mut(1);
        if self.front == 0 {
            (&first[0], &mut second[0])
        } else {
            (&second[0], &mut first[0])
        }
    }

    /// Read through the boundary policy.
    pub fn read(&self, role: BufferRole, x: i32, y: i32) -> CellId {
        boundary::read(self.buffer(role), x, y)
    }

    /// Write through the boundary policy; masked coordinates are ignored.
    pub fn write(&mut self, role: BufferRole, x: i32, y: i32, cell: CellId) -> bool {
        boundary::write(self.buffer_mut(role), x, y, cell)
    }

    pub fn swap(&mut self) {
        self.front ^= 1;
    }

    pub fn clear(&mut self) {
        for grid in self.buffers.iter_mut() {
            grid.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cell::{CELL_EMPTY, CELL_OCCUPIED};

    #[test]
    fn swap_exchanges_roles() {
        let mut store = GridStore::new(3, 3);
        store.write(BufferRole::Front, 1, 1, CELL_OCCUPIED);
        assert_eq!(store.read(BufferRole::Back, 1, 1), CELL_EMPTY);

        store.swap();
        assert_eq!(store.read(BufferRole::Back, 1, 1), CELL_OCCUPIED);
        assert_eq!(store.read(BufferRole::Front, 1, 1), CELL_EMPTY);
    }

    #[test]
    fn split_hands_out_front_and_back() {
        let mut store = GridStore::new(2, 2);
        store.write(BufferRole::Front, 0, 0, CELL_OCCUPIED);
        store.swap();
        {
            let (front, back) = store.split();
            assert_eq!(front.get(0, 0), CELL_EMPTY);
            assert_eq!(back.get(0, 0), CELL_OCCUPIED);
            back.set(1, 1, CELL_OCCUPIED);
        }
        assert_eq!(store.buffer(BufferRole::Back).get(1, 1), CELL_OCCUPIED);
    }

    #[test]
    fn allocate_clamps_and_resets() {
        let mut store = GridStore::new(4, 4);
        store.write(BufferRole::Front, 0, 0, CELL_OCCUPIED);
        store.swap();

        store.allocate(0, 7);
        assert_eq!(store.width(), 1);
        assert_eq!(store.height(), 7);

        store.allocate(2, u32::MAX);
        assert_eq!(store.height(), crate::spatial::MAX_GRID_DIM);
        assert_eq!(store.front().occupied_count(), 0);
        assert_eq!(store.buffer(BufferRole::Back).occupied_count(), 0);
    }

    #[test]
    fn out_of_range_reads_follow_boundary_policy() {
        let store = GridStore::new(2, 2);
        assert_eq!(store.read(BufferRole::Front, 0, 2), CELL_OCCUPIED);
        assert_eq!(store.read(BufferRole::Front, -1, 0), CELL_OCCUPIED);
    }
}
