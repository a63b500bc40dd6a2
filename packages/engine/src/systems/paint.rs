//! Paint kernel - stamp occupied cells under the brush
//!
//! A cell is painted when its pixel-space center `(x + 0.5, y + 0.5) * cell`
//! lies strictly inside the brush circle. Only rows and columns that can
//! intersect the circle are visited; rows are independent work units.

use crate::domain::cell::{CellId, CELL_EMPTY, CELL_OCCUPIED};
use crate::spatial::Grid;
use crate::systems::backend::ComputeBackend;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Brush in canvas pixel space (same space as `cell_size_px`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Brush {
    pub x_px: f32,
    pub y_px: f32,
    pub radius_px: f32,
}

impl Brush {
    pub fn new(x_px: f32, y_px: f32, radius_px: f32) -> Self {
        Self { x_px, y_px, radius_px }
    }

    /// Whether the cell at `(x, y)` lies under the brush.
    #[inline]
    pub fn covers(&self, x: u32, y: u32, cell_size_px: f32) -> bool {
        let dx = (x as f32 + 0.5) * cell_size_px - self.x_px;
        let dy = (y as f32 + 0.5) * cell_size_px - self.y_px;
        dx * dx + dy * dy < self.radius_px * self.radius_px
    }

    /// Inclusive cell range on one axis that may intersect the brush.
    fn cell_span(
        center_px: f32,
        radius_px: f32,
        cell_size_px: f32,
        cells: u32,
    ) -> Option<(u32, u32)> {
        let lo = ((center_px - radius_px) / cell_size_px - 0.5).floor();
        let hi = ((center_px + radius_px) / cell_size_px - 0.5).ceil();
        let max = (cells - 1) as f32;
        if hi < 0.0 || lo > max {
            return None;
        }
        Some((lo.max(0.0) as u32, hi.min(max) as u32))
    }
}

fn paint_row(
    row: &mut [CellId],
    y: u32,
    x_lo: u32,
    x_hi: u32,
    brush: &Brush,
    cell_size_px: f32,
) -> u32 {
    let mut stamped = 0;
    for x in x_lo..=x_hi {
        if brush.covers(x, y, cell_size_px) {
            let cell = &mut row[x as usize];
            if *cell == CELL_EMPTY {
                stamped += 1;
            }
            *cell = CELL_OCCUPIED;
        }
    }
    stamped
}

/// Stamp `brush` into `grid`. Returns the number of cells that went from
/// empty to occupied.
pub fn paint(grid: &mut Grid, brush: &Brush, cell_size_px: u32, backend: ComputeBackend) -> u32 {
    let placed = brush.x_px.is_finite() && brush.y_px.is_finite();
    if backend.is_inert() || !(brush.radius_px > 0.0) || !placed {
        return 0;
    }
    let cell = cell_size_px.max(1) as f32;
    let (w, h) = (grid.width(), grid.height());

    let Some((x_lo, x_hi)) = Brush::cell_span(brush.x_px, brush.radius_px, cell, w) else {
        return 0;
    };
    let Some((y_lo, y_hi)) = Brush::cell_span(brush.y_px, brush.radius_px, cell, h) else {
        return 0;
    };

    let width = w as usize;
    let rows = &mut grid.cells[(y_lo as usize) * width..(y_hi as usize + 1) * width];

    match backend {
        #[cfg(feature = "parallel")]
        ComputeBackend::Parallel => rows
            .par_chunks_mut(width)
            .enumerate()
            .map(|(i, row)| paint_row(row, y_lo + i as u32, x_lo, x_hi, brush, cell))
            .sum(),
        _ => rows
            .chunks_mut(width)
            .enumerate()
            .map(|(i, row)| paint_row(row, y_lo + i as u32, x_lo, x_hi, brush, cell))
            .sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force(w: u32, h: u32, brush: &Brush, cell: u32) -> Vec<CellId> {
        let mut out = vec![CELL_EMPTY; (w * h) as usize];
        for y in 0..h {
            for x in 0..w {
                if brush.covers(x, y, cell as f32) {
                    out[(y * w + x) as usize] = CELL_OCCUPIED;
                }
            }
        }
        out
    }

    #[test]
    fn matches_per_cell_distance_test() {
        for brush in [
            Brush::new(25.0, 25.0, 10.0),
            Brush::new(0.0, 0.0, 12.0),
            Brush::new(99.0, 3.0, 30.0),
            Brush::new(52.5, 47.5, 2.6),
        ] {
            let mut grid = Grid::new(20, 10);
            paint(&mut grid, &brush, 5, ComputeBackend::Serial);
            assert_eq!(grid.cells, brute_force(20, 10, &brush, 5), "{brush:?}");
        }
    }

    #[test]
    fn counts_only_newly_occupied_cells() {
        let mut grid = Grid::new(10, 10);
        let brush = Brush::new(25.0, 25.0, 6.0);
        let first = paint(&mut grid, &brush, 5, ComputeBackend::Parallel);
        assert!(first > 0);
        assert_eq!(first, grid.occupied_count());
        assert_eq!(paint(&mut grid, &brush, 5, ComputeBackend::Parallel), 0);
    }

    #[test]
    fn off_canvas_zero_radius_and_inert_paint_nothing() {
        let mut grid = Grid::new(8, 8);
        let serial = ComputeBackend::Serial;
        assert_eq!(paint(&mut grid, &Brush::new(-100.0, -100.0, 10.0), 5, serial), 0);
        assert_eq!(paint(&mut grid, &Brush::new(500.0, 10.0, 10.0), 5, serial), 0);
        assert_eq!(paint(&mut grid, &Brush::new(10.0, 10.0, 0.0), 5, serial), 0);
        assert_eq!(paint(&mut grid, &Brush::new(10.0, 10.0, 10.0), 5, ComputeBackend::Inert), 0);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn center_of_cell_is_the_distance_origin() {
        // Cell (2, 2) with 5px cells is centered at (12.5, 12.5).
        let mut grid = Grid::new(5, 5);
        paint(&mut grid, &Brush::new(12.5, 12.5, 0.1), 5, ComputeBackend::Serial);
        assert_eq!(grid.occupied_count(), 1);
        assert_eq!(grid.get(2, 2), CELL_OCCUPIED);
    }
}
