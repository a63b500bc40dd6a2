//! Phase dispatch - run the block rule over a whole grid
//!
//! One work unit per block row: each unit reads only `front` and owns a
//! disjoint band of `back` rows, so units never share mutable state.
//! Every in-grid cell lies in exactly one block, so `back` is fully
//! rewritten by one dispatch.

use crate::domain::cell::{CellId, CELL_OCCUPIED};
use crate::spatial::{Boundary, Grid};
use crate::systems::backend::ComputeBackend;

use super::hash::block_roll;
use super::kernel::{apply_block, Block, KernelParams};
use super::phase::BlockLayout;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// A, B, C, D
const SLOTS: [(i32, i32); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

#[inline]
fn gather(front: &Grid, x0: i32, y0: i32) -> Block {
    let (w, h) = (front.width(), front.height());
    let mut cells = [CELL_OCCUPIED; 4];
    let mut interior = [false; 4];
    for (i, (ox, oy)) in SLOTS.iter().enumerate() {
        let (x, y) = (x0 + ox, y0 + oy);
        if Boundary::classify(w, h, x, y).is_interior() {
            cells[i] = front.get(x as u32, y as u32);
            interior[i] = true;
        }
    }
    Block::with_mask(cells, interior)
}

/// Update block row `by`, writing into `band` (the `back` rows it covers).
fn update_block_row(
    front: &Grid,
    band: &mut [CellId],
    by: i32,
    layout: &BlockLayout,
    frame: u64,
    params: &KernelParams,
) {
    let w = front.width() as usize;
    let (_, y0) = layout.origin(0, by);
    let band_y = y0.max(0);

    for bx in layout.bx_start..layout.bx_end {
        let (x0, _) = layout.origin(bx, by);
        let block = gather(front, x0, y0);
        let out = apply_block(block, block_roll(bx, by, frame), params);
        debug_assert_eq!(out.mass(), block.mass());

        for (i, (ox, oy)) in SLOTS.iter().enumerate() {
            if out.interior[i] {
                let x = (x0 + ox) as usize;
                let row = (y0 + oy - band_y) as usize;
                band[row * w + x] = out.cells[i];
            }
        }
    }
}

/// Run one phase: read `front`, write `back`. Returns blocks processed.
///
/// The caller advances the frame counter and swaps buffers afterwards.
pub fn dispatch_phase(
    front: &Grid,
    back: &mut Grid,
    layout: &BlockLayout,
    frame: u64,
    params: &KernelParams,
    backend: ComputeBackend,
) -> u32 {
    debug_assert_eq!(front.width(), back.width());
    debug_assert_eq!(front.height(), back.height());

    if backend.is_inert() {
        return 0;
    }

    let w = front.width() as usize;
    let band_len = 2 * w;

    // Offset row: the block row at y = -1 only owns grid row 0.
    let head_len = if layout.dy == 1 { w } else { 0 };
    let (head, body) = back.cells.split_at_mut(head_len);
    if !head.is_empty() {
        update_block_row(front, head, -1, layout, frame, params);
    }

    match backend {
        #[cfg(feature = "parallel")]
        ComputeBackend::Parallel => {
            body.par_chunks_mut(band_len).enumerate().for_each(|(by, band)| {
                update_block_row(front, band, by as i32, layout, frame, params)
            });
        }
        _ => {
            body.chunks_mut(band_len).enumerate().for_each(|(by, band)| {
                update_block_row(front, band, by as i32, layout, frame, params)
            });
        }
    }

    layout.block_count()
}
