use log::{debug, info};

use crate::domain::cell::{CellId, CELL_EMPTY, CELL_OCCUPIED};
use crate::spatial::BufferRole;
use crate::systems::margolus::hash::{block_hash, unit_f32};
use crate::systems::paint::{paint, Brush};

use super::input::Viewport;
use super::{PerfTimer, SandCore};

/// Rebuild both buffers for the current viewport and cell size.
///
/// Every dispatch borrows the store mutably until it returns, so no dispatch
/// can still reference the old buffers here.
pub(super) fn reallocate(core: &mut SandCore) {
    let (width, height) = core.viewport.sim_size(core.config.cell_size_px);
    core.store.allocate(width, height);
    core.scheduler.reset();
    core.tick_accum = 0.0;
    core.ticks = 0;
    info!(
        "grid reallocated: {}x{} cells ({}px cells)",
        core.store.width(),
        core.store.height(),
        core.config.cell_size_px
    );
}

pub(super) fn resize(core: &mut SandCore, css_width: f32, css_height: f32, dpr: f32) {
    core.viewport = Viewport::from_css(css_width, css_height, dpr);
    reallocate(core);
}

pub(super) fn pointer_down(core: &mut SandCore, ndc_x: f32, ndc_y: f32) {
    let (x, y) = core.viewport.ndc_to_px(ndc_x, ndc_y);
    core.pointer.press(x, y);
}

pub(super) fn pointer_move(core: &mut SandCore, ndc_x: f32, ndc_y: f32) {
    let (x, y) = core.viewport.ndc_to_px(ndc_x, ndc_y);
    core.pointer.moved(x, y);
}

pub(super) fn pointer_up(core: &mut SandCore) {
    core.pointer.release();
}

pub(super) fn paint_at_pointer(core: &mut SandCore) -> u32 {
    let (x, y) = (core.pointer.x_px, core.pointer.y_px);
    paint_at(core, x, y)
}

pub(super) fn paint_at(core: &mut SandCore, x_px: f32, y_px: f32) -> u32 {
    let timer = PerfTimer::start_if(core.perf_enabled);
    let brush = Brush::new(x_px, y_px, core.config.brush_radius_px);
    let cell_size = core.config.cell_size_px;
    let backend = core.backend;
    let stamped = paint(core.store.front_mut(), &brush, cell_size, backend);

    if let Some(t) = timer {
        core.perf_stats.paint_ms += t.elapsed_ms();
        core.perf_stats.cells_painted = core.perf_stats.cells_painted.saturating_add(stamped);
    }
    stamped
}

pub(super) fn set_cell(core: &mut SandCore, x: i32, y: i32, cell: CellId) -> bool {
    core.store.write(BufferRole::Front, x, y, cell)
}

pub(super) fn clear(core: &mut SandCore) {
    core.store.clear();
    core.scheduler.reset();
    core.tick_accum = 0.0;
    core.ticks = 0;
    debug!("grid cleared");
}

/// Stateless noise fill, reproducible for a given `seed`.
pub(super) fn seed_noise(core: &mut SandCore, density: f32, seed: u64) {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let front = core.store.front_mut();
    for idx in 0..front.size() {
        let (x, y) = front.coords(idx);
        let roll = unit_f32(block_hash(x as i32, y as i32, seed));
        front.cells[idx] = if roll < density { CELL_OCCUPIED } else { CELL_EMPTY };
    }
    debug!("seeded noise: density {:.3}, seed {}", density, seed);
}
