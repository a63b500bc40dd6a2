use log::info;

use crate::domain::config::SimConfig;
use crate::spatial::GridStore;
use crate::systems::margolus::{KernelParams, PhaseScheduler};
use crate::systems::ComputeBackend;

use super::input::{PointerState, Viewport};
use super::perf_stats::PerfStats;
use super::SandCore;

pub(super) fn create_sand_core(width: u32, height: u32, config: SimConfig) -> SandCore {
    let viewport = Viewport::from_cells(width, height, config.cell_size_px);
    build(width, height, viewport, config)
}

pub(super) fn create_sand_core_for_canvas(
    css_width: f32,
    css_height: f32,
    dpr: f32,
    config: SimConfig,
) -> SandCore {
    let viewport = Viewport::from_css(css_width, css_height, dpr);
    let (width, height) = viewport.sim_size(config.cell_size_px);
    build(width, height, viewport, config)
}

fn build(width: u32, height: u32, viewport: Viewport, config: SimConfig) -> SandCore {
    let backend = ComputeBackend::detect();
    let store = GridStore::new(width, height);
    info!(
        "sand core: {}x{} cells, {}px cells, {} backend",
        store.width(),
        store.height(),
        config.cell_size_px,
        backend.name()
    );

    SandCore {
        params: KernelParams::from_user_probability(config.topple_probability),
        config,
        store,
        scheduler: PhaseScheduler::new(),
        backend,
        viewport,
        pointer: PointerState::default(),
        tick_accum: 0.0,
        ticks: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
