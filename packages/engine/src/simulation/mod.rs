//! SandCore - falling-sand simulation orchestration
//!
//! Owns the double-buffered grid, the phase scheduler and the config the UI
//! edits. Per displayed frame the host calls `advance(dt)`:
//! - paint into `front` while the pointer is down
//! - accumulate time and run at most one tick once `tick_interval` is reached
//!
//! A tick is `phases_per_tick` dispatches. Each dispatch reads `front`,
//! writes `back`, advances the frame counter, then swaps. Dispatches are
//! synchronous, so phase N always completes before phase N + 1 starts.
//!
//! Kernels are in systems/, storage and edge semantics in spatial/.

use crate::domain::cell::CellId;
use crate::domain::config::SimConfig;
use crate::domain::error::EngineError;
use crate::spatial::{BufferRole, Grid, GridStore};
use crate::systems::margolus::{KernelParams, PhaseScheduler};
use crate::systems::ComputeBackend;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "input/input.rs"]
mod input;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use input::{PointerState, Viewport};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

pub struct SandCore {
    config: SimConfig,
    params: KernelParams,
    store: GridStore,
    scheduler: PhaseScheduler,
    backend: ComputeBackend,

    viewport: Viewport,
    pointer: PointerState,

    // Seconds accumulated toward the next tick
    tick_accum: f32,
    ticks: u64,

    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SandCore {
    /// Create a `width x height` cell grid with default config.
    pub fn new(width: u32, height: u32) -> Self {
        init::create_sand_core(width, height, SimConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: SimConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(init::create_sand_core(width, height, config))
    }

    /// Create a grid sized from a canvas (`simW = floor(css_w * dpr / cell)`).
    pub fn for_canvas(
        css_width: f32,
        css_height: f32,
        dpr: f32,
        config: SimConfig,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(init::create_sand_core_for_canvas(css_width, css_height, dpr, config))
    }

    pub fn width(&self) -> u32 { self.store.width() }

    pub fn height(&self) -> u32 { self.store.height() }

    /// Phase frame counter (one increment per dispatch).
    pub fn frame(&self) -> u64 { self.scheduler.frame() }

    /// Completed ticks since the last reallocation or clear.
    pub fn ticks(&self) -> u64 { self.ticks }

    pub fn config(&self) -> &SimConfig { &self.config }

    pub fn kernel_params(&self) -> KernelParams { self.params }

    pub fn backend(&self) -> ComputeBackend { self.backend }

    pub fn viewport(&self) -> Viewport { self.viewport }

    pub fn pointer(&self) -> PointerState { self.pointer }

    /// Authoritative buffer for display.
    pub fn front(&self) -> &Grid { self.store.front() }

    pub fn front_cells(&self) -> &[CellId] { self.store.front().as_slice() }

    /// Pointer to the front buffer for a JS `Uint8Array` view. Invalidated
    /// by every tick (buffers swap) and by reallocation.
    pub fn front_ptr(&self) -> *const CellId { self.store.front().cells_ptr() }

    pub fn front_len(&self) -> usize { self.store.front().size() }

    pub fn occupied_count(&self) -> u32 { self.store.front().occupied_count() }

    /// Cell in `front`, resolved through the boundary policy.
    pub fn get_cell(&self, x: i32, y: i32) -> CellId {
        self.store.read(BufferRole::Front, x, y)
    }

    pub fn display_color(&self) -> u32 { self.config.display_color }

    // === Config ===

    pub fn load_config_json(&mut self, json: &str) -> Result<(), EngineError> {
        settings::load_config_json(self, json)
    }

    pub fn set_config(&mut self, config: SimConfig) -> Result<(), EngineError> {
        settings::set_config(self, config)
    }

    pub fn set_play(&mut self, play: bool) { settings::set_play(self, play) }

    pub fn set_tick_rate(&mut self, rate: f32) { settings::set_tick_rate(self, rate) }

    pub fn set_topple_probability(&mut self, v: f32) { settings::set_topple_probability(self, v) }

    pub fn set_brush_radius_px(&mut self, r: f32) { settings::set_brush_radius_px(self, r) }

    pub fn set_display_color(&mut self, color: u32) { settings::set_display_color(self, color) }

    pub fn set_phases_per_tick(&mut self, n: u32) { settings::set_phases_per_tick(self, n) }

    pub fn set_paint_while_paused(&mut self, enabled: bool) {
        settings::set_paint_while_paused(self, enabled)
    }

    /// Changing the cell size reallocates the grid.
    pub fn set_cell_size_px(&mut self, px: u32) { settings::set_cell_size_px(self, px) }

    pub fn set_backend(&mut self, backend: ComputeBackend) { settings::set_backend(self, backend) }

    /// Host feature detection result; `false` puts the engine in inert mode.
    pub fn set_compute_available(&mut self, available: bool) {
        settings::set_compute_available(self, available)
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled)
    }

    pub fn get_perf_stats(&self) -> PerfStats { self.perf_stats.clone() }

    // === Commands ===

    /// Canvas resized: recompute grid size, reallocate, reset phase.
    pub fn resize(&mut self, css_width: f32, css_height: f32, dpr: f32) {
        commands::resize(self, css_width, css_height, dpr)
    }

    pub fn pointer_down(&mut self, ndc_x: f32, ndc_y: f32) {
        commands::pointer_down(self, ndc_x, ndc_y)
    }

    pub fn pointer_move(&mut self, ndc_x: f32, ndc_y: f32) {
        commands::pointer_move(self, ndc_x, ndc_y)
    }

    /// Pointer up or leave.
    pub fn pointer_up(&mut self) { commands::pointer_up(self) }

    /// Stamp the brush at the current pointer position. Returns cells newly occupied.
    pub fn paint(&mut self) -> u32 { commands::paint_at_pointer(self) }

    /// Stamp a brush at an explicit pixel position.
    pub fn paint_at(&mut self, x_px: f32, y_px: f32) -> u32 { commands::paint_at(self, x_px, y_px) }

    /// Write one cell of `front`; masked coordinates are ignored.
    pub fn set_cell(&mut self, x: i32, y: i32, cell: CellId) -> bool {
        commands::set_cell(self, x, y, cell)
    }

    pub fn clear(&mut self) { commands::clear(self) }

    /// Fill `front` with hash noise at `density`.
    pub fn seed_noise(&mut self, density: f32, seed: u64) {
        commands::seed_noise(self, density, seed)
    }

    /// Restart the phase cycle from an explicit frame counter.
    pub fn set_frame(&mut self, frame: u64) { self.scheduler.set_frame(frame) }

    // === Stepping ===

    /// Per displayed frame. Returns true when a tick completed.
    pub fn advance(&mut self, dt_seconds: f32) -> bool { step::advance(self, dt_seconds) }

    /// Run one tick now, regardless of `play`. Returns false when inert.
    pub fn step(&mut self) -> bool { step::tick(self) }

    /// Run a single phase dispatch (front -> back, advance, swap).
    pub fn step_phase(&mut self) -> bool { step::run_phase(self).is_some() }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
