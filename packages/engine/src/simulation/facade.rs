use wasm_bindgen::prelude::*;

use crate::domain::cell::{CELL_EMPTY, CELL_OCCUPIED};
use crate::domain::config::SimConfig;
use crate::domain::error::EngineError;
use crate::systems::ComputeBackend;

use super::perf_stats::PerfStats;
use super::SandCore;

/// JS-facing handle. Thin forwarding layer over `SandCore`.
#[wasm_bindgen]
pub struct World {
    core: SandCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world with a `width x height` cell grid and default config.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: SandCore::new(width, height),
        }
    }

    /// Create a world sized from the canvas, with an optional JSON config.
    #[wasm_bindgen(js_name = forCanvas)]
    pub fn for_canvas(
        css_width: f32,
        css_height: f32,
        dpr: f32,
        config_json: Option<String>,
    ) -> Result<World, JsValue> {
        let config = match config_json {
            Some(json) => SimConfig::from_json(&json).map_err(to_js_error)?,
            None => SimConfig::default(),
        };
        let core = SandCore::for_canvas(css_width, css_height, dpr, config).map_err(to_js_error)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn ticks(&self) -> u64 { self.core.ticks() }

    #[wasm_bindgen(getter)]
    pub fn occupied_count(&self) -> u32 { self.core.occupied_count() }

    #[wasm_bindgen(getter)]
    pub fn display_color(&self) -> u32 { self.core.display_color() }

    #[wasm_bindgen(getter)]
    pub fn backend(&self) -> String { self.core.backend().name().to_string() }

    // === Config ===

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_config_json(&json).map_err(to_js_error)
    }

    pub fn get_config_json(&self) -> String {
        self.core.config().to_json()
    }

    pub fn set_play(&mut self, play: bool) { self.core.set_play(play) }

    pub fn set_tick_rate(&mut self, rate: f32) { self.core.set_tick_rate(rate) }

    pub fn set_topple_probability(&mut self, v: f32) { self.core.set_topple_probability(v) }

    pub fn set_brush_radius(&mut self, radius_px: f32) { self.core.set_brush_radius_px(radius_px) }

    pub fn set_display_color(&mut self, color: u32) { self.core.set_display_color(color) }

    pub fn set_cell_size(&mut self, px: u32) { self.core.set_cell_size_px(px) }

    pub fn set_phases_per_tick(&mut self, n: u32) { self.core.set_phases_per_tick(n) }

    pub fn set_paint_while_paused(&mut self, enabled: bool) {
        self.core.set_paint_while_paused(enabled)
    }

    /// Report host compute support; `false` makes the world inert.
    pub fn set_compute_available(&mut self, available: bool) {
        self.core.set_compute_available(available)
    }

    /// Force a backend by name: "parallel", "serial" or "inert".
    pub fn set_backend(&mut self, name: &str) -> Result<(), JsValue> {
        let backend = ComputeBackend::from_name(name)
            .ok_or_else(|| JsValue::from_str(&format!("unknown backend: {}", name)))?;
        self.core.set_backend(backend);
        Ok(())
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) { self.core.enable_perf_metrics(enabled) }

    /// Last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats { self.core.get_perf_stats() }

    // === Events ===

    pub fn resize(&mut self, css_width: f32, css_height: f32, dpr: f32) {
        self.core.resize(css_width, css_height, dpr)
    }

    pub fn pointer_down(&mut self, ndc_x: f32, ndc_y: f32) { self.core.pointer_down(ndc_x, ndc_y) }

    pub fn pointer_move(&mut self, ndc_x: f32, ndc_y: f32) { self.core.pointer_move(ndc_x, ndc_y) }

    pub fn pointer_up(&mut self) { self.core.pointer_up() }

    // === Commands ===

    pub fn clear(&mut self) { self.core.clear() }

    pub fn seed_noise(&mut self, density: f32, seed: u32) {
        self.core.seed_noise(density, seed as u64)
    }

    pub fn set_cell(&mut self, x: i32, y: i32, occupied: bool) -> bool {
        let cell = if occupied { CELL_OCCUPIED } else { CELL_EMPTY };
        self.core.set_cell(x, y, cell)
    }

    pub fn get_cell(&self, x: i32, y: i32) -> u8 { self.core.get_cell(x, y) }

    // === Stepping ===

    /// Call once per displayed frame with the frame delta in seconds.
    /// Returns true when a tick completed (re-read `cells_ptr`).
    pub fn advance(&mut self, dt_seconds: f32) -> bool { self.core.advance(dt_seconds) }

    /// Run one tick immediately, ignoring play/pause.
    pub fn step(&mut self) -> bool { self.core.step() }

    // === Display buffer ===

    /// Pointer to the authoritative cell buffer (one byte per cell).
    pub fn cells_ptr(&self) -> *const u8 { self.core.front_ptr() }

    pub fn cells_len(&self) -> usize { self.core.front_len() }
}

fn to_js_error(e: EngineError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

impl World {
    pub fn core(&self) -> &SandCore { &self.core }

    pub fn core_mut(&mut self) -> &mut SandCore { &mut self.core }
}
