use wasm_bindgen::prelude::*;

/// Snapshot of the last advanced frame. All zeros while perf is disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) tick_ms: f64,
    pub(super) paint_ms: f64,
    pub(super) phases_run: u32,
    pub(super) blocks_processed: u32,
    pub(super) cells_painted: u32,
    pub(super) occupied_cells: u32,
    pub(super) grid_size: u32,
    pub(super) frame: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn paint_ms(&self) -> f64 { self.paint_ms }
    #[wasm_bindgen(getter)]
    pub fn phases_run(&self) -> u32 { self.phases_run }
    #[wasm_bindgen(getter)]
    pub fn blocks_processed(&self) -> u32 { self.blocks_processed }
    #[wasm_bindgen(getter)]
    pub fn cells_painted(&self) -> u32 { self.cells_painted }
    #[wasm_bindgen(getter)]
    pub fn occupied_cells(&self) -> u32 { self.occupied_cells }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    /// Low 32 bits of the phase frame counter.
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u32 { self.frame }
}
