//! Sandfall Engine - Margolus falling-sand simulation in WASM
//!
//! Architecture:
//! - domain/     - cell vocabulary, config, errors
//! - spatial/    - grid, double buffer, boundary policy
//! - systems/    - margolus update kernel, paint kernel, backends
//! - simulation/ - orchestration and the JS facade

pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Thread pool init for the parallel backend (JS must await this before stepping)
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

// Route `log` records to the browser console
#[cfg(target_arch = "wasm32")]
fn init_console_logger() {
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // Err only when a logger is already installed (init called twice).
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    init_console_logger();

    web_sys::console::log_1(&format!("Sandfall engine {} initialized", version()).into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::cell::{CellId, CELL_EMPTY, CELL_OCCUPIED};
pub use domain::config::SimConfig;
pub use domain::error::EngineError;
pub use simulation::{PerfStats, SandCore, World};
pub use systems::ComputeBackend;

// Cell constants for JS
#[wasm_bindgen]
pub fn cell_empty() -> u8 { CELL_EMPTY }
#[wasm_bindgen]
pub fn cell_occupied() -> u8 { CELL_OCCUPIED }
