#![cfg(target_arch = "wasm32")]

use sandfall_engine::World;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn world_steps_in_browser_runtime() {
    let mut world = World::new(32, 32);
    world.set_backend("serial").unwrap();
    world.set_cell(5, 0, true);
    world.step();
    world.step();
    assert_eq!(world.occupied_count(), 1);
}

#[wasm_bindgen_test]
fn bad_config_surfaces_as_js_error() {
    let mut world = World::new(8, 8);
    assert!(world.load_config("{\"tickRate\": -1}".to_string()).is_err());
    assert!(world.set_backend("gpu").is_err());
}

#[wasm_bindgen_test]
fn init_installs_console_logger() {
    sandfall_engine::init();
    assert!(log::log_enabled!(log::Level::Info));
    // A second init keeps the existing logger.
    sandfall_engine::init();
    assert!(log::log_enabled!(log::Level::Info));
}
