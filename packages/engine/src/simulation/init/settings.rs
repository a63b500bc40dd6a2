use log::{debug, info};

use crate::domain::config::SimConfig;
use crate::domain::error::EngineError;
use crate::systems::margolus::KernelParams;
use crate::systems::ComputeBackend;

use super::commands;
use super::SandCore;

pub(super) fn load_config_json(core: &mut SandCore, json: &str) -> Result<(), EngineError> {
    let config = SimConfig::from_json(json)?;
    info!("config loaded: {}", config.to_json());
    apply_config(core, config);
    Ok(())
}

pub(super) fn set_config(core: &mut SandCore, config: SimConfig) -> Result<(), EngineError> {
    config.validate()?;
    apply_config(core, config);
    Ok(())
}

fn apply_config(core: &mut SandCore, config: SimConfig) {
    let cell_size_changed = config.cell_size_px != core.config.cell_size_px;
    core.config = config;
    core.params = KernelParams::from_user_probability(core.config.topple_probability);
    if cell_size_changed {
        commands::reallocate(core);
    }
}

pub(super) fn set_play(core: &mut SandCore, play: bool) {
    if core.config.play != play {
        debug!("simulation {}", if play { "playing" } else { "paused" });
    }
    core.config.play = play;
}

pub(super) fn set_tick_rate(core: &mut SandCore, rate: f32) {
    core.config.set_tick_rate(rate);
}

pub(super) fn set_topple_probability(core: &mut SandCore, v: f32) {
    core.config.set_topple_probability(v);
    core.params = KernelParams::from_user_probability(core.config.topple_probability);
}

pub(super) fn set_brush_radius_px(core: &mut SandCore, r: f32) {
    core.config.set_brush_radius_px(r);
}

pub(super) fn set_display_color(core: &mut SandCore, color: u32) {
    core.config.display_color = color;
}

pub(super) fn set_phases_per_tick(core: &mut SandCore, n: u32) {
    core.config.set_phases_per_tick(n);
}

pub(super) fn set_paint_while_paused(core: &mut SandCore, enabled: bool) {
    core.config.paint_while_paused = enabled;
}

pub(super) fn set_cell_size_px(core: &mut SandCore, px: u32) {
    let before = core.config.cell_size_px;
    core.config.set_cell_size_px(px);
    if core.config.cell_size_px != before {
        commands::reallocate(core);
    }
}

pub(super) fn set_backend(core: &mut SandCore, backend: ComputeBackend) {
    if core.backend != backend {
        info!("compute backend: {} -> {}", core.backend.name(), backend.name());
    }
    core.backend = backend;
}

pub(super) fn set_compute_available(core: &mut SandCore, available: bool) {
    if available {
        if core.backend.is_inert() {
            set_backend(core, ComputeBackend::detect());
        }
    } else if !core.backend.is_inert() {
        core.backend = ComputeBackend::degrade("host reported no compute support");
    }
}

pub(super) fn enable_perf_metrics(core: &mut SandCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}
