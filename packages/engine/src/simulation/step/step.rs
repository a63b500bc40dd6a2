use crate::systems::margolus::dispatch_phase;

use super::{PerfTimer, SandCore};

/// Per displayed frame: paint, then at most one tick.
pub(super) fn advance(core: &mut SandCore, dt_seconds: f32) -> bool {
    if core.perf_enabled {
        core.perf_stats.reset();
    }

    let paint_allowed = core.config.play || core.config.paint_while_paused;
    if core.pointer.down && paint_allowed {
        core.paint();
    }

    let ticked = if core.config.play {
        accumulate(core, dt_seconds)
    } else {
        false
    };

    if core.perf_enabled {
        core.perf_stats.occupied_cells = core.store.front().occupied_count();
        core.perf_stats.grid_size = core.store.front().size() as u32;
        core.perf_stats.frame = core.scheduler.frame() as u32;
    }
    ticked
}

fn accumulate(core: &mut SandCore, dt_seconds: f32) -> bool {
    if dt_seconds.is_finite() && dt_seconds > 0.0 {
        core.tick_accum += dt_seconds;
    }

    let interval = core.config.tick_interval();
    if core.tick_accum < interval {
        return false;
    }

    let ticked = tick(core);
    // One tick per frame; drop backlog beyond the next interval.
    core.tick_accum = (core.tick_accum - interval).min(interval);
    ticked
}

/// One tick: `phases_per_tick` dispatches in program order.
pub(super) fn tick(core: &mut SandCore) -> bool {
    if core.backend.is_inert() {
        return false;
    }

    let timer = PerfTimer::start_if(core.perf_enabled);
    let mut blocks = 0u32;
    for _ in 0..core.config.phases_per_tick {
        match run_phase(core) {
            Some(n) => blocks = blocks.saturating_add(n),
            None => break,
        }
    }
    core.ticks += 1;

    if let Some(t) = timer {
        core.perf_stats.tick_ms += t.elapsed_ms();
        core.perf_stats.phases_run += core.config.phases_per_tick;
        core.perf_stats.blocks_processed = core.perf_stats.blocks_processed.saturating_add(blocks);
    }
    true
}

/// Dispatch the current phase from front into back, then advance and swap.
pub(super) fn run_phase(core: &mut SandCore) -> Option<u32> {
    if core.backend.is_inert() {
        return None;
    }

    let layout = core.scheduler.layout(core.store.width(), core.store.height());
    let frame = core.scheduler.frame();
    let params = core.params;
    let backend = core.backend;

    let (front, back) = core.store.split();
    let blocks = dispatch_phase(front, back, &layout, frame, &params, backend);

    core.scheduler.advance();
    core.store.swap();
    Some(blocks)
}
