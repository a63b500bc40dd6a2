use super::*;
use crate::domain::cell::{CELL_EMPTY, CELL_OCCUPIED};

const E: CellId = CELL_EMPTY;
const O: CellId = CELL_OCCUPIED;

fn core_with(width: u32, height: u32, v: f32) -> SandCore {
    let mut core = SandCore::new(width, height);
    core.set_topple_probability(v);
    core
}

fn run_ticks(core: &mut SandCore, n: usize) {
    for _ in 0..n {
        assert!(core.step());
    }
}

#[test]
fn single_grain_settles_on_floor_without_drift() {
    let mut core = core_with(4, 4, 0.5);
    core.set_cell(0, 0, O);

    run_ticks(&mut core, 8);

    assert_eq!(core.occupied_count(), 1);
    assert_eq!(core.get_cell(0, 3), O);
    for (i, &cell) in core.front_cells().iter().enumerate() {
        if i != 12 {
            assert_eq!(cell, E, "stray grain at index {i}");
        }
    }
}

#[test]
fn full_column_topples_in_one_phase_at_certain_probability() {
    let mut core = core_with(2, 2, 1.0);
    core.set_cell(0, 0, O);
    core.set_cell(0, 1, O);

    assert_eq!(core.frame(), 0);
    assert!(core.step_phase());

    assert_eq!(core.front_cells(), &[E, O, E, O]);
    assert_eq!(core.frame(), 1);
}

#[test]
fn column_topples_within_one_tick_when_v_is_one() {
    let mut core = core_with(2, 2, 1.0);
    core.set_cell(0, 0, O);
    core.set_cell(0, 1, O);

    run_ticks(&mut core, 1);

    assert_eq!(core.front_cells(), &[E, O, E, O]);
}

#[test]
fn column_never_topples_at_zero_probability() {
    let mut core = core_with(2, 2, 0.0);
    core.set_cell(0, 0, O);
    core.set_cell(0, 1, O);

    for _ in 0..1000 {
        core.step();
        assert_eq!(core.front_cells(), &[O, E, O, E]);
    }
}

#[test]
fn ticks_conserve_mass() {
    let mut core = core_with(32, 24, 0.7);
    core.seed_noise(0.4, 11);
    let start = core.occupied_count();
    assert!(start > 0);

    let mut prev = start;
    for _ in 0..60 {
        core.step();
        let now = core.occupied_count();
        assert!(now <= prev, "mass grew: {prev} -> {now}");
        prev = now;
    }
    assert_eq!(prev, start);
}

#[test]
fn identical_inputs_give_identical_grids() {
    let build = || {
        let mut core = core_with(40, 30, 0.5);
        core.seed_noise(0.3, 99);
        core.set_frame(7);
        core
    };
    let mut a = build();
    let mut b = build();

    for i in 0..25 {
        a.step();
        b.step();
        if i == 10 {
            a.paint_at(100.0, 40.0);
            b.paint_at(100.0, 40.0);
        }
    }

    assert_eq!(a.frame(), b.frame());
    assert_eq!(a.front_cells(), b.front_cells());
}

#[test]
fn parallel_and_serial_backends_agree() {
    let mut par = core_with(33, 21, 0.5);
    let mut ser = core_with(33, 21, 0.5);
    par.set_backend(ComputeBackend::Parallel);
    ser.set_backend(ComputeBackend::Serial);
    par.seed_noise(0.45, 3);
    ser.seed_noise(0.45, 3);

    run_ticks(&mut par, 30);
    run_ticks(&mut ser, 30);

    assert_eq!(par.front_cells(), ser.front_cells());
}

#[test]
fn settled_pile_is_stable() {
    let mut core = core_with(8, 4, 1.0);
    for x in 0..8 {
        core.set_cell(x, 3, O);
        core.set_cell(x, 2, O);
    }
    let before = core.front_cells().to_vec();

    run_ticks(&mut core, 20);

    assert_eq!(core.front_cells(), before.as_slice());
}

#[test]
fn lone_floor_grain_stays_put_at_certain_probability() {
    for x in 0..7 {
        let mut core = core_with(7, 5, 1.0);
        core.set_cell(x, 4, O);

        run_ticks(&mut core, 125);

        assert_eq!(core.occupied_count(), 1, "x = {x}");
        assert_eq!(core.get_cell(x, 4), O, "grain at x = {x} moved");
    }
}

#[test]
fn phase_cycles_through_four_offsets() {
    let mut core = SandCore::new(6, 6);
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(core.scheduler.phase().offset());
        core.step_phase();
    }
    assert_eq!(seen, vec![(0, 0), (1, 1), (0, 1), (1, 0)]);
    assert_eq!(core.frame(), 4);
}

#[test]
fn paint_while_paused_follows_config() {
    let mut core = SandCore::new(20, 20);
    assert!(!core.config().play);

    // Centre of a 100x100px canvas.
    core.pointer_down(0.0, 0.0);
    assert!(!core.advance(0.016));
    assert!(core.occupied_count() > 0);
    assert_eq!(core.ticks(), 0);

    core.clear();
    core.set_paint_while_paused(false);
    core.advance(0.016);
    assert_eq!(core.occupied_count(), 0);

    core.set_play(true);
    core.advance(0.016);
    assert!(core.occupied_count() > 0);
}

#[test]
fn pointer_release_stops_painting() {
    let mut core = SandCore::new(20, 20);
    core.pointer_down(0.5, 0.5);
    core.pointer_up();
    core.advance(0.016);
    assert_eq!(core.occupied_count(), 0);
}

#[test]
fn pointer_ndc_maps_to_canvas_pixels() {
    let mut core = SandCore::new(20, 10);
    core.pointer_down(-1.0, 1.0);
    assert_eq!((core.pointer().x_px, core.pointer().y_px), (0.0, 0.0));
    core.pointer_move(1.0, -1.0);
    assert_eq!((core.pointer().x_px, core.pointer().y_px), (100.0, 50.0));
}

#[test]
fn advance_runs_at_most_one_tick_per_frame() {
    let mut core = SandCore::new(8, 8);
    core.set_tick_rate(10.0);
    core.set_play(true);

    assert!(!core.advance(0.06));
    assert!(core.advance(0.06));
    assert_eq!(core.ticks(), 1);

    // A long stall still yields a single tick, with one interval of backlog kept.
    assert!(core.advance(5.0));
    assert_eq!(core.ticks(), 2);
    assert!(core.advance(0.0));
    assert!(!core.advance(0.0));
    assert_eq!(core.ticks(), 3);
    assert_eq!(core.frame(), 12);
}

#[test]
fn paused_world_does_not_tick() {
    let mut core = SandCore::new(8, 8);
    core.set_cell(3, 0, O);
    assert!(!core.advance(1.0));
    assert_eq!(core.ticks(), 0);
    assert_eq!(core.frame(), 0);
    assert_eq!(core.get_cell(3, 0), O);
}

#[test]
fn bad_frame_deltas_are_ignored() {
    let mut core = SandCore::new(8, 8);
    core.set_play(true);
    assert!(!core.advance(f32::NAN));
    assert!(!core.advance(-3.0));
    assert!(!core.advance(f32::INFINITY));
    assert_eq!(core.ticks(), 0);
}

#[test]
fn resize_reallocates_and_resets_phase() {
    let mut core = SandCore::for_canvas(100.0, 50.0, 1.0, SimConfig::default()).unwrap();
    assert_eq!((core.width(), core.height()), (20, 10));

    core.seed_noise(0.5, 1);
    run_ticks(&mut core, 3);
    assert_eq!(core.frame(), 12);

    core.resize(200.0, 100.0, 2.0);
    assert_eq!((core.width(), core.height()), (80, 40));
    assert_eq!(core.frame(), 0);
    assert_eq!(core.ticks(), 0);
    assert_eq!(core.occupied_count(), 0);
    assert_eq!(core.front_len(), 80 * 40);
}

#[test]
fn cell_size_change_reallocates() {
    let mut core = SandCore::for_canvas(100.0, 50.0, 1.0, SimConfig::default()).unwrap();
    core.step();

    core.set_cell_size_px(10);
    assert_eq!((core.width(), core.height()), (10, 5));
    assert_eq!(core.frame(), 0);

    // Same size again keeps the grid.
    core.set_cell(1, 1, O);
    core.set_cell_size_px(10);
    assert_eq!(core.get_cell(1, 1), O);
}

#[test]
fn tiny_canvas_gets_one_cell() {
    let core = SandCore::for_canvas(2.0, 2.0, 1.0, SimConfig::default()).unwrap();
    assert_eq!((core.width(), core.height()), (1, 1));
}

#[test]
fn masked_coordinates_read_occupied_and_ignore_writes() {
    let mut core = SandCore::new(4, 4);
    assert_eq!(core.get_cell(-1, 0), O);
    assert_eq!(core.get_cell(4, 0), O);
    assert_eq!(core.get_cell(0, 4), O);
    assert_eq!(core.get_cell(0, -1), O);
    assert!(!core.set_cell(-1, 2, O));
    assert!(core.set_cell(1, 2, O));
    assert_eq!(core.occupied_count(), 1);
}

#[test]
fn inert_backend_freezes_everything() {
    let mut core = SandCore::new(10, 10);
    core.set_cell(5, 0, O);
    core.set_play(true);
    core.set_compute_available(false);
    assert!(core.backend().is_inert());

    assert!(!core.step());
    assert!(!core.advance(1.0));
    assert_eq!(core.paint_at(25.0, 25.0), 0);
    assert_eq!(core.get_cell(5, 0), O);
    assert_eq!(core.frame(), 0);

    core.set_compute_available(true);
    assert_eq!(core.backend(), ComputeBackend::detect());
    assert!(core.step());
}

#[test]
fn perf_stats_capture_last_frame() {
    let mut core = SandCore::new(20, 20);
    core.enable_perf_metrics(true);
    core.set_play(true);
    core.pointer_down(0.0, 0.0);

    assert!(core.advance(1.0));
    let stats = core.get_perf_stats();
    assert_eq!(stats.phases_run(), 4);
    assert!(stats.blocks_processed() > 0);
    assert!(stats.cells_painted() > 0);
    assert_eq!(stats.grid_size(), 400);
    assert_eq!(stats.frame(), 4);
    assert!(stats.tick_ms() >= 0.0);

    core.enable_perf_metrics(false);
    assert_eq!(core.get_perf_stats().phases_run(), 0);
}

#[test]
fn load_config_applies_and_rejects() {
    let mut core = SandCore::new(10, 10);
    core.load_config_json(r#"{"toppleProbability": 1.0, "tickRate": 30}"#).unwrap();
    assert_eq!(core.kernel_params().topple_p, 1.0);
    assert_eq!(core.config().tick_rate, 30.0);

    assert!(matches!(
        core.load_config_json(r#"{"phasesPerTick": 9}"#),
        Err(EngineError::InvalidConfig { field: "phasesPerTick", .. })
    ));
    assert!(matches!(core.load_config_json("{oops"), Err(EngineError::ConfigParse(_))));
    // Rejected loads leave the previous config in place.
    assert_eq!(core.config().tick_rate, 30.0);
}

#[test]
fn fewer_phases_per_tick_advances_fewer_frames() {
    let mut core = SandCore::new(6, 6);
    core.set_phases_per_tick(2);
    core.step();
    assert_eq!(core.frame(), 2);
}

#[test]
fn clear_empties_and_resets_cycle() {
    let mut core = SandCore::new(12, 12);
    core.seed_noise(1.0, 5);
    assert_eq!(core.occupied_count(), 144);
    core.step();

    core.clear();
    assert_eq!(core.occupied_count(), 0);
    assert_eq!(core.frame(), 0);
    assert_eq!(core.ticks(), 0);
}
