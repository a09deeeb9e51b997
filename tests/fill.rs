use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use polypack::{
    shape_named, shapes_for_class, ColorPolicy, FillConfig, Placer, RunStatus, SelectionMode,
    ShapeClass, PALETTE,
};

fn config(cols: usize, rows: usize, density: f64) -> FillConfig {
    FillConfig {
        cols,
        rows,
        density,
        selection: SelectionMode::Random,
        colors: ColorPolicy::Random,
        max_attempts: 8000,
        inner_attempts: 200,
    }
}

#[test]
fn triomino_fill_reaches_target_with_bounded_overshoot() {
    // 10x10 at 20% coverage with only the straight triomino. Coverage moves
    // in steps of three, so the run ends within two squares of the target.
    let mut rng = StdRng::seed_from_u64(42);
    let shapes = vec![shape_named("tri-I").unwrap()];
    let mut placer = Placer::new(&config(10, 10, 0.2), shapes, PALETTE, &mut rng);
    assert_eq!(placer.run(&mut rng), RunStatus::TargetReached);
    assert_eq!(placer.target(), 20);
    assert!((20..=22).contains(&placer.occupied_cells()));
    assert_eq!(placer.occupied_cells(), placer.placed_count() * 3);
    assert_eq!(placer.occupied_cells(), placer.board().occupied());
}

#[test]
fn hexomino_run_on_tiny_board_terminates() {
    let mut rng = StdRng::seed_from_u64(7);
    let shapes = vec![shape_named("hex-02").unwrap()];
    let mut placer = Placer::new(&config(5, 5, 0.3), shapes, PALETTE, &mut rng);
    let status = placer.run(&mut rng);
    assert!(status.is_terminal());
    match status {
        RunStatus::TargetReached => assert!(placer.occupied_cells() >= 8),
        _ => assert_eq!(placer.attempts(), 8000),
    }
}

#[test]
fn empty_shape_set_is_a_defined_outcome() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut placer = Placer::new(&config(10, 10, 0.25), Vec::new(), PALETTE, &mut rng);
    assert_eq!(placer.run(&mut rng), RunStatus::AttemptsExhausted);
    assert_eq!(placer.attempts(), 0);
    assert!(placer.placements().is_empty());
}

#[test]
fn same_seed_reproduces_the_layout() {
    let cfg = FillConfig {
        selection: SelectionMode::Cycle,
        colors: ColorPolicy::Unique,
        ..config(14, 14, 0.3)
    };

    let mut rng_a = StdRng::seed_from_u64(1234);
    let mut a = Placer::new(&cfg, shapes_for_class(ShapeClass::Mixed), PALETTE, &mut rng_a);
    let status_a = a.run(&mut rng_a);

    let mut rng_b = StdRng::seed_from_u64(1234);
    let mut b = Placer::new(&cfg, shapes_for_class(ShapeClass::Mixed), PALETTE, &mut rng_b);
    let status_b = b.run(&mut rng_b);

    assert_eq!(status_a, status_b);
    assert_eq!(a.attempts(), b.attempts());
    assert_eq!(a.placements(), b.placements());
}

#[test]
fn stepping_agrees_with_run() {
    let cfg = config(12, 12, 0.25);
    let shapes = shapes_for_class(ShapeClass::Tet);

    let mut rng_a = StdRng::seed_from_u64(99);
    let mut stepped = Placer::new(&cfg, shapes.clone(), PALETTE, &mut rng_a);
    while stepped.step(&mut rng_a) {}

    let mut rng_b = StdRng::seed_from_u64(99);
    let mut ran = Placer::new(&cfg, shapes, PALETTE, &mut rng_b);
    ran.run(&mut rng_b);

    assert_eq!(stepped.status(), ran.status());
    assert_eq!(stepped.attempts(), ran.attempts());
    assert_eq!(stepped.occupied_cells(), ran.occupied_cells());
    assert_eq!(stepped.placements(), ran.placements());
}

#[test]
fn unique_colors_are_stable_within_a_run() {
    let cfg = FillConfig {
        colors: ColorPolicy::Unique,
        ..config(16, 16, 0.3)
    };
    let mut rng = StdRng::seed_from_u64(55);
    let mut placer = Placer::new(&cfg, shapes_for_class(ShapeClass::Pen), PALETTE, &mut rng);
    placer.run(&mut rng);
    assert!(!placer.placements().is_empty());

    let mut by_name = HashMap::new();
    for placement in placer.placements() {
        let color = by_name.entry(placement.shape.name).or_insert(placement.shape.color);
        assert_eq!(*color, placement.shape.color, "{}", placement.shape.name);
    }
}

#[test]
fn same_policy_gives_one_color_per_run() {
    let cfg = FillConfig {
        colors: ColorPolicy::Same,
        ..config(12, 12, 0.25)
    };
    let mut rng = StdRng::seed_from_u64(8);
    let mut placer = Placer::new(&cfg, shapes_for_class(ShapeClass::Tri), PALETTE, &mut rng);
    placer.run(&mut rng);
    assert!(!placer.placements().is_empty());
    let first = placer.placements()[0].shape.color;
    assert!(PALETTE.contains(&first));
    for placement in placer.placements() {
        assert_eq!(placement.shape.color, first);
    }
}

#[test]
fn cycle_selection_reaches_target_too() {
    let cfg = FillConfig {
        selection: SelectionMode::Cycle,
        ..config(12, 12, 0.25)
    };
    let mut rng = StdRng::seed_from_u64(21);
    let mut placer = Placer::new(&cfg, shapes_for_class(ShapeClass::Pen), PALETTE, &mut rng);
    assert_eq!(placer.run(&mut rng), RunStatus::TargetReached);
    assert!(placer.occupied_cells() >= placer.target());
}
