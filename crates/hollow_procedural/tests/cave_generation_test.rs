//! # Cave Generation Tests
//!
//! End-to-end checks of the full pipeline: determinism, the permanent
//! border, connectivity of the finished cave and the degenerate scenarios.

use hollow_procedural::{
    generate_cave, CaveConfig, CaveGenerator, CaveSeed, Coord, Direction, EdgeSmoother,
    GenerationParams, GenerationReport, GenerationStep, Grid, NoiseKind, RoomConnector,
    RoomDetector, TileState,
};

/// Preview defaults: raw noise with one automaton step.
fn harness_params(seed: u64) -> GenerationParams {
    let mut params = GenerationParams {
        seed: CaveSeed::new(seed),
        noise: NoiseKind::Random,
        wall_chance: 0.65,
        frequency: 13.7,
        ..GenerationParams::default()
    };
    assert_eq!(params.set_steps_from_arrays(&[[3, 4, 12, 16, 2, 5, 10, 14, 2]]), 1);
    params
}

fn coherent_params(noise: NoiseKind, seed: u64) -> GenerationParams {
    GenerationParams {
        seed: CaveSeed::new(seed),
        noise,
        octaves: 4,
        frequency: 6.0,
        amplitude: 1.0,
        steps: vec![
            GenerationStep::try_from(&[5, 8, 13, 16, 4, 8, 12, 16, 2][..]).unwrap(),
        ],
        ..GenerationParams::default()
    }
}

fn generate(width: usize, height: usize, params: GenerationParams) -> (Grid, GenerationReport) {
    CaveGenerator::new(width, height, params)
        .expect("valid generator")
        .generate_with_report()
}

/// Test: Same inputs, same cave, for every noise kind.
#[test]
fn test_generation_is_deterministic() {
    let cases = [
        harness_params(424_242),
        coherent_params(NoiseKind::Perlin, 99),
        coherent_params(NoiseKind::Simplex, 99),
    ];
    for params in cases {
        let (a, report_a) = generate(48, 36, params.clone());
        let (b, report_b) = generate(48, 36, params.clone());
        assert_eq!(a, b, "{:?} cave differs between runs", params.noise);
        assert_eq!(report_a, report_b);
    }
}

/// Test: Different seeds give different caves.
#[test]
fn test_seed_changes_cave() {
    let a = generate_cave(40, 40, &harness_params(1)).unwrap();
    let b = generate_cave(40, 40, &harness_params(2)).unwrap();
    assert_ne!(a, b);
}

/// Test: Border survives every stage and no floor leaks outside.
#[test]
fn test_border_invariant() {
    for seed in 0..8 {
        let (cave, _) = generate(30, 20, harness_params(seed));
        assert!(cave.border_intact(), "seed {seed} broke the border");
        for y in -2..22 {
            for x in -2..32 {
                if !cave.contains(x, y) {
                    assert_eq!(cave.get(x, y), TileState::Wall);
                }
            }
        }
    }
}

/// Test: A fully spanning tree leaves exactly one floor region.
#[test]
fn test_connected_when_tree_spans() {
    for seed in 0..12 {
        let (cave, report) = generate(40, 30, harness_params(seed));
        let remaining = RoomDetector::detect(&cave).len();

        if report.rooms == 0 {
            assert_eq!(remaining, 0);
            continue;
        }
        assert!(remaining <= report.rooms - report.tunnels);
        if report.tunnels == report.rooms - 1 {
            assert_eq!(remaining, 1, "seed {seed}: tree spans but cave is split");
        }
    }
}

/// Test: Constructed four-room fixture ends up as one region.
#[test]
fn test_four_rooms_fixture_connects() {
    let mut grid = Grid::from_rows(&[
        "...#....",
        "...#....",
        "########",
        "##......",
        "##......",
        "########",
        "........",
    ])
    .unwrap();
    let rooms = RoomDetector::detect(&grid);
    assert_eq!(rooms.len(), 4);

    let report = RoomConnector::connect(&mut grid, &rooms);
    assert_eq!(report.tunnels, 3);
    assert_eq!(RoomDetector::detect(&grid).len(), 1);
}

/// Test: Smoothing a finished cave again changes nothing.
#[test]
fn test_smoothing_idempotent_on_generated_caves() {
    for params in [harness_params(424_242), coherent_params(NoiseKind::Simplex, 5)] {
        let (mut cave, _) = generate(40, 40, params);
        let before = cave.clone();
        assert_eq!(EdgeSmoother::run(&mut cave), 0);
        assert_eq!(cave, before);
    }
}

/// Test: Decorative tiles always sit on the floor boundary.
#[test]
fn test_decorations_touch_floor() {
    let (cave, _) = generate(40, 40, harness_params(77));
    assert_eq!(cave.count(TileState::Carved), 0);

    for (c, tile) in cave.iter() {
        if tile.is_decorative() {
            let touches = Direction::ALL
                .into_iter()
                .any(|d| cave.at(c.step(d)).is_open());
            assert!(touches, "{tile:?} at {c:?} has no open neighbour");
        }
    }
}

/// Test: Fix-up stays within its pass limit.
#[test]
fn test_fixer_bounded() {
    for seed in 0..6 {
        let (_, report) = generate(32, 32, harness_params(seed));
        assert!(report.fixer_passes >= 1 && report.fixer_passes <= 10);
    }
}

/// Test: wall chance 1.0 gives solid rock and no rooms.
#[test]
fn test_wall_chance_one() {
    let params = GenerationParams {
        wall_chance: 1.0,
        ..harness_params(3)
    };
    let (cave, report) = generate(25, 25, GenerationParams { steps: vec![], ..params });
    assert_eq!(cave.count(TileState::Wall), 625);
    assert_eq!(report.rooms, 0);
}

/// Test: wall chance -1.0 gives one open room and no tunnels.
#[test]
fn test_wall_chance_negative_one() {
    let params = GenerationParams {
        wall_chance: -1.0,
        steps: vec![],
        ..harness_params(3)
    };
    let (cave, report) = generate(25, 25, params);
    assert_eq!(cave.count(TileState::Floor), 625);
    assert_eq!(report.rooms, 1);
    assert_eq!(report.tunnels, 0);
    assert_eq!(report.candidates, 0);
}

/// Test: A single-cell cave never indexes out of bounds.
#[test]
fn test_one_by_one_cave() {
    for params in [
        harness_params(1),
        coherent_params(NoiseKind::Perlin, 1),
        coherent_params(NoiseKind::Simplex, 1),
        GenerationParams {
            amplitude: 0.0,
            ..coherent_params(NoiseKind::Simplex, 1)
        },
    ] {
        let (cave, report) = generate(1, 1, params);
        assert_eq!(cave.width(), 1);
        assert_eq!(cave.height(), 1);
        assert!(cave.border_intact());
        assert!(report.rooms <= 1);
        assert_eq!(cave.get(0, 0), TileState::Wall);
    }
}

/// Test: Thin strips generate without panicking.
#[test]
fn test_strip_caves() {
    for (w, h) in [(1, 40), (40, 1), (2, 2)] {
        let (cave, _) = generate(w, h, harness_params(11));
        assert!(cave.border_intact());
        assert_eq!(cave.get(-1, 0), TileState::Wall);
        assert_eq!(cave.at(Coord::new(w as i32, 0)), TileState::Wall);
    }
}

/// Test: A TOML config drives the same generation as code.
#[test]
fn test_config_round_trip_generation() {
    let text = r#"
        width = 32
        height = 32

        [params]
        seed = 424242
        noise = "random"
        wall_chance = 0.65
        frequency = 13.7
        steps = [[3, 4, 12, 16, 2, 5, 10, 14, 2]]
    "#;
    let from_config = CaveConfig::from_toml_str(text)
        .unwrap()
        .into_generator()
        .unwrap()
        .generate();
    let from_code = generate_cave(32, 32, &harness_params(424_242)).unwrap();
    assert_eq!(from_config, from_code);
}

/// Test: A negative seed from text or TOML names one reproducible cave.
#[test]
fn test_negative_seed_generation() {
    let seed: CaveSeed = "-424242".parse().unwrap();
    let text = r#"
        width = 32
        height = 32

        [params]
        seed = -424242
        noise = "simplex"
        octaves = 4
        frequency = 6.0
    "#;
    let config = CaveConfig::from_toml_str(text).unwrap();
    assert_eq!(config.params.seed, seed);

    let params = config.params.clone();
    let from_config = config.into_generator().unwrap().generate();
    assert_eq!(from_config, generate_cave(32, 32, &params).unwrap());
    assert_ne!(
        from_config,
        generate_cave(32, 32, &GenerationParams { seed: CaveSeed::new(424_242), ..params }).unwrap()
    );
}
