//! # Cave Preview
//!
//! Command-line tool that generates one cave and prints it as ASCII.
//!
//! ```text
//! cave_preview [config.toml] [--seed N]
//! ```

use hollow_procedural::{CaveConfig, CaveGenerator, CaveSeed, GenerationParams, NoiseKind};

/// Config used when no file is given.
fn default_config() -> CaveConfig {
    let mut params = GenerationParams {
        seed: CaveSeed::new(424_242),
        noise: NoiseKind::Random,
        wall_chance: 0.65,
        frequency: 13.7,
        ..GenerationParams::default()
    };
    params.set_steps_from_arrays(&[[3, 4, 12, 16, 2, 5, 10, 14, 2]]);

    CaveConfig {
        width: 32,
        height: 32,
        params,
    }
}

fn main() {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║         HOLLOW CAVE PREVIEW                                      ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("Usage: cave_preview [config.toml] [--seed N]");
        println!();
        println!("Options:");
        println!("  --seed <n>   Override the seed from the config (signed or unsigned)");
        return;
    }

    let seed_override = match args.iter().position(|a| a == "--seed").map(|i| args.get(i + 1)) {
        None => None,
        Some(None) => {
            println!("Error: --seed needs a value");
            return;
        }
        Some(Some(raw)) => match raw.parse::<CaveSeed>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                println!("Error: Invalid seed '{}': {}", raw, e);
                return;
            }
        },
    };

    let mut config_path: Option<String> = None;
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        if arg == "--seed" {
            rest.next();
        } else if config_path.is_none() && !arg.starts_with("--") {
            config_path = Some(arg.clone());
        }
    }

    let mut config = match &config_path {
        Some(path) => {
            println!("Loading config: {}", path);
            match CaveConfig::from_path(path) {
                Ok(config) => config,
                Err(e) => {
                    println!("Error: Could not load config: {}", e);
                    return;
                }
            }
        }
        None => default_config(),
    };

    if let Some(seed) = seed_override {
        config.params.seed = seed;
    }
    let seed = config.params.seed;

    let generator: CaveGenerator = match config.into_generator() {
        Ok(generator) => generator,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };

    let (cave, report) = generator.generate_with_report();

    print!("{}", cave);
    println!();
    println!("┌─ GENERATION REPORT ────────────────────────────────────────────┐");
    println!("│ Size:               {}x{}", cave.width(), cave.height());
    println!("│ Seed:               {}", seed.value());
    println!("│ Automaton steps:    {}", report.generations);
    println!("│ Fix-up passes:      {} ({} cells)", report.fixer_passes, report.fixer_changes);
    println!("│ Rooms:              {}", report.rooms);
    println!("│ Wall candidates:    {}", report.candidates);
    println!("│ Tunnels:            {} ({} cells)", report.tunnels, report.carved_cells);
    println!("│ Smoothed tiles:     {}", report.smoothed_tiles);
    println!("└──────────────────────────────────────────────────────────────────┘");
}
