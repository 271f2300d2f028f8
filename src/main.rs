mod app;
mod camera;
mod config;
mod event;
mod script;
mod world;

use clap::Parser;
use log::LevelFilter;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use app::App;
use config::SculptConfig;
use world::WorldController;

/// Replay a camera/voxel input script against the placement world.
#[derive(Parser, Debug)]
#[command(name = "sculpt", version, about)]
struct Args {
    /// TOML config (camera, display, reach, shapes)
    #[arg(long, default_value = "assets/sculpt.toml")]
    config: PathBuf,
    /// Input script; reads stdin when omitted
    #[arg(long)]
    script: Option<PathBuf>,
    /// Seed for shape sizes (overrides the config)
    #[arg(long)]
    seed: Option<u64>,
    /// Print every occupied cell after the run
    #[arg(long)]
    dump: bool,
    /// off, error, warn, info, debug, trace (RUST_LOG wins when set)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_config(path: &Path) -> Result<SculptConfig, String> {
    if !path.exists() {
        log::warn!("config {} not found; using defaults", path.display());
        return Ok(SculptConfig::default());
    }
    config::load_config_from_path(path).map_err(|e| format!("config {}: {}", path.display(), e))
}

fn read_script(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(p) => std::fs::read_to_string(p).map_err(|e| format!("script {}: {}", p.display(), e)),
        None => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .map_err(|e| format!("stdin: {}", e))?;
            Ok(s)
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    let cfg = load_config(&args.config)?;
    let src = read_script(args.script.as_deref())?;
    let steps = script::parse_script(&src).map_err(|e| e.to_string())?;

    // Fixed fallback seed keeps replays repeatable.
    let seed = args.seed.or(cfg.shapes.seed).unwrap_or(1);
    log::info!("{} script step(s), seed {}", steps.len(), seed);

    let mut app = App::new(WorldController::new(&cfg, seed));
    app.schedule(&steps);
    let stats = app.run_until_idle();

    let world = &mut app.world;
    let cam = *world.camera();
    let target = world.target_cell();
    println!(
        "ticks={} events={} placed={} removed={} skipped={}",
        stats.ticks, stats.events, stats.placed, stats.removed, stats.misses
    );
    println!(
        "camera pos=({:.2}, {:.2}, {:.2}) yaw={:.3} pitch={:.3} facing={} reach={}",
        cam.position.x,
        cam.position.y,
        cam.position.z,
        cam.yaw,
        cam.pitch,
        world.facing(),
        world.reach()
    );
    let view = cam.view();
    println!(
        "view target=({:.2}, {:.2}, {:.2}) up=({:.2}, {:.2}, {:.2})",
        view.target.x, view.target.y, view.target.z, view.up.x, view.up.y, view.up.z
    );
    println!("target ({}, {}, {})", target.x, target.y, target.z);
    if let Some(b) = app.cursor.map(|c| c.bounds) {
        println!(
            "cursor min=({:.2}, {:.2}, {:.2}) max=({:.2}, {:.2}, {:.2})",
            b.min.x, b.min.y, b.min.z, b.max.x, b.max.y, b.max.z
        );
    }
    println!("voxels {}", world.store().len());
    if args.dump {
        for c in world.store().sorted() {
            println!("{} {} {}", c.x, c.y, c.z);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let level = args.log_level.parse().unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
