//! Headless pathfinding visualizer.
//!
//! Run: cargo run --bin pathviz -- --maze recursive --algorithm astar,bfs

use std::error::Error;
use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use pathviz_anim::{Presenter, Speed, Visualizer, VisualizerConfig, run_until_idle};
use pathviz_demos::{TermPresenter, render_board};
use pathviz_maze::MazeKind;
use pathviz_paths::Algorithm;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Algorithms to run, comma separated (dijkstra, astar, bfs); all by default
    #[arg(short, long, value_delimiter = ',')]
    algorithm: Vec<Algorithm>,

    /// Generate a maze first (random, recursive)
    #[arg(short, long)]
    maze: Option<MazeKind>,

    /// Replay speed (slow, medium, fast); overrides the config file
    #[arg(short, long)]
    speed: Option<Speed>,

    /// Random seed for maze generation
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with grid size, endpoints and speed
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip the timed replay and dispatch events immediately
    #[arg(long)]
    instant: bool,
}

fn load_config(args: &Args) -> Result<VisualizerConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => VisualizerConfig::default(),
    };
    if let Some(speed) = args.speed {
        config.speed = speed;
    }
    Ok(config)
}

fn play<P: Presenter>(vis: &mut Visualizer, presenter: &mut P, instant: bool) -> Result<(), Box<dyn Error>> {
    if instant {
        vis.finish(presenter)?;
    } else {
        run_until_idle(vis, presenter)?;
    }
    Ok(())
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = load_config(&args)?;
    log::info!(
        "{}x{} grid, start {}, end {}, speed {}",
        config.rows,
        config.cols,
        config.start,
        config.end,
        config.speed
    );
    let mut vis = match args.seed {
        Some(seed) => Visualizer::seeded(&config, seed)?,
        None => Visualizer::new(&config)?,
    };
    let mut term = TermPresenter::new(io::stdout().lock());

    if let Some(kind) = args.maze {
        vis.start_maze(kind);
        play(&mut vis, &mut term, args.instant)?;
    }

    let algorithms = if args.algorithm.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        args.algorithm.clone()
    };
    for algo in algorithms {
        vis.start_search(algo)?;
        play(&mut vis, &mut term, args.instant)?;
        term.show(vis.grid());
    }

    term.show(render_board(vis.results()));
    term.into_inner()?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
