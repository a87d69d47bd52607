//! Headless version of the interactive demo: places start, end and random obstacles, then runs
//! the chosen search and prints the grid as text.
//!
//! Usage:
//!   cargo run --example headless                              # A* on a 20x20 grid
//!   cargo run --example headless -- -a dijkstra --density 0.3
//!   cargo run --example headless -- --compare --frames 5      # both solvers, every 5th frame
//!   RUST_LOG=debug cargo run --example headless

use clap::{Parser, ValueEnum};
use grid_search_viz::{Algorithm, Grid, Session, SessionConfig};
use grid_util::point::Point;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgorithmArg {
    Astar,
    Dijkstra,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Algorithm {
        match arg {
            AlgorithmArg::Astar => Algorithm::AStar,
            AlgorithmArg::Dijkstra => Algorithm::Dijkstra,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "headless")]
#[command(about = "Run grid A* or Dijkstra without a window")]
struct Args {
    /// Rows (and columns) of the grid
    #[arg(short = 'n', long, default_value = "20")]
    rows: usize,

    /// Window width the cell size is derived from
    #[arg(short = 'w', long, default_value = "800")]
    width: u32,

    /// Search algorithm
    #[arg(short = 'a', long, value_enum, default_value = "astar")]
    algorithm: AlgorithmArg,

    /// Run both algorithms on the same grid
    #[arg(long)]
    compare: bool,

    /// Probability that a cell becomes an obstacle
    #[arg(short = 'd', long, default_value = "0.25")]
    density: f64,

    /// Seed for obstacle placement
    #[arg(short = 's', long, default_value = "0")]
    seed: u64,

    /// Print every nth intermediate frame (0 prints none)
    #[arg(short = 'f', long, default_value = "0")]
    frames: usize,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = SessionConfig {
        rows: args.rows,
        width: args.width,
    };
    let mut session = match Session::new(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if !(0.0..=1.0).contains(&args.density) {
        eprintln!("Error: density must lie in [0, 1], got {}", args.density);
        return ExitCode::FAILURE;
    }

    // Corners for start and end, as a user would click them; then scatter obstacles.
    let last = args.rows as i32 - 1;
    let mut edits = vec![Point::new(0, 0), Point::new(last, last)];
    let mut rng = StdRng::seed_from_u64(args.seed);
    for x in 0..args.rows as i32 {
        for y in 0..args.rows as i32 {
            if rng.gen_bool(args.density) {
                edits.push(Point::new(x, y));
            }
        }
    }
    for p in edits {
        if let Err(e) = session.primary_edit(p) {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let algorithms = if args.compare {
        vec![Algorithm::AStar, Algorithm::Dijkstra]
    } else {
        vec![args.algorithm.into()]
    };
    for algorithm in algorithms {
        session.set_algorithm(algorithm);
        let mut frame = 0;
        let every = args.frames;
        let result = session.run(|grid: &Grid| {
            frame += 1;
            if every > 0 && frame % every == 0 {
                println!("{algorithm} frame {frame}:\n{grid}");
            }
        });
        match result {
            Ok(outcome) => {
                println!("{}", session.grid());
                match outcome.cost() {
                    Some(cost) => println!(
                        "{algorithm}: path of cost {cost}, {} cells expanded, {frame} frames",
                        outcome.dequeued.len()
                    ),
                    None => println!(
                        "{algorithm}: no path, {} cells expanded, {frame} frames",
                        outcome.dequeued.len()
                    ),
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
