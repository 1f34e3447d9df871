use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use hexq::prelude::*;
use hexq::render::{render_board, render_queen_list};
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Place 2·SIZE−1 mutually non-attacking queens on a hexagonal board.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cells per edge of the hexagonal board
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,

    /// Mark captured cells with `*` in the board drawing
    #[arg(long)]
    show_captured: bool,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = SolverConfig::new(args.size);
    if config.is_below_recommended() {
        warn!(
            size = args.size,
            recommended = SolverConfig::RECOMMENDED_MIN_SIZE,
            "board size below the recommended minimum"
        );
    }
    let geometry = config.validate()?;
    info!(
        size = geometry.size(),
        cells = geometry.cell_count(),
        queens = geometry.lattice_width(),
        "solving"
    );

    let start = Instant::now();
    let report = Solver::new(&geometry).run();
    match &report.outcome {
        SearchOutcome::Solved(solution) => {
            println!("Solved!");
            print!("{}", render_queen_list(&geometry, solution.queens())?);
            let captured = args.show_captured.then(|| solution.captured());
            print!("{}", render_board(&geometry, solution.queens(), captured)?);
        }
        SearchOutcome::NoSolution => println!("No solution!"),
    }
    let elapsed = start.elapsed();
    info!(
        placements = report.metrics.placements,
        backtracks = report.metrics.backtracks,
        peak_depth = report.metrics.peak_depth,
        "search metrics"
    );
    println!("Execution time {}s", elapsed.as_secs_f64());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
