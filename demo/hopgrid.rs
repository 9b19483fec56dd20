//! Shortest path across a terrain grid.
//!
//! Run: cargo run --bin hopgrid -- [GRID_FILE] [--start R,C] [--goal R,C]
//! Set RUST_LOG=debug to see search statistics.

use clap::Parser;
use hopgrid_demo::{Args, run};

fn main() {
    env_logger::init();
    let args = Args::parse();

    let stdout = std::io::stdout();
    if let Err(e) = run(&args, &mut stdout.lock()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
