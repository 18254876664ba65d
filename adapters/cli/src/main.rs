#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a single treasure search.

mod grid_file;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use hex_treasure_core::{CellCoord, SearchConfig, SearchOutcome, StartPolicy};
use hex_treasure_search::TreasureSearch;
use hex_treasure_world::reference_grid;
use log::debug;

#[derive(Debug, Parser)]
#[command(name = "hex-treasure")]
#[command(about = "Finds the cheapest route that collects every treasure on a hex grid")]
struct Args {
    /// JSON grid file; the built-in reference grid is used when omitted
    #[arg(long)]
    grid: Option<PathBuf>,

    /// Row of the start cell
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    start_row: i32,

    /// Column of the start cell
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    start_column: i32,

    /// Fail instead of searching when the start cell cannot be entered
    #[arg(long)]
    strict_start: bool,

    /// Number of treasures that completes the search (defaults to all of them)
    #[arg(long)]
    treasures: Option<usize>,

    /// Give up after this many expansions
    #[arg(long)]
    max_expansions: Option<usize>,
}

impl Args {
    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            start_policy: if self.strict_start {
                StartPolicy::Reject
            } else {
                StartPolicy::Accept
            },
            required_treasures: self.treasures,
            expansion_limit: self.max_expansions,
        }
    }
}

/// Entry point for the hex treasure command-line interface.
fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let grid = match &args.grid {
        Some(path) => grid_file::load(path)?,
        None => {
            debug!("no grid file given; using the reference grid");
            reference_grid()
        }
    };
    let start = CellCoord::new(args.start_row, args.start_column);

    let outcome = TreasureSearch::new(args.search_config()).run(&grid, start)?;
    print_outcome(&outcome);
    Ok(())
}

fn print_outcome(outcome: &SearchOutcome) {
    if !outcome.is_goal() {
        println!("no path found after {} expansions", outcome.stats.expanded);
        return;
    }

    for step in &outcome.path {
        if let Some(direction) = step.direction {
            println!("moved {direction}");
        }
        println!(
            "{} {} energy {} steps {}",
            step.cell.row(),
            step.cell.column(),
            step.energy_cost,
            step.step_cost
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_search_config() {
        let args = Args::parse_from([
            "hex-treasure",
            "--start-row",
            "-1",
            "--strict-start",
            "--treasures",
            "4",
            "--max-expansions",
            "100",
        ]);

        assert_eq!(args.start_row, -1);
        assert_eq!(
            args.search_config(),
            SearchConfig {
                start_policy: StartPolicy::Reject,
                required_treasures: Some(4),
                expansion_limit: Some(100),
            }
        );
    }

    #[test]
    fn defaults_use_the_lenient_config() {
        let args = Args::parse_from(["hex-treasure"]);

        assert!(args.grid.is_none());
        assert_eq!(args.search_config(), SearchConfig::default());
    }
}
