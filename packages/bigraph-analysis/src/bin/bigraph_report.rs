//! Solver run comparison CLI
//!
//! # Usage
//!
//! ```bash
//! bigraph-report --instances instances.txt --runtimes runtimes.data \
//!     --first-results results/kup --second-results results/kdown
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use bigraph_analysis::{
    compare_runs, parse_instance_list, render_table, CompareOptions, Result, RuntimeColumns,
    RuntimeTable,
};
use bigraph_convert::telemetry::{filter_directive, init_tracing};

#[derive(Parser)]
#[command(name = "bigraph-report")]
#[command(about = "Compare two solver runs over a list of converted graph pairs", long_about = None)]
struct Cli {
    /// Instance list: `name pattern-file target-file` per line
    #[arg(long)]
    instances: PathBuf,

    /// Run-time table (header line, then one row per instance)
    #[arg(long)]
    runtimes: PathBuf,

    /// Directory of `<instance>.out` files from the first run
    #[arg(long)]
    first_results: PathBuf,

    /// Directory of `<instance>.out` files from the second run
    #[arg(long)]
    second_results: PathBuf,

    /// Run-time column of the first run
    #[arg(long, default_value = "7")]
    first_column: usize,

    /// Run-time column of the second run
    #[arg(long, default_value = "8")]
    second_column: usize,

    /// Skip instances whose run time reaches this value
    #[arg(long, default_value = "1000000")]
    cutoff: u64,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: &Cli) -> Result<String> {
    let base = cli
        .instances
        .parent()
        .map(PathBuf::from)
        .unwrap_or_default();
    let instances = parse_instance_list(&std::fs::read_to_string(&cli.instances)?, &base)?;

    let columns = RuntimeColumns {
        first: cli.first_column,
        second: cli.second_column,
    };
    let runtimes = RuntimeTable::parse(&std::fs::read_to_string(&cli.runtimes)?, columns)?;

    let options = CompareOptions {
        runtime_cutoff: cli.cutoff,
        ..CompareOptions::new(&cli.first_results, &cli.second_results)
    };

    let rows = compare_runs(&instances, &runtimes, &options)?;
    Ok(render_table(&rows))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&filter_directive("warn", cli.verbose));

    match run(&cli) {
        Ok(table) => {
            print!("{}", table);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
