//! Bigraph converter CLI
//!
//! # Usage
//!
//! ```bash
//! convert-bigraph IN-FILE-1 IN-FILE-2 OUT-FILE-1 OUT-FILE-2
//! convert-bigraph a.txt b.txt a.bin b.bin --dump -v
//! convert-bigraph a.txt b.txt a.bin b.bin --config bigraph.yaml
//! ```
//!
//! Exit codes: 0 on success, 1 on a conversion failure, 2 on a usage error.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use bigraph_convert::pipeline::{convert_pair, ConversionRequest};
use bigraph_convert::telemetry::{filter_directive, init_tracing};
use bigraph_convert::ConvertConfig;

#[derive(Parser)]
#[command(name = "convert-bigraph")]
#[command(about = "Convert a pair of text bigraphs to binary graphs with a shared label numbering", long_about = None)]
struct Cli {
    /// First input graph (text notation)
    in_file_1: PathBuf,

    /// Second input graph (text notation)
    in_file_2: PathBuf,

    /// Binary output for the first graph
    out_file_1: PathBuf,

    /// Binary output for the second graph
    out_file_2: PathBuf,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print both parsed graphs to stdout
    #[arg(long)]
    dump: bool,

    /// Write outputs directly instead of via temp file + rename
    #[arg(long)]
    no_atomic: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match ConvertConfig::from_yaml(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => ConvertConfig::default(),
    };
    config.dump_graphs |= cli.dump;
    config.atomic_writes &= !cli.no_atomic;

    init_tracing(&filter_directive(&config.log_filter, cli.verbose));

    let request = ConversionRequest::new(
        cli.in_file_1,
        cli.in_file_2,
        cli.out_file_1,
        cli.out_file_2,
    );

    match convert_pair(&request, &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(kind = %e.kind(), "conversion failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
