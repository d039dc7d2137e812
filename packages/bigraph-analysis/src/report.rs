//! Run comparison report
//!
//! Joins the instance list with the run-time table, reads each instance's
//! vertex counts from its binary graphs and its solution size from both
//! runs' solver output, then derives run-time and solution-size ratios.

use std::fmt::Write as _;
use std::path::PathBuf;

use bigraph_convert::features::binary_format::read_vertex_count_file;
use tracing::{debug, info};

use crate::error::{AnalysisError, Result};
use crate::inputs::{read_solution_size_file, Instance, RuntimeTable};

/// Where to find solver output and which instances to skip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    /// Directory holding `<instance>.out` for the first run
    pub first_results: PathBuf,
    /// Directory holding `<instance>.out` for the second run
    pub second_results: PathBuf,
    /// Instances where either run time reaches this value are skipped
    pub runtime_cutoff: u64,
}

impl CompareOptions {
    pub fn new(first_results: impl Into<PathBuf>, second_results: impl Into<PathBuf>) -> Self {
        Self {
            first_results: first_results.into(),
            second_results: second_results.into(),
            runtime_cutoff: 1_000_000,
        }
    }
}

/// One line of the report
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub instance: String,
    pub n_pattern: u16,
    pub n_target: u16,
    pub runtime_first: u64,
    pub runtime_second: u64,
    pub runtime_ratio: f64,
    pub solution_size: u64,
    pub solution_over_pattern: f64,
}

/// Build report rows, in instance-list order
///
/// Both runs must agree on the solution size; a disagreement aborts the
/// whole report.
pub fn compare_runs(
    instances: &[Instance],
    runtimes: &RuntimeTable,
    options: &CompareOptions,
) -> Result<Vec<ComparisonRow>> {
    let mut rows = Vec::new();

    for instance in instances {
        let times = runtimes
            .get(&instance.name)
            .ok_or_else(|| AnalysisError::MissingRuntime(instance.name.clone()))?;
        if times.first >= options.runtime_cutoff || times.second >= options.runtime_cutoff {
            debug!(instance = %instance.name, "skipped: over run-time cutoff");
            continue;
        }

        let n_pattern = read_vertex_count_file(&instance.pattern)?;
        let n_target = read_vertex_count_file(&instance.target)?;

        let file_name = format!("{}.out", instance.name);
        let first = read_solution_size_file(&options.first_results.join(&file_name))?;
        let second = read_solution_size_file(&options.second_results.join(&file_name))?;
        if first != second {
            return Err(AnalysisError::InconsistentSolutionSize {
                instance: instance.name.clone(),
                first,
                second,
            });
        }

        rows.push(ComparisonRow {
            instance: instance.name.clone(),
            n_pattern,
            n_target,
            runtime_first: times.first,
            runtime_second: times.second,
            runtime_ratio: times.first as f64 / times.second as f64,
            solution_size: first,
            solution_over_pattern: first as f64 / f64::from(n_pattern),
        });
    }

    info!(rows = rows.len(), instances = instances.len(), "compared runs");
    Ok(rows)
}

/// Space-separated table with a header line
pub fn render_table(rows: &[ComparisonRow]) -> String {
    let mut out = String::from(
        "instance n_pattern n_target runtime_first runtime_second runtime_ratio solsize solsize_over_n_pattern\n",
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{} {} {} {} {} {} {} {}",
            row.instance,
            row.n_pattern,
            row.n_target,
            row.runtime_first,
            row.runtime_second,
            row.runtime_ratio,
            row.solution_size,
            row.solution_over_pattern
        );
    }
    out
}
