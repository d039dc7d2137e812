/*
 * Bigraph Analysis - Solver Run Comparison
 *
 * Scans solver output and run-time tables for converted graph pairs and
 * prints a per-instance comparison of two solver runs.
 *
 * Inputs:
 * - instance list   : name, pattern binary graph, target binary graph
 * - run-time table  : header line, then name + run-time columns
 * - solver output   : `<instance>.out` with a `Solution size N` line
 */

pub mod error;
pub mod inputs;
pub mod report;

pub use error::{AnalysisError, Result};
pub use inputs::{
    parse_instance_list, read_solution_size, read_solution_size_file, Instance, RuntimeColumns,
    RuntimePair, RuntimeTable,
};
pub use report::{compare_runs, render_table, CompareOptions, ComparisonRow};
