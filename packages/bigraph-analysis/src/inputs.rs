//! Readers for solver output, run-time tables and instance lists

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{AnalysisError, Result};

/// Solution size from solver output text
///
/// Takes the first line starting with `Solution size` and parses its third
/// whitespace-separated token (`Solution size 12`).
pub fn read_solution_size(text: &str) -> Result<Option<u64>> {
    let Some(line) = text.lines().find(|l| l.starts_with("Solution size")) else {
        return Ok(None);
    };
    let token = line
        .split_whitespace()
        .nth(2)
        .ok_or_else(|| AnalysisError::parse(format!("no size on line '{}'", line.trim())))?;
    token
        .parse()
        .map(Some)
        .map_err(|_| AnalysisError::parse(format!("invalid solution size '{}'", token)))
}

/// Solution size from a solver output file; a file without one is an error
pub fn read_solution_size_file(path: &Path) -> Result<u64> {
    let text = std::fs::read_to_string(path)?;
    read_solution_size(&text)?.ok_or_else(|| AnalysisError::MissingSolutionSize(path.to_path_buf()))
}

/// Which columns of the run-time table hold the two runs being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeColumns {
    pub first: usize,
    pub second: usize,
}

impl Default for RuntimeColumns {
    fn default() -> Self {
        Self { first: 7, second: 8 }
    }
}

/// Run times of the two compared runs for one instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimePair {
    pub first: u64,
    pub second: u64,
}

/// Whitespace-delimited run-time table keyed by instance name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeTable {
    rows: BTreeMap<String, RuntimePair>,
}

impl RuntimeTable {
    /// Parse a table whose first line is a header
    ///
    /// Column 0 is the instance name. A recorded time of 0 is read as 1 so
    /// ratios stay finite.
    pub fn parse(text: &str, columns: RuntimeColumns) -> Result<Self> {
        let mut rows = BTreeMap::new();
        for (line_no, line) in text.lines().enumerate().skip(1) {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let Some(name) = tokens.first() else {
                continue;
            };
            let column = |index: usize| -> Result<u64> {
                let token = tokens.get(index).ok_or_else(|| {
                    AnalysisError::parse(format!(
                        "line {}: missing run-time column {}",
                        line_no + 1,
                        index
                    ))
                })?;
                let time: u64 = token.parse().map_err(|_| {
                    AnalysisError::parse(format!(
                        "line {}: invalid run time '{}'",
                        line_no + 1,
                        token
                    ))
                })?;
                Ok(time.max(1))
            };
            let pair = RuntimePair {
                first: column(columns.first)?,
                second: column(columns.second)?,
            };
            rows.insert(name.to_string(), pair);
        }
        Ok(Self { rows })
    }

    pub fn get(&self, instance: &str) -> Option<RuntimePair> {
        self.rows.get(instance).copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One instance: a name and its pattern/target binary graphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub name: String,
    pub pattern: PathBuf,
    pub target: PathBuf,
}

/// Parse an instance list: `name pattern-file target-file` per line
///
/// Relative graph paths are resolved against `base`.
pub fn parse_instance_list(text: &str, base: &Path) -> Result<Vec<Instance>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_no, line)| {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens.as_slice() {
                [name, pattern, target, ..] => Ok(Instance {
                    name: name.to_string(),
                    pattern: base.join(pattern),
                    target: base.join(target),
                }),
                _ => Err(AnalysisError::parse(format!(
                    "line {}: expected 'name pattern target'",
                    line_no + 1
                ))),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_size() {
        let text = "Nodes: 1200\nSolution size 7\nMapping: (0 -> 3)\n";
        assert_eq!(read_solution_size(text).unwrap(), Some(7));
    }

    #[test]
    fn test_solution_size_first_match_wins() {
        let text = "Solution size 3\nSolution size 9\n";
        assert_eq!(read_solution_size(text).unwrap(), Some(3));
    }

    #[test]
    fn test_solution_size_absent() {
        assert_eq!(read_solution_size("Timeout\n").unwrap(), None);
        // must start the line
        assert_eq!(read_solution_size("  Solution size 4\n").unwrap(), None);
    }

    #[test]
    fn test_solution_size_malformed() {
        assert!(read_solution_size("Solution size\n").is_err());
        assert!(read_solution_size("Solution size abc\n").is_err());
    }

    #[test]
    fn test_runtime_table() {
        let text = "\
instance a b c d e f kup kdown
g1 0 0 0 0 0 0 120 0
g2 0 0 0 0 0 0 5 10
";
        let table = RuntimeTable::parse(text, RuntimeColumns::default()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("g1"), Some(RuntimePair { first: 120, second: 1 }));
        assert_eq!(table.get("g2"), Some(RuntimePair { first: 5, second: 10 }));
        assert_eq!(table.get("g3"), None);
    }

    #[test]
    fn test_runtime_table_custom_columns() {
        let text = "name t1 t2\nx 3 4\n\n";
        let table = RuntimeTable::parse(text, RuntimeColumns { first: 2, second: 1 }).unwrap();
        assert_eq!(table.get("x"), Some(RuntimePair { first: 4, second: 3 }));
    }

    #[test]
    fn test_runtime_table_short_row() {
        let err = RuntimeTable::parse("h\nx 1\n", RuntimeColumns::default()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_instance_list() {
        let text = "g1 p/g1.a t/g1.b\n\ng2 /abs/g2.a t/g2.b extra\n";
        let instances = parse_instance_list(text, Path::new("data")).unwrap();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].name, "g1");
        assert_eq!(instances[0].pattern, PathBuf::from("data/p/g1.a"));
        assert_eq!(instances[1].pattern, PathBuf::from("/abs/g2.a"));
    }

    #[test]
    fn test_instance_list_short_line() {
        assert!(parse_instance_list("g1 only\n", Path::new(".")).is_err());
    }
}
