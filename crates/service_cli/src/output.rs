//! Report rendering
//!
//! Every command produces a serialisable report that can also lay itself out
//! as a plain-text table.

use serde::Serialize;
use std::str::FromStr;

use crate::{CliError, Result};

/// Paths longer than this are elided in table output.
pub const TABLE_PATH_PREVIEW: usize = 40;

/// Output format for command results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            ))),
        }
    }
}

/// A command result that can be printed as a table or JSON.
pub trait Report: Serialize {
    /// Renders the report as a plain-text table.
    fn to_table(&self) -> String;
}

/// Renders a report in the requested format.
pub fn render<R: Report>(report: &R, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(report.to_table()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Joins a position sequence, eliding the middle of long sequences.
pub fn preview_path(path: &[i64]) -> String {
    if path.len() <= TABLE_PATH_PREVIEW {
        return join(path);
    }
    let half = TABLE_PATH_PREVIEW / 2;
    format!(
        "{} ... {}",
        join(&path[..half]),
        join(&path[path.len() - half..])
    )
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Dummy {
        value: u32,
    }

    impl Report for Dummy {
        fn to_table(&self) -> String {
            format!("value | {}", self.value)
        }
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "csv".parse::<OutputFormat>(),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_render() {
        let report = Dummy { value: 7 };

        assert_eq!(render(&report, OutputFormat::Table).unwrap(), "value | 7");
        let json = render(&report, OutputFormat::Json).unwrap();
        assert!(json.contains("\"value\": 7"));
    }

    #[test]
    fn test_preview_path() {
        assert_eq!(preview_path(&[0, 1, 2]), "0 1 2");

        let long: Vec<i64> = (0..100).collect();
        let preview = preview_path(&long);
        assert!(preview.starts_with("0 1 2"));
        assert!(preview.contains(" ... "));
        assert!(preview.ends_with("98 99"));
    }
}
