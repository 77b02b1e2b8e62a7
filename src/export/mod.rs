//! Export module for Horizon
//!
//! Writes a projected scenario to a file or stream:
//! - JSON: machine-readable, with schema versioning
//! - YAML: human-readable, same structure as JSON
//! - CSV: one row per projected month (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::io::Write;

pub use self::csv::export_projection_csv;
pub use json::{export_projection_json, ProjectionExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_projection_yaml;

use crate::error::{HorizonError, HorizonResult};
use crate::projection::ProjectionResult;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

impl ExportFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Export a projection in the given format
pub fn export_projection<W: Write>(
    result: &ProjectionResult,
    format: ExportFormat,
    writer: &mut W,
) -> HorizonResult<()> {
    match format {
        ExportFormat::Json => export_projection_json(result, writer),
        ExportFormat::Yaml => export_projection_yaml(result, writer),
        ExportFormat::Csv => export_projection_csv(result, writer),
    }
}

pub(crate) fn export_err(e: impl fmt::Display) -> HorizonError {
    HorizonError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_format_parsing() {
        assert_eq!(ExportFormat::parse("YAML"), Some(ExportFormat::Yaml));
        assert_eq!(ExportFormat::parse("yml"), Some(ExportFormat::Yaml));
        assert_eq!(ExportFormat::parse("xml"), None);
        assert_eq!(
            ExportFormat::from_path(Path::new("out/plan.csv")),
            Some(ExportFormat::Csv)
        );
        assert_eq!(ExportFormat::from_path(Path::new("plan")), None);
    }
}
