//! JSON Export functionality
//!
//! Exports a projection to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use super::export_err;
use crate::error::HorizonResult;
use crate::projection::ProjectionResult;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Versioned wrapper around an exported projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionExport {
    /// Schema version for compatibility checking
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Application version that created the export
    pub app_version: String,
    pub projection: ProjectionResult,
}

impl ProjectionExport {
    pub fn new(result: &ProjectionResult) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            projection: result.clone(),
        }
    }
}

/// Export a projection as pretty-printed JSON
pub fn export_projection_json<W: Write>(result: &ProjectionResult, writer: &mut W) -> HorizonResult<()> {
    let export = ProjectionExport::new(result);
    serde_json::to_writer_pretty(&mut *writer, &export).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests_support::sample_result;

    #[test]
    fn test_json_export_reads_back() {
        let result = sample_result();
        let mut output = Vec::new();
        export_projection_json(&result, &mut output).unwrap();

        let export: ProjectionExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.projection.projections.len(), 12);
        assert_eq!(export.projection.scenario.name, "Export");
    }
}
