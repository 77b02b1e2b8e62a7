//! YAML Export functionality
//!
//! Exports a projection to YAML for human reading.

use std::io::Write;

use super::export_err;
use super::json::ProjectionExport;
use crate::error::HorizonResult;
use crate::projection::ProjectionResult;

/// Export a projection as YAML with a comment header
pub fn export_projection_yaml<W: Write>(result: &ProjectionResult, writer: &mut W) -> HorizonResult<()> {
    let export = ProjectionExport::new(result);

    writeln!(writer, "# Horizon Projection Export").map_err(export_err)?;
    writeln!(writer, "# Scenario: {}", result.scenario.name).map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(export_err)?;

    Ok(())
}
