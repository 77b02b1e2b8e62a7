//! Projection CLI commands

use clap::Subcommand;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::{category_names, resolve_scenario};
use crate::config::settings::Settings;
use crate::error::{HorizonError, HorizonResult};
use crate::export::{export_projection, ExportFormat};
use crate::projection::ComparisonEngine;
use crate::reports::{format_goal_analyses, BaselineReport, ComparisonReport, Granularity, ProjectionReport};
use crate::services::ProjectionService;
use crate::storage::Storage;

/// Projection subcommands
#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Show the monthly baseline derived from recent history
    Baseline,
    /// Project a scenario over its horizon
    Show {
        /// Scenario name or ID
        scenario: String,
        /// One row per month instead of per year
        #[arg(short, long)]
        monthly: bool,
        /// Export format (json, yaml, csv) instead of the terminal report
        #[arg(short, long)]
        format: Option<String>,
        /// Write the export to a file (format guessed from the extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check a scenario's goals against its projection
    Goals {
        /// Scenario name or ID
        scenario: String,
    },
    /// Compare 2 or 3 scenarios side by side
    Compare {
        /// Scenario names or IDs
        #[arg(required = true, num_args = 1..)]
        scenarios: Vec<String>,
    },
}

/// Handle a projection command
pub fn handle_project_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ProjectCommands,
) -> HorizonResult<()> {
    let service = ProjectionService::new(storage, settings);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ProjectCommands::Baseline => {
            let baseline = service.calculate_baseline()?;
            let report = BaselineReport::generate(&baseline, &category_names(storage)?);
            print!("{}", report.format_terminal(currency));
        }

        ProjectCommands::Show {
            scenario,
            monthly,
            format,
            output,
        } => {
            let scenario = resolve_scenario(storage, &scenario)?;
            let result = service.calculate_projection(scenario.id)?;

            let format = match (&format, &output) {
                (Some(f), _) => Some(ExportFormat::parse(f).ok_or_else(|| {
                    HorizonError::Validation(format!("Unknown format: '{}'. Use json, yaml or csv.", f))
                })?),
                (None, Some(path)) => Some(ExportFormat::from_path(path).unwrap_or(ExportFormat::Json)),
                (None, None) => None,
            };

            match (format, output) {
                (Some(format), Some(path)) => {
                    let mut writer = BufWriter::new(File::create(&path)?);
                    export_projection(&result, format, &mut writer)?;
                    writer.flush()?;
                    println!("Exported {} as {} to {}", result.scenario.name, format, path.display());
                }
                (Some(format), None) => {
                    let stdout = io::stdout();
                    let mut handle = stdout.lock();
                    export_projection(&result, format, &mut handle)?;
                    handle.flush()?;
                }
                (None, _) => {
                    let granularity = if monthly {
                        Granularity::Monthly
                    } else {
                        Granularity::Yearly
                    };
                    print!(
                        "{}",
                        ProjectionReport::generate(&result, granularity).format_terminal(currency)
                    );
                }
            }
        }

        ProjectCommands::Goals { scenario } => {
            let scenario = resolve_scenario(storage, &scenario)?;
            let result = service.calculate_projection(scenario.id)?;
            if result.goal_analyses.is_empty() {
                println!("{} has no goals.", scenario.name);
                println!("Add one with 'horizon goal add'.");
            } else {
                println!("Goals of {}:", scenario.name);
                print!("{}", format_goal_analyses(&result.goal_analyses, currency));
            }
        }

        ProjectCommands::Compare { scenarios } => {
            ComparisonEngine::validate_count(scenarios.len())?;
            let ids = scenarios
                .iter()
                .map(|s| resolve_scenario(storage, s).map(|scenario| scenario.id))
                .collect::<HorizonResult<Vec<_>>>()?;
            let result = service.compare_scenarios(&ids)?;
            print!("{}", ComparisonReport::generate(&result).format_terminal(currency));
        }
    }

    Ok(())
}
