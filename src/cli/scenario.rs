//! Scenario CLI commands

use clap::Subcommand;

use super::{category_names, resolve_scenario};
use crate::config::settings::Settings;
use crate::display::plan::{format_scenario_details, format_scenario_list};
use crate::error::HorizonResult;
use crate::services::planning::{CreateScenarioInput, UpdateScenarioInput};
use crate::services::PlanningService;
use crate::storage::Storage;

/// Scenario subcommands
#[derive(Subcommand)]
pub enum ScenarioCommands {
    /// List scenarios, newest first
    List,
    /// Show a scenario with its behaviors and goals
    Show {
        /// Scenario name or ID
        scenario: String,
    },
    /// Create a scenario starting today
    Create {
        /// Scenario name
        name: String,
        /// Short description
        #[arg(short, long)]
        description: Option<String>,
        /// Horizon in years (1-10, default from settings)
        #[arg(short = 'y', long)]
        years: Option<u8>,
        /// Copy behaviors and goals from this scenario
        #[arg(long)]
        clone_from: Option<String>,
    },
    /// Copy a scenario with its behaviors and goals
    Duplicate {
        /// Scenario name or ID
        scenario: String,
        /// Name of the copy (default "<name> (Copy)")
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Edit a scenario
    Edit {
        /// Scenario name or ID
        scenario: String,
        #[arg(short, long)]
        name: Option<String>,
        /// New description (empty to clear)
        #[arg(short, long)]
        description: Option<String>,
        /// New horizon in years
        #[arg(short = 'y', long)]
        years: Option<u8>,
    },
    /// Delete a scenario with its behaviors and goals
    Delete {
        /// Scenario name or ID
        scenario: String,
    },
}

/// Handle a scenario command
pub fn handle_scenario_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ScenarioCommands,
) -> HorizonResult<()> {
    let service = PlanningService::new(storage);

    match cmd {
        ScenarioCommands::List => {
            print!("{}", format_scenario_list(&service.list_scenarios()?));
        }

        ScenarioCommands::Show { scenario } => {
            let scenario = resolve_scenario(storage, &scenario)?;
            let configurations = service.list_configurations(scenario.id)?;
            let goals = service.list_goals(scenario.id)?;
            print!(
                "{}",
                format_scenario_details(&scenario, &configurations, &goals, &category_names(storage)?)
            );
        }

        ScenarioCommands::Create {
            name,
            description,
            years,
            clone_from,
        } => {
            let clone_from = match clone_from {
                Some(source) => Some(resolve_scenario(storage, &source)?.id),
                None => None,
            };
            let scenario = service.create_scenario(CreateScenarioInput {
                name,
                description,
                horizon_years: years.unwrap_or(settings.default_horizon_years),
                clone_from,
            })?;

            println!("Created scenario: {}", scenario.name);
            println!(
                "  Horizon: {} years ({} to {})",
                scenario.horizon_years,
                scenario.start_date,
                scenario.end_date()
            );
            println!("  ID: {}", scenario.id);
        }

        ScenarioCommands::Duplicate { scenario, name } => {
            let source = resolve_scenario(storage, &scenario)?;
            let copy = service.duplicate_scenario(source.id, name.as_deref())?;
            println!("Created scenario: {} (copy of {})", copy.name, source.name);
            println!("  ID: {}", copy.id);
        }

        ScenarioCommands::Edit {
            scenario,
            name,
            description,
            years,
        } => {
            let found = resolve_scenario(storage, &scenario)?;
            if name.is_none() && description.is_none() && years.is_none() {
                println!("No changes specified. Use --name, --description or --years.");
                return Ok(());
            }

            let updated = service.update_scenario(
                found.id,
                UpdateScenarioInput {
                    name,
                    description,
                    horizon_years: years,
                },
            )?;
            println!("Updated scenario: {}", updated.name);
        }

        ScenarioCommands::Delete { scenario } => {
            let found = resolve_scenario(storage, &scenario)?;
            let deleted = service.delete_scenario(found.id)?;
            println!("Deleted scenario: {}", deleted.name);
        }
    }

    Ok(())
}
