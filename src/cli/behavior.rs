//! Behavior configuration CLI commands

use clap::Subcommand;

use super::{category_names, parse_date, parse_number, resolve_scenario};
use crate::display::plan::{describe_behavior, format_configuration_list};
use crate::error::{HorizonError, HorizonResult};
use crate::models::{ConfigurationDraft, EventKind, ModeKind, TargetKind};
use crate::services::{CategoryService, PlanningService};
use crate::storage::Storage;

/// Behavior subcommands
#[derive(Subcommand)]
pub enum BehaviorCommands {
    /// List a scenario's behaviors in the order they apply
    List {
        /// Scenario name or ID
        scenario: String,
    },
    /// Add a behavior to a scenario
    Add {
        /// Scenario name or ID
        scenario: String,
        /// What to change (income, expense, investment, one_time_event)
        #[arg(short, long)]
        target: String,
        /// Category name or ID (omit to target uncategorized history)
        #[arg(short, long)]
        category: Option<String>,
        /// How to change it (percentage, fixed_value, zero)
        #[arg(short, long)]
        mode: Option<String>,
        /// Percentage change for percentage mode (e.g., -20)
        #[arg(long, allow_hyphen_values = true)]
        percent: Option<String>,
        /// Monthly value for fixed_value mode
        #[arg(long, allow_hyphen_values = true)]
        value: Option<String>,
        /// First date the behavior applies (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Percent of monthly savings invested (0-100)
        #[arg(long)]
        allocation: Option<String>,
        /// Monthly return in percent (e.g., 0.8)
        #[arg(long, allow_hyphen_values = true)]
        rate: Option<String>,
        /// One-time event description
        #[arg(short, long)]
        description: Option<String>,
        /// One-time event amount
        #[arg(long)]
        amount: Option<String>,
        /// One-time event date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// One-time event kind (income or expense)
        #[arg(long)]
        event_kind: Option<String>,
    },
    /// Remove a behavior
    Remove {
        /// Behavior ID
        id: String,
    },
}

fn parse_tag<T>(
    value: Option<String>,
    parse: fn(&str) -> Option<T>,
    what: &str,
    valid: &str,
) -> HorizonResult<Option<T>> {
    value
        .map(|v| {
            parse(&v).ok_or_else(|| {
                HorizonError::Validation(format!("Invalid {}: '{}'. Use {}.", what, v, valid))
            })
        })
        .transpose()
}

/// Handle a behavior command
pub fn handle_behavior_command(storage: &Storage, cmd: BehaviorCommands) -> HorizonResult<()> {
    let service = PlanningService::new(storage);

    match cmd {
        BehaviorCommands::List { scenario } => {
            let scenario = resolve_scenario(storage, &scenario)?;
            let configurations = service.list_configurations(scenario.id)?;
            println!("Behaviors of {}:", scenario.name);
            print!(
                "{}",
                format_configuration_list(&configurations, &category_names(storage)?)
            );
        }

        BehaviorCommands::Add {
            scenario,
            target,
            category,
            mode,
            percent,
            value,
            from,
            allocation,
            rate,
            description,
            amount,
            date,
            event_kind,
        } => {
            let scenario = resolve_scenario(storage, &scenario)?;
            let category_id = match category {
                Some(name) => Some(
                    CategoryService::new(storage)
                        .find(&name)?
                        .ok_or_else(|| HorizonError::category_not_found(&name))?
                        .id,
                ),
                None => None,
            };
            let number = |v: Option<String>, what: &str| v.map(|s| parse_number(&s, what)).transpose();

            let draft = ConfigurationDraft {
                target: parse_tag(
                    Some(target),
                    TargetKind::parse,
                    "target",
                    "income, expense, investment or one_time_event",
                )?,
                category_id,
                mode: parse_tag(mode, ModeKind::parse, "mode", "percentage, fixed_value or zero")?,
                change_percent: number(percent, "percentage")?,
                fixed_value: number(value, "value")?,
                effective_from: from.as_deref().map(parse_date).transpose()?,
                allocation: number(allocation, "allocation")?.map(|p| p / 100.0),
                monthly_return_rate: number(rate, "rate")?.map(|p| p / 100.0),
                event_description: description,
                event_amount: number(amount, "amount")?,
                event_date: date.as_deref().map(parse_date).transpose()?,
                event_kind: parse_tag(event_kind, EventKind::parse, "event kind", "income or expense")?,
            };

            let configuration = service.add_configuration(scenario.id, draft)?;
            println!(
                "Added to {}: {}",
                scenario.name,
                describe_behavior(&configuration.behavior, &category_names(storage)?)
            );
            println!("  ID: {}", configuration.id);
        }

        BehaviorCommands::Remove { id } => {
            let configuration = service
                .find_configuration(&id)?
                .ok_or_else(|| HorizonError::configuration_not_found(&id))?;
            service.remove_configuration(configuration.id)?;
            println!("Removed behavior {}", configuration.id);
        }
    }

    Ok(())
}
