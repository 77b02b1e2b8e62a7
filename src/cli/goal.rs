//! Goal CLI commands

use clap::Subcommand;

use super::{parse_date, parse_number, resolve_scenario};
use crate::display::plan::format_goal_list;
use crate::error::{HorizonError, HorizonResult};
use crate::models::GoalPriority;
use crate::services::planning::{GoalInput, UpdateGoalInput};
use crate::services::PlanningService;
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// List a scenario's goals by target date
    List {
        /// Scenario name or ID
        scenario: String,
    },
    /// Add a net worth goal to a scenario
    Add {
        /// Scenario name or ID
        scenario: String,
        /// Goal name
        name: String,
        /// Target net worth
        #[arg(short, long)]
        amount: String,
        /// Target date (YYYY-MM-DD), within the scenario horizon
        #[arg(short, long)]
        date: String,
        /// Free-text tag (e.g., retirement)
        #[arg(short, long)]
        category: Option<String>,
        /// Priority (low, medium, high)
        #[arg(short, long)]
        priority: Option<String>,
    },
    /// Edit a goal
    Edit {
        /// Goal ID
        goal: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        priority: Option<String>,
    },
    /// Remove a goal
    Remove {
        /// Goal ID
        goal: String,
    },
}

fn parse_priority(value: Option<String>) -> HorizonResult<Option<GoalPriority>> {
    value
        .map(|p| {
            GoalPriority::parse(&p).ok_or_else(|| {
                HorizonError::Validation(format!("Invalid priority: '{}'. Use low, medium or high.", p))
            })
        })
        .transpose()
}

/// Handle a goal command
pub fn handle_goal_command(storage: &Storage, cmd: GoalCommands) -> HorizonResult<()> {
    let service = PlanningService::new(storage);

    match cmd {
        GoalCommands::List { scenario } => {
            let scenario = resolve_scenario(storage, &scenario)?;
            println!("Goals of {}:", scenario.name);
            print!("{}", format_goal_list(&service.list_goals(scenario.id)?));
        }

        GoalCommands::Add {
            scenario,
            name,
            amount,
            date,
            category,
            priority,
        } => {
            let scenario = resolve_scenario(storage, &scenario)?;
            let goal = service.add_goal(
                scenario.id,
                GoalInput {
                    name,
                    target_amount: parse_number(&amount, "amount")?,
                    target_date: parse_date(&date)?,
                    category,
                    priority: parse_priority(priority)?,
                },
            )?;
            println!("Added goal to {}: {}", scenario.name, goal);
            println!("  ID: {}", goal.id);
        }

        GoalCommands::Edit {
            goal,
            name,
            amount,
            date,
            category,
            priority,
        } => {
            let found = service
                .find_goal(&goal)?
                .ok_or_else(|| HorizonError::goal_not_found(&goal))?;
            let updated = service.update_goal(
                found.id,
                UpdateGoalInput {
                    name,
                    target_amount: amount.map(|a| parse_number(&a, "amount")).transpose()?,
                    target_date: date.as_deref().map(parse_date).transpose()?,
                    category,
                    priority: parse_priority(priority)?,
                },
            )?;
            println!("Updated goal: {}", updated);
        }

        GoalCommands::Remove { goal } => {
            let found = service
                .find_goal(&goal)?
                .ok_or_else(|| HorizonError::goal_not_found(&goal))?;
            service.remove_goal(found.id)?;
            println!("Removed goal: {}", found.name);
        }
    }

    Ok(())
}
