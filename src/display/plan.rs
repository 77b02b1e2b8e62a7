//! Scenario, configuration and goal display formatting

use std::collections::HashMap;

use super::format::truncate;
use crate::models::{
    Behavior, BehaviorConfiguration, CategoryAdjustment, CategoryId, FinancialGoal, Scenario,
};

/// Format scenarios as a table
pub fn format_scenario_list(scenarios: &[Scenario]) -> String {
    if scenarios.is_empty() {
        return "No scenarios found.\n\nRun 'horizon init' to create the base scenario.".to_string();
    }

    let name_width = scenarios
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(4)
        .clamp(4, 30);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<13} {:<name_width$}  {:<6}  {:>7}  {:<10}  {:<10}\n",
        "ID",
        "Name",
        "Kind",
        "Horizon",
        "Start",
        "End",
        name_width = name_width,
    ));
    output.push_str(&"-".repeat(13 + name_width + 45));
    output.push('\n');

    for scenario in scenarios {
        output.push_str(&format!(
            "{:<13} {:<name_width$}  {:<6}  {:>6}y  {:<10}  {:<10}\n",
            scenario.id.to_string(),
            truncate(&scenario.name, name_width),
            scenario.kind,
            scenario.horizon_years,
            scenario.start_date,
            scenario.end_date(),
            name_width = name_width,
        ));
    }

    output
}

/// Format one scenario with its configurations and goals
pub fn format_scenario_details(
    scenario: &Scenario,
    configurations: &[BehaviorConfiguration],
    goals: &[FinancialGoal],
    category_names: &HashMap<CategoryId, String>,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("Scenario: {}\n", scenario.name));
    output.push_str(&format!("  ID:       {}\n", scenario.id));
    output.push_str(&format!("  Kind:     {}\n", scenario.kind));
    if let Some(description) = &scenario.description {
        output.push_str(&format!("  About:    {}\n", description));
    }
    output.push_str(&format!(
        "  Horizon:  {} years ({} to {})\n",
        scenario.horizon_years,
        scenario.start_date,
        scenario.end_date()
    ));

    output.push_str("\nBehaviors:\n");
    output.push_str(&format_configuration_list(configurations, category_names));
    output.push_str("\nGoals:\n");
    output.push_str(&format_goal_list(goals));
    output
}

/// Format configurations in the order they apply
pub fn format_configuration_list(
    configurations: &[BehaviorConfiguration],
    category_names: &HashMap<CategoryId, String>,
) -> String {
    if configurations.is_empty() {
        return "  (none; baseline behavior continues unchanged)\n".to_string();
    }

    let mut output = String::new();
    for config in configurations {
        let from = config
            .effective_from
            .map(|d| format!(" from {}", d))
            .unwrap_or_default();
        output.push_str(&format!(
            "  {}  {}{}\n",
            config.id,
            describe_behavior(&config.behavior, category_names),
            from
        ));
    }
    output
}

/// Describe a behavior using category names where known
pub fn describe_behavior(behavior: &Behavior, category_names: &HashMap<CategoryId, String>) -> String {
    let category = |adjustment: &CategoryAdjustment| match adjustment.category_id {
        Some(id) => category_names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.to_string()),
        None => "(uncategorized)".to_string(),
    };

    match behavior {
        Behavior::Income(adjustment) | Behavior::Expense(adjustment) => format!(
            "{} {}: {}",
            behavior.target(),
            category(adjustment),
            adjustment.mode
        ),
        other => other.to_string(),
    }
}

/// Format goals ordered as given
pub fn format_goal_list(goals: &[FinancialGoal]) -> String {
    if goals.is_empty() {
        return "  (none)\n".to_string();
    }

    let mut output = String::new();
    for goal in goals {
        let tag = if goal.category.is_empty() {
            String::new()
        } else {
            format!(" #{}", goal.category)
        };
        output.push_str(&format!(
            "  {}  {:<24} {:>14.2} by {}  [{}]{}\n",
            goal.id,
            truncate(&goal.name, 24),
            goal.target_amount,
            goal.target_date,
            goal.priority,
            tag
        ));
    }
    output
}
