//! Baseline Report
//!
//! Shows the averaged monthly behavior every scenario starts from.

use std::collections::{BTreeMap, HashMap};

use super::category_label;
use crate::display::format::{double_separator, format_amount, format_rate, separator};
use crate::models::CategoryId;
use crate::projection::{BaselineData, CategoryKey};

/// One averaged category
#[derive(Debug, Clone)]
pub struct BaselineRow {
    pub category: String,
    pub monthly_average: f64,
}

/// Baseline Report
#[derive(Debug, Clone)]
pub struct BaselineReport {
    pub income: Vec<BaselineRow>,
    pub expenses: Vec<BaselineRow>,
    pub baseline: BaselineData,
}

impl BaselineReport {
    /// Build the report, largest categories first
    pub fn generate(baseline: &BaselineData, category_names: &HashMap<CategoryId, String>) -> Self {
        let rows = |values: &BTreeMap<CategoryKey, f64>| {
            let mut rows: Vec<BaselineRow> = values
                .iter()
                .map(|(key, &value)| BaselineRow {
                    category: category_label(*key, category_names),
                    monthly_average: value,
                })
                .collect();
            rows.sort_by(|a, b| b.monthly_average.total_cmp(&a.monthly_average));
            rows
        };

        Self {
            income: rows(&baseline.income_by_category),
            expenses: rows(&baseline.expense_by_category),
            baseline: baseline.clone(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Baseline\n");
        output.push_str(&double_separator(50));
        output.push('\n');
        if let (Some(start), Some(end)) = (self.baseline.window_start, self.baseline.window_end) {
            output.push_str(&format!(
                "History {} to {} ({} active month(s))\n\n",
                start, end, self.baseline.months_observed
            ));
        }

        for (title, rows, total) in [
            ("Income", &self.income, self.baseline.total_income()),
            ("Expenses", &self.expenses, self.baseline.total_expense()),
        ] {
            output.push_str(&format!("{:<32} {:>16}\n", title, "Monthly Avg"));
            output.push_str(&separator(50));
            output.push('\n');
            if rows.is_empty() {
                output.push_str("  (no history)\n");
            }
            for row in rows {
                output.push_str(&format!(
                    "  {:<30} {:>16}\n",
                    row.category,
                    format_amount(row.monthly_average, currency)
                ));
            }
            output.push_str(&format!("  {:<30} {:>16}\n\n", "Total", format_amount(total, currency)));
        }

        output.push_str(&format!(
            "Monthly Savings:   {:>16}\n",
            format_amount(self.baseline.monthly_savings(), currency)
        ));
        output.push_str(&format!(
            "Savings Rate:      {:>16}\n",
            format_rate(self.baseline.savings_rate)
        ));
        output.push_str(&format!(
            "Net Worth Today:   {:>16}\n",
            format_amount(self.baseline.net_worth, currency)
        ));

        output
    }
}
