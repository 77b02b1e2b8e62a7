//! CSV Export functionality
//!
//! Exports a projection as one row per month.

use serde::Serialize;
use std::io::Write;

use super::export_err;
use crate::error::HorizonResult;
use crate::projection::ProjectionResult;

#[derive(Debug, Serialize)]
struct MonthRow {
    month: String,
    income: String,
    expense: String,
    savings: String,
    investment_contribution: String,
    investment_yield: String,
    net_worth: String,
}

fn amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Export the monthly projections of a scenario to CSV
pub fn export_projection_csv<W: Write>(result: &ProjectionResult, writer: &mut W) -> HorizonResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(&mut *writer);

    for p in &result.projections {
        csv_writer
            .serialize(MonthRow {
                month: p.month.format("%Y-%m-%d").to_string(),
                income: amount(p.income.total),
                expense: amount(p.expense.total),
                savings: amount(p.savings),
                investment_contribution: amount(p.investment_contribution),
                investment_yield: amount(p.investment_yield),
                net_worth: amount(p.net_worth),
            })
            .map_err(export_err)?;
    }

    csv_writer.flush().map_err(export_err)?;
    Ok(())
}
