//! Report rendering for human and JSON modes
//!
//! The human report is two ASCII tables: one row per evaluation, then a
//! single-row summary. The JSON report carries the same data plus the deciding
//! rule and timestamp of each evaluation.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::eligibility::Rule;
use crate::models::LoanCheckResult;

/// Output mode for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable tables (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Column headings of the detail table
pub const DETAIL_HEADERS: [&str; 5] = ["Loan Amount", "Asset Value", "Credit Score", "LTV", "Success"];

/// Column headings of the summary table
pub const SUMMARY_HEADERS: [&str; 4] = [
    "Total Number of Applications",
    "Total Successful",
    "Total Not Eligible",
    "Mean Average LTV of All Applications",
];

/// Round an LTV to exactly two places, midpoint away from zero
#[must_use]
pub fn round_ltv(ltv: Decimal) -> Decimal {
    let mut rounded = ltv.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Format an LTV with exactly two decimal places
///
/// Values too large for [`round_ltv`] to rescale are still padded to two places.
#[must_use]
pub fn format_ltv(ltv: Decimal) -> String {
    format!("{:.2}", round_ltv(ltv))
}

/// A plain ASCII table
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given headings
    #[must_use]
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; missing cells render empty and extra cells are dropped
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let mut row: Vec<String> = cells.into_iter().map(|c| c.to_string()).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Number of data rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let widths = self.widths();
        let border: String = widths.iter().fold(String::from("+"), |mut acc, w| {
            acc.push_str(&"-".repeat(w + 2));
            acc.push('+');
            acc
        });

        writeln!(f, "{border}")?;
        write_row(f, &self.headers, &widths)?;
        writeln!(f, "{border}")?;
        for row in &self.rows {
            write_row(f, row, &widths)?;
        }
        if !self.rows.is_empty() {
            writeln!(f, "{border}")?;
        }
        Ok(())
    }
}

fn write_row(
    f: &mut std::fmt::Formatter<'_>,
    cells: &[String],
    widths: &[usize],
) -> std::fmt::Result {
    write!(f, "|")?;
    for (cell, width) in cells.iter().zip(widths) {
        write!(f, " {cell:<width$} |")?;
    }
    writeln!(f)
}

/// Aggregate figures over every evaluation in the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of evaluations
    pub total: usize,
    /// Number found eligible
    pub successful: usize,
    /// Number found not eligible
    pub not_eligible: usize,
    /// Arithmetic mean of every LTV, unrounded
    pub mean_ltv: Decimal,
}

impl Summary {
    /// Summarise a result log; `None` when it is empty
    #[must_use]
    pub fn from_results(results: &[LoanCheckResult]) -> Option<Self> {
        if results.is_empty() {
            return None;
        }

        let total = results.len();
        let successful = results.iter().filter(|r| r.success).count();
        // Each share is at most |ltv| / total, so no partial sum can overflow.
        let count = Decimal::from(total);
        let mean_ltv = results.iter().map(|r| r.ltv / count).sum();

        Some(Self {
            total,
            successful,
            not_eligible: total - successful,
            mean_ltv,
        })
    }

    /// The summary as a one-row table
    #[must_use]
    pub fn table(&self) -> Table {
        let mut table = Table::new(SUMMARY_HEADERS);
        table.add_row([
            self.total.to_string(),
            self.successful.to_string(),
            self.not_eligible.to_string(),
            format_ltv(self.mean_ltv),
        ]);
        table
    }
}

/// The detail table: one row per result, in the order given
#[must_use]
pub fn detail_table(results: &[LoanCheckResult]) -> Table {
    let mut table = Table::new(DETAIL_HEADERS);
    for result in results {
        table.add_row([
            result.loan_amount().to_string(),
            result.asset_value().to_string(),
            result.credit_score().to_string(),
            format_ltv(result.ltv),
            result.success.to_string(),
        ]);
    }
    table
}

/// One evaluation as it appears in the JSON report
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReportRow {
    /// Requested loan amount
    pub loan_amount: Decimal,
    /// Asset value
    pub asset_value: Decimal,
    /// Credit score
    pub credit_score: u16,
    /// LTV rounded to two places
    pub ltv: Decimal,
    /// Whether the application was eligible
    pub success: bool,
    /// The deciding rule
    pub rule: Rule,
    /// When the evaluation ran
    pub evaluated_at: DateTime<Utc>,
}

impl From<&LoanCheckResult> for ReportRow {
    fn from(result: &LoanCheckResult) -> Self {
        Self {
            loan_amount: result.loan_amount(),
            asset_value: result.asset_value(),
            credit_score: result.credit_score(),
            ltv: round_ltv(result.ltv),
            success: result.success,
            rule: result.rule,
            evaluated_at: result.evaluated_at,
        }
    }
}

/// Full session report
#[derive(Debug, Serialize)]
pub struct Report {
    /// Every evaluation, oldest first
    pub results: Vec<ReportRow>,
    /// Aggregate figures, mean LTV rounded to two places
    pub summary: Summary,
}

impl Report {
    /// Build a report; `None` when there is nothing to report
    #[must_use]
    pub fn from_results(results: &[LoanCheckResult]) -> Option<Self> {
        let summary = Summary::from_results(results)?;
        Some(Self {
            results: results.iter().map(ReportRow::from).collect(),
            summary: Summary {
                mean_ltv: round_ltv(summary.mean_ltv),
                ..summary
            },
        })
    }

    /// Render as pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
