//! Loan check request and result
//!
//! A request is the three validated form values. A result is a request plus the
//! verdict it received; results are append-only history for the session.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::eligibility::{Assessment, Rule};

/// A single loan application, built from validated form input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoanCheckRequest {
    /// Requested loan amount
    pub loan_amount: Decimal,

    /// Value of the asset the loan is secured against
    pub asset_value: Decimal,

    /// Applicant credit score, 1 to 999
    pub credit_score: u16,
}

impl LoanCheckRequest {
    /// Create a request from already-validated values
    #[must_use]
    pub const fn new(loan_amount: Decimal, asset_value: Decimal, credit_score: u16) -> Self {
        Self {
            loan_amount,
            asset_value,
            credit_score,
        }
    }

    /// Loan-to-value as a percentage: `loan_amount / asset_value * 100`.
    ///
    /// Returns `None` when the ratio is undefined (asset value of zero) or does
    /// not fit in a `Decimal`.
    #[must_use]
    pub fn ltv(&self) -> Option<Decimal> {
        self.loan_amount
            .checked_div(self.asset_value)?
            .checked_mul(Decimal::ONE_HUNDRED)
    }
}

/// The outcome of one evaluation, as recorded in the session log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoanCheckResult {
    /// The request that was evaluated
    #[serde(flatten)]
    pub request: LoanCheckRequest,

    /// Loan-to-value at evaluation time (unrounded)
    pub ltv: Decimal,

    /// Whether the application is eligible
    pub success: bool,

    /// Which row of the rule table decided the outcome
    pub rule: Rule,

    /// When the evaluation ran
    pub evaluated_at: DateTime<Utc>,
}

impl LoanCheckResult {
    /// Record an assessment of `request`, timestamped now
    #[must_use]
    pub fn from_request(request: LoanCheckRequest, assessment: Assessment, ltv: Decimal) -> Self {
        Self {
            request,
            ltv,
            success: assessment.eligible,
            rule: assessment.rule,
            evaluated_at: Utc::now(),
        }
    }

    /// Requested loan amount
    #[must_use]
    pub const fn loan_amount(&self) -> Decimal {
        self.request.loan_amount
    }

    /// Asset value
    #[must_use]
    pub const fn asset_value(&self) -> Decimal {
        self.request.asset_value
    }

    /// Applicant credit score
    #[must_use]
    pub const fn credit_score(&self) -> u16 {
        self.request.credit_score
    }
}
