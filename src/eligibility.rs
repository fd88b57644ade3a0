//! Loan eligibility rules
//!
//! A fixed table keyed on loan amount, loan-to-value (LTV) and credit score.
//! Rows are tried top to bottom and the first match decides:
//!
//! | Loan amount              | LTV            | Minimum credit score |
//! |--------------------------|----------------|----------------------|
//! | < 100,000 or > 15,000,000| any            | declined             |
//! | >= 1,000,000             | < 60           | 950                  |
//! | < 1,000,000              | < 60           | 750                  |
//! | < 1,000,000              | > 60 and < 80  | 800                  |
//! | < 1,000,000              | > 80 and < 90  | 900                  |
//! | < 1,000,000              | anything else  | declined             |
//!
//! The bands are exclusive at both ends, so an LTV of exactly 60 or exactly 80
//! lands in the last row and is declined. That is how the business rule reads
//! and it is kept as-is.
//!
//! # Examples
//!
//! ```
//! use loanscreen::eligibility::evaluate;
//! use rust_decimal_macros::dec;
//!
//! assert!(evaluate(dec!(2000000), dec!(4000000), 950).unwrap());
//! assert!(!evaluate(dec!(2000000), dec!(4000000), 949).unwrap());
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use thiserror::Error;

use crate::models::LoanCheckRequest;

/// Smallest loan amount considered at all
pub const MIN_LOAN_AMOUNT: Decimal = dec!(100000);
/// Largest loan amount considered at all
pub const MAX_LOAN_AMOUNT: Decimal = dec!(15000000);
/// Loans at or above this amount use the stricter large-loan row
pub const LARGE_LOAN_AMOUNT: Decimal = dec!(1000000);

const LARGE_LOAN_MIN_SCORE: u16 = 950;

/// Rows for loans under [`LARGE_LOAN_AMOUNT`]: (exclusive lower LTV, exclusive upper LTV, min score)
const BANDS: [(Rule, Option<Decimal>, Decimal, u16); 3] = [
    (Rule::LtvBelow60, None, dec!(60), 750),
    (Rule::LtvBelow80, Some(dec!(60)), dec!(80), 800),
    (Rule::LtvBelow90, Some(dec!(80)), dec!(90), 900),
];

/// Errors raised while evaluating an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// LTV cannot be computed for this asset value
    #[error("loan-to-value is undefined for an asset value of {asset_value}")]
    UndefinedLtv {
        /// The offending asset value
        asset_value: Decimal,
    },
}

/// The row of the rule table that decided an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Loan amount outside 100,000..=15,000,000
    LoanOutOfRange,
    /// Loan of 1,000,000 or more
    LargeLoan,
    /// Smaller loan, LTV below 60
    #[serde(rename = "ltv_below_60")]
    LtvBelow60,
    /// Smaller loan, LTV strictly between 60 and 80
    #[serde(rename = "ltv_below_80")]
    LtvBelow80,
    /// Smaller loan, LTV strictly between 80 and 90
    #[serde(rename = "ltv_below_90")]
    LtvBelow90,
    /// Smaller loan that matched no band (LTV of 90 or more, or exactly 60 or 80)
    LtvFallThrough,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoanOutOfRange => write!(f, "loan amount outside 100000..=15000000"),
            Self::LargeLoan => write!(f, "large loan: LTV < 60 and score >= 950"),
            Self::LtvBelow60 => write!(f, "LTV < 60: score >= 750"),
            Self::LtvBelow80 => write!(f, "60 < LTV < 80: score >= 800"),
            Self::LtvBelow90 => write!(f, "80 < LTV < 90: score >= 900"),
            Self::LtvFallThrough => write!(f, "LTV outside every band: declined"),
        }
    }
}

/// An eligibility verdict together with the rule that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assessment {
    /// Whether the application is eligible
    pub eligible: bool,
    /// The deciding rule
    pub rule: Rule,
}

impl Assessment {
    const fn new(rule: Rule, eligible: bool) -> Self {
        Self { eligible, rule }
    }
}

/// Compute LTV for a request, failing when it is undefined
pub fn ltv(request: &LoanCheckRequest) -> Result<Decimal, EvaluationError> {
    request.ltv().ok_or(EvaluationError::UndefinedLtv {
        asset_value: request.asset_value,
    })
}

/// Run a request through the rule table.
///
/// LTV is only computed once the loan amount is in range, so an out-of-range
/// loan is declined whatever its asset value.
pub fn assess(request: &LoanCheckRequest) -> Result<Assessment, EvaluationError> {
    let amount = request.loan_amount;
    let score = request.credit_score;

    if amount < MIN_LOAN_AMOUNT || amount > MAX_LOAN_AMOUNT {
        return Ok(Assessment::new(Rule::LoanOutOfRange, false));
    }

    let ltv = ltv(request)?;

    if amount >= LARGE_LOAN_AMOUNT {
        let eligible = ltv < dec!(60) && score >= LARGE_LOAN_MIN_SCORE;
        return Ok(Assessment::new(Rule::LargeLoan, eligible));
    }

    let band = BANDS
        .iter()
        .find(|(_, lower, upper, _)| lower.is_none_or(|lower| ltv > lower) && ltv < *upper);

    Ok(match band {
        Some(&(rule, _, _, min_score)) => Assessment::new(rule, score >= min_score),
        None => Assessment::new(Rule::LtvFallThrough, false),
    })
}

/// Whether an application with these values is eligible
pub fn evaluate(
    loan_amount: Decimal,
    asset_value: Decimal,
    credit_score: u16,
) -> Result<bool, EvaluationError> {
    assess(&LoanCheckRequest::new(loan_amount, asset_value, credit_score)).map(|a| a.eligible)
}
