//! Data models for loanscreen
//!
//! - [`LoanCheckRequest`] - the three validated form values
//! - [`LoanCheckResult`] - a request plus its verdict, kept for reporting
//! - [`FormProgress`] - which fields are collected in the current cycle

mod form;
mod loan;

pub use form::{FormField, FormProgress};
pub use loan::{LoanCheckRequest, LoanCheckResult};
