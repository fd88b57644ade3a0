//! Applicant form collection
//!
//! Each field is asked for until the answer parses. Amounts are decimals and
//! may contain thousands separators; the credit score is an integer from 1 to
//! 999. A rejected answer prints why and asks the same field again, leaving
//! earlier fields untouched.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use colored::Colorize;
use log::debug;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::console::Console;
use crate::models::{FormField, FormProgress, LoanCheckRequest};

/// Lowest accepted credit score
pub const MIN_CREDIT_SCORE: u16 = 1;
/// Highest accepted credit score
pub const MAX_CREDIT_SCORE: u16 = 999;

/// Why a field value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The text is not a number
    #[error("Wrong value, {} must be numeric.", .0.noun())]
    NotNumeric(FormField),

    /// The credit score is outside 1..=999
    #[error("Wrong value, credit score must be between 1 and 999 inclusive.")]
    OutOfRange(i64),
}

/// Parse a money amount for `field`
pub fn parse_amount(field: FormField, raw: &str) -> Result<Decimal, FieldError> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&cleaned).map_err(|_| FieldError::NotNumeric(field))
}

/// Parse a credit score and check it is within range
pub fn parse_credit_score(raw: &str) -> Result<u16, FieldError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| FieldError::NotNumeric(FormField::CreditScore))?;

    u16::try_from(value)
        .ok()
        .filter(|score| (MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(score))
        .ok_or(FieldError::OutOfRange(value))
}

/// The prompt shown for a field
#[must_use]
pub fn prompt_for(field: FormField, currency: &str) -> String {
    match field {
        FormField::LoanAmount => format!("Please type in required loan value ({currency}):"),
        FormField::AssetValue => format!(
            "Please type in asset value that the loan will be secured against ({currency}):"
        ),
        FormField::CreditScore => format!(
            "Please type in applicant's credit score ({MIN_CREDIT_SCORE} to {MAX_CREDIT_SCORE}):"
        ),
    }
}

/// Collects the three form fields through a console
#[derive(Debug)]
pub struct InputCollector<'a, R, W> {
    console: &'a mut Console<R, W>,
    currency: &'a str,
}

impl<'a, R: BufRead, W: Write> InputCollector<'a, R, W> {
    /// Create a collector that prompts with the given currency label
    pub const fn new(console: &'a mut Console<R, W>, currency: &'a str) -> Self {
        Self { console, currency }
    }

    /// Collect loan amount, asset value and credit score, in that order.
    ///
    /// `progress` is reset first and each flag is set as its field is accepted.
    /// Fails only when the console fails or input ends mid-form.
    pub fn collect(&mut self, progress: &mut FormProgress) -> io::Result<LoanCheckRequest> {
        progress.reset();

        let loan_amount = self.field(progress, FormField::LoanAmount, |raw| {
            parse_amount(FormField::LoanAmount, raw)
        })?;
        let asset_value = self.field(progress, FormField::AssetValue, |raw| {
            parse_amount(FormField::AssetValue, raw)
        })?;
        let credit_score = self.field(progress, FormField::CreditScore, parse_credit_score)?;

        Ok(LoanCheckRequest::new(loan_amount, asset_value, credit_score))
    }

    fn field<T>(
        &mut self,
        progress: &mut FormProgress,
        field: FormField,
        parse: impl Fn(&str) -> Result<T, FieldError>,
    ) -> io::Result<T> {
        let prompt = prompt_for(field, self.currency);

        loop {
            self.console.line(prompt.as_str().cyan())?;

            let Some(raw) = self.console.read_line()? else {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("input closed while waiting for {}", field.noun()),
                ));
            };

            match parse(&raw) {
                Ok(value) => {
                    progress.mark(field);
                    return Ok(value);
                },
                Err(err) => {
                    debug!("Rejected {field} input {raw:?}: {err:?}");
                    self.console.line(err.to_string().red())?;
                },
            }
        }
    }
}
