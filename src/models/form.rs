//! Form fields and per-cycle collection progress

use serde::Serialize;

/// One of the three values the applicant form asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    /// Requested loan amount
    LoanAmount,
    /// Value of the securing asset
    AssetValue,
    /// Applicant credit score
    CreditScore,
}

impl FormField {
    /// All fields, in the order they are collected
    pub const ALL: [Self; 3] = [Self::LoanAmount, Self::AssetValue, Self::CreditScore];

    /// How the field is named in validation messages
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::LoanAmount => "loan value",
            Self::AssetValue => "asset value",
            Self::CreditScore => "credit score",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoanAmount => write!(f, "loan_amount"),
            Self::AssetValue => write!(f, "asset_value"),
            Self::CreditScore => write!(f, "credit_score"),
        }
    }
}

/// Which fields have passed validation in the current evaluation cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormProgress {
    loan_amount: bool,
    asset_value: bool,
    credit_score: bool,
}

impl FormProgress {
    /// Fresh progress with nothing collected
    #[must_use]
    pub const fn new() -> Self {
        Self {
            loan_amount: false,
            asset_value: false,
            credit_score: false,
        }
    }

    /// Clear every flag, ready for a new cycle
    pub const fn reset(&mut self) {
        *self = Self::new();
    }

    /// Mark a field as collected
    pub const fn mark(&mut self, field: FormField) {
        *self.flag_mut(field) = true;
    }

    /// Whether a field has been collected
    #[must_use]
    pub const fn is_collected(&self, field: FormField) -> bool {
        match field {
            FormField::LoanAmount => self.loan_amount,
            FormField::AssetValue => self.asset_value,
            FormField::CreditScore => self.credit_score,
        }
    }

    /// Whether all three fields are collected
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.loan_amount && self.asset_value && self.credit_score
    }

    /// The next field still to be collected, in form order
    #[must_use]
    pub fn next_pending(&self) -> Option<FormField> {
        FormField::ALL.into_iter().find(|field| !self.is_collected(*field))
    }

    const fn flag_mut(&mut self, field: FormField) -> &mut bool {
        match field {
            FormField::LoanAmount => &mut self.loan_amount,
            FormField::AssetValue => &mut self.asset_value,
            FormField::CreditScore => &mut self.credit_score,
        }
    }
}
