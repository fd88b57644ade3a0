//! loanscreen - an interactive console tool that screens loan applications
//!
//! Applications are checked against a fixed table of loan-to-value (LTV) and
//! credit score rules. Every evaluation is kept in memory for the session and
//! can be reported as tables or JSON.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod console;
pub mod eligibility;
pub mod input;
pub mod models;
pub mod report;
pub mod session;
