//! The interactive session
//!
//! A single keypress picks what happens next:
//!
//! - `R` shows the report of every evaluation so far
//! - `X` says goodbye and ends the session
//! - any other key runs a new evaluation
//!
//! Evaluations are appended to an in-memory log that lives as long as the
//! session. Nothing is persisted.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use log::{debug, info};
use thiserror::Error;

use crate::console::Console;
use crate::eligibility::{self, EvaluationError};
use crate::input::InputCollector;
use crate::models::{FormProgress, LoanCheckResult};
use crate::report::{self, OutputMode, Report, Summary};

const WELCOME: &str = "Hello, welcome to credit assessment program, press any key to begin \
                       evaluation process or press R for up to date reports, alternatively \
                       press X to exit";

/// Errors that end a session early
#[derive(Debug, Error)]
pub enum SessionError {
    /// Console read or write failed, or input ended mid-form
    #[error("console I/O failed")]
    Io(#[from] io::Error),

    /// An application could not be evaluated
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    /// The JSON report could not be produced
    #[error("cannot render report")]
    Json(#[from] serde_json::Error),
}

/// What a keypress asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the report
    Report,
    /// End the session
    Exit,
    /// Run an evaluation
    Evaluate,
}

impl Command {
    /// Map a keypress to a command
    #[must_use]
    pub const fn from_key(key: char) -> Self {
        match key {
            'r' | 'R' => Self::Report,
            'x' | 'X' => Self::Exit,
            _ => Self::Evaluate,
        }
    }
}

/// Where the session is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Waiting for a command key
    #[default]
    AwaitingCommand,
    /// Asking for form fields
    CollectingFields,
    /// An evaluation has just been recorded
    Evaluated,
    /// The report is being shown
    ReportDisplay,
    /// The session is over
    Exited,
}

/// Session options taken from the command line and settings
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// How reports are rendered
    pub output_mode: OutputMode,
    /// Currency label used in prompts
    pub currency: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            output_mode: OutputMode::Human,
            currency: "GBP".to_string(),
        }
    }
}

/// An interactive session over a console
#[derive(Debug)]
pub struct Session<R, W> {
    console: Console<R, W>,
    options: SessionOptions,
    progress: FormProgress,
    results: Vec<LoanCheckResult>,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty log
    pub const fn new(console: Console<R, W>, options: SessionOptions) -> Self {
        Self {
            console,
            options,
            progress: FormProgress::new(),
            results: Vec::new(),
            state: SessionState::AwaitingCommand,
        }
    }

    /// Every evaluation so far, oldest first
    #[must_use]
    pub fn results(&self) -> &[LoanCheckResult] {
        &self.results
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Form progress of the latest evaluation cycle
    #[must_use]
    pub const fn progress(&self) -> FormProgress {
        self.progress
    }

    /// Consume the session and return its console
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Greet the user and process commands until the session exits
    pub fn run(&mut self) -> Result<(), SessionError> {
        info!("Session started");
        self.console.line(WELCOME)?;

        while self.state != SessionState::Exited {
            self.step()?;
        }

        info!("Session ended after {} evaluation(s)", self.results.len());
        Ok(())
    }

    /// Read one command key and carry it out
    pub fn step(&mut self) -> Result<SessionState, SessionError> {
        let Some(key) = self.console.read_key()? else {
            debug!("Input closed, exiting");
            self.state = SessionState::Exited;
            return Ok(self.state);
        };

        let command = Command::from_key(key);
        debug!("Key {key:?} -> {command:?}");

        match command {
            Command::Report => self.show_report()?,
            Command::Exit => self.exit()?,
            Command::Evaluate => self.evaluate()?,
        }

        Ok(self.state)
    }

    fn show_report(&mut self) -> Result<(), SessionError> {
        self.state = SessionState::ReportDisplay;
        self.console.blank()?;

        if self.results.is_empty() {
            self.console.line("No reports available.".yellow())?;
            self.console.line("Press 1 to run eligibility process or X to exit.")?;
            self.state = SessionState::AwaitingCommand;
            return Ok(());
        }

        match self.options.output_mode {
            OutputMode::Human => self.render_tables()?,
            OutputMode::Json => {
                if let Some(report) = Report::from_results(&self.results) {
                    self.console.line(report.to_json()?)?;
                }
            },
        }

        self.console.line("Press X to exit, or any other key to run eligibility process")?;
        self.state = SessionState::AwaitingCommand;
        Ok(())
    }

    fn render_tables(&mut self) -> io::Result<()> {
        self.console.line("Detailed report of all eligibility checks performed".yellow())?;
        self.console.blank()?;

        let detail = report::detail_table(&self.results);
        self.console.line(detail.to_string().cyan())?;

        if let Some(summary) = Summary::from_results(&self.results) {
            self.console.line(summary.table().to_string().cyan())?;
        }
        Ok(())
    }

    fn exit(&mut self) -> io::Result<()> {
        self.state = SessionState::Exited;
        self.console.blank()?;
        self.console.line("Thank you for using our app and have a nice day")?;
        self.console.line("Press any key to exit")?;
        self.console.read_key()?;
        Ok(())
    }

    fn evaluate(&mut self) -> Result<(), SessionError> {
        self.state = SessionState::CollectingFields;
        self.console.blank()?;

        let request = InputCollector::new(&mut self.console, &self.options.currency)
            .collect(&mut self.progress)?;

        let assessment = eligibility::assess(&request)?;
        let ltv = eligibility::ltv(&request)?;
        debug!(
            "Assessed {request:?}: eligible={} rule=({})",
            assessment.eligible, assessment.rule
        );

        self.results
            .push(LoanCheckResult::from_request(request, assessment, ltv));
        self.state = SessionState::Evaluated;

        let ltv = report::format_ltv(ltv);
        if assessment.eligible {
            self.console
                .line(format!("Application is eligible for loan with LTV:{ltv}").green())?;
        } else {
            self.console.line(
                format!("Unfortunately application doesn't meet eligibility criteria, LTV: {ltv}")
                    .red(),
            )?;
        }

        self.console.line(
            "Press X to exit, R to display reports, or any other key to run eligibility process \
             again"
                .cyan(),
        )?;
        self.state = SessionState::AwaitingCommand;
        Ok(())
    }
}
