//! Append-only run journals: JSON Lines execution telemetry and Markdown
//! decision entries, one file of each per calendar day.

pub mod append;
pub mod decision_logger;
pub mod execution_logger;
pub mod markdown;

pub use decision_logger::DecisionLogger;
pub use execution_logger::ExecutionLogger;
pub use markdown::render_decision;
pub use runlog_core::{
    DecisionRecord, ExecutionRecord, ExecutionStatus, JournalConfig, JournalError, Result,
    TimeBasis,
};

use serde::Serialize;
use std::fmt::Display;

/// Records one script run under `.tmp/logs` using the local clock.
pub fn log_execution<I: Serialize, O: Serialize>(
    script_name: &str,
    inputs: I,
    outputs: O,
    duration_seconds: f64,
    status: &str,
    error: Option<&str>,
) -> Result<()> {
    ExecutionLogger::default().log(script_name, inputs, outputs, duration_seconds, status, error)
}

/// Records one decision under `.tmp/logs` using the local clock.
#[allow(clippy::too_many_arguments)]
pub fn log_decision<O, S>(
    title: &str,
    context: &str,
    options: O,
    choice: &str,
    reasoning: &str,
    risk: &str,
    scripts: S,
) -> Result<()>
where
    O: IntoIterator,
    O::Item: Display,
    S: IntoIterator,
    S::Item: Display,
{
    DecisionLogger::default().log(title, context, options, choice, reasoning, risk, scripts)
}
