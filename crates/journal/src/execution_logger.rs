use crate::append::append_to;
use chrono::NaiveDate;
use runlog_core::{
    ExecutionRecord, ExecutionStatus, JournalConfig, LogLayout, Result, Stamp, TimeBasis,
};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Appends one JSON line per script run to `execution_YYYYMMDD.jsonl`.
///
/// Holds no file handle; every call ensures the directory, opens the file for
/// the current date, appends, and closes it.
#[derive(Debug, Clone, Default)]
pub struct ExecutionLogger {
    layout: LogLayout,
    time_basis: TimeBasis,
}

impl ExecutionLogger {
    pub fn new(config: &JournalConfig) -> Self {
        Self {
            layout: config.layout(),
            time_basis: config.time_basis,
        }
    }

    pub fn layout(&self) -> &LogLayout {
        &self.layout
    }

    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.layout.execution_path(date)
    }

    pub fn current_path(&self) -> PathBuf {
        self.path_for(self.time_basis.now().date())
    }

    /// `inputs` and `outputs` may be any serializable value; anything that
    /// has no JSON form (e.g. a map with non-string keys) fails the call.
    pub fn log<I, O>(
        &self,
        script_name: &str,
        inputs: I,
        outputs: O,
        duration_seconds: f64,
        status: impl Into<String>,
        error: Option<&str>,
    ) -> Result<()>
    where
        I: Serialize,
        O: Serialize,
    {
        let stamp = self.time_basis.now();
        let record = ExecutionRecord::new(
            &stamp,
            script_name,
            serde_json::to_value(inputs)?,
            serde_json::to_value(outputs)?,
            duration_seconds,
            status,
            error.map(str::to_string),
        );
        self.log_record_at(&stamp, &record)
    }

    pub fn log_record(&self, record: &ExecutionRecord) -> Result<()> {
        self.log_record_at(&self.time_basis.now(), record)
    }

    /// Appends `record` to the file for `stamp`'s date. The record's own
    /// timestamp is written as-is.
    pub fn log_record_at(&self, stamp: &Stamp, record: &ExecutionRecord) -> Result<()> {
        self.layout.ensure_dir()?;
        let line = record.to_json_line()?;
        append_to(&self.path_for(stamp.date()), &line)?;
        Ok(())
    }

    /// Runs `op`, timing it, and records the outcome: `success` with its
    /// output, or `failure` with empty outputs and the error text.
    ///
    /// The outer `Result` carries logging failures; the inner one is `op`'s
    /// own result, returned untouched.
    pub fn track<I, O, E, F>(
        &self,
        script_name: &str,
        inputs: I,
        op: F,
    ) -> Result<std::result::Result<O, E>>
    where
        I: Serialize,
        O: Serialize,
        E: fmt::Display,
        F: FnOnce() -> std::result::Result<O, E>,
    {
        let started = Instant::now();
        let outcome = op();
        let duration = started.elapsed().as_secs_f64();

        match &outcome {
            Ok(outputs) => self.log(
                script_name,
                inputs,
                outputs,
                duration,
                ExecutionStatus::Success,
                None,
            )?,
            Err(e) => {
                let message = e.to_string();
                tracing::warn!("{} failed after {:.3}s: {}", script_name, duration, message);
                self.log(
                    script_name,
                    inputs,
                    serde_json::json!({}),
                    duration,
                    ExecutionStatus::Failure,
                    Some(&message),
                )?
            }
        }

        Ok(outcome)
    }
}
