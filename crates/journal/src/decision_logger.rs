use crate::append::append_to;
use crate::markdown::render_decision;
use chrono::NaiveDate;
use runlog_core::{DecisionRecord, JournalConfig, LogLayout, Result, Stamp, TimeBasis};
use std::fmt::Display;
use std::path::PathBuf;

/// Appends Markdown decision entries to `decisions_YYYYMMDD.md`.
#[derive(Debug, Clone, Default)]
pub struct DecisionLogger {
    layout: LogLayout,
    time_basis: TimeBasis,
}

impl DecisionLogger {
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
        self.layout.decision_path(date)
    }

    pub fn current_path(&self) -> PathBuf {
        self.path_for(self.time_basis.now().date())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn log<O, S>(
        &self,
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
        let record = DecisionRecord::new(title, context, options, choice, reasoning, risk, scripts);
        self.log_record(&record)
    }

    pub fn log_record(&self, record: &DecisionRecord) -> Result<()> {
        self.log_record_at(&self.time_basis.now(), record)
    }

    pub fn log_record_at(&self, stamp: &Stamp, record: &DecisionRecord) -> Result<()> {
        self.layout.ensure_dir()?;
        let block = render_decision(&stamp.time_of_day(), record);
        append_to(&self.path_for(stamp.date()), &block)?;
        Ok(())
    }
}
