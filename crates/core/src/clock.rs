use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which clock stamps records and picks the daily file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBasis {
    /// Local wall clock. Timestamps still end in a literal `Z` so existing
    /// consumers of the execution log keep parsing them unchanged.
    #[default]
    Local,
    /// True UTC for both the timestamp and the partition date.
    Utc,
}

impl TimeBasis {
    pub fn now(self) -> Stamp {
        self.stamp(Utc::now())
    }

    pub fn stamp(self, instant: DateTime<Utc>) -> Stamp {
        match self {
            TimeBasis::Local => Stamp::new(instant.with_timezone(&Local).naive_local()),
            TimeBasis::Utc => Stamp::new(instant.naive_utc()),
        }
    }
}

/// One captured instant, already projected onto a [`TimeBasis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp(NaiveDateTime);

impl Stamp {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// `YYYY-MM-DDTHH:MM:SS.ffffffZ`
    pub fn iso_timestamp(&self) -> String {
        format!("{}Z", self.0.format("%Y-%m-%dT%H:%M:%S%.6f"))
    }

    pub fn time_of_day(&self) -> String {
        self.0.format("%H:%M:%S").to_string()
    }
}
