use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_DIR: &str = ".tmp/logs";

const EXECUTION_PREFIX: &str = "execution_";
const DECISION_PREFIX: &str = "decisions_";

/// Where the daily log files live. Paths are derived from a date on every
/// call and never cached, so a process that spans midnight rolls over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLayout {
    dir: PathBuf,
}

impl LogLayout {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn ensure_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)
    }

    pub fn execution_path(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("{}{}.jsonl", EXECUTION_PREFIX, date_stamp(date)))
    }

    pub fn decision_path(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("{}{}.md", DECISION_PREFIX, date_stamp(date)))
    }
}

impl Default for LogLayout {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_DIR)
    }
}

/// `YYYYMMDD`
pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}
