use crate::clock::Stamp;
use crate::error::{JournalError, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;
use serde_json::Value;
use std::fmt;
use std::io;

/// One script invocation. Field order is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    pub timestamp: String,
    pub script_name: String,
    pub inputs: Value,
    pub outputs: Value,
    pub duration_seconds: f64,
    pub status: String,
    pub error: Option<String>,
}

impl ExecutionRecord {
    pub fn new(
        stamp: &Stamp,
        script_name: impl Into<String>,
        inputs: Value,
        outputs: Value,
        duration_seconds: f64,
        status: impl Into<String>,
        error: Option<String>,
    ) -> Self {
        Self {
            timestamp: stamp.iso_timestamp(),
            script_name: script_name.into(),
            inputs,
            outputs,
            duration_seconds,
            status: status.into(),
            error,
        }
    }

    /// Single-line JSON terminated by `\n`, with `", "` and `": "`
    /// separators.
    ///
    /// serde_json writes non-finite floats as `null`, which would silently
    /// change the recorded duration, so those are rejected here.
    pub fn to_json_line(&self) -> Result<String> {
        if !self.duration_seconds.is_finite() {
            return Err(JournalError::InvalidDuration(self.duration_seconds));
        }
        let mut buf = Vec::with_capacity(256);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
        self.serialize(&mut ser)?;
        buf.push(b'\n');
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Compact JSON with a space after every `,` and `:`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Success,
    Failure,
}

impl ExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStatus::Success => "success",
            ExecutionStatus::Failure => "failure",
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ExecutionStatus> for String {
    fn from(status: ExecutionStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A choice made among alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub title: String,
    pub context: String,
    pub options: Vec<String>,
    pub choice: String,
    pub reasoning: String,
    pub risk: String,
    pub scripts: Vec<String>,
}

impl DecisionRecord {
    /// Options and scripts take anything printable, in the order given.
    pub fn new<O, S>(
        title: impl Into<String>,
        context: impl Into<String>,
        options: O,
        choice: impl Into<String>,
        reasoning: impl Into<String>,
        risk: impl Into<String>,
        scripts: S,
    ) -> Self
    where
        O: IntoIterator,
        O::Item: fmt::Display,
        S: IntoIterator,
        S::Item: fmt::Display,
    {
        Self {
            title: title.into(),
            context: context.into(),
            options: options.into_iter().map(|o| o.to_string()).collect(),
            choice: choice.into(),
            reasoning: reasoning.into(),
            risk: risk.into(),
            scripts: scripts.into_iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn stamp() -> Stamp {
        Stamp::new(
            NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_micro_opt(10, 30, 0, 250_000)
                .unwrap(),
        )
    }

    #[test]
    fn test_json_line_key_order() {
        let record = ExecutionRecord::new(
            &stamp(),
            "build.py",
            json!({"target": "release"}),
            json!({"exit_code": 0}),
            1.23,
            ExecutionStatus::Success,
            None,
        );

        let line = record.to_json_line().unwrap();
        assert_eq!(
            line,
            "{\"timestamp\": \"2024-01-15T10:30:00.250000Z\", \"script_name\": \"build.py\", \
             \"inputs\": {\"target\": \"release\"}, \"outputs\": {\"exit_code\": 0}, \
             \"duration_seconds\": 1.23, \"status\": \"success\", \"error\": null}\n"
        );
    }

    #[test]
    fn test_rejects_non_finite_duration() {
        let record = ExecutionRecord::new(&stamp(), "s", json!({}), json!({}), f64::NAN, "success", None);
        assert!(matches!(
            record.to_json_line(),
            Err(JournalError::InvalidDuration(_))
        ));

        let record = ExecutionRecord::new(&stamp(), "s", json!({}), json!({}), f64::INFINITY, "success", None);
        assert!(record.to_json_line().is_err());
    }

    #[test]
    fn test_preserves_input_key_order() {
        let record = ExecutionRecord::new(
            &stamp(),
            "s",
            json!({"zeta": 1, "alpha": 2}),
            json!({}),
            0.0,
            "success",
            None,
        );
        let line = record.to_json_line().unwrap();
        assert!(line.contains("{\"zeta\": 1, \"alpha\": 2}"));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ExecutionStatus::Success.to_string(), "success");
        assert_eq!(String::from(ExecutionStatus::Failure), "failure");
    }

    #[test]
    fn test_decision_record_stringifies_items() {
        let record = DecisionRecord::new("Retry budget", "flaky network", [1, 3, 5], "3", "balanced", "medium", Vec::<String>::new());
        assert_eq!(record.options, vec!["1", "3", "5"]);
        assert!(record.scripts.is_empty());
    }
}
