//! Record layout shared by every sink

use crate::level::Severity;
use chrono::{DateTime, Local};

/// Timestamp layout, `YYYY-MM-DD HH:MM:SS`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single log event, before formatting
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub timestamp: DateTime<Local>,
    pub logger: &'a str,
    pub severity: Severity,
    pub line: u32,
    pub message: &'a str,
}

impl<'a> Record<'a> {
    /// Builds a record stamped with the current local time
    pub fn now(logger: &'a str, severity: Severity, line: u32, message: &'a str) -> Self {
        Self {
            timestamp: Local::now(),
            logger,
            severity,
            line,
            message,
        }
    }
}

/// Renders records as
/// `<timestamp> - <logger> - <level> -  L<line> - <message>`
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFormatter;

impl RecordFormatter {
    /// Formats a record without a trailing newline
    pub fn format(&self, record: &Record<'_>) -> String {
        format!(
            "{} - {} - {} -  L{} - {}",
            record.timestamp.format(TIMESTAMP_FORMAT),
            record.logger,
            record.severity,
            record.line,
            record.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_record<'a>(message: &'a str) -> Record<'a> {
        Record {
            timestamp: Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap(),
            logger: "billing.Invoice",
            severity: Severity::Warning,
            line: 42,
            message,
        }
    }

    #[test]
    fn test_format_layout() {
        let line = RecordFormatter.format(&fixed_record("total mismatch"));
        assert_eq!(
            line,
            "2024-03-09 07:05:01 - billing.Invoice - WARNING -  L42 - total mismatch"
        );
    }

    #[test]
    fn test_format_keeps_message_verbatim() {
        let line = RecordFormatter.format(&fixed_record("a - b -  L1 - c"));
        assert!(line.ends_with(" - a - b -  L1 - c"));
    }

    #[test]
    fn test_now_uses_current_time() {
        let before = Local::now();
        let record = Record::now("x.Y", Severity::Info, 1, "hi");
        assert!(record.timestamp >= before);
        assert_eq!(record.line, 1);
    }
}
