use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// `YYYY-MM-DD HH:MM:SS`, the timestamp stamped on every entry.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// `YYYY-MM-DD`, the day key used in URLs and day file names.
pub const DAY_FORMAT: &str = "%Y-%m-%d";
/// `YYYY-MM`, the month directory name.
pub const MONTH_FORMAT: &str = "%Y-%m";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub content: String,
    pub duration: String,
    pub timestamp: String,
}

impl LogEntry {
    pub fn new(content: String, duration: String, at: NaiveDateTime) -> Self {
        Self {
            content,
            duration,
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Body of `POST /api/record`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RecordRequest {
    pub content: String,
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RecordResponse {
    pub message: String,
    pub data: LogEntry,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RecordsResponse {
    pub data: Vec<LogEntry>,
    pub date: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn new_entry_formats_timestamp() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let entry = LogEntry::new("Wrote spec".into(), "45".into(), at);
        assert_eq!(entry.timestamp, "2024-03-01 10:00:00");
    }

    #[test]
    fn record_request_duration_is_optional() {
        let req: RecordRequest = serde_json::from_str(r#"{"content":"read"}"#).unwrap();
        assert_eq!(req.content, "read");
        assert!(req.duration.is_none());

        let req: RecordRequest =
            serde_json::from_str(r#"{"content":"read","duration":null}"#).unwrap();
        assert!(req.duration.is_none());
    }

    #[test]
    fn record_request_requires_content() {
        assert!(serde_json::from_str::<RecordRequest>(r#"{"duration":"5"}"#).is_err());
    }
}
