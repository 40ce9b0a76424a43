//! Day-partitioned entry storage.
//!
//! Each entry is one `content|duration|timestamp` line. The delimiter is not
//! escaped, so a `|` inside content or duration shifts the fields and the line
//! is dropped on read.

mod file_store;
mod in_memory_store;

pub use file_store::FileStore;
pub use in_memory_store::InMemoryStore;

use chrono::NaiveDate;
use common::LogEntry;

use crate::error::StoreResult;

#[axum::async_trait]
pub trait LogStore: Send + Sync {
    /// Appends `entry` to the day file for `date`.
    async fn append(&self, entry: &LogEntry, date: NaiveDate) -> StoreResult<()>;

    /// Returns every well-formed entry for `date` in insertion order. A day
    /// with no file yields an empty list.
    async fn read_all(&self, date: NaiveDate) -> StoreResult<Vec<LogEntry>>;
}

pub fn encode_line(entry: &LogEntry) -> String {
    format!("{}|{}|{}\n", entry.content, entry.duration, entry.timestamp)
}

pub fn decode_line(line: &str) -> Option<LogEntry> {
    let fields: Vec<&str> = line.split('|').collect();
    match fields.as_slice() {
        [content, duration, timestamp] => Some(LogEntry {
            content: content.to_string(),
            duration: duration.to_string(),
            timestamp: timestamp.to_string(),
        }),
        _ => None,
    }
}

pub fn parse_lines(text: &str) -> Vec<LogEntry> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let entry = decode_line(line);
            if entry.is_none() {
                tracing::debug!(line, "skipping malformed log line");
            }
            entry
        })
        .collect()
}
