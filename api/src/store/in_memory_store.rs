use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use common::LogEntry;
use tokio::sync::RwLock;

use super::{encode_line, parse_lines, LogStore};
use crate::error::StoreResult;

/// Keeps each day's encoded lines in memory, read back through the same
/// parser as the file store.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    days: Arc<RwLock<BTreeMap<NaiveDate, String>>>,
}

impl InMemoryStore {
    pub async fn day_count(&self) -> usize {
        self.days.read().await.len()
    }
}

#[axum::async_trait]
impl LogStore for InMemoryStore {
    async fn append(&self, entry: &LogEntry, date: NaiveDate) -> StoreResult<()> {
        self.days
            .write()
            .await
            .entry(date)
            .or_default()
            .push_str(&encode_line(entry));
        Ok(())
    }

    async fn read_all(&self, date: NaiveDate) -> StoreResult<Vec<LogEntry>> {
        Ok(self
            .days
            .read()
            .await
            .get(&date)
            .map(|text| parse_lines(text.as_str()))
            .unwrap_or_default())
    }
}
