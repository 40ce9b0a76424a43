use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime};
use common::LogEntry;

use crate::error::{ServiceError, ServiceResult};
use crate::store::LogStore;

/// Validates and timestamps submissions before handing them to a [`LogStore`].
#[derive(Clone)]
pub struct RecordService {
    store: Arc<dyn LogStore>,
}

impl RecordService {
    pub fn new(store: Arc<dyn LogStore>) -> Self {
        Self { store }
    }

    pub async fn submit(&self, content: String, duration: String) -> ServiceResult<LogEntry> {
        self.submit_at(Local::now().naive_local(), content, duration)
            .await
    }

    /// Like [`submit`](Self::submit) with an explicit submission time.
    pub async fn submit_at(
        &self,
        now: NaiveDateTime,
        content: String,
        duration: String,
    ) -> ServiceResult<LogEntry> {
        if content.is_empty() {
            return Err(ServiceError::Validation("content is required"));
        }

        let entry = LogEntry::new(content, duration, now);
        self.store.append(&entry, now.date()).await?;
        tracing::debug!(timestamp = %entry.timestamp, "record saved");
        Ok(entry)
    }

    pub async fn fetch_for_date(&self, date: NaiveDate) -> ServiceResult<Vec<LogEntry>> {
        Ok(self.store.read_all(date).await?)
    }

    /// Returns today's local date along with its entries.
    pub async fn fetch_today(&self) -> ServiceResult<(NaiveDate, Vec<LogEntry>)> {
        let today = Local::now().date_naive();
        let entries = self.fetch_for_date(today).await?;
        Ok((today, entries))
    }
}
