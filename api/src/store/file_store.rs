use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use common::LogEntry;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::{encode_line, parse_lines, LogStore};
use crate::error::{StoreError, StoreResult};
use crate::utils::{day_key, month_key};

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Stores entries under `{root}/{YYYY-MM}/{YYYY-MM-DD}.log`.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn month_dir(&self, date: NaiveDate) -> PathBuf {
        self.root.join(month_key(date))
    }

    pub fn day_file(&self, date: NaiveDate) -> PathBuf {
        self.month_dir(date).join(format!("{}.log", day_key(date)))
    }

    /// Creates the root directory if it is missing.
    pub async fn ensure_root(&self) -> StoreResult<()> {
        create_dir(&self.root).await
    }
}

async fn create_dir(path: &Path) -> StoreResult<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(DIR_MODE);

    builder
        .create(path)
        .await
        .map_err(|source| StoreError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
}

#[axum::async_trait]
impl LogStore for FileStore {
    async fn append(&self, entry: &LogEntry, date: NaiveDate) -> StoreResult<()> {
        create_dir(&self.month_dir(date)).await?;

        let path = self.day_file(date);
        let mut options = fs::OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        options.mode(FILE_MODE);

        let mut file = options
            .open(&path)
            .await
            .map_err(|source| StoreError::Open {
                path: path.clone(),
                source,
            })?;

        let line = encode_line(entry);
        let written = match file.write_all(line.as_bytes()).await {
            Ok(()) => file.flush().await,
            Err(err) => Err(err),
        };
        written.map_err(|source| StoreError::Write { path, source })
    }

    async fn read_all(&self, date: NaiveDate) -> StoreResult<Vec<LogEntry>> {
        let path = self.day_file(date);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        Ok(parse_lines(&String::from_utf8_lossy(&bytes)))
    }
}
