//! Dataset Module
//!
//! Rows of a CSV file, read once on first use and kept in memory.

use std::path::{Path, PathBuf};

use tokio::sync::OnceCell;
use tracing::info;

use crate::error::{CacheError, Result};
use crate::pagination::index_range;

/// One CSV record, field by field.
pub type Row = Vec<String>;

// == Dataset ==
/// Lazily loaded CSV rows with the header row excluded.
#[derive(Debug)]
pub struct Dataset {
    /// Source file, `None` for in-memory datasets
    path: Option<PathBuf>,
    rows: OnceCell<Vec<Row>>,
}

impl Dataset {
    // == Constructors ==
    /// Creates a dataset backed by the CSV file at `path`. Nothing is read yet.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            rows: OnceCell::new(),
        }
    }

    /// Creates a dataset from rows already in memory.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self {
            path: None,
            rows: OnceCell::from(rows),
        }
    }

    // == Rows ==
    /// Returns all rows, loading the file on first call.
    pub async fn rows(&self) -> Result<&[Row]> {
        let rows = self
            .rows
            .get_or_try_init(|| async {
                match &self.path {
                    Some(path) => load_csv(path).await,
                    None => Ok(Vec::new()),
                }
            })
            .await?;
        Ok(rows.as_slice())
    }

    // == Get Page ==
    /// Returns the rows of a 1-indexed page.
    ///
    /// Pages reaching past the last row come back empty. `page_size` must be
    /// positive.
    pub async fn get_page(&self, page: i64, page_size: usize) -> Result<Vec<Row>> {
        if page_size == 0 {
            return Err(CacheError::InvalidRequest(
                "page_size must be a positive integer".to_string(),
            ));
        }

        let rows = self.rows().await?;
        let (start, end) = index_range(page, page_size);
        if end > rows.len() {
            return Ok(Vec::new());
        }

        Ok(rows[start..end].to_vec())
    }
}

async fn load_csv(path: &Path) -> Result<Vec<Row>> {
    let content = tokio::fs::read_to_string(path).await?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows: Vec<Row> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}
