use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Business;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scrape file JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The on-disk result of one discovery run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeFile {
    pub scraped_at: DateTime<Utc>,
    pub count: usize,
    pub businesses: Vec<Business>,
}

impl ScrapeFile {
    #[must_use]
    pub fn new(businesses: Vec<Business>, scraped_at: DateTime<Utc>) -> Self {
        Self {
            scraped_at,
            count: businesses.len(),
            businesses,
        }
    }

    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] when the document is not a scrape file.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if serialization or the write fails.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), SnapshotError> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`SnapshotError`] on I/O or JSON failure.
    pub fn read_from_path(path: &Path) -> Result<Self, SnapshotError> {
        let file = File::open(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Write the file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] on I/O or JSON failure.
    pub fn write_to_path(&self, path: &Path) -> Result<(), SnapshotError> {
        let io_err = |source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer.flush().map_err(io_err)?;
        Ok(())
    }
}
