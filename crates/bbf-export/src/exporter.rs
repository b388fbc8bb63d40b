use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use bbf_db::BusinessRow;
use chrono::{Local, Utc};

use crate::error::ExportError;
use crate::fields::DEFAULT_COLUMNS;
use crate::writers::{write_csv, write_json, write_outreach_csv};

/// Writes lead files into one output directory.
#[derive(Debug, Clone)]
pub struct LeadExporter {
    output_dir: PathBuf,
}

impl LeadExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes `records` as CSV with `columns` (default lead columns when `None`).
    ///
    /// Returns the path written, `leads_<timestamp>.csv` unless `filename` is given.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the file cannot be created or written.
    pub fn export_csv(
        &self,
        records: &[BusinessRow],
        filename: Option<&str>,
        columns: Option<&[String]>,
    ) -> Result<PathBuf, ExportError> {
        let path = self.target(filename, "leads", "csv")?;
        let file = create(&path)?;
        match columns {
            Some(columns) => write_csv(file, records, columns)?,
            None => write_csv(file, records, &DEFAULT_COLUMNS)?,
        }
        log_export(&path, records.len(), "csv");
        Ok(path)
    }

    /// Writes `{exported_at, count, leads}` to `leads_<timestamp>.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the file cannot be created or written.
    pub fn export_json(
        &self,
        records: &[BusinessRow],
        filename: Option<&str>,
    ) -> Result<PathBuf, ExportError> {
        let path = self.target(filename, "leads", "json")?;
        write_json(create(&path)?, records, Utc::now())?;
        log_export(&path, records.len(), "json");
        Ok(path)
    }

    /// Writes the annotated outreach list to `outreach_<timestamp>.csv`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the file cannot be created or written.
    pub fn export_outreach(
        &self,
        records: &[BusinessRow],
        filename: Option<&str>,
    ) -> Result<PathBuf, ExportError> {
        let path = self.target(filename, "outreach", "csv")?;
        write_outreach_csv(create(&path)?, records)?;
        log_export(&path, records.len(), "outreach");
        Ok(path)
    }

    fn target(
        &self,
        filename: Option<&str>,
        prefix: &str,
        extension: &str,
    ) -> Result<PathBuf, ExportError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| ExportError::Io {
            path: self.output_dir.display().to_string(),
            source,
        })?;
        let name = filename.map_or_else(
            || {
                format!(
                    "{prefix}_{}.{extension}",
                    Local::now().format("%Y%m%d_%H%M%S")
                )
            },
            str::to_string,
        );
        Ok(self.output_dir.join(name))
    }
}

fn create(path: &Path) -> Result<BufWriter<File>, ExportError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| ExportError::Io {
            path: path.display().to_string(),
            source,
        })
}

fn log_export(path: &Path, count: usize, format: &str) {
    tracing::info!(path = %path.display(), count, format, "exported leads");
}
