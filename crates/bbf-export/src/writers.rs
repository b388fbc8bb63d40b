use std::io::Write;

use bbf_db::BusinessRow;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ExportError;
use crate::fields::{field, opportunity_notes, OUTREACH_COLUMNS};

/// Body of a JSON lead export.
#[derive(Debug, Serialize)]
pub struct LeadDocument<'a> {
    pub exported_at: DateTime<Utc>,
    pub count: usize,
    pub leads: &'a [BusinessRow],
}

/// Writes a header of `columns` followed by one line per record.
///
/// Columns that are not record fields produce empty cells.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if writing fails.
pub fn write_csv<W, C>(writer: W, records: &[BusinessRow], columns: &[C]) -> Result<(), ExportError>
where
    W: Write,
    C: AsRef<str>,
{
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(columns.iter().map(<C as AsRef<str>>::as_ref))?;
    for record in records {
        csv.write_record(
            columns
                .iter()
                .map(|column| field(record, column.as_ref()).unwrap_or_default()),
        )?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// # Errors
///
/// Returns [`ExportError::Json`] if serialization or writing fails.
pub fn write_json<W: Write>(
    mut writer: W,
    records: &[BusinessRow],
    exported_at: DateTime<Utc>,
) -> Result<(), ExportError> {
    let document = LeadDocument {
        exported_at,
        count: records.len(),
        leads: records,
    };
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writer.flush().map_err(serde_json::Error::io)?;
    Ok(())
}

/// The outreach layout: contact columns plus an `opportunity_notes` cell.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if writing fails.
pub fn write_outreach_csv<W: Write>(writer: W, records: &[BusinessRow]) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(OUTREACH_COLUMNS)?;
    for record in records {
        let notes = opportunity_notes(record);
        csv.write_record(OUTREACH_COLUMNS.iter().map(|column| match *column {
            "opportunity_notes" => notes.clone(),
            other => field(record, other).unwrap_or_default(),
        }))?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}
