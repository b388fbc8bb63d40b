//! Lead list export: plain CSV, wrapped JSON and an annotated outreach CSV.

mod error;
mod exporter;
mod fields;
mod writers;

pub use error::ExportError;
pub use exporter::LeadExporter;
pub use fields::{field, opportunity_notes, DEFAULT_COLUMNS, OUTREACH_COLUMNS};
pub use writers::{write_csv, write_json, write_outreach_csv, LeadDocument};
