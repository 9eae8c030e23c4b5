//! CSV persistence for accepted records.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use tracing::debug;

use crate::record::Record;

/// One exported CSV row: a record plus the export timestamp.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    exported_at: DateTime<Utc>,
    emp_id: &'a str,
    branch: &'a str,
    quiz: f64,
    mid_sem: f64,
    lab_test: f64,
    weekly_labs: f64,
    compre: f64,
    total: f64,
}

impl<'a> ExportRow<'a> {
    fn new(record: &'a Record, exported_at: DateTime<Utc>) -> Self {
        ExportRow {
            exported_at,
            emp_id: &record.emp_id,
            branch: &record.branch,
            quiz: record.quiz,
            mid_sem: record.mid_sem,
            lab_test: record.lab_test,
            weekly_labs: record.weekly_labs,
            compre: record.compre,
            total: record.total,
        }
    }
}

/// Appends accepted records as rows to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_records(path: &str, records: &[Record]) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(
        path,
        file_exists,
        records = records.len(),
        "Appending CSV records"
    );

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    let exported_at = Utc::now();
    for record in records {
        writer.serialize(ExportRow::new(record, exported_at))?;
    }
    writer.flush()?;

    Ok(())
}
