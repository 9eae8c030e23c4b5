//! Spreadsheet input: turns a sheet file into rows of text cells.
//!
//! Excel-family files (xlsx, xls, xlsb, ods) go through calamine; `.csv`
//! goes through the csv crate. Only the first sheet of a workbook is read.
//! Failures here are fatal to the run; row-level policy lives in the
//! validator, not the loader.

use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

/// Loads every row of the first sheet as text cells. The header row is
/// included; the pipeline skips it by position.
pub fn load_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("csv") => load_csv(path),
        _ => load_workbook(path),
    }
}

fn load_csv(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file {}", path.display()))?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(rows = rows.len(), "CSV sheet loaded");
    Ok(rows)
}

fn load_workbook(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open spreadsheet {}", path.display()))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let Some(first) = sheet_names.first() else {
        bail!("Spreadsheet {} contains no sheets", path.display());
    };

    let range = workbook
        .worksheet_range(first)
        .with_context(|| format!("Failed to read sheet '{first}'"))?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    debug!(sheet = %first, rows = rows.len(), "Workbook sheet loaded");
    Ok(rows)
}

/// Renders a workbook cell the way it reads in the sheet: integral floats
/// without a decimal point, booleans as TRUE/FALSE, errors as `#Code`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{}", n)
            }
        }
        Data::Int(n) => n.to_string(),
        Data::Bool(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
        Data::Error(e) => format!("#{:?}", e),
        Data::DateTime(dt) => format!("{}", dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}
