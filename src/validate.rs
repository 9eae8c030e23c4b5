//! Row validation: raw text cells → typed records.
//!
//! Each data row is read by fixed position, classified, and cross-checked
//! against its declared total. Rows that cannot be classified are skipped
//! with a diagnostic; rows whose totals disagree beyond tolerance are kept
//! but flagged. Diagnostics never change the outcome beyond what the return
//! value already carries.

use tracing::{debug, warn};

use crate::branch::BranchTable;
use crate::record::Record;

/// Minimum number of cells a row must have to count as a data row.
pub const MIN_FIELDS: usize = 10;

/// Maximum absolute difference between the computed and declared totals
/// before a discrepancy is flagged. Covers floating point noise in sheets.
pub const TOLERANCE: f64 = 0.01;

// 0-indexed cell positions consumed from each row.
const COL_EMP_ID: usize = 2;
const COL_CAMPUS_ID: usize = 3;
const COL_QUIZ: usize = 4;
const COL_MID_SEM: usize = 5;
const COL_LAB_TEST: usize = 6;
const COL_WEEKLY_LABS: usize = 7;
const COL_COMPRE: usize = 9;
const COL_TOTAL: usize = 10;

/// Declared vs. computed total disagreement on an accepted record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Discrepancy {
    /// Total computed from the score components.
    pub expected: f64,
    /// Total declared in the sheet.
    pub found: f64,
}

/// Why a row produced no record.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// Fewer than [`MIN_FIELDS`] cells; header or malformed row shape.
    TooFewFields { found: usize },
    /// Campus ID did not resolve to a known branch.
    UnknownBranch { campus_id: String },
}

/// Outcome of validating a single row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// Record accepted. `discrepancy` is set when the totals check failed;
    /// the record is still kept and counts with its declared total.
    Accepted {
        record: Record,
        discrepancy: Option<Discrepancy>,
    },
    Rejected(Rejection),
}

fn cell<'a>(row: &'a [String], idx: usize) -> &'a str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Numeric cell read. A cell that fails to parse silently reads as 0.0.
fn numeric(row: &[String], idx: usize) -> f64 {
    cell(row, idx).parse().unwrap_or(0.0)
}

fn within_tolerance(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE
}

/// Validates one raw row at the given 1-based sheet position.
///
/// Emits a `warn!` diagnostic when the campus ID does not classify and when
/// the totals check fails.
pub fn validate_row(row: &[String], position: usize, table: &BranchTable) -> RowOutcome {
    if row.len() < MIN_FIELDS {
        debug!(position, cells = row.len(), "Skipping short row");
        return RowOutcome::Rejected(Rejection::TooFewFields { found: row.len() });
    }

    let emp_id = cell(row, COL_EMP_ID).to_string();
    let campus_id = cell(row, COL_CAMPUS_ID);

    let Some(branch) = table.classify(campus_id) else {
        warn!(
            "Skipping row {}: campus ID {:?} does not match a known branch",
            position, campus_id
        );
        return RowOutcome::Rejected(Rejection::UnknownBranch {
            campus_id: campus_id.to_string(),
        });
    };

    let record = Record {
        emp_id,
        branch: branch.to_string(),
        quiz: numeric(row, COL_QUIZ),
        mid_sem: numeric(row, COL_MID_SEM),
        lab_test: numeric(row, COL_LAB_TEST),
        weekly_labs: numeric(row, COL_WEEKLY_LABS),
        compre: numeric(row, COL_COMPRE),
        total: numeric(row, COL_TOTAL),
    };

    let computed = record.computed_total();
    let discrepancy = if within_tolerance(computed, record.total) {
        None
    } else {
        warn!(
            "Discrepancy in total marks for EmpID {}: expected {:.2}, found {:.2}",
            record.emp_id, computed, record.total
        );
        Some(Discrepancy {
            expected: computed,
            found: record.total,
        })
    };

    RowOutcome::Accepted {
        record,
        discrepancy,
    }
}

/// Result of validating a whole sheet.
#[derive(Debug, Default)]
pub struct Batch {
    pub records: Vec<Record>,
    /// Rows dropped for having fewer than [`MIN_FIELDS`] cells.
    pub malformed: usize,
    /// Rows dropped because their campus ID did not classify.
    pub unclassified: usize,
    /// Accepted records whose totals check failed.
    pub flagged: usize,
}

/// Folds every data row of a sheet through [`validate_row`], in input order.
///
/// Row 0 is the header and is always skipped. Positions in diagnostics are
/// 1-based sheet rows, so the first data row reports as row 2.
pub fn validate_rows(rows: &[Vec<String>], table: &BranchTable) -> Batch {
    let mut batch = Batch::default();

    for (index, row) in rows.iter().enumerate() {
        if index == 0 {
            continue;
        }

        match validate_row(row, index + 1, table) {
            RowOutcome::Accepted {
                record,
                discrepancy,
            } => {
                if discrepancy.is_some() {
                    batch.flagged += 1;
                }
                batch.records.push(record);
            }
            RowOutcome::Rejected(Rejection::TooFewFields { .. }) => batch.malformed += 1,
            RowOutcome::Rejected(Rejection::UnknownBranch { .. }) => batch.unclassified += 1,
        }
    }

    batch
}
