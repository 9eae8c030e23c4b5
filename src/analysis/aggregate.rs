//! Per-branch and overall accumulation of accepted records.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::record::Record;

/// Running (sum, count) pair for one branch, or for the whole sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Accum {
    pub sum: f64,
    pub count: usize,
}

impl Accum {
    fn add(&mut self, total: f64) {
        self.sum += total;
        self.count += 1;
    }

    /// Mean of the accumulated totals. `None` when nothing was accumulated;
    /// the caller must treat that as "no data", never divide through zero.
    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

/// Aggregation state over a finalized record stream.
///
/// Built by folding the records exactly once, in input order; within a
/// branch the accumulation order keeps floating point sums reproducible.
/// Branch keys are ordered so iteration, and the report built from it, is
/// deterministic.
#[derive(Debug, Default, Serialize)]
pub struct Summary {
    pub branches: BTreeMap<String, Accum>,
    pub grand: Accum,
}

impl Summary {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut summary = Self::default();
        for record in records {
            summary.record(record);
        }
        summary
    }

    /// Accumulates one accepted record's declared total.
    pub fn record(&mut self, record: &Record) {
        self.branches
            .entry(record.branch.clone())
            .or_default()
            .add(record.total);
        self.grand.add(record.total);
    }

    pub fn branch_average(&self, code: &str) -> Option<f64> {
        self.branches.get(code).and_then(|a| a.average())
    }

    pub fn overall_average(&self) -> Option<f64> {
        self.grand.average()
    }
}
