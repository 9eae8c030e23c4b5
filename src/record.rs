//! The typed examination record produced by validation.

/// One student's scores, as accepted from a sheet row.
///
/// Immutable once constructed. `branch` is always a code resolved by
/// [`crate::branch::BranchTable`]; an unclassified row never becomes a
/// `Record`. `total` is the total *declared* in the sheet; aggregation and
/// ranking consume it even when it disagrees with the component sum.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub emp_id: String,
    pub branch: String,
    pub quiz: f64,
    pub mid_sem: f64,
    pub lab_test: f64,
    pub weekly_labs: f64,
    pub compre: f64,
    pub total: f64,
}

impl Record {
    /// Sum of all five score components, including the comprehensive exam.
    pub fn computed_total(&self) -> f64 {
        self.pre_compre() + self.compre
    }

    /// Sum of the four pre-examination components.
    pub fn pre_compre(&self) -> f64 {
        self.quiz + self.mid_sem + self.lab_test + self.weekly_labs
    }
}
