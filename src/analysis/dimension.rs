//! The scoring dimensions a sheet is ranked by.

use serde::Serialize;

use crate::record::Record;

/// One of the five score components, or the declared total.
///
/// Each dimension is a pure projection of a [`Record`]; rankings iterate
/// [`Dimension::ALL`] so the six listings share no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Quiz,
    MidSem,
    LabTest,
    WeeklyLabs,
    Compre,
    Total,
}

impl Dimension {
    /// All dimensions, in report order.
    pub const ALL: [Dimension; 6] = [
        Dimension::Quiz,
        Dimension::MidSem,
        Dimension::LabTest,
        Dimension::WeeklyLabs,
        Dimension::Compre,
        Dimension::Total,
    ];

    /// Report heading, with the marks ceiling where one exists.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Quiz => "Quiz (30)",
            Dimension::MidSem => "Mid-Sem (75)",
            Dimension::LabTest => "Lab Test (60)",
            Dimension::WeeklyLabs => "Weekly Labs",
            Dimension::Compre => "Compre (105)",
            Dimension::Total => "Total (300)",
        }
    }

    /// Projects a record onto this dimension.
    pub fn score(self, record: &Record) -> f64 {
        match self {
            Dimension::Quiz => record.quiz,
            Dimension::MidSem => record.mid_sem,
            Dimension::LabTest => record.lab_test,
            Dimension::WeeklyLabs => record.weekly_labs,
            Dimension::Compre => record.compre,
            Dimension::Total => record.total,
        }
    }
}
