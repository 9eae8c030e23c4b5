//! Report assembly: ranked components and branch-wise averages.
//!
//! Builds a serializable payload from the finalized record set, then renders
//! it as the two-section text report or as JSON. Scores and averages are
//! displayed to two decimal places.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::aggregate::Summary;
use crate::analysis::dimension::Dimension;
use crate::analysis::rank::top_n;
use crate::branch::BranchTable;
use crate::record::Record;

/// One ranked line of a dimension section.
#[derive(Debug, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub emp_id: String,
    pub score: f64,
}

/// One dimension's top-N listing.
#[derive(Debug, Serialize)]
pub struct DimensionRanking {
    pub dimension: Dimension,
    pub label: &'static str,
    pub entries: Vec<RankedEntry>,
}

/// One branch's average line.
#[derive(Debug, Serialize)]
pub struct BranchAverage {
    pub code: String,
    pub label: Option<String>,
    pub average: f64,
}

/// The full report payload. Text and JSON renderings are built from this.
#[derive(Debug, Serialize)]
pub struct ReportData {
    pub generated_at: DateTime<Utc>,
    pub top: usize,
    pub rankings: Vec<DimensionRanking>,
    pub overall_average: Option<f64>,
    pub branch_averages: Vec<BranchAverage>,
}

impl ReportData {
    /// Assembles the report payload: one ranking per dimension, then the
    /// overall and branch-wise averages in sorted branch-code order.
    pub fn build(records: &[Record], summary: &Summary, table: &BranchTable, top: usize) -> Self {
        let rankings = Dimension::ALL
            .into_iter()
            .map(|dimension| DimensionRanking {
                dimension,
                label: dimension.label(),
                entries: top_n(records, dimension, top)
                    .into_iter()
                    .enumerate()
                    .map(|(i, record)| RankedEntry {
                        rank: i + 1,
                        emp_id: record.emp_id.clone(),
                        score: dimension.score(record),
                    })
                    .collect(),
            })
            .collect();

        let branch_averages = summary
            .branches
            .iter()
            .filter_map(|(code, accum)| {
                accum.average().map(|average| BranchAverage {
                    code: code.clone(),
                    label: table.label(code).map(str::to_string),
                    average,
                })
            })
            .collect();

        ReportData {
            generated_at: Utc::now(),
            top,
            rankings,
            overall_average: summary.overall_average(),
            branch_averages,
        }
    }

    /// Renders the two-section textual report.
    pub fn render(&self) -> String {
        let mut lines = Vec::new();

        lines.push("======================================".to_string());
        lines.push(format!("Top {} Students for Each Component", self.top));

        for ranking in &self.rankings {
            lines.push(String::new());
            lines.push(format!("Top {} for {}:", self.top, ranking.label));
            for entry in &ranking.entries {
                lines.push(format!(
                    "{}. EmpID: {} - {:.2}",
                    entry.rank, entry.emp_id, entry.score
                ));
            }
        }

        lines.push(String::new());
        lines.push("======================================".to_string());
        lines.push("Overall and Branch-Wise Averages".to_string());

        match self.overall_average {
            Some(avg) => lines.push(format!("Overall Average Marks: {:.2}", avg)),
            None => lines.push("No accepted records; nothing to average.".to_string()),
        }

        for branch in &self.branch_averages {
            let label = branch.label.as_deref().unwrap_or("unknown");
            lines.push(format!(
                "Branch {} ({}) Average Marks: {:.2}",
                branch.code, label, branch.average
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(emp_id: &str, branch: &str, quiz: f64, total: f64) -> Record {
        Record {
            emp_id: emp_id.to_string(),
            branch: branch.to_string(),
            quiz,
            mid_sem: 0.0,
            lab_test: 0.0,
            weekly_labs: 0.0,
            compre: 0.0,
            total,
        }
    }

    fn build(records: &[Record], top: usize) -> ReportData {
        let summary = Summary::from_records(records);
        ReportData::build(records, &summary, &BranchTable::builtin(), top)
    }

    #[test]
    fn test_build_produces_six_rankings() {
        let records = [record("E001", "2024A7", 20.0, 250.0)];
        let data = build(&records, 3);

        assert_eq!(data.rankings.len(), 6);
        assert_eq!(data.rankings[0].dimension, Dimension::Quiz);
        assert_eq!(data.rankings[5].dimension, Dimension::Total);
    }

    #[test]
    fn test_render_ranked_lines_two_decimals() {
        let records = [
            record("E001", "2024A7", 20.0, 250.0),
            record("E002", "2024A7", 25.5, 270.0),
        ];
        let text = build(&records, 3).render();

        assert!(text.contains("Top 3 for Quiz (30):"));
        assert!(text.contains("1. EmpID: E002 - 25.50"));
        assert!(text.contains("2. EmpID: E001 - 20.00"));
    }

    #[test]
    fn test_render_branch_averages_sorted_and_labeled() {
        let records = [
            record("E001", "2024A7", 20.0, 260.0),
            record("E002", "2024A7", 20.0, 240.0),
            record("E003", "2021A2", 20.0, 200.0),
        ];
        let text = build(&records, 3).render();

        assert!(text.contains("Overall Average Marks: 233.33"));
        let civil = text
            .find("Branch 2021A2 (Civil 2021) Average Marks: 200.00")
            .expect("civil branch line");
        let cse = text
            .find("Branch 2024A7 (CSE 2024) Average Marks: 250.00")
            .expect("cse branch line");
        assert!(civil < cse);
    }

    #[test]
    fn test_render_empty_sheet_has_no_data_line() {
        let text = build(&[], 3).render();
        assert!(text.contains("No accepted records; nothing to average."));
        assert!(!text.contains("NaN"));
    }

    #[test]
    fn test_top_parameter_controls_headings_and_depth() {
        let records = [
            record("E001", "2024A7", 10.0, 100.0),
            record("E002", "2024A7", 20.0, 200.0),
        ];
        let data = build(&records, 1);

        assert!(data.render().contains("Top 1 for Quiz (30):"));
        for ranking in &data.rankings {
            assert_eq!(ranking.entries.len(), 1);
        }
    }

    #[test]
    fn test_json_serialization_round_trips_fields() {
        let records = [record("E001", "2024A7", 20.0, 250.0)];
        let json = serde_json::to_value(build(&records, 3)).unwrap();

        assert_eq!(json["top"], 3);
        assert_eq!(json["rankings"][0]["dimension"], "quiz");
        assert_eq!(json["overall_average"], 250.0);
        assert_eq!(json["branch_averages"][0]["code"], "2024A7");
    }
}
