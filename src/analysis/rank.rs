//! Top-N ranking per scoring dimension.

use crate::analysis::dimension::Dimension;
use crate::record::Record;

/// Returns up to `n` records ranked descending by `dimension`.
///
/// The sort is stable: records with equal scores keep their relative input
/// order, which makes report output reproducible. `n` larger than the
/// record count returns everything, ranked; `n == 0` returns nothing.
pub fn top_n<'a>(records: &'a [Record], dimension: Dimension, n: usize) -> Vec<&'a Record> {
    let mut ranked: Vec<&Record> = records.iter().collect();
    ranked.sort_by(|a, b| dimension.score(b).total_cmp(&dimension.score(a)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(emp_id: &str, quiz: f64, total: f64) -> Record {
        Record {
            emp_id: emp_id.to_string(),
            branch: "2024A7".to_string(),
            quiz,
            mid_sem: 0.0,
            lab_test: 0.0,
            weekly_labs: 0.0,
            compre: 0.0,
            total,
        }
    }

    fn ids(ranked: &[&Record]) -> Vec<String> {
        ranked.iter().map(|r| r.emp_id.clone()).collect()
    }

    #[test]
    fn test_ranks_descending() {
        let records = [
            record("E001", 10.0, 100.0),
            record("E002", 30.0, 300.0),
            record("E003", 20.0, 200.0),
        ];

        let ranked = top_n(&records, Dimension::Total, 3);
        assert_eq!(ids(&ranked), vec!["E002", "E003", "E001"]);
    }

    #[test]
    fn test_truncates_to_n() {
        let records = [
            record("E001", 10.0, 100.0),
            record("E002", 30.0, 300.0),
            record("E003", 20.0, 200.0),
        ];

        let ranked = top_n(&records, Dimension::Total, 2);
        assert_eq!(ids(&ranked), vec!["E002", "E003"]);
    }

    #[test]
    fn test_n_beyond_len_returns_all_ranked() {
        let records = [record("E001", 10.0, 100.0), record("E002", 30.0, 300.0)];
        let ranked = top_n(&records, Dimension::Total, 10);
        assert_eq!(ids(&ranked), vec!["E002", "E001"]);
    }

    #[test]
    fn test_n_zero_returns_nothing() {
        let records = [record("E001", 10.0, 100.0)];
        assert!(top_n(&records, Dimension::Total, 0).is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = [
            record("E001", 20.0, 100.0),
            record("E002", 20.0, 100.0),
            record("E003", 20.0, 100.0),
        ];

        let ranked = top_n(&records, Dimension::Quiz, 3);
        assert_eq!(ids(&ranked), vec!["E001", "E002", "E003"]);
    }

    #[test]
    fn test_reranking_own_output_is_idempotent() {
        let records = [
            record("E001", 20.0, 250.0),
            record("E002", 20.0, 250.0),
            record("E003", 30.0, 180.0),
        ];

        let first: Vec<Record> = top_n(&records, Dimension::Total, 2)
            .into_iter()
            .cloned()
            .collect();
        let second = top_n(&first, Dimension::Total, 2);

        assert_eq!(ids(&second), vec!["E001", "E002"]);
    }

    #[test]
    fn test_dimensions_rank_independently() {
        let records = [record("E001", 30.0, 100.0), record("E002", 10.0, 300.0)];

        let by_quiz = top_n(&records, Dimension::Quiz, 1);
        let by_total = top_n(&records, Dimension::Total, 1);

        assert_eq!(by_quiz[0].emp_id, "E001");
        assert_eq!(by_total[0].emp_id, "E002");
        // Source order untouched after both rankings
        assert_eq!(records[0].emp_id, "E001");
    }
}
