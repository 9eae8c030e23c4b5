//! Branch classification for campus IDs.
//!
//! A campus ID like `2024A7PS0042G` carries its cohort and programme in the
//! leading six characters. Those six characters are the classification key;
//! everything after them is ignored here.

use std::collections::HashMap;

/// Number of leading characters of a campus ID that form the classification key.
pub const PREFIX_LEN: usize = 6;

/// Immutable mapping from classification key to human-readable branch label.
///
/// Built once at startup and passed into the validator and report explicitly,
/// so tests can substitute their own tables.
#[derive(Debug, Clone)]
pub struct BranchTable {
    entries: HashMap<String, String>,
}

impl BranchTable {
    /// The production cohort table.
    pub fn builtin() -> Self {
        Self::from_entries([
            ("2021A2", "Civil 2021"),
            ("2024A3", "EEE 2024"),
            ("2024A4", "Mechanical 2024"),
            ("2024A5", "Pharma 2024"),
            ("2024A7", "CSE 2024"),
            ("2024A8", "ENI 2024"),
            ("2024AA", "ECE 2024"),
            ("2024AD", "MnC 2024"),
            ("2024B1", "MSc Biology"),
            ("2020B5", "MSc Physics 2020"),
            ("2021A7", "CSE 2021"),
            ("2022A7", "CSE 2022"),
            ("2023A7", "CSE 2023"),
            ("2021A8", "ENI 2021"),
            ("2021AA", "ECE 2021"),
            ("2021B1", "Msc Biology 2021"),
            ("2021B4", "Msc Maths 2021"),
            ("2021B5", "Msc Physics 2021"),
            ("2022A1", "Chemical 2022"),
            ("2022A2", "Civil 2022"),
            ("2022A3", "EEE 2022"),
            ("2022A4", "Mechanical 2022"),
            ("2022AA", "ECE 2022"),
            ("2022B2", "MSc Chemistry 2022"),
            ("2023A5", "Pharma 2023"),
            ("2023A8", "ENI 2023"),
        ])
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Resolves a campus ID to its branch code.
    ///
    /// Returns the canonical key held by the table, or `None` when the ID is
    /// shorter than [`PREFIX_LEN`] or its prefix is not a known cohort.
    pub fn classify(&self, campus_id: &str) -> Option<&str> {
        let key = campus_id.get(..PREFIX_LEN)?;
        self.entries.get_key_value(key).map(|(k, _)| k.as_str())
    }

    /// Human-readable label for a branch code.
    pub fn label(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BranchTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_prefix() {
        let table = BranchTable::builtin();
        assert_eq!(table.classify("2024A7PS0042G"), Some("2024A7"));
        assert_eq!(table.classify("2021A2TS0007P"), Some("2021A2"));
    }

    #[test]
    fn test_classify_exact_length_id() {
        let table = BranchTable::builtin();
        assert_eq!(table.classify("2022B2"), Some("2022B2"));
    }

    #[test]
    fn test_classify_unknown_prefix() {
        let table = BranchTable::builtin();
        assert_eq!(table.classify("1999XXPS0001G"), None);
    }

    #[test]
    fn test_classify_short_id() {
        let table = BranchTable::builtin();
        assert_eq!(table.classify("2024A"), None);
        assert_eq!(table.classify(""), None);
    }

    #[test]
    fn test_classify_uses_only_leading_six_characters() {
        // Suffix past the key must not affect the lookup
        let table = BranchTable::builtin();
        assert_eq!(table.classify("2024A7garbage"), Some("2024A7"));
    }

    #[test]
    fn test_classify_with_substituted_table() {
        let table = BranchTable::from_entries([("TESTA1", "Test Branch")]);
        assert_eq!(table.classify("TESTA1PS0001G"), Some("TESTA1"));
        assert_eq!(table.classify("2024A7PS0042G"), None);
    }

    #[test]
    fn test_label_resolution() {
        let table = BranchTable::builtin();
        assert_eq!(table.label("2024A7"), Some("CSE 2024"));
        assert_eq!(table.label("9999ZZ"), None);
    }

    #[test]
    fn test_builtin_table_size() {
        assert_eq!(BranchTable::builtin().len(), 26);
    }
}
