//! Free-text row search.
//!
//! A row matches when any of its cells contains the search term as a
//! case-insensitive substring of the cell's display text. Matching is done on
//! lowercased text with a precompiled `memmem` finder.

use super::dataset::DataRow;
use super::types::CellValue;
use memchr::memmem;

/// Compiled, case-insensitive search term.
#[derive(Debug, Clone)]
pub struct RowMatcher {
    finder: memmem::Finder<'static>,
}

impl RowMatcher {
    /// Compile a term, or `None` when it is empty or whitespace-only.
    pub fn new(term: &str) -> Option<Self> {
        if term.trim().is_empty() {
            return None;
        }
        let needle = term.to_lowercase();
        Some(RowMatcher {
            finder: memmem::Finder::new(needle.as_bytes()).into_owned(),
        })
    }

    /// Whether one cell contains the term. Empty cells never match.
    pub fn matches_cell(&self, cell: &CellValue) -> bool {
        if cell.is_empty() {
            return false;
        }
        let haystack = cell.display_text().to_lowercase();
        self.finder.find(haystack.as_bytes()).is_some()
    }

    /// Whether any cell of the row contains the term.
    pub fn matches(&self, row: &DataRow) -> bool {
        row.cells().iter().any(|cell| self.matches_cell(cell))
    }
}

/// Rows containing `term`, in their original order.
///
/// An empty or whitespace-only term returns every row. The input is never
/// modified; the result borrows from it.
pub fn filter<'a>(rows: &'a [DataRow], term: &str) -> Vec<&'a DataRow> {
    match RowMatcher::new(term) {
        None => rows.iter().collect(),
        Some(matcher) => {
            let matched: Vec<&DataRow> = rows.iter().filter(|row| matcher.matches(row)).collect();
            tracing::debug!(term, total = rows.len(), matched = matched.len(), "filtered rows");
            matched
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rows(values: &[&[&str]]) -> Vec<DataRow> {
        values.iter().map(|row| DataRow::from_iter(row.iter().copied())).collect()
    }

    #[test]
    fn test_case_insensitive_substring() {
        let data = rows(&[&["Ana", "30"], &["Banana", "12"], &["Cy", "40"]]);
        let result = filter(&data, "ana");
        assert_eq!(result, vec![&data[0], &data[1]]);

        let result = filter(&data, "ANA");
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_blank_term_is_identity() {
        let data = rows(&[&["a"], &["b"]]);
        assert_eq!(filter(&data, ""), vec![&data[0], &data[1]]);
        assert_eq!(filter(&data, "  \t"), vec![&data[0], &data[1]]);
    }

    #[test]
    fn test_term_whitespace_is_significant() {
        let data = rows(&[&["New York"], &["Newark"]]);
        assert_eq!(filter(&data, "new "), vec![&data[0]]);
    }

    #[test]
    fn test_empty_cells_never_match() {
        let data = vec![DataRow::new(vec![CellValue::Empty, CellValue::Empty])];
        assert!(filter(&data, "null").is_empty());
        assert!(filter(&data, "a").is_empty());
    }

    #[test]
    fn test_typed_cells_match_display_text() {
        let data = vec![
            DataRow::new(vec![CellValue::Number(25.5)]),
            DataRow::new(vec![CellValue::Bool(true)]),
            DataRow::new(vec![CellValue::Number(3.0)]),
        ];
        assert_eq!(filter(&data, "25.5"), vec![&data[0]]);
        assert_eq!(filter(&data, "TRUE"), vec![&data[1]]);
        assert_eq!(filter(&data, "3.0"), Vec::<&DataRow>::new());
    }

    #[test]
    fn test_unicode_case_folding() {
        let data = rows(&[&["ÉCOLE"], &["ecole"]]);
        assert_eq!(filter(&data, "éco"), vec![&data[0]]);
    }

    fn data_strategy() -> impl Strategy<Value = Vec<DataRow>> {
        prop::collection::vec(
            prop::collection::vec(
                prop_oneof![
                    Just(CellValue::Empty),
                    "[a-cA-C ]{0,6}".prop_map(CellValue::String),
                ],
                1..4,
            )
            .prop_map(DataRow::new),
            0..30,
        )
    }

    proptest! {
        #[test]
        fn prop_blank_term_identity(data in data_strategy(), term in "[ \t]{0,3}") {
            let result = filter(&data, &term);
            prop_assert_eq!(result, data.iter().collect::<Vec<_>>());
        }

        #[test]
        fn prop_filter_is_ordered_subset(data in data_strategy(), term in "[a-cA-C]{1,2}") {
            let result = filter(&data, &term);
            prop_assert!(result.len() <= data.len());

            // Order preserved: matched rows appear as a subsequence of the input
            let mut cursor = data.iter().map(|row| row as *const DataRow);
            for row in &result {
                let ptr = *row as *const DataRow;
                prop_assert!(cursor.any(|candidate| candidate == ptr));
            }

            // Deterministic
            prop_assert_eq!(filter(&data, &term), result);
        }
    }
}
