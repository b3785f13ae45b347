use std::collections::HashSet;
use tracing::debug;

use crate::errors::{GridError, GridResult};
use crate::trie::WordTrie;
use crate::validate::validate_rows;

/// A validated, immutable character grid with its column projection.
///
/// Rows are validated once at construction; the columns are derived at the
/// same time (`columns[j][i] == rows[i][j]`) so each search scans plain
/// strings in both directions. The matrix never changes after construction,
/// so concurrent callers may share it by reference as long as each call
/// brings its own trie.
#[derive(Debug, Clone)]
pub struct WordMatrix {
    rows: Vec<String>,
    columns: Vec<String>,
}

impl WordMatrix {
    /// Builds a matrix from plain string rows.
    ///
    /// Fails with [`GridError::InvalidGrid`] aggregating every structural
    /// violation when the rows do not form a valid grid.
    pub fn new<I, S>(rows: I) -> GridResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<Option<String>> = rows.into_iter().map(|r| Some(r.into())).collect();
        Self::from_sparse(Some(rows))
    }

    /// Builds a matrix from raw input where the whole grid, or individual
    /// rows, may be absent.
    ///
    /// This is the full construction contract: all violations are collected
    /// and reported together in one error, space-joined in the validator's
    /// stable order.
    pub fn from_sparse(rows: Option<Vec<Option<String>>>) -> GridResult<Self> {
        let violations = validate_rows(rows.as_deref());
        if !violations.is_empty() {
            let message = violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            return Err(GridError::invalid_grid(message));
        }

        // Validation guarantees every row is present, non-empty, and of
        // equal character length.
        let rows: Vec<String> = rows
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .collect();
        let columns = project_columns(&rows);

        debug!(
            "Constructed {}x{} word matrix",
            rows.len(),
            columns.len()
        );
        Ok(Self { rows, columns })
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Scans every row in row order, then every column in column order, and
    /// returns the union of words the trie matched anywhere.
    ///
    /// A word found on several lines or at several offsets contributes one
    /// entry; the result is a set.
    pub fn search(&self, trie: &WordTrie) -> HashSet<String> {
        let mut found = HashSet::new();
        for line in self.rows.iter().chain(self.columns.iter()) {
            found.extend(trie.scan(line));
        }
        debug!("Matrix search matched {} word(s)", found.len());
        found
    }

    /// Convenience over [`crate::query::find`] for a plain string stream.
    pub fn find<I, S>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<Option<String>> = words.into_iter().map(|w| Some(w.into())).collect();
        crate::query::find(self, Some(&words))
    }
}

/// Derives the column projection of equal-length rows.
fn project_columns(rows: &[String]) -> Vec<String> {
    let width = rows.first().map_or(0, |row| row.chars().count());
    let mut columns = vec![String::with_capacity(rows.len()); width];
    for row in rows {
        for (j, ch) in row.chars().enumerate() {
            columns[j].push(ch);
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&str]) -> WordMatrix {
        WordMatrix::new(rows.iter().copied()).unwrap()
    }

    #[test]
    fn test_construct_valid_grid() {
        let m = matrix(&["abcd", "efgh", "ijkl"]);
        assert_eq!(m.row_count(), 3);
        assert_eq!(m.column_count(), 4);
        assert_eq!(m.rows(), ["abcd", "efgh", "ijkl"]);
        assert_eq!(m.columns(), ["aei", "bfj", "cgk", "dhl"]);
    }

    #[test]
    fn test_construct_missing_grid() {
        let err = WordMatrix::from_sparse(None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid grid: grid is null/missing");
    }

    #[test]
    fn test_construct_aggregates_violations_in_order() {
        let rows = vec![Some("abc".to_string()), Some("ab".to_string()), None];
        let err = WordMatrix::from_sparse(Some(rows)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid grid: inconsistent row lengths contains null rows"
        );
    }

    #[test]
    fn test_search_rows_and_columns() {
        let m = matrix(&["cat", "owl", "wry"]);
        let mut trie = WordTrie::new();
        trie.insert("cat");
        trie.insert("cow"); // first column
        trie.insert("dog");

        let found = m.search(&trie);
        assert!(found.contains("cat"));
        assert!(found.contains("cow"));
        assert!(!found.contains("dog"));
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_search_single_row_grid() {
        let m = matrix(&["abcdef"]);
        let mut trie = WordTrie::new();
        trie.insert("cde");
        assert!(m.search(&trie).contains("cde"));
    }

    #[test]
    fn test_column_projection_with_multibyte_chars() {
        let m = matrix(&["日本", "語学"]);
        assert_eq!(m.columns(), ["日語", "本学"]);
    }
}
