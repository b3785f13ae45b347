//! Structural validation of raw grid input.
//!
//! Validation is collecting, not fail-fast: every applicable violation is
//! reported together so a caller sees the full shape of the problem in one
//! pass. The only short-circuits are the two cases where there is nothing
//! further to inspect (absent input and zero rows).

use std::fmt;

/// Maximum number of rows a grid may have
pub const MAX_ROWS: usize = 64;

/// Maximum number of columns a grid may have
pub const MAX_COLUMNS: usize = 64;

/// A single structural violation found in raw grid input.
///
/// `Display` renders the stable message surfaced through
/// [`GridError::InvalidGrid`](crate::errors::GridError); callers detect
/// individual violations by substring containment on the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    MissingGrid,
    EmptyGrid,
    TooManyRows,
    TooManyColumns,
    InconsistentRowLengths,
    NullRows,
    EmptyRows,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Violation::MissingGrid => "grid is null/missing",
            Violation::EmptyGrid => "grid is empty",
            Violation::TooManyRows => "too many rows",
            Violation::TooManyColumns => "too many columns",
            Violation::InconsistentRowLengths => "inconsistent row lengths",
            Violation::NullRows => "contains null rows",
            Violation::EmptyRows => "contains empty rows",
        };
        f.write_str(msg)
    }
}

/// Checks raw rows against the structural grid constraints.
///
/// Returns every violation found, in a deterministic order: row count,
/// column count, row-length consistency, null rows, empty rows. An empty
/// vector means the rows form a valid grid.
///
/// Row and column lengths are measured in characters, not bytes, matching
/// how the column projection is derived.
///
/// When every row is absent or empty there is no row left to determine a
/// column count from; no dedicated violation is raised for that beyond the
/// null/empty-row messages already produced.
pub fn validate_rows(rows: Option<&[Option<String>]>) -> Vec<Violation> {
    let rows = match rows {
        None => return vec![Violation::MissingGrid],
        Some(rows) => rows,
    };
    if rows.is_empty() {
        return vec![Violation::EmptyGrid];
    }

    let mut violations = Vec::new();

    if rows.len() > MAX_ROWS {
        violations.push(Violation::TooManyRows);
    }

    // Widths of rows that are present and non-empty; only these can
    // meaningfully participate in column checks.
    let widths: Vec<usize> = rows
        .iter()
        .filter_map(|row| row.as_deref())
        .map(|row| row.chars().count())
        .filter(|&len| len > 0)
        .collect();

    if widths.first().is_some_and(|&first| first > MAX_COLUMNS) {
        violations.push(Violation::TooManyColumns);
    }
    if widths.windows(2).any(|pair| pair[0] != pair[1]) {
        violations.push(Violation::InconsistentRowLengths);
    }

    if rows.iter().any(|row| row.is_none()) {
        violations.push(Violation::NullRows);
    }
    if rows
        .iter()
        .any(|row| row.as_deref().is_some_and(|r| r.is_empty()))
    {
        violations.push(Violation::EmptyRows);
    }

    violations
}
