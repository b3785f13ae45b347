//! The Find pipeline: normalize a word stream, count frequencies, build a
//! trie, search the matrix, and rank the confirmed words.

use std::cmp::Reverse;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::matrix::WordMatrix;
use crate::trie::{fold, WordTrie};

/// Maximum number of words a query returns
pub const MAX_RESULTS: usize = 10;

/// Frequency-map entry for one case-insensitive word identity.
struct Candidate {
    /// First-encountered literal casing in the stream. The trie keeps the
    /// last-encountered casing instead; output uses the trie's literal.
    literal: String,
    count: usize,
}

/// Finds which words from `words` occur in the matrix, ranked by how often
/// each word appeared in the stream (not in the grid).
///
/// The stream may be absent, and entries may be absent, empty, or
/// whitespace-only; all of those yield "no match" rather than an error, so
/// this never fails. Words are keyed case-insensitively: repeated
/// occurrences in any casing count toward one entry, and the returned
/// casing is the stream's last occurrence of that word.
///
/// Results are sorted by descending stream frequency, ties broken by
/// ascending case-folded order, and truncated to [`MAX_RESULTS`].
pub fn find(matrix: &WordMatrix, words: Option<&[Option<String>]>) -> Vec<String> {
    let words = match words {
        None => {
            debug!("No word stream provided, returning empty result");
            return Vec::new();
        }
        Some(words) => words,
    };

    let mut frequencies: HashMap<String, Candidate> = HashMap::new();
    let mut trie = WordTrie::new();

    for word in words.iter().flatten() {
        let word = word.trim();
        if word.is_empty() {
            continue;
        }
        frequencies
            .entry(fold(word))
            .and_modify(|candidate| candidate.count += 1)
            .or_insert_with(|| Candidate {
                literal: word.to_string(),
                count: 1,
            });
        trie.insert(word);
    }

    if frequencies.is_empty() {
        debug!("Word stream empty after normalization, returning empty result");
        return Vec::new();
    }

    for candidate in frequencies.values() {
        debug!(
            "Candidate '{}' occurred {} time(s) in the stream",
            candidate.literal, candidate.count
        );
    }
    debug!(
        "Searching {}x{} grid for {} candidate word(s)",
        matrix.row_count(),
        matrix.column_count(),
        trie.len()
    );

    // Defensive intersection: search can only return inserted words, but
    // ranking requires a frequency entry for every result.
    let mut ranked: Vec<(String, usize)> = matrix
        .search(&trie)
        .into_iter()
        .filter_map(|word| {
            let key = fold(&word);
            frequencies
                .get(&key)
                .map(|candidate| (word, candidate.count))
        })
        .collect();

    ranked.sort_by(|(a_word, a_count), (b_word, b_count)| {
        (Reverse(a_count), fold(a_word)).cmp(&(Reverse(b_count), fold(b_word)))
    });
    ranked.truncate(MAX_RESULTS);

    let result: Vec<String> = ranked.into_iter().map(|(word, _)| word).collect();
    info!("Query complete. {} word(s) found in grid", result.len());
    result
}
