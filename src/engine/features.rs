use std::collections::{BTreeSet, HashMap};

use crate::models::Group;

/// Fixed feature space derived from a group snapshot
///
/// Holds the distinct genre tokens in lexicographic order. Column positions
/// are the contract between the training matrix and query vectors: both must
/// be encoded against the same vocabulary instance.
///
/// Tokens are matched literally; "Rock" and "rock" are distinct columns.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    tokens: Vec<String>,
    positions: HashMap<String, usize>,
}

impl Vocabulary {
    /// Derives the vocabulary from a group snapshot
    ///
    /// Deterministic for a given snapshot: same tokens, same order, on every
    /// call. Duplicate tokens within one group count once.
    pub fn fit(groups: &[Group]) -> Self {
        let distinct: BTreeSet<&str> = groups
            .iter()
            .flat_map(|g| g.genres.iter().map(String::as_str))
            .collect();

        let tokens: Vec<String> = distinct.into_iter().map(str::to_owned).collect();
        let positions = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        Self { tokens, positions }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Encodes a genre list as a multi-hot vector over this vocabulary
    ///
    /// Tokens not in the vocabulary are silently dropped: a user may be
    /// interested in a genre no current group carries.
    pub fn encode<S: AsRef<str>>(&self, genres: &[S]) -> Vec<f64> {
        let mut vector = vec![0.0; self.tokens.len()];
        for genre in genres {
            if let Some(&column) = self.positions.get(genre.as_ref()) {
                vector[column] = 1.0;
            }
        }
        vector
    }

    /// Encodes the full snapshot as a binary feature matrix, one row per
    /// group in input order
    pub fn matrix(&self, groups: &[Group]) -> Vec<Vec<f64>> {
        groups.iter().map(|g| self.encode(&g.genres)).collect()
    }
}
