use std::cmp::Ordering;

use crate::error::{AppError, AppResult};

/// Default number of neighbors returned by a query
pub const DEFAULT_K: usize = 5;

/// Brute-force nearest-neighbor index over a binary feature matrix
///
/// Corpus sizes here are small (hundreds of groups), so a linear scan with
/// precomputed row norms beats maintaining a spatial structure.
#[derive(Debug, Clone)]
pub struct NeighborIndex {
    rows: Vec<Vec<f64>>,
    norms: Vec<f64>,
}

impl NeighborIndex {
    /// Fits the index over a feature matrix
    ///
    /// Requires at least one row and one column; a snapshot with no groups
    /// or no genre tokens cannot be indexed.
    pub fn build(rows: Vec<Vec<f64>>) -> AppResult<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(AppError::EmptyCorpus);
        }

        let norms = rows
            .iter()
            .map(|row| row.iter().map(|v| v * v).sum::<f64>().sqrt())
            .collect();

        Ok(Self { rows, norms })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the k rows closest to `vector` by cosine distance
    ///
    /// Results are ordered ascending by distance, ties broken by ascending
    /// row index. `k` is clamped to the row count, so a corpus smaller than
    /// k yields fewer results rather than an error.
    pub fn query(&self, vector: &[f64], k: usize) -> Vec<(usize, f64)> {
        let query_norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();

        let mut scored: Vec<(usize, f64)> = self
            .rows
            .iter()
            .zip(&self.norms)
            .enumerate()
            .map(|(row_index, (row, &row_norm))| {
                (row_index, cosine_distance(vector, query_norm, row, row_norm))
            })
            .collect();

        scored.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        scored.truncate(k.min(self.rows.len()));
        scored
    }
}

/// Cosine distance with the zero-vector convention
///
/// If either operand has zero norm there is no overlap to measure, so the
/// distance is the maximal 1.0 instead of a division by zero.
fn cosine_distance(a: &[f64], a_norm: f64, b: &[f64], b_norm: f64) -> f64 {
    if a_norm == 0.0 || b_norm == 0.0 {
        return 1.0;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    1.0 - dot / (a_norm * b_norm)
}
