//! Rectangular batch of independent 1D walks.
//!
//! # Memory Layout
//!
//! Positions are stored in row-major order:
//! `positions[trial * n_steps + step]`. Row `i` is the `i`-th trial, column
//! `t` the cumulative position after step `t + 1`.

use crate::error::WalkError;

/// A rectangular `n_trials × n_steps` batch of 1D walks.
///
/// Every row shares the same step count. The batch is only ever used for
/// statistical reduction, see
/// [`mean_squared_displacement`](crate::stats::mean_squared_displacement).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkBatch {
    positions: Vec<i64>,
    n_trials: usize,
    n_steps: usize,
}

impl WalkBatch {
    /// Creates a zero-filled batch.
    pub(crate) fn zeros(n_trials: usize, n_steps: usize) -> Self {
        Self {
            positions: vec![0; n_trials * n_steps],
            n_trials,
            n_steps,
        }
    }

    /// Builds a batch from explicit rows.
    ///
    /// An empty row list produces an empty `0 × 0` batch.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::RaggedBatch`] if any row differs in length from
    /// the first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use walk_core::walk::WalkBatch;
    ///
    /// let batch = WalkBatch::from_rows(vec![vec![1, 2, 1], vec![-1, 0, 1]]).unwrap();
    /// assert_eq!(batch.shape(), (2, 3));
    /// assert_eq!(batch.row(1), &[-1, 0, 1]);
    ///
    /// assert!(WalkBatch::from_rows(vec![vec![1, 2], vec![1]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, WalkError> {
        let n_trials = rows.len();
        let n_steps = rows.first().map_or(0, Vec::len);

        let mut positions = Vec::with_capacity(n_trials * n_steps);
        for (row, walk) in rows.into_iter().enumerate() {
            if walk.len() != n_steps {
                return Err(WalkError::RaggedBatch {
                    row,
                    expected: n_steps,
                    found: walk.len(),
                });
            }
            positions.extend(walk);
        }

        Ok(Self {
            positions,
            n_trials,
            n_steps,
        })
    }

    /// Number of walks (rows).
    #[inline]
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Number of steps per walk (columns).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// `(n_trials, n_steps)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_trials, self.n_steps)
    }

    /// Returns the positions of walk `trial`.
    ///
    /// # Panics
    ///
    /// Panics if `trial >= n_trials`.
    #[inline]
    pub fn row(&self, trial: usize) -> &[i64] {
        let offset = trial * self.n_steps;
        &self.positions[offset..offset + self.n_steps]
    }

    /// Iterates over the walks in trial order.
    pub fn rows(&self) -> impl Iterator<Item = &[i64]> + '_ {
        (0..self.n_trials).map(move |trial| self.row(trial))
    }

    /// The full row-major position buffer.
    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.positions
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, trial: usize) -> &mut [i64] {
        let offset = trial * self.n_steps;
        &mut self.positions[offset..offset + self.n_steps]
    }

    /// Consumes the batch and returns one `Vec` per walk.
    pub fn into_rows(self) -> Vec<Vec<i64>> {
        if self.n_steps == 0 {
            return vec![Vec::new(); self.n_trials];
        }
        self.positions
            .chunks_exact(self.n_steps)
            .map(<[i64]>::to_vec)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_layout() {
        let batch = WalkBatch::from_rows(vec![vec![1, 0], vec![-1, -2], vec![1, 2]]).unwrap();

        assert_eq!(batch.shape(), (3, 2));
        assert_eq!(batch.as_slice(), &[1, 0, -1, -2, 1, 2]);
        assert_eq!(batch.row(2), &[1, 2]);
        assert_eq!(batch.rows().count(), 3);
    }

    #[test]
    fn test_from_rows_ragged() {
        let result = WalkBatch::from_rows(vec![vec![1, 2, 3], vec![1, 2, 3], vec![1]]);

        assert_eq!(
            result,
            Err(WalkError::RaggedBatch {
                row: 2,
                expected: 3,
                found: 1
            })
        );
    }

    #[test]
    fn test_from_rows_empty() {
        let batch = WalkBatch::from_rows(Vec::new()).unwrap();
        assert_eq!(batch.shape(), (0, 0));
        assert_eq!(batch.rows().count(), 0);
    }

    #[test]
    fn test_zero_step_rows() {
        let batch = WalkBatch::zeros(3, 0);
        assert_eq!(batch.shape(), (3, 0));
        assert!(batch.rows().all(|row| row.is_empty()));
        assert_eq!(batch.into_rows(), vec![Vec::<i64>::new(); 3]);
    }

    #[test]
    fn test_into_rows_round_trip() {
        let rows = vec![vec![1, 2, 3], vec![-1, -2, -1]];
        let batch = WalkBatch::from_rows(rows.clone()).unwrap();
        assert_eq!(batch.into_rows(), rows);
    }
}
