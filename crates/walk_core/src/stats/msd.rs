//! Mean squared displacement of a walk batch.

use crate::walk::WalkBatch;

/// Empirical mean squared displacement at each step of a batch.
///
/// Element `t` is the mean of `position[t]²` over all trials, so the result
/// has length `n_steps`. With a single trial this is the walk squared
/// elementwise. A batch with zero trials yields `NaN` at every step.
///
/// # Examples
///
/// ```rust
/// use walk_core::stats::mean_squared_displacement;
/// use walk_core::walk::WalkBatch;
///
/// let batch = WalkBatch::from_rows(vec![vec![1, 2, 1], vec![-1, 0, -1]]).unwrap();
/// assert_eq!(mean_squared_displacement(&batch), vec![1.0, 2.0, 1.0]);
/// ```
pub fn mean_squared_displacement(walks: &WalkBatch) -> Vec<f64> {
    let mut sums = vec![0.0_f64; walks.n_steps()];

    for row in walks.rows() {
        for (sum, &position) in sums.iter_mut().zip(row) {
            *sum += (position * position) as f64;
        }
    }

    let n_trials = walks.n_trials() as f64;
    for sum in sums.iter_mut() {
        *sum /= n_trials;
    }

    sums
}

/// Expected squared displacement of a simple symmetric walk: `E[X_t²] = t`.
///
/// Returns `[1, 2, …, n_steps]` as a reference curve for
/// [`mean_squared_displacement`].
///
/// ```rust
/// use walk_core::stats::theoretical_msd;
///
/// assert_eq!(theoretical_msd(5), vec![1, 2, 3, 4, 5]);
/// ```
pub fn theoretical_msd(n_steps: usize) -> Vec<i64> {
    (1..=n_steps as i64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_walk_is_squared() {
        let walk = vec![1, 2, 3, 2, 1, 0, -1, -2];
        let batch = WalkBatch::from_rows(vec![walk.clone()]).unwrap();

        let msd = mean_squared_displacement(&batch);
        let expected: Vec<f64> = walk.iter().map(|&x| (x * x) as f64).collect();
        assert_eq!(msd, expected);
    }

    #[test]
    fn test_identical_walks_match_single_walk() {
        let walk = vec![-1, -2, -1, 0, 1];
        let batch = WalkBatch::from_rows(vec![walk.clone(); 4]).unwrap();
        let single = WalkBatch::from_rows(vec![walk]).unwrap();

        assert_eq!(
            mean_squared_displacement(&batch),
            mean_squared_displacement(&single)
        );
    }

    #[test]
    fn test_mean_over_trials() {
        let batch = WalkBatch::from_rows(vec![vec![1, 2, 3], vec![-1, 0, 1], vec![1, 0, -1]])
            .unwrap();
        let msd = mean_squared_displacement(&batch);

        assert_relative_eq!(msd[0], 1.0);
        assert_relative_eq!(msd[1], 4.0 / 3.0);
        assert_relative_eq!(msd[2], 11.0 / 3.0);
    }

    #[test]
    fn test_zero_trials_is_nan() {
        let mut rng = crate::rng::WalkRng::from_seed(1);
        let batch = crate::walk::many_walks_1d(&mut rng, 3, 0);

        let msd = mean_squared_displacement(&batch);
        assert_eq!(msd.len(), 3);
        assert!(msd.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_empty_batch() {
        let batch = WalkBatch::from_rows(Vec::new()).unwrap();
        assert!(mean_squared_displacement(&batch).is_empty());
    }

    #[test]
    fn test_theoretical_msd() {
        assert_eq!(theoretical_msd(5), vec![1, 2, 3, 4, 5]);
        assert_eq!(theoretical_msd(1), vec![1]);
        assert!(theoretical_msd(0).is_empty());
    }
}
