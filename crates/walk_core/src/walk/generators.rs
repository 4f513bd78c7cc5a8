//! Unbounded walk generators.
//!
//! All generators return cumulative positions *excluding* the origin: index
//! `0` holds the position after the first step.

use super::batch::WalkBatch;
use super::step::{step_1d, step_2d, LatticePoint};
use crate::rng::RandomSource;

/// Simulates a 1D walk of `n_steps` independent ±1 steps.
///
/// Each step is `+1` with probability `p`. Returns the cumulative positions
/// (length `n_steps`); `n_steps == 0` yields an empty walk.
///
/// # Examples
///
/// ```rust
/// use walk_core::rng::WalkRng;
/// use walk_core::walk::{random_walk_1d, DEFAULT_BIAS};
///
/// let mut rng = WalkRng::from_seed(42);
/// let walk = random_walk_1d(&mut rng, 100, DEFAULT_BIAS);
///
/// assert_eq!(walk.len(), 100);
/// assert!(walk.windows(2).all(|w| (w[1] - w[0]).abs() == 1));
/// ```
pub fn random_walk_1d<R: RandomSource + ?Sized>(rng: &mut R, n_steps: usize, p: f64) -> Vec<i64> {
    let mut position = 0_i64;
    let mut walk = Vec::with_capacity(n_steps);

    for _ in 0..n_steps {
        position += step_1d(rng, p);
        walk.push(position);
    }

    walk
}

/// Simulates a 2D square-lattice walk of `n_steps` uniform unit moves.
///
/// Moves are independent of the current position (no self-avoidance).
pub fn random_walk_2d<R: RandomSource + ?Sized>(rng: &mut R, n_steps: usize) -> Vec<LatticePoint> {
    let mut position = LatticePoint::ORIGIN;
    let mut walk = Vec::with_capacity(n_steps);

    for _ in 0..n_steps {
        position = position + step_2d(rng).offset();
        walk.push(position);
    }

    walk
}

/// Simulates `n_trials` independent symmetric 1D walks of `n_steps` each.
///
/// The batch is filled in a single allocation, trial by trial, with one
/// index draw per step (`0 → -1`, `1 → +1`). The result is distributed as
/// `n_trials` calls to [`random_walk_1d`] with `p = 0.5`, although the draws
/// themselves differ.
///
/// # Examples
///
/// ```rust
/// use walk_core::rng::WalkRng;
/// use walk_core::walk::many_walks_1d;
///
/// let mut rng = WalkRng::from_seed(7);
/// let batch = many_walks_1d(&mut rng, 50, 20);
/// assert_eq!(batch.shape(), (20, 50));
/// ```
pub fn many_walks_1d<R: RandomSource + ?Sized>(
    rng: &mut R,
    n_steps: usize,
    n_trials: usize,
) -> WalkBatch {
    const STEPS: [i64; 2] = [-1, 1];

    let mut batch = WalkBatch::zeros(n_trials, n_steps);

    for trial in 0..n_trials {
        let row = batch.row_mut(trial);
        let mut position = 0_i64;
        for slot in row.iter_mut() {
            position += STEPS[rng.gen_index(STEPS.len())];
            *slot = position;
        }
    }

    batch
}
