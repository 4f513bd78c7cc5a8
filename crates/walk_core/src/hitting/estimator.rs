//! Monte Carlo estimation of first hitting times.

use crate::absorbing::{random_walk_absorbing, AbsorbingConfig};
use crate::rng::RandomSource;

/// Default number of trials for hitting-time estimation.
pub const DEFAULT_TRIALS: usize = 1000;

/// Aggregate of many absorbing walks.
///
/// Hit times are kept in trial order. Each boundary probability counts the
/// trials whose final position equals that boundary exactly, independently of
/// the other. Trials that ran out of budget (or overshot a boundary from a
/// degenerate start) count towards neither. When `left == right` a trial
/// ending there counts towards both, so `prob_left + prob_right` can exceed 1.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HittingStatistics {
    /// Hit time of each trial, in trial order.
    pub times: Vec<usize>,
    /// Trials whose final position equals the left boundary.
    pub left_hits: usize,
    /// Trials whose final position equals the right boundary.
    pub right_hits: usize,
    /// Trials whose final position equals neither boundary.
    pub neither: usize,
}

impl HittingStatistics {
    /// Number of trials aggregated.
    #[inline]
    pub fn n_trials(&self) -> usize {
        self.times.len()
    }

    /// Fraction of trials ending exactly on the left boundary.
    ///
    /// `NaN` when there are no trials.
    #[inline]
    pub fn prob_left(&self) -> f64 {
        self.left_hits as f64 / self.n_trials() as f64
    }

    /// Fraction of trials ending exactly on the right boundary.
    ///
    /// `NaN` when there are no trials.
    #[inline]
    pub fn prob_right(&self) -> f64 {
        self.right_hits as f64 / self.n_trials() as f64
    }

    /// `(prob_left, prob_right)`.
    #[inline]
    pub fn probabilities(&self) -> (f64, f64) {
        (self.prob_left(), self.prob_right())
    }

    /// Trials that ended on neither boundary.
    #[inline]
    pub fn exhausted(&self) -> usize {
        self.neither
    }

    /// Sample mean of the hit times (`NaN` when there are no trials).
    pub fn mean_time(&self) -> f64 {
        let total: usize = self.times.iter().sum();
        total as f64 / self.n_trials() as f64
    }

    /// Standard error of [`mean_time`](Self::mean_time).
    ///
    /// Uses the unbiased sample variance; `NaN` with fewer than two trials.
    pub fn std_error(&self) -> f64 {
        let n = self.n_trials();
        if n < 2 {
            return f64::NAN;
        }
        let mean = self.mean_time();
        let sum_sq: f64 = self
            .times
            .iter()
            .map(|&t| {
                let d = t as f64 - mean;
                d * d
            })
            .sum();
        let variance = sum_sq / (n - 1) as f64;
        (variance / n as f64).sqrt()
    }
}

/// Estimates hitting statistics for a symmetric walk from `start`.
///
/// Runs `n_trials` independent absorbing walks between `left` and `right`
/// with bias `0.5` and the default step budget of 10,000, keeping only each
/// trial's hit time and final position.
///
/// # Examples
///
/// ```rust
/// use walk_core::hitting::hitting_time;
/// use walk_core::rng::WalkRng;
///
/// let mut rng = WalkRng::from_seed(42);
/// let stats = hitting_time(&mut rng, -5, 5, 200, 0);
///
/// assert_eq!(stats.times.len(), 200);
/// let (left, right) = stats.probabilities();
/// assert!(left + right <= 1.0);
/// ```
pub fn hitting_time<R: RandomSource + ?Sized>(
    rng: &mut R,
    left: i64,
    right: i64,
    n_trials: usize,
    start: i64,
) -> HittingStatistics {
    let config = AbsorbingConfig::new(left, right).start(start);
    hitting_time_with(rng, &config, n_trials)
}

/// Estimates hitting statistics for an arbitrary absorbing configuration.
///
/// Trials run sequentially; `times[i]` belongs to the `i`-th trial.
pub fn hitting_time_with<R: RandomSource + ?Sized>(
    rng: &mut R,
    config: &AbsorbingConfig,
    n_trials: usize,
) -> HittingStatistics {
    let mut times = Vec::with_capacity(n_trials);
    let mut left_hits = 0;
    let mut right_hits = 0;
    let mut neither = 0;

    for _ in 0..n_trials {
        let outcome = random_walk_absorbing(rng, config);
        times.push(outcome.hit_time);

        let on_left = outcome.hit_location == config.left();
        let on_right = outcome.hit_location == config.right();
        if on_left {
            left_hits += 1;
        }
        if on_right {
            right_hits += 1;
        }
        if !on_left && !on_right {
            neither += 1;
        }
    }

    HittingStatistics {
        times,
        left_hits,
        right_hits,
        neither,
    }
}
