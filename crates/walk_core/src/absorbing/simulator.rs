//! Step-by-step simulation of a walk between two absorbing boundaries.
//!
//! # State Machine
//!
//! ```text
//!            step, pos ∉ boundary            step, pos <= left || pos >= right
//! RUNNING ─────────────────────────▶ RUNNING ─────────────────────────────────▶ ABSORBED
//!    │
//!    └── tick == max_steps without absorption ─────────────────────────────────▶ BUDGET_EXHAUSTED
//! ```
//!
//! Absorption is tested after every step and never before the first one, so a
//! walk started on (or beyond) a boundary still takes one step.

use super::config::AbsorbingConfig;
use crate::rng::RandomSource;
use crate::walk::step_1d;

/// Why an absorbing walk stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// A boundary was reached or crossed.
    Absorbed,
    /// The step budget ran out first.
    BudgetExhausted,
}

/// Result of one absorbing walk.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitOutcome {
    /// Positions visited, starting with the initial position.
    ///
    /// Always `hit_time + 1` long.
    pub path: Vec<i64>,
    /// 1-indexed tick of absorption, or the step budget if exhausted.
    pub hit_time: usize,
    /// Final position: the boundary if absorbed there, otherwise wherever
    /// the walk stood when the budget ran out.
    pub hit_location: i64,
    /// How the walk terminated.
    pub stop_reason: StopReason,
}

impl HitOutcome {
    /// Returns `true` if the walk was absorbed.
    #[inline]
    pub fn is_absorbed(&self) -> bool {
        self.stop_reason == StopReason::Absorbed
    }
}

/// Runs a single walk until absorption or budget exhaustion.
///
/// On each of at most `max_steps` ticks one ±1 step is drawn with the
/// configured bias, applied, and recorded; the walk stops on the first tick
/// where `position <= left || position >= right`.
///
/// # Examples
///
/// ```rust
/// use walk_core::absorbing::{random_walk_absorbing, AbsorbingConfig};
/// use walk_core::rng::WalkRng;
///
/// let mut rng = WalkRng::from_seed(42);
/// let config = AbsorbingConfig::new(-1, 1).bias(1.0).max_steps(100);
///
/// let outcome = random_walk_absorbing(&mut rng, &config);
/// assert_eq!(outcome.path, vec![0, 1]);
/// assert_eq!(outcome.hit_time, 1);
/// assert_eq!(outcome.hit_location, 1);
/// ```
pub fn random_walk_absorbing<R: RandomSource + ?Sized>(
    rng: &mut R,
    config: &AbsorbingConfig,
) -> HitOutcome {
    let max_steps = config.max_steps_budget();
    let bias = config.step_bias();

    let mut position = config.start_position();
    let mut path = Vec::with_capacity(max_steps.min(1024) + 1);
    path.push(position);

    for tick in 1..=max_steps {
        position += step_1d(rng, bias);
        path.push(position);

        if config.is_absorbing(position) {
            return HitOutcome {
                path,
                hit_time: tick,
                hit_location: position,
                stop_reason: StopReason::Absorbed,
            };
        }
    }

    HitOutcome {
        path,
        hit_time: max_steps,
        hit_location: position,
        stop_reason: StopReason::BudgetExhausted,
    }
}
