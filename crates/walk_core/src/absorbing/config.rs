//! Absorbing walk parameters.

use crate::error::WalkError;
use crate::walk::DEFAULT_BIAS;

/// Default step budget of an absorbing walk.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// Parameters of a boundary-absorbing 1D walk.
///
/// Constructed with the two boundaries; the remaining parameters default to
/// `start = 0`, `bias = 0.5` and `max_steps = 10_000` and can be overridden
/// fluently.
///
/// Nothing is checked on construction. Degenerate values (start outside the
/// interval, `left >= right`, bias outside [0, 1]) are simulated as given;
/// call [`AbsorbingConfig::validate`] to detect them.
///
/// # Examples
///
/// ```rust
/// use walk_core::absorbing::{AbsorbingConfig, DEFAULT_MAX_STEPS};
///
/// let config = AbsorbingConfig::new(-10, 10).start(3).bias(0.6);
///
/// assert_eq!(config.left(), -10);
/// assert_eq!(config.right(), 10);
/// assert_eq!(config.start_position(), 3);
/// assert_eq!(config.max_steps_budget(), DEFAULT_MAX_STEPS);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbsorbingConfig {
    left: i64,
    right: i64,
    start: i64,
    bias: f64,
    max_steps: usize,
}

impl AbsorbingConfig {
    /// Creates a configuration with the given boundaries and default
    /// start, bias and step budget.
    #[inline]
    pub fn new(left: i64, right: i64) -> Self {
        Self {
            left,
            right,
            start: 0,
            bias: DEFAULT_BIAS,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Sets the starting position.
    #[inline]
    pub fn start(mut self, start: i64) -> Self {
        self.start = start;
        self
    }

    /// Sets the probability of a `+1` step.
    #[inline]
    pub fn bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    /// Sets the hard step budget.
    #[inline]
    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Left absorbing boundary.
    #[inline]
    pub fn left(&self) -> i64 {
        self.left
    }

    /// Right absorbing boundary.
    #[inline]
    pub fn right(&self) -> i64 {
        self.right
    }

    /// Starting position.
    #[inline]
    pub fn start_position(&self) -> i64 {
        self.start
    }

    /// Probability of a `+1` step.
    #[inline]
    pub fn step_bias(&self) -> f64 {
        self.bias
    }

    /// Hard step budget.
    #[inline]
    pub fn max_steps_budget(&self) -> usize {
        self.max_steps
    }

    /// Returns `true` if `position` triggers absorption.
    #[inline]
    pub fn is_absorbing(&self, position: i64) -> bool {
        position <= self.left || position >= self.right
    }

    /// Reports parameters outside the intended domain.
    ///
    /// Simulation never calls this; it is available for callers that want to
    /// flag degenerate input before running.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, checked in order:
    /// - [`WalkError::BiasOutOfRange`] if bias is not in [0, 1] (or NaN)
    /// - [`WalkError::DegenerateBoundaries`] if `left >= right`
    /// - [`WalkError::StartOutsideInterval`] if `start` is not strictly
    ///   between the boundaries
    pub fn validate(&self) -> Result<(), WalkError> {
        if !(0.0..=1.0).contains(&self.bias) {
            return Err(WalkError::BiasOutOfRange(self.bias));
        }
        if self.left >= self.right {
            return Err(WalkError::DegenerateBoundaries {
                left: self.left,
                right: self.right,
            });
        }
        if self.is_absorbing(self.start) {
            return Err(WalkError::StartOutsideInterval {
                start: self.start,
                left: self.left,
                right: self.right,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AbsorbingConfig::new(-5, 5);

        assert_eq!(config.start_position(), 0);
        assert_eq!(config.step_bias(), 0.5);
        assert_eq!(config.max_steps_budget(), 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fluent_overrides() {
        let config = AbsorbingConfig::new(0, 20).start(4).bias(0.25).max_steps(99);

        assert_eq!(config.start_position(), 4);
        assert_eq!(config.step_bias(), 0.25);
        assert_eq!(config.max_steps_budget(), 99);
    }

    #[test]
    fn test_is_absorbing_uses_inclusive_bounds() {
        let config = AbsorbingConfig::new(-2, 3);

        assert!(config.is_absorbing(-2));
        assert!(config.is_absorbing(-7));
        assert!(config.is_absorbing(3));
        assert!(config.is_absorbing(8));
        assert!(!config.is_absorbing(-1));
        assert!(!config.is_absorbing(2));
    }

    #[test]
    fn test_validate_bias() {
        let result = AbsorbingConfig::new(-1, 1).bias(1.2).validate();
        assert!(matches!(result, Err(WalkError::BiasOutOfRange(_))));

        let result = AbsorbingConfig::new(-1, 1).bias(f64::NAN).validate();
        assert!(matches!(result, Err(WalkError::BiasOutOfRange(_))));

        assert!(AbsorbingConfig::new(-1, 1).bias(0.0).validate().is_ok());
        assert!(AbsorbingConfig::new(-1, 1).bias(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_boundaries() {
        let result = AbsorbingConfig::new(4, 4).start(4).validate();
        assert_eq!(
            result,
            Err(WalkError::DegenerateBoundaries { left: 4, right: 4 })
        );
    }

    #[test]
    fn test_validate_start() {
        let result = AbsorbingConfig::new(-3, 3).start(3).validate();
        assert_eq!(
            result,
            Err(WalkError::StartOutsideInterval {
                start: 3,
                left: -3,
                right: 3
            })
        );
    }
}
