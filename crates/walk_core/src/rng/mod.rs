//! # Random Source Infrastructure
//!
//! Every walk generator in this crate draws its randomness through the
//! [`RandomSource`] trait rather than a process-wide generator. Callers own the
//! source and pass it in by mutable reference, which keeps simulations
//! reproducible and lets tests substitute a scripted source.
//!
//! ## Module Structure
//!
//! - `prng`: seeded PRNG wrapper ([`WalkRng`]) for real simulations
//! - `replay`: deterministic scripted source ([`ReplaySource`]) for tests
//!
//! ## Usage Example
//!
//! ```rust
//! use walk_core::rng::{RandomSource, WalkRng};
//!
//! let mut rng = WalkRng::from_seed(12345);
//!
//! let u = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! let direction = rng.gen_index(4);
//! assert!(direction < 4);
//! ```

mod prng;
mod replay;

pub use prng::WalkRng;
pub use replay::ReplaySource;

/// Source of the two primitive draws a discrete walk needs.
///
/// Implementations advance their internal state on every call; they are never
/// reset by the walk generators.
pub trait RandomSource {
    /// Draws a uniform real in the half-open interval [0, 1).
    fn gen_uniform(&mut self) -> f64;

    /// Draws a uniform integer in [0, `upper`).
    ///
    /// `upper` must be non-zero.
    fn gen_index(&mut self, upper: usize) -> usize;
}
