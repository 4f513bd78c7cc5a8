//! Boundary-absorbing 1D walks.
//!
//! A walk starts at a given position and takes ±1 steps until it reaches or
//! crosses either boundary, or until its step budget is spent. The budget is a
//! hard loop bound and the only guarantee of termination for biased or
//! degenerate inputs.
//!
//! ```rust
//! use walk_core::absorbing::{random_walk_absorbing, AbsorbingConfig, StopReason};
//! use walk_core::rng::WalkRng;
//!
//! let mut rng = WalkRng::from_seed(42);
//! let outcome = random_walk_absorbing(&mut rng, &AbsorbingConfig::new(-10, 10));
//!
//! assert_eq!(outcome.path.len(), outcome.hit_time + 1);
//! if outcome.stop_reason == StopReason::Absorbed {
//!     assert!(outcome.hit_location == -10 || outcome.hit_location == 10);
//! }
//! ```

mod config;
mod simulator;

pub use config::{AbsorbingConfig, DEFAULT_MAX_STEPS};
pub use simulator::{random_walk_absorbing, HitOutcome, StopReason};
