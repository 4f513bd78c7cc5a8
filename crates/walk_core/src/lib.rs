//! # Walk Core
//!
//! Monte Carlo primitives for discrete-time random walks:
//! - 1D and 2D lattice walk generators, single and batched
//! - Mean squared displacement (empirical and theoretical)
//! - Boundary-absorbing walks with a hard step budget
//! - Hitting-time and exit-side estimation over many trials
//!
//! ## Randomness
//!
//! There is no global generator. Every operation takes a `&mut` handle to a
//! [`RandomSource`](rng::RandomSource): use [`WalkRng`](rng::WalkRng) for
//! seeded simulations and [`ReplaySource`](rng::ReplaySource) to drive the
//! walk logic with scripted draws.
//!
//! ## Data Flow
//!
//! ```text
//! RandomSource ─┬─▶ walk::{random_walk_1d, random_walk_2d, many_walks_1d}
//!               │        └─▶ stats::mean_squared_displacement
//!               └─▶ absorbing::random_walk_absorbing
//!                        └─▶ hitting::hitting_time
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use walk_core::hitting::hitting_time;
//! use walk_core::rng::WalkRng;
//! use walk_core::stats::{mean_squared_displacement, theoretical_msd};
//! use walk_core::walk::many_walks_1d;
//!
//! let mut rng = WalkRng::from_seed(42);
//!
//! let batch = many_walks_1d(&mut rng, 100, 500);
//! let empirical = mean_squared_displacement(&batch);
//! let theory = theoretical_msd(100);
//! assert_eq!(empirical.len(), theory.len());
//!
//! let stats = hitting_time(&mut rng, -5, 5, 200, 0);
//! let (p_left, p_right) = stats.probabilities();
//! assert!(p_left + p_right <= 1.0);
//! ```
//!
//! ## Permissive Inputs
//!
//! No simulation operation validates its parameters. Out-of-range bias,
//! inverted boundaries or a start outside the interval are simulated as
//! given; [`AbsorbingConfig::validate`](absorbing::AbsorbingConfig::validate)
//! is available for callers that want to flag them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod absorbing;
pub mod error;
pub mod hitting;
pub mod rng;
pub mod stats;
pub mod walk;

pub use error::WalkError;
