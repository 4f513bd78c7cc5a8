//! Discrete random walk generators.
//!
//! # Architecture
//!
//! ```text
//! RandomSource
//! └── step_1d / step_2d        (single draws)
//!     ├── random_walk_1d()     → Vec<i64>
//!     ├── random_walk_2d()     → Vec<LatticePoint>
//!     └── many_walks_1d()      → WalkBatch (row-major, one allocation)
//! ```
//!
//! Generated walks exclude the origin; see
//! [`random_walk_absorbing`](crate::absorbing::random_walk_absorbing) for the
//! bounded variant whose path starts at the initial position.

mod batch;
mod generators;
mod step;

pub use batch::WalkBatch;
pub use generators::{many_walks_1d, random_walk_1d, random_walk_2d};
pub use step::{step_1d, step_2d, LatticeDirection, LatticePoint, DEFAULT_BIAS};
