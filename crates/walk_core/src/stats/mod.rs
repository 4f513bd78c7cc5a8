//! Displacement statistics over batches of walks.
//!
//! The empirical curve from [`mean_squared_displacement`] is meant to be read
//! against [`theoretical_msd`]: for a symmetric ±1 walk both grow linearly
//! in the step count.

mod msd;

pub use msd::{mean_squared_displacement, theoretical_msd};
