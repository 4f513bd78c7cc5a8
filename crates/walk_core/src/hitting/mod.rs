//! Hitting-time distributions from repeated absorbing walks.

mod estimator;

pub use estimator::{hitting_time, hitting_time_with, HittingStatistics, DEFAULT_TRIALS};
