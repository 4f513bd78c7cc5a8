//! Walk commands
//!
//! Generates a single unbounded 1D or 2D walk.

use serde::Serialize;
use std::fmt::Write as _;
use tracing::info;

use walk_core::rng::RandomSource;
use walk_core::walk::{random_walk_1d, random_walk_2d, LatticePoint};

use crate::output::{render, OutputFormat, Report};
use crate::Result;

/// A single 1D walk
#[derive(Debug, Serialize)]
pub struct Walk1dReport {
    /// Steps taken
    pub n_steps: usize,
    /// Probability of a +1 step
    pub bias: f64,
    /// Cumulative positions after each step
    pub positions: Vec<i64>,
}

impl Report for Walk1dReport {
    fn to_table(&self) -> String {
        let mut out = format!("1D walk: {} steps, bias {}\n", self.n_steps, self.bias);
        let _ = writeln!(out, "{:>8} {:>10}", "step", "position");
        for (i, position) in self.positions.iter().enumerate() {
            let _ = writeln!(out, "{:>8} {:>10}", i + 1, position);
        }
        out
    }
}

/// A single 2D lattice walk
#[derive(Debug, Serialize)]
pub struct Walk2dReport {
    /// Steps taken
    pub n_steps: usize,
    /// Cumulative positions after each step
    pub positions: Vec<LatticePoint>,
}

impl Report for Walk2dReport {
    fn to_table(&self) -> String {
        let mut out = format!("2D lattice walk: {} steps\n", self.n_steps);
        let _ = writeln!(out, "{:>8} {:>8} {:>8}", "step", "x", "y");
        for (i, point) in self.positions.iter().enumerate() {
            let _ = writeln!(out, "{:>8} {:>8} {:>8}", i + 1, point.x, point.y);
        }
        out
    }
}

/// Simulates a 1D walk report
pub fn simulate_1d<R: RandomSource>(rng: &mut R, n_steps: usize, bias: f64) -> Walk1dReport {
    Walk1dReport {
        n_steps,
        bias,
        positions: random_walk_1d(rng, n_steps, bias),
    }
}

/// Simulates a 2D walk report
pub fn simulate_2d<R: RandomSource>(rng: &mut R, n_steps: usize) -> Walk2dReport {
    Walk2dReport {
        n_steps,
        positions: random_walk_2d(rng, n_steps),
    }
}

/// Run the walk1d command
pub fn run_1d<R: RandomSource>(
    rng: &mut R,
    n_steps: usize,
    bias: f64,
    format: OutputFormat,
) -> Result<()> {
    info!("Simulating 1D walk...");
    info!("  Steps: {}", n_steps);
    info!("  Bias: {}", bias);

    let report = simulate_1d(rng, n_steps, bias);
    if let Some(last) = report.positions.last() {
        info!("Final position: {}", last);
    }

    println!("{}", render(&report, format)?);
    Ok(())
}

/// Run the walk2d command
pub fn run_2d<R: RandomSource>(rng: &mut R, n_steps: usize, format: OutputFormat) -> Result<()> {
    info!("Simulating 2D lattice walk...");
    info!("  Steps: {}", n_steps);

    let report = simulate_2d(rng, n_steps);
    if let Some(last) = report.positions.last() {
        info!("Final position: ({}, {})", last.x, last.y);
    }

    println!("{}", render(&report, format)?);
    Ok(())
}
