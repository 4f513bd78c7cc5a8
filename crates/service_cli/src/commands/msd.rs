//! MSD command implementation
//!
//! Compares the empirical mean squared displacement of a batch of symmetric
//! walks against the closed-form `E[X_t²] = t`.

use serde::Serialize;
use std::fmt::Write as _;
use tracing::info;

use walk_core::rng::RandomSource;
use walk_core::stats::{mean_squared_displacement, theoretical_msd};
use walk_core::walk::many_walks_1d;

use crate::output::{render, OutputFormat, Report};
use crate::Result;

/// One step of the MSD comparison
#[derive(Debug, Serialize, PartialEq)]
pub struct MsdRow {
    /// 1-indexed step
    pub step: usize,
    /// Mean of X_t² over trials
    pub empirical: f64,
    /// Expected value t
    pub theoretical: i64,
}

/// Empirical vs theoretical MSD curve
#[derive(Debug, Serialize)]
pub struct MsdReport {
    /// Steps per walk
    pub n_steps: usize,
    /// Walks averaged
    pub n_trials: usize,
    /// One row per step
    pub rows: Vec<MsdRow>,
}

impl MsdReport {
    /// Largest relative deviation of the empirical curve from theory.
    pub fn max_relative_error(&self) -> f64 {
        self.rows
            .iter()
            .map(|row| (row.empirical - row.theoretical as f64).abs() / row.theoretical as f64)
            .fold(0.0, f64::max)
    }
}

impl Report for MsdReport {
    fn to_table(&self) -> String {
        let mut out = format!(
            "Mean squared displacement: {} trials x {} steps\n",
            self.n_trials, self.n_steps
        );
        let _ = writeln!(out, "{:>8} {:>12} {:>12}", "step", "empirical", "theoretical");
        for row in &self.rows {
            let _ = writeln!(
                out,
                "{:>8} {:>12.4} {:>12}",
                row.step, row.empirical, row.theoretical
            );
        }
        out
    }
}

/// Simulates the MSD comparison
pub fn simulate<R: RandomSource>(rng: &mut R, n_steps: usize, n_trials: usize) -> MsdReport {
    let batch = many_walks_1d(rng, n_steps, n_trials);
    let empirical = mean_squared_displacement(&batch);
    let theoretical = theoretical_msd(n_steps);

    let rows = empirical
        .into_iter()
        .zip(theoretical)
        .enumerate()
        .map(|(i, (empirical, theoretical))| MsdRow {
            step: i + 1,
            empirical,
            theoretical,
        })
        .collect();

    MsdReport {
        n_steps,
        n_trials,
        rows,
    }
}

/// Run the msd command
pub fn run<R: RandomSource>(
    rng: &mut R,
    n_steps: usize,
    n_trials: usize,
    format: OutputFormat,
) -> Result<()> {
    info!("Estimating mean squared displacement...");
    info!("  Steps: {}", n_steps);
    info!("  Trials: {}", n_trials);

    let report = simulate(rng, n_steps, n_trials);
    info!("Max relative error vs theory: {:.4}", report.max_relative_error());

    println!("{}", render(&report, format)?);
    Ok(())
}
