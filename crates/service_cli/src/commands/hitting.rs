//! Hitting command implementation
//!
//! Estimates the hitting-time distribution and exit probabilities over many
//! absorbing walks.

use serde::Serialize;
use tracing::{info, warn};

use walk_core::absorbing::AbsorbingConfig;
use walk_core::hitting::{hitting_time_with, HittingStatistics};
use walk_core::rng::RandomSource;

use super::absorb::warn_if_degenerate;
use crate::output::{render, OutputFormat, Report};
use crate::Result;

/// Hitting-time summary
#[derive(Debug, Serialize)]
pub struct HittingReport {
    /// Walk parameters shared by every trial
    pub config: AbsorbingConfig,
    /// Trials run
    pub n_trials: usize,
    /// Fraction ending on the left boundary
    pub prob_left: f64,
    /// Fraction ending on the right boundary
    pub prob_right: f64,
    /// Trials ending on neither boundary
    pub exhausted: usize,
    /// Mean hit time
    pub mean_time: f64,
    /// Standard error of the mean hit time
    pub std_error: f64,
    /// Hit time of every trial, in trial order
    pub times: Vec<usize>,
}

impl HittingReport {
    fn new(config: AbsorbingConfig, stats: HittingStatistics) -> Self {
        Self {
            config,
            n_trials: stats.n_trials(),
            prob_left: stats.prob_left(),
            prob_right: stats.prob_right(),
            exhausted: stats.exhausted(),
            mean_time: stats.mean_time(),
            std_error: stats.std_error(),
            times: stats.times,
        }
    }
}

impl Report for HittingReport {
    fn to_table(&self) -> String {
        format!(
            "Hitting time: boundaries [{}, {}], start {}, {} trials\n\
             {:<12} {:.4}\n{:<12} {:.4}\n{:<12} {}\n{:<12} {:.4} +/- {:.4}\n",
            self.config.left(),
            self.config.right(),
            self.config.start_position(),
            self.n_trials,
            "P(left)",
            self.prob_left,
            "P(right)",
            self.prob_right,
            "exhausted",
            self.exhausted,
            "mean time",
            self.mean_time,
            self.std_error,
        )
    }
}

/// Runs the hitting-time estimation
pub fn simulate<R: RandomSource>(
    rng: &mut R,
    config: AbsorbingConfig,
    n_trials: usize,
) -> HittingReport {
    let stats = hitting_time_with(rng, &config, n_trials);
    HittingReport::new(config, stats)
}

/// Run the hitting command
pub fn run<R: RandomSource>(
    rng: &mut R,
    config: AbsorbingConfig,
    n_trials: usize,
    format: OutputFormat,
) -> Result<()> {
    info!("Estimating hitting times...");
    info!("  Boundaries: [{}, {}]", config.left(), config.right());
    info!("  Start: {}", config.start_position());
    info!("  Trials: {}", n_trials);
    warn_if_degenerate(&config);

    let report = simulate(rng, config, n_trials);
    if report.exhausted > 0 {
        warn!(
            "{} of {} trials ended on neither boundary",
            report.exhausted, report.n_trials
        );
    }
    info!(
        "P(left) = {:.4}, P(right) = {:.4}",
        report.prob_left, report.prob_right
    );

    println!("{}", render(&report, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use walk_core::rng::{ReplaySource, WalkRng};

    #[test]
    fn test_simulate_scripted() {
        // up, up -> right; down, down -> left
        let mut source = ReplaySource::uniforms(vec![0.1, 0.1, 0.9, 0.9]);
        let report = simulate(&mut source, AbsorbingConfig::new(-2, 2), 2);

        assert_eq!(report.times, vec![2, 2]);
        assert_relative_eq!(report.prob_left, 0.5);
        assert_relative_eq!(report.prob_right, 0.5);
        assert_eq!(report.exhausted, 0);
        assert!(report.to_table().contains("P(left)      0.5000"));
    }

    #[test]
    fn test_json_zero_trials_serialises_nan_as_null() {
        let mut rng = WalkRng::from_seed(1);
        let report = simulate(&mut rng, AbsorbingConfig::new(-3, 3), 0);

        let json = render(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["prob_left"].is_null());
        assert_eq!(value["n_trials"], 0);
    }

    #[test]
    fn test_run() {
        let mut rng = WalkRng::from_seed(42);
        let config = AbsorbingConfig::new(-5, 5);
        assert!(run(&mut rng, config, 100, OutputFormat::Table).is_ok());
    }
}
