//! Absorb command implementation
//!
//! Runs one walk between two absorbing boundaries and reports where and when
//! it stopped.

use serde::Serialize;
use tracing::{info, warn};

use walk_core::absorbing::{random_walk_absorbing, AbsorbingConfig, HitOutcome, StopReason};
use walk_core::rng::RandomSource;

use crate::output::{preview_path, render, OutputFormat, Report};
use crate::Result;

/// A single absorbing walk
#[derive(Debug, Serialize)]
pub struct AbsorbReport {
    /// Walk parameters
    pub config: AbsorbingConfig,
    /// Simulated outcome
    pub outcome: HitOutcome,
}

impl Report for AbsorbReport {
    fn to_table(&self) -> String {
        let stop = match self.outcome.stop_reason {
            StopReason::Absorbed => "absorbed",
            StopReason::BudgetExhausted => "budget exhausted",
        };
        format!(
            "Absorbing walk: boundaries [{}, {}], start {}, bias {}, max steps {}\n\
             {:<14} {}\n{:<14} {}\n{:<14} {}\n{:<14} {}\n",
            self.config.left(),
            self.config.right(),
            self.config.start_position(),
            self.config.step_bias(),
            self.config.max_steps_budget(),
            "stop",
            stop,
            "hit time",
            self.outcome.hit_time,
            "hit location",
            self.outcome.hit_location,
            "path",
            preview_path(&self.outcome.path),
        )
    }
}

/// Logs degenerate absorbing parameters without rejecting them.
pub fn warn_if_degenerate(config: &AbsorbingConfig) {
    if let Err(e) = config.validate() {
        warn!("{}; simulating as given", e);
    }
}

/// Simulates one absorbing walk
pub fn simulate<R: RandomSource>(rng: &mut R, config: AbsorbingConfig) -> AbsorbReport {
    let outcome = random_walk_absorbing(rng, &config);
    AbsorbReport { config, outcome }
}

/// Run the absorb command
pub fn run<R: RandomSource>(
    rng: &mut R,
    config: AbsorbingConfig,
    format: OutputFormat,
) -> Result<()> {
    info!("Simulating absorbing walk...");
    info!("  Boundaries: [{}, {}]", config.left(), config.right());
    info!("  Start: {}", config.start_position());
    info!("  Bias: {}", config.step_bias());
    info!("  Max steps: {}", config.max_steps_budget());
    warn_if_degenerate(&config);

    let report = simulate(rng, config);
    if !report.outcome.is_absorbed() {
        warn!(
            "Step budget of {} exhausted at position {}",
            report.outcome.hit_time, report.outcome.hit_location
        );
    }

    println!("{}", render(&report, format)?);
    Ok(())
}
