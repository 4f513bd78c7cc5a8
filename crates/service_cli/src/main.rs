//! Simlab CLI - Random Walk Monte Carlo Experiments
//!
//! This is the operational entry point for the walk_core simulation library.
//!
//! # Commands
//!
//! - `simlab walk1d --steps <n>` - Simulate a single 1D walk
//! - `simlab walk2d --steps <n>` - Simulate a single 2D lattice walk
//! - `simlab msd --steps <n>` - Compare empirical and theoretical MSD
//! - `simlab absorb --left <l> --right <r>` - Run one absorbing walk
//! - `simlab hitting --left <l> --right <r>` - Estimate hitting times
//!
//! # Seeding
//!
//! The random source is seeded from `--seed`, then `simulation.seed` in the
//! configuration file, then operating system entropy. The seed in use is
//! always logged so any run can be replayed.

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use walk_core::absorbing::AbsorbingConfig;
use walk_core::rng::WalkRng;

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use config::CliConfig;
use output::OutputFormat;

/// Random walk Monte Carlo simulations
#[derive(Parser)]
#[command(name = "simlab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "simlab.toml")]
    config: String,

    /// Seed for the random source
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a single 1D walk
    Walk1d {
        /// Number of steps
        #[arg(short = 'n', long)]
        steps: usize,

        /// Probability of a +1 step
        #[arg(short, long)]
        bias: Option<f64>,
    },

    /// Simulate a single 2D lattice walk
    Walk2d {
        /// Number of steps
        #[arg(short = 'n', long)]
        steps: usize,
    },

    /// Compare empirical and theoretical mean squared displacement
    Msd {
        /// Steps per walk
        #[arg(short = 'n', long)]
        steps: usize,

        /// Number of walks
        #[arg(short, long)]
        trials: Option<usize>,
    },

    /// Run one walk between absorbing boundaries
    Absorb {
        /// Left boundary
        #[arg(short, long, allow_hyphen_values = true)]
        left: i64,

        /// Right boundary
        #[arg(short, long, allow_hyphen_values = true)]
        right: i64,

        /// Starting position
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        start: i64,

        /// Probability of a +1 step
        #[arg(short, long)]
        bias: Option<f64>,

        /// Step budget
        #[arg(short, long)]
        max_steps: Option<usize>,
    },

    /// Estimate hitting times and exit probabilities
    Hitting {
        /// Left boundary
        #[arg(short, long, allow_hyphen_values = true)]
        left: i64,

        /// Right boundary
        #[arg(short, long, allow_hyphen_values = true)]
        right: i64,

        /// Number of trials
        #[arg(short, long)]
        trials: Option<usize>,

        /// Starting position
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        start: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_file(&cli.config)?;

    // Initialise tracing: RUST_LOG wins, then --verbose, then the config file
    let fallback_level = if cli.verbose {
        "debug"
    } else {
        config.general.log_level.as_str()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level)))
        .init();

    debug!("Loaded configuration from {}: {:?}", cli.config, config);

    let format: OutputFormat = cli.format.as_deref().unwrap_or(&config.general.format).parse()?;

    let mut rng = match cli.seed.or(config.simulation.seed) {
        Some(seed) => WalkRng::from_seed(seed),
        None => WalkRng::from_entropy(),
    };
    info!("Seed: {}", rng.seed());

    let sim = &config.simulation;
    match cli.command {
        Commands::Walk1d { steps, bias } => {
            commands::walk::run_1d(&mut rng, steps, bias.unwrap_or(sim.bias), format)
        }
        Commands::Walk2d { steps } => commands::walk::run_2d(&mut rng, steps, format),
        Commands::Msd { steps, trials } => {
            commands::msd::run(&mut rng, steps, trials.unwrap_or(sim.n_trials), format)
        }
        Commands::Absorb {
            left,
            right,
            start,
            bias,
            max_steps,
        } => {
            let absorbing = AbsorbingConfig::new(left, right)
                .start(start)
                .bias(bias.unwrap_or(sim.bias))
                .max_steps(max_steps.unwrap_or(sim.max_steps));
            commands::absorb::run(&mut rng, absorbing, format)
        }
        Commands::Hitting {
            left,
            right,
            trials,
            start,
        } => {
            let absorbing = AbsorbingConfig::new(left, right)
                .start(start)
                .bias(sim.bias)
                .max_steps(sim.max_steps);
            commands::hitting::run(&mut rng, absorbing, trials.unwrap_or(sim.n_trials), format)
        }
    }
}
