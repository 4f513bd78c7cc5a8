//! End-to-end statistical checks for the walk primitives.
//!
//! These tests run enough trials with fixed seeds to compare Monte Carlo
//! estimates against closed-form results:
//!
//! - MSD of a symmetric walk grows as `t`
//! - Batched and single-walk generators agree in distribution
//! - Symmetric boundaries are hit with probability 1/2 each
//! - Mean exit time from `(-k, k)` starting at 0 is `k²`
//! - Gambler's ruin exit probability for asymmetric boundaries

use walk_core::absorbing::{random_walk_absorbing, AbsorbingConfig, StopReason};
use walk_core::hitting::{hitting_time, hitting_time_with};
use walk_core::rng::WalkRng;
use walk_core::stats::{mean_squared_displacement, theoretical_msd};
use walk_core::walk::{many_walks_1d, random_walk_1d, random_walk_2d, WalkBatch};

// ============================================================================
// Displacement statistics
// ============================================================================

#[test]
fn e2e_msd_tracks_theory() {
    let mut rng = WalkRng::from_seed(42);
    let batch = many_walks_1d(&mut rng, 100, 5_000);

    let empirical = mean_squared_displacement(&batch);
    let theory = theoretical_msd(100);

    for t in [9, 24, 49, 99] {
        let expected = theory[t] as f64;
        let relative = (empirical[t] - expected).abs() / expected;
        assert!(
            relative < 0.1,
            "MSD at step {} is {:.2}, expected ~{}",
            t + 1,
            empirical[t],
            expected
        );
    }
}

#[test]
fn e2e_batched_matches_repeated_single_walks() {
    let mut rng = WalkRng::from_seed(7);

    let batched = many_walks_1d(&mut rng, 50, 4_000);
    let repeated = WalkBatch::from_rows(
        (0..4_000)
            .map(|_| random_walk_1d(&mut rng, 50, 0.5))
            .collect(),
    )
    .expect("rows share a length");

    let msd_batched = mean_squared_displacement(&batched);
    let msd_repeated = mean_squared_displacement(&repeated);

    let last = 49;
    let relative = (msd_batched[last] - msd_repeated[last]).abs() / 50.0;
    assert!(
        relative < 0.15,
        "batched {:.2} vs repeated {:.2}",
        msd_batched[last],
        msd_repeated[last]
    );
}

#[test]
fn e2e_biased_walk_drifts() {
    let mut rng = WalkRng::from_seed(11);
    let n_steps = 10_000;

    let walk = random_walk_1d(&mut rng, n_steps, 0.75);
    // Drift per step is 2p - 1 = 0.5
    let mean_velocity = walk[n_steps - 1] as f64 / n_steps as f64;
    assert!((mean_velocity - 0.5).abs() < 0.05, "velocity {}", mean_velocity);
}

#[test]
fn e2e_lattice_walk_msd() {
    let mut rng = WalkRng::from_seed(3);
    let n_steps = 64;
    let n_trials = 4_000;

    let mut sum = 0.0;
    for _ in 0..n_trials {
        let walk = random_walk_2d(&mut rng, n_steps);
        sum += walk[n_steps - 1].norm_squared() as f64;
    }

    // E[|X_t|²] = t for the 4-neighbour lattice walk
    let msd = sum / n_trials as f64;
    assert!((msd - n_steps as f64).abs() / (n_steps as f64) < 0.1, "msd {}", msd);
}

// ============================================================================
// Hitting times
// ============================================================================

#[test]
fn e2e_symmetric_boundaries_split_evenly() {
    let mut rng = WalkRng::from_seed(42);
    let stats = hitting_time(&mut rng, -5, 5, 2_000, 0);

    let (p_left, p_right) = stats.probabilities();
    assert!(stats.times.iter().all(|&t| t <= 10_000));
    assert!(p_left + p_right <= 1.0);
    assert!((p_left - 0.5).abs() < 0.06, "p_left {}", p_left);
    assert!((p_right - 0.5).abs() < 0.06, "p_right {}", p_right);
}

#[test]
fn e2e_mean_exit_time_is_k_squared() {
    let mut rng = WalkRng::from_seed(2024);
    let stats = hitting_time(&mut rng, -5, 5, 2_000, 0);

    let mean = stats.mean_time();
    assert!((mean - 25.0).abs() < 3.0, "mean exit time {}", mean);
    assert!(stats.std_error() < 1.0);
}

#[test]
fn e2e_gamblers_ruin_probability() {
    let mut rng = WalkRng::from_seed(5);
    // Symmetric walk from 2 in (0, 10): P(right) = 2 / 10
    let stats = hitting_time(&mut rng, 0, 10, 4_000, 2);

    assert!((stats.prob_right() - 0.2).abs() < 0.04, "p_right {}", stats.prob_right());
    assert_eq!(stats.exhausted(), 0);
}

#[test]
fn e2e_tight_budget_exhausts_trials() {
    let mut rng = WalkRng::from_seed(8);
    let config = AbsorbingConfig::new(-50, 50).max_steps(10);

    let stats = hitting_time_with(&mut rng, &config, 100);

    assert_eq!(stats.times, vec![10; 100]);
    assert_eq!(stats.exhausted(), 100);
    assert_eq!(stats.probabilities(), (0.0, 0.0));
}

#[test]
fn e2e_absorbing_outcome_consistency() {
    let mut rng = WalkRng::from_seed(77);
    let config = AbsorbingConfig::new(-8, 8).max_steps(30);

    let mut absorbed = 0;
    let mut exhausted = 0;
    for _ in 0..500 {
        let outcome = random_walk_absorbing(&mut rng, &config);
        match outcome.stop_reason {
            StopReason::Absorbed => {
                absorbed += 1;
                assert!(outcome.hit_location.abs() == 8);
                assert!(outcome.hit_time <= 30);
            }
            StopReason::BudgetExhausted => {
                exhausted += 1;
                assert_eq!(outcome.hit_time, 30);
                assert!(outcome.hit_location.abs() < 8);
            }
        }
    }

    // Both terminal states occur with a 30-step budget
    assert!(absorbed > 0 && exhausted > 0);
}
