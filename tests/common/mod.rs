//! Shared helpers for integration tests.
//!
//! For assertion helpers, use `modeltree::testing`.

#![allow(dead_code)]

use modeltree::SampleBlock;
use rand::prelude::*;

/// Install a fmt subscriber writing to the test harness, once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Random block with a noisy linear target.
///
/// Features are uniform in `[-1, 1]`; `y = 0.5 + Σ (j+1)·x_j + noise`.
pub fn random_block(n_samples: usize, n_features: usize, noise: f64, seed: u64) -> SampleBlock {
    let mut rng = StdRng::seed_from_u64(seed);
    let n_columns = n_features + 1;
    let mut data = Vec::with_capacity(n_samples * n_columns);

    for _ in 0..n_samples {
        let features: Vec<f64> = (0..n_features).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let mut y = 0.5;
        for (j, x) in features.iter().enumerate() {
            y += (j + 1) as f64 * x;
        }
        y += rng.gen_range(-noise..=noise);

        data.push(y);
        data.extend_from_slice(&features);
    }

    SampleBlock::from_vec(data, n_samples, n_columns).expect("shape is consistent")
}

/// Block whose target jumps between two linear regimes on feature `knee_feature`.
///
/// Rows with `x_knee <= 0` follow `y = 1 + x_knee`, the others `y = 4 - 3 x_knee`.
pub fn regime_block(n_samples: usize, n_features: usize, knee_feature: usize, seed: u64) -> SampleBlock {
    assert!((1..=n_features).contains(&knee_feature));
    let mut rng = StdRng::seed_from_u64(seed);
    let n_columns = n_features + 1;
    let mut data = Vec::with_capacity(n_samples * n_columns);

    for _ in 0..n_samples {
        let features: Vec<f64> = (0..n_features).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let x = features[knee_feature - 1];
        let y = if x <= 0.0 { 1.0 + x } else { 4.0 - 3.0 * x };

        data.push(y);
        data.extend_from_slice(&features);
    }

    SampleBlock::from_vec(data, n_samples, n_columns).expect("shape is consistent")
}
