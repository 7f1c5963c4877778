//! Per-node feature exclusion for random-forest growers.
//!
//! A forest decorrelates its trees by hiding a random subset of features
//! from each node's split search. Exclusion draws without replacement (a
//! partial Fisher-Yates shuffle), so the draw always terminates and every
//! subset of the requested size is equally likely.
//!
//! # Example
//!
//! ```
//! use modeltree::training::sample_excluded_features;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
//! let excluded = sample_excluded_features(5, 2, &mut rng);
//!
//! assert_eq!(excluded.len(), 2);
//! assert!(excluded.iter().all(|&f| (1..=5).contains(&f)));
//! ```

use rand::Rng;

/// Draw `n_exclude` distinct feature column indices from `1..=n_features`.
///
/// Returns sorted column indices. Requests larger than the pool are clamped
/// to the pool size; callers that must keep at least one feature validate
/// before calling.
pub fn sample_excluded_features<R: Rng + ?Sized>(
    n_features: usize,
    n_exclude: usize,
    rng: &mut R,
) -> Vec<usize> {
    let k = n_exclude.min(n_features);
    if k == 0 {
        return Vec::new();
    }

    let mut columns: Vec<usize> = (1..=n_features).collect();

    // Partial Fisher-Yates shuffle
    for i in 0..k {
        let j = rng.gen_range(i..n_features);
        columns.swap(i, j);
    }

    let mut sampled = columns[..k].to_vec();
    sampled.sort_unstable();
    sampled
}

/// Feature columns left for the search once `excluded` is removed, ascending.
pub fn remaining_features(n_features: usize, excluded: &[usize]) -> Vec<usize> {
    (1..=n_features)
        .filter(|feature| !excluded.contains(feature))
        .collect()
}
