//! Benchmark workloads and utilities for the growvec container.
//!
//! Provides deterministic workload generators shared by the criterion
//! benches: seeded index streams for random-access measurements and the
//! fixed append count used by the growth benchmarks.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Number of appends performed by the growth benchmarks.
pub const PUSH_COUNT: usize = 10_000;

/// Generate `count` indices uniformly distributed over `[0, len)`.
///
/// Uses a seeded ChaCha8 RNG so runs are identical across machines
/// and invocations.
///
/// # Panics
///
/// Panics if `len` is zero.
pub fn index_stream(len: usize, count: usize, seed: u64) -> Vec<usize> {
    assert!(len > 0, "index stream needs a non-empty target");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.random_range(0..len)).collect()
}
