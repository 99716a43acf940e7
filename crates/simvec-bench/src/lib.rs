//! Benchmark workloads and utilities for simvec.
//!
//! Provides deterministic inputs shared by the criterion benches:
//!
//! - [`random_positions`]: seeded insertion/erase positions
//! - [`appended`]: a sequence built purely by `push_back`
//! - [`GrowthTrace`]: capacity history of an append run

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use simvec::Sequence;

/// Generate `count` positions for a sequence that starts at `start_len`
/// elements and grows by one per position (as with repeated inserts).
///
/// Position `i` is uniform in `[0, start_len + i]`, so every entry is a
/// valid insert position at the moment it is used.
pub fn random_positions(start_len: usize, count: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let bound = (start_len + i + 1) as u64;
            (rng.next_u64() % bound) as usize
        })
        .collect()
}

/// Build a sequence of `n` elements by `push_back` alone.
pub fn appended(n: usize) -> Sequence<u64> {
    let mut seq = Sequence::new();
    for i in 0..n as u64 {
        seq.push_back(i);
    }
    seq
}

/// Capacity history of an append-only run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GrowthTrace {
    /// Capacity after each reallocation, in order.
    pub capacities: Vec<usize>,
    /// Total elements relocated across all reallocations.
    pub relocated: usize,
}

impl GrowthTrace {
    /// Record the reallocations performed while appending `n` elements to
    /// an empty sequence.
    pub fn record(n: usize) -> Self {
        let mut seq: Sequence<u64> = Sequence::new();
        let mut trace = GrowthTrace::default();
        for i in 0..n as u64 {
            let before = seq.capacity();
            let live = seq.len();
            seq.push_back(i);
            if seq.capacity() != before {
                trace.capacities.push(seq.capacity());
                trace.relocated += live;
            }
        }
        trace
    }
}
