//! Benchmark profiles and utilities for the vecbench workspace.
//!
//! Provides pre-built [`Sweep`] profiles:
//!
//! - [`reference_sweep`]: the published sweep, lengths 10^1 through 10^7,
//!   each trial timed once
//! - [`stress_sweep`]: lengths 10^1 through 10^6, averaged over 100
//!   repetitions per trial for noise-resistant comparisons

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use vecbench_runner::Sweep;

/// The published benchmark sweep: exponents 1..=7, one timed
/// multiplication per trial.
///
/// Small-exponent timings are dominated by clock overhead; that is part
/// of the published shape and intentionally kept.
pub fn reference_sweep() -> Sweep {
    Sweep {
        min_exponent: 1,
        max_exponent: 7,
        repetitions: 1,
    }
}

/// A noise-resistant sweep: exponents 1..=6, each trial the mean of 100
/// timed multiplications.
pub fn stress_sweep() -> Sweep {
    Sweep {
        min_exponent: 1,
        max_exponent: 6,
        repetitions: 100,
    }
}
