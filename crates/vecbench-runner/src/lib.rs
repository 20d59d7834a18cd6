//! Benchmark runner for the vecbench workspace.
//!
//! Executes a sweep of timed trials: for each exponent `i` the runner
//! samples a fresh vector of length `10^i` and a fresh scalar, times one
//! scalar-vector multiplication, and streams the elapsed seconds to the
//! caller's writer — one line per trial, flushed as it completes.
//!
//! The timing helpers ([`time_once`], [`time_block`]) and the power-law
//! estimator ([`fit_power_law`]) are exposed for building other
//! wall-clock workloads in the same style.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod fit;
pub mod sweep;
pub mod timing;
pub mod trial;

pub use error::{ConfigError, RunError};
pub use fit::{fit_power_law, PowerLawFit};
pub use sweep::Sweep;
pub use timing::{time_block, time_once};
pub use trial::{run_trial, TrialResult};
