//! A single benchmark trial: sample fresh inputs, time one multiplication.

use std::hint::black_box;
use std::time::Duration;

use rand::Rng;
use vecbench_core::{uniform_scalar, uniform_vector, UniformRange};

use crate::error::{ConfigError, RunError};
use crate::timing::time_block;

/// Scalars are drawn uniformly from `[SCALAR_MIN, SCALAR_MAX)`.
pub const SCALAR_MIN: f64 = -10.0;
/// Upper bound (exclusive) of the scalar distribution.
pub const SCALAR_MAX: f64 = 10.0;

/// The outcome of one timed trial.
#[derive(Clone, Debug)]
pub struct TrialResult {
    /// Exponent `i` of the trial's vector length `10^i`.
    pub exponent: u32,
    /// Vector length, `10^exponent`.
    pub len: usize,
    /// Mean elapsed wall-clock time of the multiplication.
    pub elapsed: Duration,
}

impl TrialResult {
    /// Elapsed time in fractional seconds, the emitted representation.
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Run one trial for `exponent`.
///
/// Samples a vector of length `10^exponent` with elements in `[0, 1)` and
/// a scalar in `[-10, 10)`, then times `sc * a` averaged over
/// `repetitions` invocations (clamped to at least 1). The timed region is
/// exactly the multiplication expression, which includes allocating the
/// result vector — the same region `sc * a` covers in array libraries.
/// The product itself is discarded.
///
/// # Errors
///
/// - [`ConfigError::ExponentOverflow`] (wrapped) if `10^exponent` does not
///   fit in `usize`.
/// - [`RunError::Vector`] if sampling fails, e.g. the allocation for a
///   very large vector cannot be reserved.
pub fn run_trial<R: Rng + ?Sized>(
    rng: &mut R,
    exponent: u32,
    repetitions: u32,
) -> Result<TrialResult, RunError> {
    let len = 10usize
        .checked_pow(exponent)
        .ok_or(ConfigError::ExponentOverflow { exponent })?;

    let a = uniform_vector(rng, len, UniformRange::unit())?;
    let sc = uniform_scalar(rng, UniformRange::new(SCALAR_MIN, SCALAR_MAX)?);

    let elapsed = time_block(repetitions.max(1), || sc * black_box(&a));

    Ok(TrialResult {
        exponent,
        len,
        elapsed,
    })
}
