//! Uniform random sampling of vectors and scalars.
//!
//! All sampling is generic over [`rand::Rng`]: the shipped runner uses the
//! thread-local generator (unseeded, so runs are non-deterministic by
//! design), while tests pass a seeded `ChaCha8Rng` for repeatability.

use rand::Rng;

use crate::error::VectorError;
use crate::vector::Vector;

/// A validated half-open sampling interval `[low, high)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformRange {
    low: f64,
    high: f64,
}

impl UniformRange {
    /// Create a range after validating its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidRange`] if either bound is non-finite
    /// or `low >= high`.
    pub fn new(low: f64, high: f64) -> Result<Self, VectorError> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(VectorError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// The unit interval `[0, 1)`, the distribution of benchmark vector
    /// elements.
    pub fn unit() -> Self {
        Self {
            low: 0.0,
            high: 1.0,
        }
    }

    /// Lower bound (inclusive).
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound (exclusive).
    pub fn high(&self) -> f64 {
        self.high
    }
}

/// Draw a single scalar uniformly from `range`.
pub fn uniform_scalar<R: Rng + ?Sized>(rng: &mut R, range: UniformRange) -> f64 {
    rng.random_range(range.low..range.high)
}

/// Draw a vector of `len` i.i.d. uniform samples from `range`.
///
/// The backing storage is reserved up front so that an out-of-memory
/// condition for very large vectors surfaces as an error instead of an
/// abort. A benchmark run that cannot allocate its input cannot be
/// salvaged, so callers propagate this to the top of the run.
///
/// # Errors
///
/// Returns [`VectorError::AllocationFailed`] if the reservation fails.
pub fn uniform_vector<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    range: UniformRange,
) -> Result<Vector, VectorError> {
    let mut components: Vec<f64> = Vec::new();
    components
        .try_reserve_exact(len)
        .map_err(|_| VectorError::AllocationFailed { requested: len })?;
    for _ in 0..len {
        components.push(rng.random_range(range.low..range.high));
    }
    Ok(Vector::new(components))
}
