//! Error types for vector construction and sampling.

use std::error::Error;
use std::fmt;

/// Errors from vector operations and uniform sampling.
///
/// There are no recoverable paths: callers propagate these to the top of
/// the run, where the benchmark terminates with whatever output was
/// already produced.
#[derive(Clone, Debug, PartialEq)]
pub enum VectorError {
    /// Two vectors passed to a binary elementwise operation differ in length.
    DimensionMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
    /// The backing allocation for a vector could not be reserved.
    ///
    /// Expected only for very large lengths (10^7 and beyond) on
    /// memory-constrained hosts.
    AllocationFailed {
        /// Number of elements that was requested.
        requested: usize,
    },
    /// A sampling interval is not a valid half-open range.
    InvalidRange {
        /// Lower bound (inclusive).
        low: f64,
        /// Upper bound (exclusive).
        high: f64,
    },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { left, right } => {
                write!(f, "vector lengths differ: {left} vs {right}")
            }
            Self::AllocationFailed { requested } => {
                write!(f, "allocation of {requested} elements failed")
            }
            Self::InvalidRange { low, high } => {
                write!(f, "invalid sampling range [{low}, {high})")
            }
        }
    }
}

impl Error for VectorError {}
