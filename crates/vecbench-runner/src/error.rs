//! Error types for the benchmark runner.

use std::error::Error;
use std::fmt;
use std::io;

use vecbench_core::VectorError;

/// Errors detected during [`Sweep::validate()`](crate::Sweep::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `min_exponent` exceeds `max_exponent`.
    EmptyExponentRange {
        /// The configured minimum exponent.
        min: u32,
        /// The configured maximum exponent.
        max: u32,
    },
    /// `repetitions` is zero; every trial must be timed at least once.
    ZeroRepetitions,
    /// `10^exponent` does not fit in `usize` on this host.
    ExponentOverflow {
        /// The offending exponent.
        exponent: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyExponentRange { min, max } => {
                write!(f, "empty exponent range: min {min} exceeds max {max}")
            }
            Self::ZeroRepetitions => write!(f, "repetitions must be at least 1"),
            Self::ExponentOverflow { exponent } => {
                write!(f, "10^{exponent} overflows usize")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from executing a sweep.
///
/// The first failure ends the run; lines already written remain valid
/// partial output.
#[derive(Debug)]
pub enum RunError {
    /// Sampling or vector construction failed.
    Vector(VectorError),
    /// The sweep configuration is invalid.
    Config(ConfigError),
    /// Writing a result line to the output failed.
    Io(io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vector(e) => write!(f, "sampling: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Io(e) => write!(f, "output: {e}"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Vector(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<VectorError> for RunError {
    fn from(e: VectorError) -> Self {
        Self::Vector(e)
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
