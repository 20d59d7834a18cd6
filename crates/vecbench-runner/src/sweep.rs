//! The exponent sweep: configuration, validation, streaming execution.

use std::io::Write;

use rand::Rng;

use crate::error::{ConfigError, RunError};
use crate::trial::{run_trial, TrialResult};

/// Configuration for a sweep over vector lengths `10^min ..= 10^max`.
///
/// The default sweep is the published benchmark shape: exponents 1
/// through 7, each trial timed once.
#[derive(Clone, Debug, PartialEq)]
pub struct Sweep {
    /// Smallest exponent, inclusive. Default: 1.
    pub min_exponent: u32,
    /// Largest exponent, inclusive. Default: 7.
    pub max_exponent: u32,
    /// Timed repetitions per trial; the reported duration is the mean
    /// over all of them. Default: 1.
    pub repetitions: u32,
}

impl Default for Sweep {
    fn default() -> Self {
        Self {
            min_exponent: 1,
            max_exponent: 7,
            repetitions: 1,
        }
    }
}

impl Sweep {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. The exponent range must be non-empty.
        if self.min_exponent > self.max_exponent {
            return Err(ConfigError::EmptyExponentRange {
                min: self.min_exponent,
                max: self.max_exponent,
            });
        }
        // 2. Every trial must be timed at least once.
        if self.repetitions == 0 {
            return Err(ConfigError::ZeroRepetitions);
        }
        // 3. The largest vector length must fit in usize.
        if 10usize.checked_pow(self.max_exponent).is_none() {
            return Err(ConfigError::ExponentOverflow {
                exponent: self.max_exponent,
            });
        }
        Ok(())
    }

    /// Number of trials a validated sweep will run.
    pub fn trial_count(&self) -> usize {
        (self.max_exponent.saturating_sub(self.min_exponent) + 1) as usize
    }

    /// Run the sweep, streaming one line per trial to `out`.
    ///
    /// Trials run strictly sequentially in increasing exponent order.
    /// After each trial its elapsed seconds are written as a single
    /// plain floating-point line and the writer is flushed, so partial
    /// output survives a mid-sweep failure. Returns the per-trial
    /// results for callers that want more than the emitted lines.
    ///
    /// # Errors
    ///
    /// Validation, sampling, and I/O failures all abort the sweep at the
    /// first occurrence; there is no retry.
    pub fn run<R: Rng + ?Sized, W: Write>(
        &self,
        rng: &mut R,
        out: &mut W,
    ) -> Result<Vec<TrialResult>, RunError> {
        self.validate()?;

        let mut results = Vec::with_capacity(self.trial_count());
        for exponent in self.min_exponent..=self.max_exponent {
            let trial = run_trial(rng, exponent, self.repetitions)?;
            writeln!(out, "{}", trial.seconds())?;
            out.flush()?;
            results.push(trial);
        }
        Ok(results)
    }
}
