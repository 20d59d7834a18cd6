//! Power-law complexity estimation from doubling sweeps.
//!
//! Runs a workload at sizes `n0, 2·n0, 4·n0, …` and estimates `(a, b)`
//! such that `time ≈ a · n^b` from the ratio of consecutive timings.
//! Useful for sanity-checking that an operation scales the way its
//! implementation suggests (the scalar multiply should come out near
//! `b = 1` once `n` is large enough to dominate measurement noise).

use std::time::Duration;

/// Estimated model `time ≈ coefficient · n^exponent`, time in seconds.
#[derive(Clone, Copy, Debug)]
pub struct PowerLawFit {
    /// The multiplicative constant `a`, in seconds.
    pub coefficient: f64,
    /// The growth exponent `b`.
    pub exponent: f64,
}

/// Estimate a power-law fit by doubling the workload size.
///
/// `timer` is invoked once per size with the current `n` and must return
/// the measured duration for that size. After each doubling the exponent
/// is re-derived from the ratio of the last two timings
/// (`b = log2(t_i / t_{i-1})`, `a = t_i / n^b`); the final estimate wins.
///
/// Returns `None` if `n0` or `doublings` is zero, if doubling would
/// overflow `usize`, or if no iteration produced two positive timings to
/// compare.
pub fn fit_power_law(
    n0: usize,
    doublings: u32,
    mut timer: impl FnMut(usize) -> Duration,
) -> Option<PowerLawFit> {
    if n0 == 0 || doublings == 0 {
        return None;
    }

    let mut prev = timer(n0).as_secs_f64();
    let mut n = n0;
    let mut fit = None;

    for _ in 0..doublings {
        n = match n.checked_mul(2) {
            Some(next) => next,
            None => return fit,
        };
        let t = timer(n).as_secs_f64();
        // Zero timings carry no ratio information; keep the previous
        // estimate and move on.
        if prev > 0.0 && t > 0.0 {
            let b = (t / prev).log2();
            let a = t / (n as f64).powf(b);
            fit = Some(PowerLawFit {
                coefficient: a,
                exponent: b,
            });
        }
        prev = t;
    }

    fit
}
