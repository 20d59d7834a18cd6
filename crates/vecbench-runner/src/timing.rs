//! Wall-clock timing helpers.
//!
//! Measurements use [`std::time::Instant`], a monotonic clock with
//! sub-millisecond resolution on every supported platform. For small
//! workloads the reading is dominated by clock overhead and scheduler
//! noise; that is inherent to wall-clock micro-benchmarks and deliberately
//! not compensated for.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Time a single invocation of `f`.
///
/// The returned duration covers exactly the closure call, including any
/// allocation the closure performs. The closure's result is passed through
/// [`black_box`] so the computation cannot be optimized away, and is
/// dropped outside the timed region.
pub fn time_once<T>(f: impl FnOnce() -> T) -> Duration {
    let start = Instant::now();
    let out = f();
    let elapsed = start.elapsed();
    black_box(out);
    elapsed
}

/// Mean wall-clock duration of `n` invocations of `f`.
///
/// Times the whole loop and divides by `n`, so per-call overhead is
/// averaged rather than accumulated. Returns [`Duration::ZERO`] when
/// `n == 0`.
pub fn time_block<T>(n: u32, mut f: impl FnMut() -> T) -> Duration {
    if n == 0 {
        return Duration::ZERO;
    }
    let start = Instant::now();
    for _ in 0..n {
        black_box(f());
    }
    start.elapsed() / n
}
