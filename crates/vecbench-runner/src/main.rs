//! The `vecbench` binary.
//!
//! Takes no arguments and reads no environment: it runs the default
//! sweep (vector lengths 10^1 through 10^7) with the thread-local RNG
//! and prints one elapsed-seconds line per trial to stdout as each
//! trial completes. Exits 0 on completion, 1 on the first failure with
//! the error on stderr; already-printed lines remain valid output.

use std::io;
use std::process::ExitCode;

use vecbench_runner::Sweep;

fn main() -> ExitCode {
    let mut rng = rand::rng();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match Sweep::default().run(&mut rng, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("vecbench: {e}");
            ExitCode::FAILURE
        }
    }
}
