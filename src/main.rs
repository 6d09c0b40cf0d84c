//! bqs-adapter CLI entry point
//!
//! Delegates to `cli::run`. The error envelope has already been written to
//! stdout by the time an error reaches here; it is repeated on stderr and the
//! process exits non-zero.

use bqs_adapter::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
