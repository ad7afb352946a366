//! This is the cpplint-helper package's binary executable's source code.

use std::env;
use std::process::exit;

// project specific modules/crates
use cpplint_helper::run::run_main;

/// This takes the CLI arguments and passes them to [`cpplint_helper::run::run_main`].
pub fn main() {
    exit(run_main(env::args().collect::<Vec<String>>()));
}
