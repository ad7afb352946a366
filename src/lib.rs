//! The root module for the cpplint_helper package when compiled as a library.
//! This module mainly holds the declarations of this package's other modules.

// project specific modules/crates
pub mod cli;
pub mod common_fs;
pub mod linter;
pub mod logger;
pub mod run;
