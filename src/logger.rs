//! A module to initialize and customize the logger object.
//!
//! Informational records go to stdout, next to the linter's own output. Warnings
//! and errors go to stderr.

use std::env;

// non-std crates
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

struct HelperLogger;

impl log::Log for HelperLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if record.level() <= Level::Warn {
            eprintln!("{}: {}", record.level(), record.args());
        } else {
            println!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: HelperLogger = HelperLogger;

/// Installs the crate's logger at [`LevelFilter::Info`].
///
/// Fails with a [`SetLoggerError`] if a logger is already installed.
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(LevelFilter::Info);
    Ok(())
}

/// Maps the `--verbosity` CLI value to a [`LevelFilter`].
pub fn level_from_verbosity(verbosity: &str) -> LevelFilter {
    if verbosity == "debug" {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Is this process running as a step in a GitHub Actions workflow?
fn in_workflow() -> bool {
    env::var("GITHUB_ACTIONS").is_ok_and(|val| val == "true")
}

fn group_start_line(name: &str, in_workflow: bool) -> String {
    if in_workflow {
        format!("::group::{name}")
    } else {
        format!("--- {name} ---")
    }
}

fn group_end_line(in_workflow: bool) -> Option<&'static str> {
    in_workflow.then_some("::endgroup::")
}

/// This prints a line to indicate the beginning of a related group of log statements.
///
/// In a GitHub workflow this emits the `::group::` command so the runner can fold
/// the output. Elsewhere a plain heading is printed.
pub fn start_log_group(name: &str) {
    println!("{}", group_start_line(name, in_workflow()));
}

/// This prints a line to indicate the ending of a related group of log statements.
pub fn end_log_group() {
    if let Some(line) = group_end_line(in_workflow()) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::{group_end_line, group_start_line, level_from_verbosity};

    #[test]
    fn workflow_log_group() {
        assert_eq!(group_start_line("source files", true), "::group::source files");
        assert_eq!(group_end_line(true), Some("::endgroup::"));
    }

    #[test]
    fn plain_log_group() {
        assert_eq!(group_start_line("source files", false), "--- source files ---");
        assert_eq!(group_end_line(false), None);
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_from_verbosity("debug"), LevelFilter::Debug);
        assert_eq!(level_from_verbosity("info"), LevelFilter::Info);
    }
}
