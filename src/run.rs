//! This module is the entry point of the cpplint-helper package, used by the binary
//! driver `bin.rs`.

use std::path::{Path, PathBuf};

// non-std crates
use log::set_max_level;

// project specific modules/crates
use crate::cli::{get_arg_parser, parse_extensions};
use crate::common_fs::list_source_files;
use crate::linter::{lint_files, LintConfig, LintError};
use crate::logger::{self, end_log_group, level_from_verbosity, start_log_group};

/// This is the backend entry point for console applications.
///
/// `args` is the full list of command line arguments, including the program name
/// as its first item (like [`std::env::args`]).
///
/// The returned value is the process' exit code. It is 0 whenever the linter was
/// run, no matter what the linter reported, so a failing lint never stops the build
/// step that invoked this. A non-zero code is returned only if the source files
/// could not be listed or the linter could not be started.
pub fn run_main(args: Vec<String>) -> i32 {
    let arg_parser = get_arg_parser();
    let args = arg_parser.get_matches_from(args);

    if logger::init().is_err() {
        log::debug!("logger was already initialized");
    }
    if let Some(verbosity) = args.get_one::<String>("verbosity") {
        set_max_level(level_from_verbosity(verbosity));
    }

    // clap enforces this positional argument
    let Some(src_path) = args.get_one::<String>("path") else {
        return 1;
    };
    let extensions = parse_extensions(&args);

    start_log_group("Get list of specified source files");
    let files = match list_source_files(Path::new(src_path), &extensions) {
        Ok(files) => files,
        Err(e) => {
            end_log_group();
            log::error!("Could not list files in {src_path}: {e}");
            return 1;
        }
    };
    log::info!("Giving attention to the following files:");
    for file in &files {
        log::info!("  {}", file.to_string_lossy().replace('\\', "/"));
    }
    end_log_group();

    if files.is_empty() {
        log::info!("No source files found in {src_path}; nothing to lint");
        return 0;
    }

    let config = match LintConfig::resolve(
        args.get_one::<String>("interpreter")
            .map(String::as_str)
            .unwrap_or_default(),
        args.get_one::<String>("linter")
            .map(String::as_str)
            .unwrap_or_default(),
        args.get_one::<String>("root").map(String::as_str),
    ) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return 1;
        }
    };
    if let Some(root_arg) = config.root_arg() {
        log::info!("Header guard root: {root_arg}");
    }

    // Don't return an error code for lint findings, or else the build process stops.
    match lint(&config, &files) {
        Ok(()) => 0,
        Err(e) => {
            log::error!("{e}");
            1
        }
    }
}

/// Runs the linter and reports (but otherwise discards) its outcome.
fn lint(config: &LintConfig, files: &[PathBuf]) -> Result<(), LintError> {
    let outcome = lint_files(config, files)?;
    if outcome.passed() {
        log::info!("cpplint passed");
    } else {
        log::warn!("cpplint {outcome}");
    }
    Ok(())
}
