//! This module holds the functionality related to running the linter (cpplint) on
//! a list of source files.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use std::{fmt, io};

// non-std crates
use thiserror::Error;
use which::which;

/// The interpreter sought when `--interpreter` is left at its default.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Tried when the [`DEFAULT_INTERPRETER`] is not installed.
const FALLBACK_INTERPRETER: &str = "python";

/// Errors that keep the linter from being run at all.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("could not find {what} {name:?}")]
    NotFound { what: &'static str, name: String },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// What the linter's exit status told us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintOutcome {
    /// The linter exited with status 0.
    Passed,
    /// The linter exited with a non-zero status (or was killed by a signal, in
    /// which case there is no code).
    Failed(Option<i32>),
}

impl LintOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, LintOutcome::Passed)
    }
}

impl From<ExitStatus> for LintOutcome {
    fn from(status: ExitStatus) -> Self {
        if status.success() {
            LintOutcome::Passed
        } else {
            LintOutcome::Failed(status.code())
        }
    }
}

impl fmt::Display for LintOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintOutcome::Passed => write!(f, "passed"),
            LintOutcome::Failed(Some(code)) => write!(f, "failed with exit code {code}"),
            LintOutcome::Failed(None) => write!(f, "was terminated by a signal"),
        }
    }
}

/// Fetch the path to the interpreter that runs the linter script.
///
/// A blank `name` means the linter is executed directly, so `None` is returned.
/// If `name` is the [`DEFAULT_INTERPRETER`] and it is not installed, then `python`
/// is sought instead.
pub fn get_interpreter_exe(name: &str) -> Result<Option<PathBuf>, LintError> {
    let fallbacks: &[&str] = if name == DEFAULT_INTERPRETER {
        &[FALLBACK_INTERPRETER]
    } else {
        &[]
    };
    find_interpreter(name, fallbacks)
}

/// Seeks the interpreter `name`, then each of the `fallbacks` in order.
fn find_interpreter(name: &str, fallbacks: &[&str]) -> Result<Option<PathBuf>, LintError> {
    if name.is_empty() {
        return Ok(None);
    }
    if let Ok(cmd) = which(name) {
        return Ok(Some(cmd));
    }
    for fallback in fallbacks {
        if let Ok(cmd) = which(fallback) {
            log::debug!("{name} not found; using {}", cmd.to_string_lossy());
            return Ok(Some(cmd));
        }
    }
    Err(LintError::NotFound {
        what: "interpreter",
        name: name.to_string(),
    })
}

/// Fetch the path to the linter.
///
/// The given `linter` is used if it names an existing file. Otherwise it is sought
/// by name in the `PATH` environment variable.
pub fn get_linter_exe(linter: &str) -> Result<PathBuf, LintError> {
    let path = Path::new(linter);
    if path.is_file() {
        return Ok(explicit_path(path));
    }
    which(linter).map_err(|_| LintError::NotFound {
        what: "linter",
        name: linter.to_string(),
    })
}

/// Prefixes a bare file name with `./`.
///
/// [`Command`] looks up a program without a path separator in `PATH`, never in the
/// current directory.
fn explicit_path(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new(".").join(path),
        _ => path.to_path_buf(),
    }
}

/// The resolved settings of a linter invocation.
#[derive(Debug, Clone)]
pub struct LintConfig {
    /// The interpreter that runs the `linter` script, if any.
    pub interpreter: Option<PathBuf>,

    /// The linter script (or executable, if there is no `interpreter`).
    pub linter: PathBuf,

    /// The header guard root forwarded as `--root=<root>`.
    pub root: Option<String>,
}

impl LintConfig {
    /// Resolves the `interpreter` and `linter` executables.
    ///
    /// A blank `root` is treated as no root at all.
    pub fn resolve(interpreter: &str, linter: &str, root: Option<&str>) -> Result<Self, LintError> {
        Ok(LintConfig {
            interpreter: get_interpreter_exe(interpreter)?,
            linter: get_linter_exe(linter)?,
            root: root.filter(|r| !r.is_empty()).map(String::from),
        })
    }

    /// The `--root=<root>` token passed to the linter, if a root was given.
    pub fn root_arg(&self) -> Option<String> {
        self.root.as_ref().map(|root| format!("--root={root}"))
    }
}

/// Builds the linter command:
/// `<interpreter> <linter> [--root=<root>] <file>...`
///
/// Without an interpreter the linter is the program itself.
pub fn build_lint_command(config: &LintConfig, files: &[PathBuf]) -> Command {
    let mut cmd = match &config.interpreter {
        Some(interpreter) => {
            let mut cmd = Command::new(interpreter);
            cmd.arg(&config.linter);
            cmd
        }
        None => Command::new(&config.linter),
    };
    if let Some(root_arg) = config.root_arg() {
        cmd.arg(root_arg);
    }
    cmd.args(files);
    cmd
}

/// Runs the linter on `files` and waits for it to finish.
///
/// The linter's stdout and stderr go straight to this process' terminal. Only its
/// exit status is captured; a non-zero status is [`LintOutcome::Failed`], not an
/// error.
pub fn lint_files(config: &LintConfig, files: &[PathBuf]) -> Result<LintOutcome, LintError> {
    let mut cmd = build_lint_command(config, files);
    let program = cmd.get_program().to_string_lossy().to_string();
    log::info!(
        "Running \"{} {}\"",
        program,
        cmd.get_args()
            .map(|x| x.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    );
    let status = cmd
        .status()
        .map_err(|source| LintError::Spawn { program, source })?;
    Ok(LintOutcome::from(status))
}
