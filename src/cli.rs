//! This module holds the Command Line Interface design.

// non-std crates
use clap::{Arg, ArgMatches, Command};

/// The file extensions that are linted unless `--extensions` says otherwise.
pub const DEFAULT_EXTENSIONS: &str = "c,cc,cpp,h,hpp";

/// Builds and returns the Command Line Interface's argument parsing object.
pub fn get_arg_parser() -> Command {
    Command::new("cpplint-helper")
        .about("Lint the given directory and subdirectories with cpplint.py.")
        .arg(
            Arg::new("path")
                .value_name("PATH")
                .required(true)
                .help("The directory which should be linted."),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .value_name("ROOT")
                .help("Root directory for header guards.")
                .long_help(
                    "Root directory for header guards. The value is forwarded to the
linter as ``--root=<ROOT>``, which cpplint uses to compute the
expected include-guard macro name of each header.
",
                ),
        )
        .arg(
            Arg::new("linter")
                .long("linter")
                .short('l')
                .default_value("../cpplint.py")
                .long_help(
                    "The linter script to run. A path to an existing file is used as
given (relative paths resolve against the current working directory).
Otherwise the value is looked up by name in the ``PATH`` environment
variable, so an installed ``cpplint`` can be used with
``--interpreter ''``.
",
                ),
        )
        .arg(
            Arg::new("interpreter")
                .long("interpreter")
                .short('I')
                .default_value("python3")
                .long_help(
                    "The interpreter used to run the linter script.

- When left as ``python3`` and that is not installed, ``python`` is
  tried instead.
- Set this to a blank string (``''``) to execute the linter directly.
",
                ),
        )
        .arg(
            Arg::new("extensions")
                .short('e')
                .long("extensions")
                .value_delimiter(',')
                .default_value(DEFAULT_EXTENSIONS)
                .long_help(
                    "A comma-separated list of file extensions to lint.
Extensions are compared case-sensitively against the part of the
file name after the last ``.``.
",
                ),
        )
        .arg(
            Arg::new("verbosity")
                .long("verbosity")
                .short('v')
                .default_value("info")
                .value_parser(["debug", "info"])
                .long_help("This controls the verbosity of cpplint-helper's own log output.\n"),
        )
}

/// Collects the values of the `--extensions` option.
///
/// Blank entries (as in `"cpp,,h"`) and leading dots (as in `".cpp"`) are dropped.
pub fn parse_extensions(args: &ArgMatches) -> Vec<String> {
    args.get_many::<String>("extensions")
        .map(|exts| {
            exts.map(|ext| ext.trim().trim_start_matches('.').to_string())
                .filter(|ext| !ext.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use clap::ArgMatches;

    use super::{get_arg_parser, parse_extensions};

    fn parser_args(input: Vec<&str>) -> ArgMatches {
        let arg_parser = get_arg_parser();
        arg_parser.get_matches_from(input)
    }

    #[test]
    fn path_is_required() {
        let result = get_arg_parser().try_get_matches_from(vec!["cpplint-helper"]);
        assert!(result.is_err());
    }

    #[test]
    fn defaults() {
        let args = parser_args(vec!["cpplint-helper", "src"]);
        assert_eq!(args.get_one::<String>("path").unwrap(), "src");
        assert!(args.get_one::<String>("root").is_none());
        assert_eq!(args.get_one::<String>("linter").unwrap(), "../cpplint.py");
        assert_eq!(args.get_one::<String>("interpreter").unwrap(), "python3");
        assert_eq!(args.get_one::<String>("verbosity").unwrap(), "info");
        assert_eq!(parse_extensions(&args), ["c", "cc", "cpp", "h", "hpp"]);
    }

    #[test]
    fn root_with_equals() {
        let args = parser_args(vec!["cpplint-helper", "--root=src", "foo"]);
        assert_eq!(args.get_one::<String>("root").unwrap(), "src");
        assert_eq!(args.get_one::<String>("path").unwrap(), "foo");
    }

    #[test]
    fn blank_interpreter() {
        let args = parser_args(vec!["cpplint-helper", "--interpreter", "", "foo"]);
        assert_eq!(args.get_one::<String>("interpreter").unwrap(), "");
    }

    #[test]
    fn custom_extensions() {
        let args = parser_args(vec!["cpplint-helper", "-e", ".cxx,,hxx", "foo"]);
        assert_eq!(parse_extensions(&args), ["cxx", "hxx"]);
    }
}
