//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fmt::Write as _;
use std::io::IsTerminal;
use std::time::Duration;

use scriptcheck_core::lang::{outputs, scripts};
use scriptcheck_core::{ContentRule, RepoLayout};

use super::check_runner::{self, RunOptions, Suite};
use super::reporter::{CheckReporter, ConsoleReporter, JsonReporter};
use super::{CliError, CliResult, ExitCode, OutputFormat};
use crate::verify::{DefaultToolchainExecutor, Invocation};

/// Flags for the `check` command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    pub suite: Suite,
    pub filter: Option<String>,
    pub stop_on_fail: bool,
    pub skip_missing_toolchains: bool,
    pub verbose: bool,
}

/// Run the selected checks and report them in `format`.
pub fn check(layout: RepoLayout, timeout: Duration, format: OutputFormat, args: CheckArgs) -> CliResult<ExitCode> {
    let executor = DefaultToolchainExecutor::new()
        .map_err(|e| CliError::failure(format!("Error starting process runtime: {}", e)))?;

    let options = RunOptions {
        layout,
        suite: args.suite,
        filter: args.filter,
        stop_on_fail: args.stop_on_fail,
        skip_missing_toolchains: args.skip_missing_toolchains,
        timeout,
    };

    let mut reporter: Box<dyn CheckReporter> = match format {
        OutputFormat::Console => Box::new(ConsoleReporter::stdout(args.verbose, std::io::stdout().is_terminal())),
        OutputFormat::Json => Box::new(JsonReporter::stdout()),
    };

    let summary = check_runner::run_checks(&options, &executor, reporter.as_mut());

    if summary.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        // Failures were already reported
        Err(CliError::new("", ExitCode::FAILURE))
    }
}

/// Print the script and output registries.
pub fn list(layout: &RepoLayout) -> CliResult<ExitCode> {
    print!("{}", render_listing(layout));
    Ok(ExitCode::SUCCESS)
}

/// Render the registries as plain text, with script paths resolved under `layout`.
pub fn render_listing(layout: &RepoLayout) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Syntax checks:");
    let width = scripts::SCRIPTS.iter().map(|s| s.path.len()).max().unwrap_or(0);
    for spec in scripts::SCRIPTS {
        let invocation = Invocation::for_script(spec, &layout.script_path(spec));
        let _ = writeln!(out, "  {:width$}  {}", spec.path, invocation.display(), width = width);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Expected outputs (in {}):", layout.outputs_dir().display());
    let width = outputs::OUTPUTS.iter().map(|o| o.file_name.len()).max().unwrap_or(0);
    for expectation in outputs::OUTPUTS {
        let rule = match expectation.rule {
            ContentRule::Text { min_len, markers } if markers.is_empty() => format!("> {min_len} chars"),
            ContentRule::Text { min_len, markers } => {
                let markers: Vec<String> = markers.iter().map(|m| m.to_string()).collect();
                format!("> {min_len} chars, any of {}", markers.join(", "))
            }
            ContentRule::ListingOnly => "listed only".to_string(),
        };
        let _ = writeln!(out, "  {:width$}  {}", expectation.file_name, rule, width = width);
    }

    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn listing_shows_invocations_and_rules() {
        let text = render_listing(&RepoLayout::new("/repo"));
        insta::assert_snapshot!(text, @r#"
        Syntax checks:
          bash/basics.sh               bash -n /repo/bash/basics.sh
          bash/grep.sh                 bash -n /repo/bash/grep.sh
          bash/awk.sh                  bash -n /repo/bash/awk.sh
          run_scripts.sh               bash -n /repo/run_scripts.sh
          zsh/basics.zsh               zsh -n /repo/zsh/basics.zsh
          perl/basics.pl               perl -c /repo/perl/basics.pl
          python/basics.py             python3 -m py_compile /repo/python/basics.py
          python/numpy_basics.py       python3 -m py_compile /repo/python/numpy_basics.py
          python/matplotlib_basics.py  python3 -m py_compile /repo/python/matplotlib_basics.py
          cpp/basics.cpp               g++ -std=c++20 -fsyntax-only /repo/cpp/basics.cpp

        Expected outputs (in /repo/outputs):
          bash_basics.txt        > 100 chars, any of "Variables", "count="
          bash_grep.txt          > 100 chars, any of "grep" (any case)
          bash_awk.txt           > 100 chars, any of "awk" (any case), "$1"
          perl_basics.txt        > 50 chars
          zsh_basics.txt         > 100 chars, any of "zsh" (any case), "array"
          python_basics.txt      > 200 chars, any of "string", "dict", "list", "function"
          python_numpy.txt       > 100 chars, any of "numpy" (any case), "array" (any case), "skip" (any case)
          python_matplotlib.txt  > 50 chars, any of "plot" (any case), "matplotlib" (any case), "skip" (any case)
          cpp_basics.txt         > 200 chars, any of "vector" (any case), "map" (any case), "class" (any case), "template" (any case)
          zsh_functions.txt      listed only
          _tmp_array.npy         listed only
        "#);
    }
}
