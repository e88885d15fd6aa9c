//! Check reporters
//!
//! ## CheckReporter Trait
//!
//! The runner uses a `CheckReporter` trait to separate reporting from execution. Two formats
//! ship: a pytest-style console reporter and a JSON-lines reporter for machines.
//!
//! Reporters write to any `io::Write`; write errors are ignored since a broken stdout must not turn
//! into a verification failure.

use std::io::{self, Write};

use miette::Diagnostic;
use serde::Serialize;

use super::check_runner::{CheckInfo, CheckResult, RunSummary};
use crate::verify::VerifyError;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const BOLD_RED: &str = "\x1b[1;31m";
const BOLD_GREEN: &str = "\x1b[1;32m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

/// Trait for reporting check results.
pub trait CheckReporter {
    /// Called once the checks to run are known
    fn on_collection_complete(&mut self, check_count: usize);

    /// Called before a check runs
    fn on_check_start(&mut self, _check: &CheckInfo) {}

    /// Called when a check completes
    fn on_check_complete(&mut self, check: &CheckInfo, result: &CheckResult);

    /// Called when all checks have completed
    fn on_run_complete(&mut self, summary: &RunSummary);
}

/// Default console reporter (pytest-style)
pub struct ConsoleReporter<W: Write> {
    out: W,
    pub verbose: bool,
    pub color: bool,
    /// `(check id, rendered failure)` pairs, printed after the run.
    failures: Vec<(String, String)>,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(verbose: bool, color: bool) -> Self {
        Self::new(io::stdout(), verbose, color)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, verbose: bool, color: bool) -> Self {
        Self {
            out,
            verbose,
            color,
            failures: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn status(&self, result: &CheckResult) -> String {
        match result {
            CheckResult::Passed(d) => {
                if self.verbose {
                    format!("{} ({}ms)", self.paint(GREEN, "PASSED"), d.as_millis())
                } else {
                    self.paint(GREEN, "PASSED")
                }
            }
            CheckResult::Failed(d, _) => {
                if self.verbose {
                    format!("{} ({}ms)", self.paint(RED, "FAILED"), d.as_millis())
                } else {
                    self.paint(RED, "FAILED")
                }
            }
            CheckResult::Skipped(reason) => {
                if reason.is_empty() {
                    self.paint(YELLOW, "SKIPPED")
                } else {
                    format!("{} ({})", self.paint(YELLOW, "SKIPPED"), reason)
                }
            }
            CheckResult::Warned(_, findings) => format!(
                "{} ({} unexpected: {})",
                self.paint(YELLOW, "WARNED"),
                findings.len(),
                findings.join(", ")
            ),
        }
    }
}

impl<W: Write> CheckReporter for ConsoleReporter<W> {
    fn on_collection_complete(&mut self, check_count: usize) {
        let banner = self.paint(BOLD, "=================== scriptcheck session starts ===================");
        let _ = writeln!(self.out, "{banner}");
        let _ = writeln!(self.out, "collected {check_count} check(s)");
        let _ = writeln!(self.out);
    }

    fn on_check_complete(&mut self, check: &CheckInfo, result: &CheckResult) {
        let status = self.status(result);
        let _ = writeln!(self.out, "{} {}", check.id, status);

        if let CheckResult::Failed(_, err) = result {
            self.failures.push((check.id.clone(), render_failure(err)));
        }
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        if !self.failures.is_empty() {
            let _ = writeln!(self.out);
            let banner = self.paint(BOLD_RED, "=================== FAILURES ===================");
            let _ = writeln!(self.out, "{banner}");
            for (id, rendered) in std::mem::take(&mut self.failures) {
                let _ = writeln!(self.out);
                let title = self.paint(BOLD, &format!("___________ {id} ___________"));
                let _ = writeln!(self.out, "{title}");
                let _ = writeln!(self.out);
                for line in rendered.lines() {
                    let _ = writeln!(self.out, "    {line}");
                }
            }
        }

        let mut parts = Vec::new();
        if summary.passed > 0 {
            parts.push(format!("{} passed", summary.passed));
        }
        if summary.failed > 0 {
            parts.push(format!("{} failed", summary.failed));
        }
        if summary.skipped > 0 {
            parts.push(format!("{} skipped", summary.skipped));
        }
        if summary.warned > 0 {
            parts.push(format!("{} warned", summary.warned));
        }
        if parts.is_empty() {
            parts.push("no checks ran".to_string());
        }

        let style = if summary.is_success() { BOLD_GREEN } else { BOLD_RED };
        let line = format!(
            "=================== {} in {:.2}s ===================",
            parts.join(", "),
            summary.duration.as_secs_f64()
        );
        let _ = writeln!(self.out);
        let line = self.paint(style, &line);
        let _ = writeln!(self.out, "{line}");
        let _ = self.out.flush();
    }
}

/// Render a failure with its diagnostic code and help, one item per line.
pub fn render_failure(err: &VerifyError) -> String {
    let mut rendered = err.to_string();
    if let Some(code) = err.code() {
        rendered.push_str(&format!("\n[{code}]"));
    }
    if let Some(help) = err.help() {
        rendered.push_str(&format!("\nhelp: {help}"));
    }
    rendered
}

/// One JSON line per check, then one summary line.
pub struct JsonReporter<W: Write> {
    out: W,
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum JsonEvent<'a> {
    Check {
        id: &'a str,
        outcome: &'static str,
        duration_ms: Option<u128>,
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        #[serde(skip_serializing_if = "is_empty")]
        unexpected: &'a [String],
    },
    Summary {
        total: usize,
        passed: usize,
        failed: usize,
        skipped: usize,
        warned: usize,
        duration_ms: u128,
        success: bool,
    },
}

fn is_empty(items: &&[String]) -> bool {
    items.is_empty()
}

impl JsonReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &JsonEvent<'_>) {
        match serde_json::to_string(event) {
            Ok(line) => {
                let _ = writeln!(self.out, "{line}");
            }
            Err(err) => tracing::error!(%err, "failed to serialize report event"),
        }
    }
}

impl<W: Write> CheckReporter for JsonReporter<W> {
    fn on_collection_complete(&mut self, _check_count: usize) {}

    fn on_check_complete(&mut self, check: &CheckInfo, result: &CheckResult) {
        let event = match result {
            CheckResult::Passed(d) => JsonEvent::Check {
                id: &check.id,
                outcome: "passed",
                duration_ms: Some(d.as_millis()),
                code: None,
                message: None,
                unexpected: &[],
            },
            CheckResult::Failed(d, err) => JsonEvent::Check {
                id: &check.id,
                outcome: "failed",
                duration_ms: Some(d.as_millis()),
                code: err.code().map(|c| c.to_string()),
                message: Some(err.to_string()),
                unexpected: &[],
            },
            CheckResult::Skipped(reason) => JsonEvent::Check {
                id: &check.id,
                outcome: "skipped",
                duration_ms: None,
                code: None,
                message: Some(reason.clone()),
                unexpected: &[],
            },
            CheckResult::Warned(d, findings) => JsonEvent::Check {
                id: &check.id,
                outcome: "warned",
                duration_ms: Some(d.as_millis()),
                code: None,
                message: None,
                unexpected: findings,
            },
        };
        self.emit(&event);
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        self.emit(&JsonEvent::Summary {
            total: summary.total,
            passed: summary.passed,
            failed: summary.failed,
            skipped: summary.skipped,
            warned: summary.warned,
            duration_ms: summary.duration.as_millis(),
            success: summary.is_success(),
        });
        let _ = self.out.flush();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use super::*;
    use crate::cli::check_runner::CheckKind;
    use crate::verify::ArtifactKind;

    fn check(id: &str, kind: CheckKind) -> CheckInfo {
        CheckInfo {
            id: id.to_string(),
            kind,
        }
    }

    fn missing_grep() -> VerifyError {
        VerifyError::MissingArtifact {
            kind: ArtifactKind::OutputFile,
            path: PathBuf::from("outputs/bash_grep.txt"),
        }
    }

    #[test]
    fn console_report_lists_failures_after_results() {
        let mut reporter = ConsoleReporter::new(Vec::new(), false, false);
        reporter.on_collection_complete(3);
        reporter.on_check_complete(&check("outputs::directory", CheckKind::OutputsDir), &CheckResult::Passed(Duration::ZERO));
        let grep = scriptcheck_core::lang::outputs::find("bash_grep.txt").unwrap();
        reporter.on_check_complete(
            &check("outputs::bash_grep.txt", CheckKind::Output(grep)),
            &CheckResult::Failed(Duration::ZERO, missing_grep()),
        );
        reporter.on_check_complete(
            &check("outputs::hygiene", CheckKind::Hygiene),
            &CheckResult::Warned(Duration::ZERO, vec!["stray.log".to_string()]),
        );
        reporter.on_run_complete(&RunSummary {
            total: 3,
            passed: 1,
            failed: 1,
            skipped: 0,
            warned: 1,
            duration: Duration::ZERO,
        });

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        insta::assert_snapshot!(text, @r"
        =================== scriptcheck session starts ===================
        collected 3 check(s)

        outputs::directory PASSED
        outputs::bash_grep.txt FAILED
        outputs::hygiene WARNED (1 unexpected: stray.log)

        =================== FAILURES ===================

        ___________ outputs::bash_grep.txt ___________

            output file not found: outputs/bash_grep.txt
            [scriptcheck::missing_artifact]
            help: scripts live under their language directory; outputs appear after run_scripts.sh has run

        =================== 1 passed, 1 failed, 1 warned in 0.00s ===================
        ");
    }

    #[test]
    fn json_report_emits_one_line_per_event() {
        let mut reporter = JsonReporter::new(Vec::new());
        reporter.on_check_complete(
            &check("outputs::hygiene", CheckKind::Hygiene),
            &CheckResult::Warned(Duration::ZERO, vec!["stray.log".to_string()]),
        );
        reporter.on_check_complete(
            &check("outputs::directory", CheckKind::OutputsDir),
            &CheckResult::Failed(Duration::ZERO, missing_grep()),
        );
        reporter.on_run_complete(&RunSummary {
            total: 2,
            failed: 1,
            warned: 1,
            ..RunSummary::default()
        });

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["outcome"], "warned");
        assert_eq!(lines[0]["unexpected"][0], "stray.log");
        assert_eq!(lines[1]["code"], "scriptcheck::missing_artifact");
        assert_eq!(lines[2]["event"], "summary");
        assert_eq!(lines[2]["success"], false);
    }
}
