//! Check runner implementation (pytest-style)
//!
//! Collects checks from the script and output registries, filters them, runs each one exactly
//! once, and streams results to a [`CheckReporter`].
//!
//! ## Check ids
//!
//! - `syntax::<repo-relative path>` for every registered script
//! - `outputs::directory` for the outputs directory itself
//! - `outputs::<file name>` for every content-checked artifact
//! - `outputs::hygiene` for the soft scan for unexpected files
//!
//! Checks are independent; their order only affects how results are printed.

use std::time::{Duration, Instant};

use scriptcheck_core::lang::{outputs, scripts};
use scriptcheck_core::{OutputExpectation, RepoLayout, ScriptSpec};

use super::reporter::CheckReporter;
use crate::verify::{self, ToolchainExecutor, VerifyError};

/// Which verifier(s) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Suite {
    #[default]
    All,
    Syntax,
    Outputs,
}

impl Suite {
    fn includes_syntax(self) -> bool {
        matches!(self, Suite::All | Suite::Syntax)
    }

    fn includes_outputs(self) -> bool {
        matches!(self, Suite::All | Suite::Outputs)
    }
}

/// What a single check verifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Syntax(&'static ScriptSpec),
    OutputsDir,
    Output(&'static OutputExpectation),
    Hygiene,
}

/// A collected check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInfo {
    pub id: String,
    pub kind: CheckKind,
}

impl CheckInfo {
    fn new(id: impl Into<String>, kind: CheckKind) -> Self {
        Self { id: id.into(), kind }
    }
}

/// Result of running a single check
#[derive(Debug)]
pub enum CheckResult {
    Passed(Duration),
    Failed(Duration, VerifyError),
    Skipped(String),
    /// Passed with findings worth reporting (hygiene extras).
    Warned(Duration, Vec<String>),
}

impl CheckResult {
    pub fn is_failure(&self) -> bool {
        matches!(self, CheckResult::Failed(..))
    }
}

/// Summary of a check run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub warned: usize,
    pub duration: Duration,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    fn record(&mut self, result: &CheckResult) {
        self.total += 1;
        match result {
            CheckResult::Passed(_) => self.passed += 1,
            CheckResult::Failed(..) => self.failed += 1,
            CheckResult::Skipped(_) => self.skipped += 1,
            CheckResult::Warned(..) => self.warned += 1,
        }
    }
}

/// Everything a run needs besides the executor and reporter.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub layout: RepoLayout,
    pub suite: Suite,
    /// Keep only checks whose id contains this substring.
    pub filter: Option<String>,
    pub stop_on_fail: bool,
    /// Report a toolchain that cannot be launched as skipped instead of failed.
    pub skip_missing_toolchains: bool,
    pub timeout: Duration,
}

impl RunOptions {
    pub fn new(layout: RepoLayout) -> Self {
        Self {
            layout,
            suite: Suite::All,
            filter: None,
            stop_on_fail: false,
            skip_missing_toolchains: false,
            timeout: verify::DEFAULT_TIMEOUT,
        }
    }
}

/// Collect the checks for `suite`, keeping only ids containing `filter`.
pub fn collect_checks(suite: Suite, filter: Option<&str>) -> Vec<CheckInfo> {
    let mut checks = Vec::new();

    if suite.includes_syntax() {
        checks.extend(
            scripts::SCRIPTS
                .iter()
                .map(|spec| CheckInfo::new(spec.check_id(), CheckKind::Syntax(spec))),
        );
    }

    if suite.includes_outputs() {
        checks.push(CheckInfo::new("outputs::directory", CheckKind::OutputsDir));
        checks.extend(
            outputs::content_checked().map(|expectation| CheckInfo::new(expectation.check_id(), CheckKind::Output(expectation))),
        );
        checks.push(CheckInfo::new("outputs::hygiene", CheckKind::Hygiene));
    }

    if let Some(keyword) = filter {
        checks.retain(|c| c.id.contains(keyword));
    }
    checks
}

/// Run one check.
pub fn run_check(check: &CheckInfo, options: &RunOptions, executor: &dyn ToolchainExecutor) -> CheckResult {
    let start = Instant::now();
    let layout = &options.layout;

    let outcome = match check.kind {
        CheckKind::Syntax(spec) => verify::verify_script(layout, spec, executor, options.timeout).map(|_| Vec::new()),
        CheckKind::OutputsDir => verify::verify_output_dir(layout).map(|_| Vec::new()),
        CheckKind::Output(expectation) => verify::verify_output(layout, expectation).map(|_| Vec::new()),
        CheckKind::Hygiene => verify::scan_hygiene(layout).map(|report| report.unexpected),
    };

    let elapsed = start.elapsed();
    match outcome {
        Ok(findings) if findings.is_empty() => CheckResult::Passed(elapsed),
        Ok(findings) => CheckResult::Warned(elapsed, findings),
        Err(err) if options.skip_missing_toolchains && err.is_environmental() => CheckResult::Skipped(err.to_string()),
        Err(err) => CheckResult::Failed(elapsed, err),
    }
}

/// Run every selected check, reporting as it goes.
#[tracing::instrument(skip_all, fields(suite = ?options.suite, root = %options.layout.root().display()))]
pub fn run_checks(
    options: &RunOptions,
    executor: &dyn ToolchainExecutor,
    reporter: &mut dyn CheckReporter,
) -> RunSummary {
    let start = Instant::now();
    let checks = collect_checks(options.suite, options.filter.as_deref());
    reporter.on_collection_complete(checks.len());

    let mut summary = RunSummary::default();
    for check in &checks {
        reporter.on_check_start(check);
        let result = run_check(check, options, executor);
        reporter.on_check_complete(check, &result);
        summary.record(&result);

        if options.stop_on_fail && result.is_failure() {
            break;
        }
    }

    summary.duration = start.elapsed();
    reporter.on_run_complete(&summary);
    summary
}
