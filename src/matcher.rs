//! The comparison-and-update decision table.
//!
//! Given received content, a resolved reference file path, the negation flag
//! and the run-wide update policy, [`FileMatcher::evaluate`] decides the
//! pass/fail verdict, performs the optional write, and builds the diagnostic
//! message. It returns a counter classification but never mutates run-level
//! counters; those belong to the caller (see [`crate::context`]).

use std::env;
use std::path::PathBuf;

use once_cell::sync::Lazy;

use crate::content::Content;
use crate::diff::{self, DiffOptions};
use crate::errors::MatchError;
use crate::report::Reporter;
use crate::store::Store;

/// Run-wide mode controlling whether mismatched or missing reference files
/// are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// Never write; missing files fail the assertion.
    None,
    /// Write only files that do not exist yet.
    CreateOnly,
    /// Write missing files and overwrite mismatched ones.
    Always,
}

static ENV_POLICY: Lazy<UpdatePolicy> = Lazy::new(|| {
    UpdatePolicy::from_flag(
        env::var("UPDATE_FILE_SNAPSHOTS").ok().as_deref(),
        env::var("CI").map(|v| v == "true" || v == "1").unwrap_or(false),
    )
});

impl UpdatePolicy {
    /// Process-wide policy derived from the environment, computed once.
    ///
    /// `UPDATE_FILE_SNAPSHOTS=all|new|none` selects the policy explicitly;
    /// otherwise CI runs get `None` and local runs get `CreateOnly`.
    pub fn from_env() -> Self {
        *ENV_POLICY
    }

    /// Pure policy selection from an optional flag value and the CI bit.
    /// Unrecognized flag values fall back to the flag-absent behavior.
    pub fn from_flag(flag: Option<&str>, ci: bool) -> Self {
        match flag {
            Some("all") => Self::Always,
            Some("new") => Self::CreateOnly,
            Some("none") => Self::None,
            _ if ci => Self::None,
            _ => Self::CreateOnly,
        }
    }
}

/// What the matcher did to the filesystem.
///
/// `WouldHaveWritten` marks failing outcomes where a write was warranted by
/// content state but suppressed by the policy or by negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    None,
    Wrote,
    WouldHaveWritten,
}

/// Which run-level counter the outcome belongs to. The caller owns the
/// counters themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunCounter {
    Added,
    Updated,
    Unmatched,
}

/// One assertion invocation: received content, resolved path, negation flag.
#[derive(Debug, Clone)]
pub struct MatchRequest {
    pub content: Content,
    pub path: PathBuf,
    pub negated: bool,
}

/// The verdict for one request, consumed by the surrounding test framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub passed: bool,
    pub message: String,
    pub side_effect: SideEffect,
    pub counter: Option<RunCounter>,
}

impl MatchOutcome {
    fn pass(side_effect: SideEffect, counter: Option<RunCounter>) -> Self {
        Self {
            passed: true,
            message: String::new(),
            side_effect,
            counter,
        }
    }

    fn fail(message: String, side_effect: SideEffect) -> Self {
        Self {
            passed: false,
            message,
            side_effect,
            counter: Some(RunCounter::Unmatched),
        }
    }
}

/// Evaluates match requests against a [`Store`].
pub struct FileMatcher<S> {
    store: S,
    reporter: Reporter,
}

impl<S: Store> FileMatcher<S> {
    pub fn new(store: S) -> Self {
        Self::with_reporter(store, Reporter::auto())
    }

    pub fn with_reporter(store: S, reporter: Reporter) -> Self {
        Self { store, reporter }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn set_reporter(&mut self, reporter: Reporter) {
        self.reporter = reporter;
    }

    /// Runs the decision table. At most one write occurs per request, and
    /// only when the policy permits it, the assertion is not negated, and
    /// the outcome is a pass.
    pub fn evaluate(
        &self,
        request: &MatchRequest,
        policy: UpdatePolicy,
        options: &DiffOptions,
    ) -> Result<MatchOutcome, MatchError> {
        if request.path.as_os_str().is_empty() {
            return Err(MatchError::usage("reference file path must not be empty"));
        }

        let exists = self.store.exists(&request.path);

        // Updates disabled and nothing on disk: fails regardless of negation.
        if policy == UpdatePolicy::None && !exists {
            return Ok(MatchOutcome::fail(
                self.reporter.not_written(&request.path),
                SideEffect::WouldHaveWritten,
            ));
        }

        if exists {
            let stored = self
                .store
                .read(&request.path, request.content.read_mode())?;
            return self.compare(request, &stored, policy, options);
        }

        if !request.negated {
            self.store.write(&request.path, &request.content)?;
            return Ok(MatchOutcome::pass(
                SideEffect::Wrote,
                Some(RunCounter::Added),
            ));
        }

        // Cannot not-match a file that is not there.
        Ok(MatchOutcome::fail(
            self.reporter.missing(&request.path),
            SideEffect::WouldHaveWritten,
        ))
    }

    fn compare(
        &self,
        request: &MatchRequest,
        stored: &Content,
        policy: UpdatePolicy,
        options: &DiffOptions,
    ) -> Result<MatchOutcome, MatchError> {
        let equal = request.content == *stored;

        match (equal, request.negated) {
            (true, false) => Ok(MatchOutcome::pass(SideEffect::None, None)),
            (true, true) => Ok(MatchOutcome::fail(
                self.reporter.unexpected_match(&request.path),
                SideEffect::None,
            )),
            (false, true) => Ok(MatchOutcome::pass(SideEffect::None, None)),
            (false, false) => {
                if policy == UpdatePolicy::Always {
                    self.store.write(&request.path, &request.content)?;
                    return Ok(MatchOutcome::pass(
                        SideEffect::Wrote,
                        Some(RunCounter::Updated),
                    ));
                }
                // Diff body only when both sides are textual.
                let body = match (stored.as_text(), request.content.as_text()) {
                    (Some(snapshot), Some(received)) => {
                        Some(diff::render(snapshot, received, options))
                    }
                    _ => None,
                };
                Ok(MatchOutcome::fail(
                    self.reporter.mismatch(&request.path, body.as_deref()),
                    SideEffect::WouldHaveWritten,
                ))
            }
        }
    }
}
