//! Caller-facing assertion surface.
//!
//! A [`TestContext`] is the per-test binding a harness hands to its matcher
//! integration: test file location, test name, negation flag, update policy,
//! and the run-level counters. [`TestContext::match_file`] is the single
//! assertion entry point; it resolves a default reference path when none is
//! given, delegates to the [`FileMatcher`] decision table, and applies the
//! returned counter classification to its own [`RunCounters`].

use std::path::PathBuf;

use crate::content::Content;
use crate::diff::DiffOptions;
use crate::errors::MatchError;
use crate::matcher::{FileMatcher, MatchOutcome, MatchRequest, RunCounter, UpdatePolicy};
use crate::resolve;
use crate::store::{DiskStore, Store};

/// Run-level tallies owned by the test framework, never by the matcher.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunCounters {
    pub added: usize,
    pub updated: usize,
    pub unmatched: usize,
}

impl RunCounters {
    pub fn record(&mut self, counter: Option<RunCounter>) {
        match counter {
            Some(RunCounter::Added) => self.added += 1,
            Some(RunCounter::Updated) => self.updated += 1,
            Some(RunCounter::Unmatched) => self.unmatched += 1,
            None => {}
        }
    }
}

/// Per-assertion options.
#[derive(Debug, Default, Clone)]
pub struct MatchOptions {
    pub diff: DiffOptions,
    /// Appended verbatim to derived default paths (include the dot, e.g.
    /// `".svg"`). Ignored when an explicit path is supplied.
    pub file_extension: Option<String>,
}

/// Per-test assertion context.
pub struct TestContext<S = DiskStore> {
    pub test_path: PathBuf,
    pub test_name: String,
    pub negated: bool,
    pub policy: UpdatePolicy,
    pub counters: RunCounters,
    assertion_calls: usize,
    matcher: FileMatcher<S>,
}

impl TestContext<DiskStore> {
    pub fn new(
        test_path: impl Into<PathBuf>,
        test_name: impl Into<String>,
        policy: UpdatePolicy,
    ) -> Self {
        Self::with_store(test_path, test_name, policy, DiskStore)
    }
}

impl<S: Store> TestContext<S> {
    pub fn with_store(
        test_path: impl Into<PathBuf>,
        test_name: impl Into<String>,
        policy: UpdatePolicy,
        store: S,
    ) -> Self {
        Self {
            test_path: test_path.into(),
            test_name: test_name.into(),
            negated: false,
            policy,
            counters: RunCounters::default(),
            assertion_calls: 0,
            matcher: FileMatcher::new(store),
        }
    }

    /// Assertions evaluated so far in this test.
    pub fn assertion_calls(&self) -> usize {
        self.assertion_calls
    }

    /// Overrides message colorization (auto-detected by default).
    pub fn set_reporter(&mut self, reporter: crate::report::Reporter) {
        self.matcher.set_reporter(reporter);
    }

    pub fn store(&self) -> &S {
        self.matcher.store()
    }

    /// Matches `content` against the reference file at `path`, or at a
    /// derived default path when `path` is `None`. Bumps the assertion
    /// sequence number and the run counters.
    pub fn match_file(
        &mut self,
        content: impl Into<Content>,
        path: Option<PathBuf>,
        options: &MatchOptions,
    ) -> Result<MatchOutcome, MatchError> {
        self.assertion_calls += 1;

        let path = match path {
            Some(path) => path,
            None => resolve::default_snapshot_path(
                &self.test_path,
                &self.test_name,
                self.assertion_calls,
                options.file_extension.as_deref(),
            )?,
        };

        let request = MatchRequest {
            content: content.into(),
            path,
            negated: self.negated,
        };
        let outcome = self.matcher.evaluate(&request, self.policy, &options.diff)?;
        self.counters.record(outcome.counter);
        Ok(outcome)
    }
}
