//! Matchfile: file snapshot assertions.
//!
//! Compares output produced by a test (text or binary) against the contents
//! of a reference file on disk, and optionally rewrites that reference file
//! when an update mode is requested. The heart of the crate is a single
//! decision table ([`matcher::FileMatcher`]); everything around it resolves
//! default paths, renders diffs, and formats messages.
//!
//! ```no_run
//! use matchfile::{MatchOptions, TestContext, UpdatePolicy};
//!
//! let mut ctx = TestContext::new(
//!     file!(),
//!     "renders the header",
//!     UpdatePolicy::from_env(),
//! );
//! let outcome = ctx
//!     .match_file("<h1>hello</h1>\n", None, &MatchOptions::default())
//!     .unwrap();
//! assert!(outcome.passed, "{}", outcome.message);
//! ```

pub use crate::content::{Content, ReadMode};
pub use crate::context::{MatchOptions, RunCounters, TestContext};
pub use crate::diff::DiffOptions;
pub use crate::errors::MatchError;
pub use crate::matcher::{
    FileMatcher, MatchOutcome, MatchRequest, RunCounter, SideEffect, UpdatePolicy,
};
pub use crate::report::Reporter;
pub use crate::store::{DiskStore, MemoryStore, Store};

pub mod content;
pub mod context;
pub mod diff;
pub mod errors;
pub mod matcher;
pub mod report;
pub mod resolve;
pub mod store;
