//! User-facing message formatting.
//!
//! All diagnostic strings handed back in a [`MatchOutcome`] are built here,
//! so wording and colorization stay consistent. Messages name the reference
//! file by its basename. Color is ANSI via `termcolor`, enabled only when
//! requested (or when stderr is a tty for [`Reporter::auto`]).
//!
//! [`MatchOutcome`]: crate::matcher::MatchOutcome

use std::io::Write;
use std::path::Path;

use termcolor::{Ansi, Color, ColorSpec, WriteColor};

/// Builds outcome messages, optionally colorized.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// No color; stable output for tests and logs.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Color when stderr is a terminal.
    pub fn auto() -> Self {
        Self::new(atty::is(atty::Stream::Stderr))
    }

    /// Missing reference file while updates are disabled.
    pub fn not_written(&self, path: &Path) -> String {
        format!(
            "New output file {} was {}.\n\n\
             The update flag must be explicitly passed to write a new snapshot.\n\n\
             This is likely because this test is run in a {} \
             in which snapshots are not written by default.\n\n",
            self.file(path),
            self.alert("not written"),
            self.emphasis("continuous integration (CI) environment"),
        )
    }

    /// Negated assertion, but the content matched.
    pub fn unexpected_match(&self, path: &Path) -> String {
        format!(
            "Expected received content {} the file {}.",
            self.warn("to not match"),
            self.file(path),
        )
    }

    /// Content mismatch; `diff` is present only for text-vs-text comparisons.
    pub fn mismatch(&self, path: &Path, diff: Option<&str>) -> String {
        let body = diff.map(|d| format!("\n\n{d}")).unwrap_or_default();
        format!(
            "Received content {} the file {}.{body}",
            self.warn("doesn't match"),
            self.file(path),
        )
    }

    /// Negated assertion against a file that does not exist.
    pub fn missing(&self, path: &Path) -> String {
        format!(
            "The output file {} {}.",
            self.file(path),
            self.alert("doesn't exist"),
        )
    }

    fn file(&self, path: &Path) -> String {
        self.paint(&basename(path), ColorSpec::new().set_fg(Some(Color::Blue)))
    }

    fn warn(&self, text: &str) -> String {
        self.paint(text, ColorSpec::new().set_fg(Some(Color::Red)))
    }

    fn alert(&self, text: &str) -> String {
        self.paint(text, ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))
    }

    fn emphasis(&self, text: &str) -> String {
        self.paint(text, ColorSpec::new().set_fg(Some(Color::Blue)))
    }

    fn paint(&self, text: &str, spec: &ColorSpec) -> String {
        if !self.color {
            return text.to_string();
        }
        let mut ansi = Ansi::new(Vec::new());
        let styled = ansi
            .set_color(spec)
            .and_then(|()| ansi.write_all(text.as_bytes()))
            .and_then(|()| ansi.reset());
        if styled.is_err() {
            return text.to_string();
        }
        String::from_utf8(ansi.into_inner()).unwrap_or_else(|_| text.to_string())
    }
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_messages_carry_no_escape_codes() {
        let reporter = Reporter::plain();
        let msg = reporter.not_written(Path::new("snaps/out-1"));
        assert!(msg.contains("New output file out-1 was not written."));
        assert!(msg.contains("update flag"));
        assert!(!msg.contains('\u{1b}'));
    }

    #[test]
    fn colored_messages_wrap_the_verdict() {
        let reporter = Reporter::new(true);
        let msg = reporter.missing(Path::new("snaps/out-1"));
        assert!(msg.contains('\u{1b}'));
        assert!(msg.contains("doesn't exist"));
    }

    #[test]
    fn mismatch_appends_diff_body_only_when_present() {
        let reporter = Reporter::plain();
        let with = reporter.mismatch(Path::new("x.snap"), Some("- a\n+ b\n"));
        assert!(with.ends_with("- a\n+ b\n"));
        let without = reporter.mismatch(Path::new("x.snap"), None);
        assert!(without.ends_with("the file x.snap."));
    }

    #[test]
    fn messages_use_the_basename() {
        let reporter = Reporter::plain();
        let msg = reporter.unexpected_match(Path::new("/deep/tree/ref.bin"));
        assert!(msg.contains("ref.bin"));
        assert!(!msg.contains("/deep/tree"));
    }
}
