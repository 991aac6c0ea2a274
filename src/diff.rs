//! Line-based diff rendering for text mismatches.
//!
//! Produces the human-readable difference block embedded in mismatch
//! messages. Binary mismatches never reach this module. Rendering is built
//! on `difference::Changeset`, with unchanged runs folded unless `expand`
//! is set.

use difference::{Changeset, Difference};

/// Formatting options for the rendered diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    /// Render every unchanged line instead of folding long runs.
    pub expand: bool,
    /// Unchanged lines kept on each side of a fold.
    pub context_lines: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            expand: false,
            context_lines: 5,
        }
    }
}

/// Renders a unified-diff-like block: stored reference lines prefixed with
/// `-`, received lines with `+`, unchanged context indented.
pub fn render(snapshot: &str, received: &str, options: &DiffOptions) -> String {
    let changeset = Changeset::new(snapshot, received, "\n");

    let mut out = String::from("- Snapshot\n+ Received\n\n");
    for change in &changeset.diffs {
        match change {
            Difference::Same(block) => push_context(&mut out, block, options),
            Difference::Rem(block) => push_marked(&mut out, block, '-'),
            Difference::Add(block) => push_marked(&mut out, block, '+'),
        }
    }
    out
}

fn push_marked(out: &mut String, block: &str, marker: char) {
    for line in block.split('\n') {
        out.push(marker);
        out.push(' ');
        out.push_str(line);
        out.push('\n');
    }
}

fn push_context(out: &mut String, block: &str, options: &DiffOptions) {
    let lines: Vec<&str> = block.split('\n').collect();
    if options.expand || lines.len() <= options.context_lines * 2 {
        for line in &lines {
            push_plain(out, line);
        }
        return;
    }

    for line in &lines[..options.context_lines] {
        push_plain(out, line);
    }
    let folded = lines.len() - options.context_lines * 2;
    out.push_str(&format!("@@ {folded} unchanged lines @@\n"));
    for line in &lines[lines.len() - options.context_lines..] {
        push_plain(out, line);
    }
}

fn push_plain(out: &mut String, line: &str) {
    out.push_str("  ");
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_removed_and_added_lines() {
        let rendered = render("world\n", "hello\n", &DiffOptions::default());
        assert!(rendered.starts_with("- Snapshot\n+ Received\n"));
        assert!(rendered.contains("- world"));
        assert!(rendered.contains("+ hello"));
    }

    #[test]
    fn unchanged_lines_are_indented_context() {
        let snapshot = "a\nb\nold\n";
        let received = "a\nb\nnew\n";
        let rendered = render(snapshot, received, &DiffOptions::default());
        assert!(rendered.contains("  a\n"));
        assert!(rendered.contains("  b\n"));
        assert!(rendered.contains("- old"));
        assert!(rendered.contains("+ new"));
    }

    #[test]
    fn long_unchanged_runs_fold_unless_expanded() {
        let middle: Vec<String> = (0..20).map(|i| format!("line{i}")).collect();
        let snapshot = format!("old\n{}\n", middle.join("\n"));
        let received = format!("new\n{}\n", middle.join("\n"));

        let folded = render(&snapshot, &received, &DiffOptions::default());
        assert!(folded.contains("unchanged lines @@"));
        assert!(!folded.contains("line10"));

        let expanded = render(
            &snapshot,
            &received,
            &DiffOptions {
                expand: true,
                context_lines: 5,
            },
        );
        assert!(!expanded.contains("unchanged lines @@"));
        assert!(expanded.contains("line10"));
    }
}
