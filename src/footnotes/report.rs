/*!
 * Diagnostic report for footnote consistency failures.
 *
 * When a renumbering pass ends with unequal reference and definition
 * counts, the engine refuses to produce output and hands back everything a
 * human needs to locate the discrepancy: both totals, both ordered lists of
 * original numbers, and a unified diff between the two sequences.
 */

use similar::{ChangeTag, TextDiff};
use std::fmt;

use super::renumber::MarkerKind;

/// Everything known about a failed renumbering pass.
#[derive(Debug, Clone)]
pub struct MismatchReport {
    /// Which marker type the failing pass was scanning
    pub kind: MarkerKind,
    /// Total inline references encountered
    pub reference_count: usize,
    /// Total footnote definitions encountered
    pub footnote_count: usize,
    /// Original reference numbers in encounter order, space-joined
    pub references_found: String,
    /// Original definition numbers in encounter order, space-joined
    pub footnotes_found: String,
    /// Unified-diff-style comparison of the two number sequences
    pub differences: String,
}

impl MismatchReport {
    /// Build a report from the raw per-pass sequences.
    pub fn new(kind: MarkerKind, references: &[u64], footnotes: &[u64]) -> Self {
        MismatchReport {
            kind,
            reference_count: references.len(),
            footnote_count: footnotes.len(),
            references_found: join_numbers(references),
            footnotes_found: join_numbers(footnotes),
            differences: render_differences(footnotes, references),
        }
    }
}

impl fmt::Display for MismatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} pass: {} references vs {} footnotes",
            self.kind, self.reference_count, self.footnote_count
        )?;
        writeln!(f, "references found: {}", self.references_found)?;
        writeln!(f, "footnotes found:  {}", self.footnotes_found)?;
        write!(f, "differences (footnotes -> references):\n{}", self.differences)
    }
}

fn join_numbers(numbers: &[u64]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Line-per-number unified diff between the footnote sequence and the
/// reference sequence, so an added or dropped footnote stands out.
fn render_differences(footnotes: &[u64], references: &[u64]) -> String {
    let from = numbers_as_lines(footnotes);
    let to = numbers_as_lines(references);
    let diff = TextDiff::from_lines(&from, &to);

    let mut out = String::new();
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        out.push_str(sign);
        out.push_str(change.value());
    }
    out
}

fn numbers_as_lines(numbers: &[u64]) -> String {
    let mut out = String::new();
    for n in numbers {
        out.push_str(&n.to_string());
        out.push('\n');
    }
    out
}
