/*!
 * Two-pass footnote renumbering.
 *
 * The engine scans a document top to bottom twice: once for primary `[n]`
 * markers, once for secondary `{n}` markers on the already-renumbered text.
 * Within a pass, definitions (marker at line start, followed by whitespace)
 * and inline references are renumbered purely by encounter order; the
 * original numbers only feed the foreign-marker guard and the diagnostics.
 * A pass whose reference count and definition count disagree fails the
 * whole document: the caller gets a `MismatchReport` and no output.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use super::report::MismatchReport;
use crate::errors::FootnoteError;

/// A marker number this far above the running counter is assumed to be an
/// unrelated bracketed number, not a footnote, and is left untouched.
const FOREIGN_NUMBER_WINDOW: u64 = 100;

static PRIMARY_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\d+)\]").expect("Invalid marker regex"));
static SECONDARY_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\d+)\}").expect("Invalid marker regex"));
static PRIMARY_DEFINITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(\d+)\][ \t]").expect("Invalid definition regex"));
static SECONDARY_DEFINITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{(\d+)\}[ \t]").expect("Invalid definition regex"));

/// The two footnote channels a document can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// `[n]` markers
    Primary,
    /// `{n}` markers (e.g. translator's notes)
    Secondary,
}

impl MarkerKind {
    fn marker_regex(&self) -> &'static Regex {
        match self {
            MarkerKind::Primary => &PRIMARY_MARKER,
            MarkerKind::Secondary => &SECONDARY_MARKER,
        }
    }

    fn definition_regex(&self) -> &'static Regex {
        match self {
            MarkerKind::Primary => &PRIMARY_DEFINITION,
            MarkerKind::Secondary => &SECONDARY_DEFINITION,
        }
    }

    /// Render a marker with the given number.
    pub fn format(&self, number: u64) -> String {
        match self {
            MarkerKind::Primary => format!("[{}]", number),
            MarkerKind::Secondary => format!("{{{}}}", number),
        }
    }

    /// Printed width of a marker plus its trailing space, which is what
    /// continuation lines are re-indented to.
    pub fn indent_width(&self, number: u64) -> usize {
        digit_count(number) + 3
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerKind::Primary => write!(f, "primary"),
            MarkerKind::Secondary => write!(f, "secondary"),
        }
    }
}

fn digit_count(number: u64) -> usize {
    number.to_string().len()
}

/// Counters and diagnostics for one pass; created at pass start, discarded
/// at pass end.
#[derive(Debug, Default)]
struct PassState {
    definitions: u64,
    references: u64,
    definitions_found: Vec<u64>,
    references_found: Vec<u64>,
    /// Column width continuation lines are re-indented to; 0 = not inside
    /// a footnote block
    indent: usize,
}

/// The footnote renumbering engine.
pub struct FootnoteRenumberer;

impl FootnoteRenumberer {
    /// Renumber both marker channels: the primary pass first, then the
    /// secondary pass over its output. The first failing pass aborts the
    /// document; no partial output escapes.
    pub fn renumber(lines: &[String]) -> Result<Vec<String>, FootnoteError> {
        let primary = Self::renumber_pass(lines, MarkerKind::Primary)
            .map_err(FootnoteError::CountMismatch)?;
        let secondary = Self::renumber_pass(&primary, MarkerKind::Secondary)
            .map_err(FootnoteError::CountMismatch)?;
        Ok(secondary)
    }

    /// Convenience wrapper over `renumber` for whole-document strings.
    /// Line endings are normalized to `\n`.
    pub fn renumber_text(text: &str) -> Result<String, FootnoteError> {
        let lines: Vec<String> = text.lines().map(String::from).collect();
        let fixed = Self::renumber(&lines)?;
        let mut out = fixed.join("\n");
        if text.ends_with('\n') {
            out.push('\n');
        }
        Ok(out)
    }

    /// One top-to-bottom scan handling a single marker type.
    pub fn renumber_pass(
        lines: &[String],
        kind: MarkerKind,
    ) -> Result<Vec<String>, MismatchReport> {
        let mut state = PassState::default();
        let out: Vec<String> = lines
            .iter()
            .map(|line| Self::process_line(line, kind, &mut state))
            .collect();

        debug!(
            "{} pass: {} definitions, {} references",
            kind, state.definitions, state.references
        );

        if state.references == state.definitions {
            Ok(out)
        } else {
            Err(MismatchReport::new(
                kind,
                &state.references_found,
                &state.definitions_found,
            ))
        }
    }

    fn process_line(line: &str, kind: MarkerKind, state: &mut PassState) -> String {
        // Definition of this pass's marker type
        if let Some(caps) = kind.definition_regex().captures(line) {
            return Self::renumber_definition(line, &caps, kind, state);
        }

        // During the primary pass a secondary definition still opens a
        // footnote block, so its continuation lines are not mistaken for
        // body text; the secondary pass renumbers it later.
        if kind == MarkerKind::Primary {
            if let Some(caps) = MarkerKind::Secondary.definition_regex().captures(line) {
                let digits = caps.get(1).expect("digit group").as_str().len();
                state.indent = digits + 3;
                return line.to_string();
            }
        }

        // Blank lines pass through and do not close the block
        if line.trim().is_empty() {
            return line.to_string();
        }

        // Continuation line of the current footnote: re-indent to the
        // current marker width
        if state.indent > 0 && line.starts_with("    ") {
            let content = line.trim_start_matches(' ');
            return format!("{}{}", " ".repeat(state.indent), content);
        }

        // Ordinary body text; the block (if any) has ended
        state.indent = 0;
        Self::renumber_references(line, kind, state)
    }

    fn renumber_definition(
        line: &str,
        caps: &regex::Captures,
        kind: MarkerKind,
        state: &mut PassState,
    ) -> String {
        let digits = caps.get(1).expect("digit group");
        let after_marker = &line[digits.end() + 1..];

        match digits.as_str().parse::<u64>() {
            Ok(original) if original < state.definitions + FOREIGN_NUMBER_WINDOW => {
                state.definitions += 1;
                state.definitions_found.push(original);
                let renumbered = state.definitions;
                state.indent = kind.indent_width(renumbered);
                format!("{}{}", kind.format(renumbered), after_marker)
            }
            _ => {
                // Looks like an unrelated bracketed number; keep it, but it
                // still reads as a footnote block on the page
                state.indent = digits.as_str().len() + 3;
                line.to_string()
            }
        }
    }

    fn renumber_references(line: &str, kind: MarkerKind, state: &mut PassState) -> String {
        let mut out = String::with_capacity(line.len());
        let mut last = 0;
        for caps in kind.marker_regex().captures_iter(line) {
            let m = caps.get(0).expect("whole match");
            let digits = caps.get(1).expect("digit group");
            match digits.as_str().parse::<u64>() {
                Ok(original) if original < state.references + FOREIGN_NUMBER_WINDOW => {
                    state.references += 1;
                    state.references_found.push(original);
                    out.push_str(&line[last..m.start()]);
                    out.push_str(&kind.format(state.references));
                    last = m.end();
                }
                _ => {} // foreign match, leave as-is
            }
        }
        out.push_str(&line[last..]);
        out
    }
}
