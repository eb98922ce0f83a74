/*!
 * Language-aware typography normalization.
 *
 * This module rewrites plain-ASCII typewriter conventions into proper
 * typographic characters, per language:
 * - Quote pairs (double, single) and apostrophes
 * - Dashes (prose dashes, numeric ranges, dialogue dashes)
 * - Ligature glyphs folded back to plain letters
 * - Ordinal suffixes, spaced-out ellipses, non-breaking spaces
 *
 * # Architecture
 *
 * - `profile`: per-language character tables and word lists
 * - `rules`: the individual rewrite steps, applied in a fixed order
 *
 * All transforms are best-effort heuristics over already partially
 * transformed text; the rule order matters and is preserved per language.
 */

pub mod profile;
pub mod rules;

pub use profile::{LanguageProfile, profile_for, supported_languages};

/// Apply the full typography rule chain for a language to a document.
///
/// Unrecognized language codes are a no-op: the input is returned unchanged.
pub fn apply(language: &str, text: &str) -> String {
    match profile_for(language) {
        Some(profile) => rules::apply_profile(profile, text),
        None => text.to_string(),
    }
}
