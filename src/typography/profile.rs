/*!
 * Per-language typography tables.
 *
 * A `LanguageProfile` holds the target punctuation characters and the word
 * lists used by the spacing rules. Profiles are immutable static data,
 * registered once and queried by ISO 639-1 code.
 */

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Character tables and rule selection for one language.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    /// ISO 639-1 code this profile is registered under
    pub code: &'static str,

    /// Opening double quote
    pub left_double: char,
    /// Closing double quote
    pub right_double: char,
    /// Opening single quote
    pub left_single: char,
    /// Closing single quote
    pub right_single: char,
    /// Apostrophe inside words and before elided years
    pub apostrophe: char,

    /// Dash for whitespace-surrounded hyphen runs in prose
    pub dash: char,
    /// Dash between digits (numeric ranges), no surrounding space
    pub en_dash: char,
    /// Dialogue dash at line start
    pub em_dash: char,

    /// Wrap digit ordinal suffixes (th, st, ...) in superscript markup
    pub ordinal_markup: bool,
    /// Collapse spaced-out ellipses (". . .") to "..."
    pub ellipsis_fix: bool,

    /// Particles that take a non-breaking space before them
    pub nbsp_before: &'static [&'static str],
    /// Short prepositions/conjunctions that take a non-breaking space after
    pub nbsp_after: &'static [&'static str],
    /// Unit/date words that take a non-breaking space after a digit
    pub nbsp_after_digit: &'static [&'static str],
}

impl LanguageProfile {
    /// True when any of the non-breaking-space word lists is non-empty.
    pub fn has_nbsp_rules(&self) -> bool {
        !self.nbsp_before.is_empty()
            || !self.nbsp_after.is_empty()
            || !self.nbsp_after_digit.is_empty()
    }
}

const NO_WORDS: &[&str] = &[];

/// Russian particles that must not start a line.
const RU_NBSP_BEFORE: &[&str] = &["бы", "б", "же", "ж", "ли", "ль"];

/// Russian one/two-letter prepositions and conjunctions that must not end a line.
const RU_NBSP_AFTER: &[&str] = &[
    "а", "в", "во", "и", "к", "ко", "на", "не", "ни", "но", "о", "об", "от",
    "по", "под", "при", "с", "со", "у", "за", "из", "до", "для", "без",
];

/// Russian unit and date words that stick to a preceding number.
const RU_NBSP_AFTER_DIGIT: &[&str] = &[
    "г.", "гг.", "в.", "вв.", "год", "года", "году", "годов", "км", "м",
    "см", "мм", "кг", "руб.", "коп.",
];

static PROFILES: Lazy<HashMap<&'static str, LanguageProfile>> = Lazy::new(|| {
    let profiles = [
        LanguageProfile {
            code: "en",
            left_double: '\u{201C}',
            right_double: '\u{201D}',
            left_single: '\u{2018}',
            right_single: '\u{2019}',
            apostrophe: '\u{2019}',
            dash: '\u{2014}',
            en_dash: '\u{2013}',
            em_dash: '\u{2014}',
            ordinal_markup: true,
            ellipsis_fix: true,
            nbsp_before: NO_WORDS,
            nbsp_after: NO_WORDS,
            nbsp_after_digit: NO_WORDS,
        },
        LanguageProfile {
            code: "es",
            left_double: '\u{AB}',
            right_double: '\u{BB}',
            left_single: '\u{2018}',
            right_single: '\u{2019}',
            apostrophe: '\u{2019}',
            dash: '\u{2014}',
            en_dash: '\u{2013}',
            em_dash: '\u{2014}',
            ordinal_markup: false,
            ellipsis_fix: false,
            nbsp_before: NO_WORDS,
            nbsp_after: NO_WORDS,
            nbsp_after_digit: NO_WORDS,
        },
        // Finnish uses the closing glyph on both ends
        LanguageProfile {
            code: "fi",
            left_double: '\u{201D}',
            right_double: '\u{201D}',
            left_single: '\u{2019}',
            right_single: '\u{2019}',
            apostrophe: '\u{2019}',
            dash: '\u{2013}',
            en_dash: '\u{2013}',
            em_dash: '\u{2014}',
            ordinal_markup: false,
            ellipsis_fix: false,
            nbsp_before: NO_WORDS,
            nbsp_after: NO_WORDS,
            nbsp_after_digit: NO_WORDS,
        },
        LanguageProfile {
            code: "sr",
            left_double: '\u{201E}',
            right_double: '\u{201C}',
            left_single: '\u{201A}',
            right_single: '\u{2018}',
            apostrophe: '\u{2019}',
            dash: '\u{2013}',
            en_dash: '\u{2013}',
            em_dash: '\u{2014}',
            ordinal_markup: false,
            ellipsis_fix: false,
            nbsp_before: NO_WORDS,
            nbsp_after: NO_WORDS,
            nbsp_after_digit: NO_WORDS,
        },
        LanguageProfile {
            code: "hr",
            left_double: '\u{201E}',
            right_double: '\u{201D}',
            left_single: '\u{201A}',
            right_single: '\u{2019}',
            apostrophe: '\u{2019}',
            dash: '\u{2013}',
            en_dash: '\u{2013}',
            em_dash: '\u{2014}',
            ordinal_markup: false,
            ellipsis_fix: false,
            nbsp_before: NO_WORDS,
            nbsp_after: NO_WORDS,
            nbsp_after_digit: NO_WORDS,
        },
        LanguageProfile {
            code: "ru",
            left_double: '\u{AB}',
            right_double: '\u{BB}',
            left_single: '\u{2018}',
            right_single: '\u{2019}',
            apostrophe: '\u{2019}',
            dash: '\u{2014}',
            en_dash: '\u{2013}',
            em_dash: '\u{2014}',
            ordinal_markup: false,
            ellipsis_fix: true,
            nbsp_before: RU_NBSP_BEFORE,
            nbsp_after: RU_NBSP_AFTER,
            nbsp_after_digit: RU_NBSP_AFTER_DIGIT,
        },
        // Italian convention here prefers the short dash in prose
        LanguageProfile {
            code: "it",
            left_double: '\u{201C}',
            right_double: '\u{201D}',
            left_single: '\u{2018}',
            right_single: '\u{2019}',
            apostrophe: '\u{2019}',
            dash: '\u{2013}',
            en_dash: '\u{2013}',
            em_dash: '\u{2013}',
            ordinal_markup: false,
            ellipsis_fix: false,
            nbsp_before: NO_WORDS,
            nbsp_after: NO_WORDS,
            nbsp_after_digit: NO_WORDS,
        },
        // Macedonian single quotes close with the low-nine glyph
        LanguageProfile {
            code: "mk",
            left_double: '\u{201E}',
            right_double: '\u{201C}',
            left_single: '\u{2018}',
            right_single: '\u{201A}',
            apostrophe: '\u{2019}',
            dash: '\u{2013}',
            en_dash: '\u{2013}',
            em_dash: '\u{2014}',
            ordinal_markup: false,
            ellipsis_fix: false,
            nbsp_before: NO_WORDS,
            nbsp_after: NO_WORDS,
            nbsp_after_digit: NO_WORDS,
        },
    ];

    profiles.into_iter().map(|p| (p.code, p)).collect()
});

/// Look up the typography profile for a language code.
///
/// The code must already be a lowercase ISO 639-1 code; use
/// `language_utils::normalize_to_part1` for 639-2/639-3 input.
pub fn profile_for(code: &str) -> Option<&'static LanguageProfile> {
    PROFILES.get(code)
}

/// All language codes with a registered typography profile, sorted.
pub fn supported_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = PROFILES.keys().copied().collect();
    codes.sort_unstable();
    codes
}
