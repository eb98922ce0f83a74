/*!
 * The individual typography rewrite steps.
 *
 * Each step is a pure function from text to text. The steps run in a fixed
 * order and each one sees the output of the previous step, so earlier
 * substitutions remove characters from later rules' candidate pool. That
 * ordering is load-bearing: the quote heuristics in particular resolve the
 * easy cases first and sweep whatever is left into "closing".
 */

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use super::profile::{LanguageProfile, supported_languages, profile_for};

const NBSP: char = '\u{A0}';

// -- quote heuristics ---------------------------------------------------

/// Two single quotes standing in for a double quote
static DOUBLED_SINGLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"''").expect("Invalid quote regex"));

/// Double quote with a non-word char (or line start) before and a word char after
static DQ_OPENING_BEFORE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?m)(\W|^)"(\w)"#).expect("Invalid quote regex"));

/// Double quote with a word char before and a non-word char (or line end) after
static DQ_CLOSING_AFTER_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?m)(\w)"(\W|$)"#).expect("Invalid quote regex"));

/// Double quote at line start
static DQ_LINE_START: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?m)^""#).expect("Invalid quote regex"));

/// Double quote preceded by whitespace
static DQ_AFTER_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(\s)""#).expect("Invalid quote regex"));

/// Single quote between two word characters (contractions, elisions)
static APOSTROPHE_IN_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w)'(\w)").expect("Invalid apostrophe regex"));

/// Single quote immediately before a two-digit year ('99)
static APOSTROPHE_BEFORE_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'(\d\d)").expect("Invalid apostrophe regex"));

/// Single quote with a non-word char (or line start) before and a word char after
static SQ_OPENING_BEFORE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)(\W|^)'(\w)").expect("Invalid quote regex"));

/// Single quote with a word char before and a non-word char (or line end) after
static SQ_CLOSING_AFTER_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)(\w)'(\W|$)").expect("Invalid quote regex"));

/// Single quote at line start
static SQ_LINE_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^'").expect("Invalid quote regex"));

/// Single quote preceded by whitespace
static SQ_AFTER_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\s)'").expect("Invalid quote regex"));

// -- dashes, ordinals, ellipses -----------------------------------------

/// Run of 1-3 hyphens with horizontal whitespace on both sides
static PROSE_DASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+-{1,3}[ \t]+").expect("Invalid dash regex"));

/// Single hyphen opening a line of dialogue
static DIALOGUE_DASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^-([ \t])").expect("Invalid dash regex"));

/// Hyphen between two digits (checked for adjacent hyphen/slash separately)
static DIGIT_DASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]-[0-9]").expect("Invalid dash regex"));

/// Digit ordinal suffix
static ORDINAL_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d)(st|nd|rd|th)\b").expect("Invalid ordinal regex"));

/// Spaced-out ellipsis: two or three ". " groups closed by a final dot
static SPACED_ELLIPSIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\. ){2,3}\.").expect("Invalid ellipsis regex"));

// -- non-breaking-space rules -------------------------------------------

/// Compiled nbsp regexes for one profile's word lists.
struct NbspRules {
    before: Option<Regex>,
    after: Option<Regex>,
    after_digit: Option<Regex>,
}

fn word_alternation(words: &[&str]) -> String {
    words.iter().map(|w| regex::escape(w)).collect::<Vec<_>>().join("|")
}

/// Per-language nbsp regexes, compiled once from the profile word lists.
static NBSP_RULES: Lazy<HashMap<&'static str, NbspRules>> = Lazy::new(|| {
    let mut rules = HashMap::new();
    for code in supported_languages() {
        let profile = profile_for(code).expect("registered profile");
        if !profile.has_nbsp_rules() {
            continue;
        }
        let before = (!profile.nbsp_before.is_empty()).then(|| {
            Regex::new(&format!(
                r"(?mi)(\S) ({})(\W|$)",
                word_alternation(profile.nbsp_before)
            ))
            .expect("Invalid nbsp regex")
        });
        let after = (!profile.nbsp_after.is_empty()).then(|| {
            Regex::new(&format!(
                r"(?mi)(^|[\s(\u{{AB}}\u{{201E}}\u{{201C}}])({}) (\S)",
                word_alternation(profile.nbsp_after)
            ))
            .expect("Invalid nbsp regex")
        });
        let after_digit = (!profile.nbsp_after_digit.is_empty()).then(|| {
            Regex::new(&format!(
                r"(?mi)(\d) ({})(\W|$)",
                word_alternation(profile.nbsp_after_digit)
            ))
            .expect("Invalid nbsp regex")
        });
        rules.insert(
            code,
            NbspRules {
                before,
                after,
                after_digit,
            },
        );
    }
    rules
});

/// Apply the full rule chain for one profile. The order is fixed; profiles
/// opt in and out of the tail rules via their flags and word lists.
pub fn apply_profile(profile: &LanguageProfile, text: &str) -> String {
    let mut out = fold_ligatures(text);
    out = fix_backtick_quotes(profile, &out);
    out = fix_double_quotes(profile, &out);
    out = fix_single_quotes(profile, &out);
    out = fix_dashes(profile, &out);
    if profile.ordinal_markup {
        out = fix_ordinals(&out);
    }
    if profile.ellipsis_fix {
        out = fix_ellipsis(&out);
    }
    if profile.has_nbsp_rules() {
        out = insert_nbsp(profile, &out);
    }
    out
}

/// Fold typographic ligature glyphs back to their plain-letter expansions.
pub fn fold_ligatures(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{FB00}' => out.push_str("ff"),
            '\u{FB01}' => out.push_str("fi"),
            '\u{FB02}' => out.push_str("fl"),
            '\u{FB03}' => out.push_str("ffi"),
            '\u{FB04}' => out.push_str("ffl"),
            _ => out.push(ch),
        }
    }
    out
}

/// TeX-style backtick quoting: `` opens a double quote, ` a single one.
pub fn fix_backtick_quotes(profile: &LanguageProfile, text: &str) -> String {
    text.replace("``", &profile.left_double.to_string())
        .replace('`', &profile.left_single.to_string())
}

/// Resolve ASCII double quotes (and doubled single quotes) into the
/// profile's opening/closing pair.
pub fn fix_double_quotes(profile: &LanguageProfile, text: &str) -> String {
    let ld = profile.left_double;
    let rd = profile.right_double;

    let out = DOUBLED_SINGLE.replace_all(text, "\"");
    let out = DQ_OPENING_BEFORE_WORD.replace_all(&out, format!("${{1}}{ld}${{2}}"));
    let out = DQ_CLOSING_AFTER_WORD.replace_all(&out, format!("${{1}}{rd}${{2}}"));
    let out = DQ_LINE_START.replace_all(&out, ld.to_string());
    let out = DQ_AFTER_SPACE.replace_all(&out, format!("${{1}}{ld}"));
    // Whatever is still unresolved closes a quotation
    out.replace('"', &rd.to_string())
}

/// Resolve ASCII single quotes: apostrophes first, then the same
/// opening/closing heuristic as for double quotes.
pub fn fix_single_quotes(profile: &LanguageProfile, text: &str) -> String {
    let ls = profile.left_single;
    let rs = profile.right_single;
    let ap = profile.apostrophe;

    let out = APOSTROPHE_IN_WORD.replace_all(text, format!("${{1}}{ap}${{2}}"));
    let out = APOSTROPHE_BEFORE_YEAR.replace_all(&out, format!("{ap}${{1}}"));
    let out = SQ_OPENING_BEFORE_WORD.replace_all(&out, format!("${{1}}{ls}${{2}}"));
    let out = SQ_CLOSING_AFTER_WORD.replace_all(&out, format!("${{1}}{rs}${{2}}"));
    let out = SQ_LINE_START.replace_all(&out, ls.to_string());
    let out = SQ_AFTER_SPACE.replace_all(&out, format!("${{1}}{ls}"));
    out.replace('\'', &rs.to_string())
}

/// Normalize hyphens: prose dashes, dialogue dashes, numeric ranges.
pub fn fix_dashes(profile: &LanguageProfile, text: &str) -> String {
    let out = PROSE_DASH.replace_all(text, format!(" {} ", profile.dash));
    let out = DIALOGUE_DASH.replace_all(&out, format!("{}${{1}}", profile.em_dash));
    fix_digit_ranges(profile, &out)
}

/// A hyphen between two digits becomes an en dash, unless the surrounding
/// digit runs touch another hyphen or a slash (dates like 2024-01-02,
/// fractions like 1/2-3).
fn fix_digit_ranges(profile: &LanguageProfile, text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in DIGIT_DASH.find_iter(text) {
        let mut i = m.start();
        while i > 0 && bytes[i - 1].is_ascii_digit() {
            i -= 1;
        }
        let mut j = m.end();
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        let adjacent_before = i > 0 && (bytes[i - 1] == b'-' || bytes[i - 1] == b'/');
        let adjacent_after = j < bytes.len() && (bytes[j] == b'-' || bytes[j] == b'/');
        if adjacent_before || adjacent_after {
            continue;
        }
        // The match is digit-hyphen-digit; swap just the hyphen
        out.push_str(&text[last..m.start() + 1]);
        out.push(profile.en_dash);
        last = m.start() + 2;
    }
    out.push_str(&text[last..]);
    out
}

/// Wrap digit ordinal suffixes in superscript markup (9th -> 9^{th}).
pub fn fix_ordinals(text: &str) -> String {
    ORDINAL_SUFFIX.replace_all(text, "${1}^{${2}}").into_owned()
}

/// Collapse spaced-out ellipses (". . .") to a literal "...".
pub fn fix_ellipsis(text: &str) -> String {
    SPACED_ELLIPSIS.replace_all(text, "...").into_owned()
}

/// Insert non-breaking spaces around the profile's word lists: before
/// trailing particles, after short prepositions, and between a number and
/// the unit/date word that follows it.
pub fn insert_nbsp(profile: &LanguageProfile, text: &str) -> String {
    let Some(rules) = NBSP_RULES.get(profile.code) else {
        return text.to_string();
    };
    let mut out = text.to_string();
    if let Some(re) = &rules.before {
        out = re.replace_all(&out, format!("${{1}}{NBSP}${{2}}${{3}}")).into_owned();
    }
    if let Some(re) = &rules.after {
        out = re.replace_all(&out, format!("${{1}}${{2}}{NBSP}${{3}}")).into_owned();
    }
    if let Some(re) = &rules.after_digit {
        out = re.replace_all(&out, format!("${{1}}{NBSP}${{2}}${{3}}")).into_owned();
    }
    out
}
