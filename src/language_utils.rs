use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// Typography profiles are registered under ISO 639-1 (2-letter) codes, but
/// documents and configs in the wild carry 639-2/639-3 codes as well. This
/// module validates user-supplied codes and folds them down to 639-1 where
/// one exists.
/// ISO 639-2/B codes that differ from the 639-2/T code isolang knows.
const PART2B_ALIASES: &[(&str, &str)] = &[
    ("alb", "sqi"),
    ("arm", "hye"),
    ("baq", "eus"),
    ("bur", "mya"),
    ("chi", "zho"),
    ("cze", "ces"),
    ("dut", "nld"),
    ("fre", "fra"),
    ("geo", "kat"),
    ("ger", "deu"),
    ("gre", "ell"),
    ("ice", "isl"),
    ("mac", "mkd"),
    ("may", "msa"),
    ("per", "fas"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("wel", "cym"),
];

fn resolve(code: &str) -> Option<Language> {
    let code = code.trim().to_lowercase();
    match code.len() {
        2 => Language::from_639_1(&code),
        3 => {
            let part2t = PART2B_ALIASES
                .iter()
                .find(|(b, _)| *b == code)
                .map_or(code.as_str(), |(_, t)| *t);
            Language::from_639_3(part2t)
        }
        _ => None,
    }
}

/// Validate that a code is a known ISO 639-1, 639-2 or 639-3 language code.
pub fn validate_language_code(code: &str) -> Result<()> {
    resolve(code)
        .map(|_| ())
        .ok_or_else(|| anyhow!("Invalid language code: {}", code))
}

/// Normalize a language code to its ISO 639-1 (2-letter) form.
///
/// Fails when the code is unknown or the language has no 639-1 code at all.
pub fn normalize_to_part1(code: &str) -> Result<String> {
    let language =
        resolve(code).ok_or_else(|| anyhow!("Cannot normalize invalid language code: {}", code))?;
    language
        .to_639_1()
        .map(|c| c.to_string())
        .ok_or_else(|| anyhow!("Language {} has no two-letter code", language.to_name()))
}

/// Check if two language codes refer to the same language.
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (resolve(code1), resolve(code2)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// English name of the language behind a code, for log and report output.
pub fn language_name(code: &str) -> Result<String> {
    let language =
        resolve(code).ok_or_else(|| anyhow!("Failed to get language from code: {}", code))?;
    Ok(language.to_name().to_string())
}
