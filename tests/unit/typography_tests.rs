/*!
 * Tests for the typography profiles and rule chain
 */

use textgroom::typography;
use textgroom::typography::profile_for;

/// Test that quote glyphs come from the language table, not a fixed rule
#[test]
fn test_apply_withSameInput_shouldDispatchPerLanguageTables() {
    let input = "\"hello\" and 'hello'";

    assert_eq!(
        typography::apply("en", input),
        "\u{201C}hello\u{201D} and \u{2018}hello\u{2019}"
    );
    assert_eq!(
        typography::apply("es", input),
        "\u{AB}hello\u{BB} and \u{2018}hello\u{2019}"
    );
    assert_eq!(
        typography::apply("ru", input),
        "\u{AB}hello\u{BB} and \u{2018}hello\u{2019}"
    );
    assert_eq!(
        typography::apply("sr", input),
        "\u{201E}hello\u{201C} and \u{201A}hello\u{2018}"
    );
    assert_eq!(
        typography::apply("mk", input),
        "\u{201E}hello\u{201C} and \u{2018}hello\u{201A}"
    );
    // Finnish opens and closes with the same glyph
    assert_eq!(
        typography::apply("fi", input),
        "\u{201D}hello\u{201D} and \u{2019}hello\u{2019}"
    );
}

/// Test that unknown codes are a strict no-op
#[test]
fn test_apply_withUnknownLanguage_shouldReturnInputUnchanged() {
    let input = "\"quotes\" stay -- as-is";
    assert_eq!(typography::apply("xx", input), input);
    // Valid ISO code without a registered profile is also a no-op
    assert_eq!(typography::apply("de", input), input);
}

/// Test idempotence: a second run over normalized text changes nothing
#[test]
fn test_apply_onAlreadyNormalizedText_shouldBeIdempotent() {
    let input = "\"Hello,\" he said -- it's a 'fine' day for the 3rd time. . .";
    let once = typography::apply("en", input);
    let twice = typography::apply("en", &once);
    assert_eq!(once, twice);
}

/// Test ligature folding to exact ASCII expansions
#[test]
fn test_apply_withLigatures_shouldExpandToPlainLetters() {
    assert_eq!(typography::apply("en", "\u{FB03}"), "ffi");
    let out = typography::apply("en", "o\u{FB00}er \u{FB01}ve \u{FB02}at su\u{FB03}x ri\u{FB04}e");
    assert_eq!(out, "offer five flat suffix riffle");
}

/// Test English ordinal markup
#[test]
fn test_apply_withEnglishOrdinals_shouldWrapSuffixes() {
    let out = typography::apply("en", "the 21st, 2nd, 3rd and 14th");
    assert_eq!(out, "the 21^{st}, 2^{nd}, 3^{rd} and 14^{th}");
    // Other profiles leave ordinals alone
    assert_eq!(typography::apply("es", "the 21st"), "the 21st");
}

/// Test dash handling across widths
#[test]
fn test_apply_withDashes_shouldFollowProfileWidth() {
    assert_eq!(typography::apply("en", "one -- two"), "one \u{2014} two");
    assert_eq!(typography::apply("fi", "one -- two"), "one \u{2013} two");
    assert_eq!(typography::apply("it", "one -- two"), "one \u{2013} two");

    assert_eq!(typography::apply("en", "years 1941-1945"), "years 1941\u{2013}1945");
    assert_eq!(typography::apply("en", "date 2024-01-02"), "date 2024-01-02");

    assert_eq!(typography::apply("en", "- Did you come?"), "\u{2014} Did you come?");
}

/// Test backtick quoting
#[test]
fn test_apply_withBackticks_shouldOpenQuotes() {
    assert_eq!(
        typography::apply("en", "``quoted'' and `single"),
        "\u{201C}quoted\u{201D} and \u{2018}single"
    );
}

/// Test apostrophe disambiguation against single quotes
#[test]
fn test_apply_withApostrophes_shouldKeepQuotesDistinct() {
    let out = typography::apply("en", "'twas the summer of '99, wasn't it");
    // Leading elision resolves as an opening quote by position, the year
    // and the contraction both take the apostrophe glyph
    assert!(out.contains("of \u{2019}99"));
    assert!(out.contains("wasn\u{2019}t"));
}

/// Test the Russian profile end to end: quotes, ellipsis, nbsp rules
#[test]
fn test_apply_withRussianProfile_shouldApplyFullChain() {
    let out = typography::apply("ru", "Он сказал \"привет\" и ушел в лес");
    assert_eq!(
        out,
        "Он сказал \u{AB}привет\u{BB} и\u{A0}ушел в\u{A0}лес"
    );

    assert_eq!(typography::apply("ru", "Он ушел. . ."), "Он ушел...");

    let out = typography::apply("ru", "Это было в 1941 году, хотел бы я знать");
    assert!(out.contains("хотел\u{A0}бы"));
}

/// Test that the Russian digit rule binds numbers to their units
#[test]
fn test_apply_withRussianDigitUnits_shouldInsertNbsp() {
    let out = typography::apply("ru", "Прошли 5 км за день");
    assert_eq!(out, "Прошли 5\u{A0}км за\u{A0}день");
}

/// Test profile lookup is exposed for callers that dispatch manually
#[test]
fn test_profile_for_shouldExposeCharacterTables() {
    let es = profile_for("es").unwrap();
    assert_eq!(es.left_double, '\u{AB}');
    assert_eq!(es.right_double, '\u{BB}');
    assert!(!es.ordinal_markup);
}
