/*!
 * Tests for the bare-URL link filter
 */

use textgroom::links::LinkFilter;

/// Test basic wrapping with the host as the visible label
#[test]
fn test_linkify_withBareUrl_shouldUseHostAsLabel() {
    let out = LinkFilter::linkify("docs at https://docs.example.org/guide/intro");
    assert_eq!(
        out,
        "docs at [[https://docs.example.org/guide/intro][docs.example.org]]"
    );
}

/// Test that both schemes are recognized and others are not
#[test]
fn test_linkify_withSchemes_shouldOnlyMatchHttpAndHttps() {
    assert_eq!(
        LinkFilter::linkify("a http://x.org b"),
        "a [[http://x.org][x.org]] b"
    );
    assert_eq!(
        LinkFilter::linkify("a https://x.org b"),
        "a [[https://x.org][x.org]] b"
    );
    assert_eq!(LinkFilter::linkify("a ftp://x.org b"), "a ftp://x.org b");
}

/// Test port handling: the port belongs to the target, not the label
#[test]
fn test_linkify_withPort_shouldKeepPortOutOfLabel() {
    let out = LinkFilter::linkify("local http://localhost:8080/admin");
    assert_eq!(out, "local [[http://localhost:8080/admin][localhost]]");
}

/// Test that sentence punctuation after the URL is not swallowed
#[test]
fn test_linkify_withSentencePunctuation_shouldEndAtWordOrSlash() {
    assert_eq!(
        LinkFilter::linkify("See http://x.org/a."),
        "See [[http://x.org/a][x.org]]."
    );
    assert_eq!(
        LinkFilter::linkify("See http://x.org/a/."),
        "See [[http://x.org/a/][x.org]]."
    );
    assert_eq!(
        LinkFilter::linkify("Really (http://x.org/a)?"),
        "Really ([[http://x.org/a][x.org]])?"
    );
}

/// Test the non-double-wrapping property on repeated application
#[test]
fn test_linkify_appliedTwice_shouldBeIdempotent() {
    let once = LinkFilter::linkify("go to http://example.org/page now");
    let twice = LinkFilter::linkify(&once);
    assert_eq!(once, twice);
}

/// Test multiple URLs on one line, rewritten left to right
#[test]
fn test_linkify_withMultipleUrls_shouldRewriteIndependently() {
    let out = LinkFilter::linkify("both http://a.org and http://b.org/path here");
    assert_eq!(
        out,
        "both [[http://a.org][a.org]] and [[http://b.org/path][b.org]] here"
    );
}

/// Test URLs across multiple lines of one document
#[test]
fn test_linkify_withMultilineDocument_shouldHandleEachLine() {
    let input = "first http://a.org\nsecond https://b.org\n";
    let out = LinkFilter::linkify(input);
    assert_eq!(out, "first [[http://a.org][a.org]]\nsecond [[https://b.org][b.org]]\n");
}
