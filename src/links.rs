/*!
 * Bare-URL detection and link markup rewriting.
 *
 * Turns `http://example.org/page` into `[[http://example.org/page][example.org]]`:
 * the full URL becomes the link target, the host alone becomes the visible
 * label. URLs that are already inside link brackets are left untouched, and
 * trailing sentence punctuation is never swallowed into the match.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Bare http/https URL. The host must not end in a dot or hyphen, and an
/// optional path must end in a word character or slash so that sentence
/// punctuation after the URL stays outside the match.
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        https?://
        (?P<host> [A-Za-z0-9] (?: [A-Za-z0-9.-]* [A-Za-z0-9] )? )
        (?P<port> : \d+ )?
        (?P<path> / [^\s\[\]]* [\w/] )?
        ",
    )
    .expect("Invalid URL regex")
});

/// Rewrites bare URLs into bracketed markup links.
pub struct LinkFilter;

impl LinkFilter {
    /// Wrap every bare URL in `text` as `[[url][host]]`, left to right.
    ///
    /// A candidate immediately preceded by `[` or immediately followed by
    /// `]` is considered already wrapped and skipped.
    pub fn linkify(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for caps in URL_REGEX.captures_iter(text) {
            let m = caps.get(0).expect("whole match");
            let wrapped_before = text[..m.start()].ends_with('[');
            let wrapped_after = text[m.end()..].starts_with(']');
            if wrapped_before || wrapped_after {
                continue;
            }
            let host = caps.name("host").map_or("", |h| h.as_str());
            out.push_str(&text[last..m.start()]);
            out.push_str("[[");
            out.push_str(m.as_str());
            out.push_str("][");
            out.push_str(host);
            out.push_str("]]");
            last = m.end();
        }
        out.push_str(&text[last..]);
        out
    }
}
