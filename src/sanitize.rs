//! Plain-text extraction from the HTML-ish fragments feeds embed.
//!
//! Feed descriptions routinely carry markup, entities, and CDATA wrappers.
//! These helpers reduce them to displayable text. Script and style blocks
//! are removed with their content *before* the generic tag strip, otherwise
//! their inner text would leak into the result.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_SCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<script.*?</script>").unwrap());
static RE_STYLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<style.*?</style>").unwrap());
static RE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static RE_CDATA: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^<!\[CDATA\[(.*)\]\]>$").unwrap());

/// Strip markup from an HTML fragment, leaving collapsed plain text.
///
/// Script and style blocks disappear entirely; every other tag becomes a
/// single space so adjacent words stay separated; whitespace runs collapse
/// to one space and the ends are trimmed.
pub fn strip_html(html: &str) -> String {
    let without_scripts = RE_SCRIPT.replace_all(html, "");
    let without_styles = RE_STYLE.replace_all(&without_scripts, "");
    let without_tags = RE_TAG.replace_all(&without_styles, " ");
    RE_WHITESPACE
        .replace_all(&without_tags, " ")
        .trim()
        .to_string()
}

/// Unwrap a value that is entirely a CDATA section; otherwise return it
/// unchanged. The result is trimmed either way.
pub fn strip_cdata(raw: &str) -> String {
    match RE_CDATA.captures(raw) {
        Some(caps) => caps[1].trim().to_string(),
        None => raw.trim().to_string(),
    }
}
