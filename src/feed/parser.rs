//! Regex-based extraction of item blocks and tag values from feed
//! documents. Matching is case-insensitive and tolerant of attributes on
//! opening tags, except for `<item>` itself which must be a plain open tag.

use std::collections::HashMap;
use std::sync::Mutex;

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::sanitize::strip_cdata;

/// Cap on the number of tags kept per article.
pub const MAX_TAGS_PER_ITEM: usize = 6;

static RE_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<item>(.*?)</item>").unwrap());

// The pipeline only ever asks for a fixed handful of tag names, so compiled
// patterns are cached per name instead of rebuilt on every item block.
static TAG_PATTERNS: Lazy<Mutex<HashMap<String, Regex>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn tag_pattern(tag_name: &str) -> Regex {
    let mut patterns = TAG_PATTERNS.lock().unwrap();
    patterns
        .entry(tag_name.to_string())
        .or_insert_with(|| {
            Regex::new(&format!(r"(?is)<{tag_name}[^>]*>(.*?)</{tag_name}>")).unwrap()
        })
        .clone()
}

/// Iterate over the contents of every `<item>...</item>` block, lazily, in
/// document order.
pub fn extract_items(xml: &str) -> impl Iterator<Item = &str> + '_ {
    RE_ITEM
        .captures_iter(xml)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The content of the first `<tag_name>` occurrence in the block, with any
/// CDATA wrapper removed. Empty string when the tag is absent.
pub fn extract_first(block: &str, tag_name: &str) -> String {
    tag_pattern(tag_name)
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| strip_cdata(m.as_str()))
        .unwrap_or_default()
}

/// All `<category>` values in the block: lower-cased, empties dropped,
/// deduplicated in encounter order, capped at [`MAX_TAGS_PER_ITEM`].
pub fn extract_categories(block: &str) -> Vec<String> {
    tag_pattern("category")
        .captures_iter(block)
        .filter_map(|caps| caps.get(1))
        .map(|m| strip_cdata(m.as_str()))
        .filter(|value| !value.is_empty())
        .map(|value| value.to_lowercase())
        .unique()
        .take(MAX_TAGS_PER_ITEM)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_items_in_document_order() {
        let xml = "<rss><channel><item>first</item><item>second</item></channel></rss>";
        let items: Vec<&str> = extract_items(xml).collect();
        assert_eq!(items, vec!["first", "second"]);
    }

    #[test]
    fn test_extract_items_is_case_insensitive() {
        let xml = "<ITEM>upper</ITEM><Item>mixed</item>";
        let items: Vec<&str> = extract_items(xml).collect();
        assert_eq!(items, vec!["upper", "mixed"]);
    }

    #[test]
    fn test_extract_items_requires_plain_open_tag() {
        // An attribute on the open tag means the block is not extracted.
        let xml = r#"<item rdf:about="https://example.com/1">skipped</item>"#;
        assert_eq!(extract_items(xml).count(), 0);
    }

    #[test]
    fn test_extract_first_takes_first_occurrence() {
        let block = "<title>First</title><title>Second</title>";
        assert_eq!(extract_first(block, "title"), "First");
    }

    #[test]
    fn test_extract_first_allows_attributes_on_open_tag() {
        let block = r#"<title type="html">Attributed</title>"#;
        assert_eq!(extract_first(block, "title"), "Attributed");
    }

    #[test]
    fn test_extract_first_unwraps_cdata() {
        let block = "<description><![CDATA[The <b>latest</b> news]]></description>";
        assert_eq!(extract_first(block, "description"), "The <b>latest</b> news");
    }

    #[test]
    fn test_extract_first_missing_tag_is_empty() {
        assert_eq!(extract_first("<title>Present</title>", "link"), "");
    }

    #[test]
    fn test_extract_first_spans_newlines() {
        let block = "<description>line one\nline two</description>";
        assert_eq!(extract_first(block, "description"), "line one\nline two");
    }

    #[test]
    fn test_extract_categories_lowercases_and_dedupes() {
        let block = "<category>UX</category><category>ux</category><category>Product</category>";
        assert_eq!(extract_categories(block), vec!["ux", "product"]);
    }

    #[test]
    fn test_extract_categories_drops_empty_values() {
        let block = "<category></category><category>design</category>";
        assert_eq!(extract_categories(block), vec!["design"]);
    }

    #[test]
    fn test_extract_categories_caps_at_six() {
        let block: String = (1..=8)
            .map(|i| format!("<category>tag{i}</category>"))
            .collect();
        let categories = extract_categories(&block);
        assert_eq!(
            categories,
            vec!["tag1", "tag2", "tag3", "tag4", "tag5", "tag6"]
        );
    }

    #[test]
    fn test_extract_categories_dedupes_before_capping() {
        // Duplicates never crowd out later distinct values.
        let block = "<category>a</category><category>A</category>\
                     <category>b</category><category>B</category>\
                     <category>c</category><category>C</category>\
                     <category>d</category><category>e</category>";
        assert_eq!(extract_categories(block), vec!["a", "b", "c", "d", "e"]);
    }
}
