//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::highlight::{HighlightPolicy, Highlighter};
use crate::reader::Document;

/// Two short documents with a known mix of matching and non-matching lines.
///
/// For keyword `波*蜜`: `heart.txt` has 3 matches on lines 1 and 3,
/// `diamond.txt` has none.
pub fn sample_documents() -> Vec<Document> {
    vec![
        Document::new("heart.txt", "般若波羅蜜多\n色即是空\n波羅蜜，波若蜜\n"),
        Document::new("diamond.txt", "如是我聞\n一時佛在舍衛國\n"),
    ]
}

/// Highlighter for `keyword` with the default policy.
pub fn highlighter(keyword: &str) -> Highlighter {
    Highlighter::new(keyword, HighlightPolicy::All).unwrap()
}
