// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::output::ReportOptions;
use crate::reader::Document;
use crate::test_utils::{highlighter, sample_documents};

fn render_html(docs: &[Document], keyword: &str, class: &str, options: &ReportOptions) -> String {
    let h = highlighter(keyword);
    let report = Report::build(keyword, &h, docs, options);
    let mut buffer = Vec::new();
    HtmlFormatter::new(&mut buffer, class)
        .write_report(&report, options.counts_only)
        .unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn wraps_highlighted_segments_in_spans() {
    let out = render_html(&sample_documents(), "波*蜜", "highlight", &ReportOptions::default());
    assert_eq!(
        out,
        "<hr><p class=\"content-header\">(<strong>heart.txt</strong>) (matches: 3)</p>\n\
         <p>般若<span class=\"highlight\">波</span><span class=\"highlight\">羅</span>\
         <span class=\"highlight\">蜜</span>多</p>\n\
         <p><span class=\"highlight\">波</span><span class=\"highlight\">羅</span>\
         <span class=\"highlight\">蜜</span>，<span class=\"highlight\">波</span>\
         <span class=\"highlight\">若</span><span class=\"highlight\">蜜</span></p>\n"
    );
}

#[test]
fn uses_configured_class() {
    let docs = vec![Document::new("a", "xaay")];
    let out = render_html(&docs, "aa", "mark", &ReportOptions::default());
    assert!(out.contains("<p>x<span class=\"mark\">aa</span>y</p>"));
}

#[test]
fn escapes_text_and_labels() {
    let docs = vec![Document::new("<a&b>", "1 < 2 & a<b>")];
    let out = render_html(&docs, "a<b>", "highlight", &ReportOptions::default());
    assert!(out.contains("(<strong>&lt;a&amp;b&gt;</strong>)"));
    assert!(out.contains("<p>1 &lt; 2 &amp; <span class=\"highlight\">a&lt;b&gt;</span></p>"));
}

#[test]
fn counts_only_writes_headers_for_every_document() {
    let options = ReportOptions {
        counts_only: true,
        ..ReportOptions::default()
    };
    let out = render_html(&sample_documents(), "波*蜜", "highlight", &options);
    assert!(out.contains("(<strong>heart.txt</strong>) (matches: 3)"));
    assert!(out.contains("(<strong>diamond.txt</strong>) (matches: 0)"));
    assert!(!out.contains("<p>般若"));
}

#[test]
fn escape_handles_quotes() {
    assert_eq!(escape(r#"say "hi" it's"#), "say &quot;hi&quot; it&#39;s");
    assert_eq!(escape("般若"), "般若");
}
