// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTML fragment output.
//!
//! Each document gets a header paragraph; each paragraph becomes a `<p>`
//! with highlighted segments wrapped in `<span class="...">`. All text is
//! escaped.

use std::io::Write;

use super::{DocumentReport, Report};

pub struct HtmlFormatter<W: Write> {
    writer: W,
    class: String,
}

impl<W: Write> HtmlFormatter<W> {
    /// `class` is the CSS class applied to highlighted spans.
    pub fn new(writer: W, class: impl Into<String>) -> Self {
        Self {
            writer,
            class: class.into(),
        }
    }

    pub fn write_report(&mut self, report: &Report<'_>, counts_only: bool) -> std::io::Result<()> {
        for doc in &report.documents {
            if !counts_only && doc.paragraphs.is_empty() {
                continue;
            }
            self.write_document(doc)?;
        }
        self.writer.flush()
    }

    fn write_document(&mut self, doc: &DocumentReport<'_>) -> std::io::Result<()> {
        writeln!(
            self.writer,
            "<hr><p class=\"content-header\">(<strong>{}</strong>) (matches: {})</p>",
            escape(doc.path),
            doc.matches
        )?;

        let class = escape(&self.class);
        for para in &doc.paragraphs {
            let mut html = String::from("<p>");
            for segment in &para.segments {
                if segment.highlighted {
                    html.push_str("<span class=\"");
                    html.push_str(&class);
                    html.push_str("\">");
                    html.push_str(&escape(segment.text));
                    html.push_str("</span>");
                } else {
                    html.push_str(&escape(segment.text));
                }
            }
            html.push_str("</p>");
            writeln!(self.writer, "{}", html)?;
        }
        Ok(())
    }
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
