// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for highlight results.
//!
//! [`Report`] is the format-independent model; `text`, `json` and `html`
//! render it.

pub mod html;
pub mod json;
pub mod text;

use std::collections::HashSet;

use serde::Serialize;

use crate::highlight::{Highlighter, Segment};
use crate::pattern::Pattern;
use crate::reader::{Document, trim_overlap};

/// Which paragraphs a report keeps.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Keep paragraphs without matches.
    pub show_all: bool,
    /// Keep no paragraphs, only per-document counts.
    pub counts_only: bool,
    /// Maximum paragraphs to keep across all documents (None = unlimited).
    pub limit: Option<usize>,
}

/// Highlight results for a set of documents.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub keyword: &'a str,
    pub pattern: &'a Pattern,
    pub total_matches: usize,
    pub matched_paragraphs: usize,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
    pub documents: Vec<DocumentReport<'a>>,
}

/// Results for one document.
#[derive(Debug, Serialize)]
pub struct DocumentReport<'a> {
    pub path: &'a str,
    pub matches: usize,
    pub paragraphs: Vec<ParagraphReport<'a>>,
}

/// One rendered paragraph.
#[derive(Debug, Serialize)]
pub struct ParagraphReport<'a> {
    pub line: usize,
    pub matches: usize,
    pub segments: Vec<Segment<'a>>,
}

impl<'a> Report<'a> {
    /// Highlight every paragraph of `documents`.
    ///
    /// Within a document, a paragraph identical to an earlier one is skipped.
    /// A paragraph with two or more matches loses the leading passage it
    /// shares with the end of the previous paragraph, and is skipped if
    /// nothing but whitespace remains.
    ///
    /// Match totals cover every remaining paragraph, even those the options
    /// leave out of the report.
    pub fn build(
        keyword: &'a str,
        highlighter: &'a Highlighter,
        documents: &'a [Document],
        options: &ReportOptions,
    ) -> Self {
        let mut total_matches = 0;
        let mut matched_paragraphs = 0;
        let mut kept = 0;
        let mut truncated = false;

        let documents = documents
            .iter()
            .map(|doc| {
                let mut matches = 0;
                let mut paragraphs = Vec::new();
                let mut seen = HashSet::new();
                let mut prev: Option<&str> = None;

                for para in doc.paragraphs() {
                    if !seen.insert(para.text) {
                        continue;
                    }
                    let text = match prev.replace(para.text) {
                        Some(prev) if highlighter.matcher().find_all(para.text).len() >= 2 => {
                            trim_overlap(prev, para.text)
                        }
                        _ => para.text,
                    };
                    if text.trim().is_empty() {
                        continue;
                    }

                    let rendered = highlighter.render(text);
                    matches += rendered.match_count;
                    if rendered.has_matches() {
                        matched_paragraphs += 1;
                    }

                    if options.counts_only || !(options.show_all || rendered.has_matches()) {
                        continue;
                    }
                    if options.limit.is_some_and(|limit| kept >= limit) {
                        truncated = true;
                        continue;
                    }
                    kept += 1;
                    paragraphs.push(ParagraphReport {
                        line: para.line,
                        matches: rendered.match_count,
                        segments: rendered.segments,
                    });
                }

                total_matches += matches;
                DocumentReport {
                    path: &doc.label,
                    matches,
                    paragraphs,
                }
            })
            .collect();

        tracing::debug!(total_matches, matched_paragraphs, "built report");

        Self {
            keyword,
            pattern: highlighter.matcher().pattern(),
            total_matches,
            matched_paragraphs,
            truncated,
            documents,
        }
    }

    pub fn has_matches(&self) -> bool {
        self.total_matches > 0
    }

    /// Number of paragraphs kept in the report.
    pub fn shown_paragraphs(&self) -> usize {
        self.documents.iter().map(|d| d.paragraphs.len()).sum()
    }
}

/// Pluralize a count noun ("1 match", "2 matches").
pub(crate) fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
