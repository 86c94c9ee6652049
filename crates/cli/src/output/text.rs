// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! Format:
//! ```text
//! <path>:<line>: <paragraph with highlighted matches>
//! ```
//! followed by a summary line. In counts-only mode each document prints
//! `<path>: <matches>` instead.

use termcolor::WriteColor;

use super::{DocumentReport, ParagraphReport, Report, plural};
use crate::color::scheme;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the whole report: paragraphs (or counts), then the summary.
    pub fn write_report(&mut self, report: &Report<'_>, counts_only: bool) -> std::io::Result<()> {
        if counts_only {
            for doc in &report.documents {
                self.write_count(doc)?;
            }
            return self.out.flush();
        }

        for doc in &report.documents {
            for para in &doc.paragraphs {
                self.write_paragraph(doc.path, para)?;
            }
        }
        if report.truncated {
            self.write_truncation_message(report)?;
        }
        self.write_summary(report)?;
        self.out.flush()
    }

    fn write_label(&mut self, path: &str) -> std::io::Result<()> {
        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", path)?;
        self.out.reset()
    }

    fn write_count(&mut self, doc: &DocumentReport<'_>) -> std::io::Result<()> {
        self.write_label(doc.path)?;
        write!(self.out, ": ")?;
        self.out.set_color(&scheme::count())?;
        write!(self.out, "{}", doc.matches)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    fn write_paragraph(&mut self, path: &str, para: &ParagraphReport<'_>) -> std::io::Result<()> {
        self.write_label(path)?;
        write!(self.out, ":")?;
        self.out.set_color(&scheme::line_number())?;
        write!(self.out, "{}", para.line)?;
        self.out.reset()?;
        write!(self.out, ": ")?;

        for segment in &para.segments {
            if segment.highlighted {
                self.out.set_color(&scheme::highlight())?;
                write!(self.out, "{}", segment.text)?;
                self.out.reset()?;
            } else {
                write!(self.out, "{}", segment.text)?;
            }
        }
        writeln!(self.out)
    }

    fn write_truncation_message(&mut self, report: &Report<'_>) -> std::io::Result<()> {
        writeln!(
            self.out,
            "Stopped after {}. Raise --limit to see more.",
            plural(report.shown_paragraphs(), "paragraph", "paragraphs")
        )
    }

    /// Write the summary line.
    pub fn write_summary(&mut self, report: &Report<'_>) -> std::io::Result<()> {
        if !report.has_matches() {
            return writeln!(self.out, "no matches for `{}`", report.keyword);
        }
        writeln!(
            self.out,
            "{} in {} across {}",
            plural(report.total_matches, "match", "matches"),
            plural(report.matched_paragraphs, "paragraph", "paragraphs"),
            plural(report.documents.len(), "document", "documents"),
        )
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
