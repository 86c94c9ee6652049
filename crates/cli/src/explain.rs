// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Human- and machine-readable description of a compiled keyword.

use std::io::Write;

use serde::Serialize;

use crate::pattern::{CaptureKind, CompiledMatcher, MatchEngine, Pattern, PatternSegment};

#[derive(Debug, Serialize)]
pub struct Explanation<'a> {
    pub keyword: &'a str,
    pub engine: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<&'a str>,
    pub segments: &'a Pattern,
    pub captures: &'a [CaptureKind],
}

impl<'a> Explanation<'a> {
    pub fn new(keyword: &'a str, matcher: &'a CompiledMatcher) -> Self {
        let regex = match matcher.engine() {
            MatchEngine::Regex(r) => Some(r.as_str()),
            MatchEngine::Empty | MatchEngine::Literal(_) => None,
        };
        Self {
            keyword,
            engine: matcher.engine().name(),
            regex,
            segments: matcher.pattern(),
            captures: matcher.capture_kinds(),
        }
    }

    /// Write the plain-text form.
    pub fn write_text<W: Write>(&self, mut w: W) -> std::io::Result<()> {
        writeln!(w, "keyword: {}", self.keyword)?;
        writeln!(w, "engine: {}", self.engine)?;
        if let Some(regex) = self.regex {
            writeln!(w, "regex: {}", regex)?;
        }
        if self.segments.is_empty() {
            writeln!(w, "segments: (none)")?;
            return Ok(());
        }
        writeln!(w, "segments:")?;
        for (i, segment) in self.segments.segments().iter().enumerate() {
            match segment {
                PatternSegment::Literal(text) => writeln!(w, "  {} literal {:?}", i + 1, text)?,
                PatternSegment::Wildcard => writeln!(w, "  {} wildcard", i + 1)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "explain_tests.rs"]
mod tests;
