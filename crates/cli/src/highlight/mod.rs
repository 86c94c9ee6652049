// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Highlight rendering.
//!
//! Turns the matches of a [`CompiledMatcher`] into a lossless partition of the
//! input text: concatenating every [`Segment`] reproduces the text exactly.

pub mod cache;

use std::ops::Range;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::pattern::{CaptureKind, CompiledMatcher, PatternError};

pub use cache::{CacheStats, MatcherCache};

/// A contiguous run of text, highlighted or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment<'t> {
    pub text: &'t str,
    pub highlighted: bool,
}

/// Which capture kinds are highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum HighlightPolicy {
    /// Highlight literal and wildcard captures alike.
    #[default]
    All,
    /// Highlight only characters matched by wildcards.
    #[value(name = "wildcards")]
    #[serde(rename = "wildcards")]
    WildcardsOnly,
}

impl HighlightPolicy {
    pub fn highlights(self, kind: CaptureKind) -> bool {
        match self {
            HighlightPolicy::All => true,
            HighlightPolicy::WildcardsOnly => kind == CaptureKind::Wildcard,
        }
    }
}

/// Render `text` with every capture highlighted.
pub fn render<'t>(text: &'t str, matcher: &CompiledMatcher) -> Vec<Segment<'t>> {
    render_with(text, matcher, HighlightPolicy::All).segments
}

/// Render `text` under an explicit highlight policy.
pub fn render_with<'t>(
    text: &'t str,
    matcher: &CompiledMatcher,
    policy: HighlightPolicy,
) -> Rendered<'t> {
    let matches = matcher.find_all(text);
    if matches.is_empty() {
        return Rendered {
            segments: vec![Segment {
                text,
                highlighted: false,
            }],
            match_count: 0,
        };
    }

    let mut runs = Runs::default();
    let mut cursor = 0;
    for m in &matches {
        runs.push(cursor..m.start, false);
        let mut pos = m.start;
        for cap in &m.captures {
            runs.push(pos..cap.start, false);
            runs.push(cap.start..cap.end, policy.highlights(cap.kind));
            pos = cap.end;
        }
        runs.push(pos..m.end, false);
        cursor = m.end;
    }
    runs.push(cursor..text.len(), false);

    Rendered {
        segments: runs
            .0
            .into_iter()
            .map(|(range, highlighted)| Segment {
                text: &text[range],
                highlighted,
            })
            .collect(),
        match_count: matches.len(),
    }
}

/// Segments for one text plus the number of matches found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered<'t> {
    pub segments: Vec<Segment<'t>>,
    pub match_count: usize,
}

impl Rendered<'_> {
    pub fn has_matches(&self) -> bool {
        self.match_count > 0
    }

    /// Concatenated highlighted text, in order.
    pub fn highlighted_text(&self) -> String {
        self.segments
            .iter()
            .filter(|s| s.highlighted)
            .map(|s| s.text)
            .collect()
    }
}

/// Accumulates byte ranges, dropping empty ones and merging adjacent plain runs.
#[derive(Default)]
struct Runs(Vec<(Range<usize>, bool)>);

impl Runs {
    fn push(&mut self, range: Range<usize>, highlighted: bool) {
        if range.is_empty() {
            return;
        }
        if !highlighted
            && let Some((last, false)) = self.0.last_mut()
            && last.end == range.start
        {
            last.end = range.end;
            return;
        }
        self.0.push((range, highlighted));
    }
}

/// A compiled keyword paired with a highlight policy.
///
/// Cheap to clone; the matcher is shared.
#[derive(Clone)]
pub struct Highlighter {
    matcher: Arc<CompiledMatcher>,
    policy: HighlightPolicy,
}

impl Highlighter {
    /// Compile `keyword` and highlight under `policy`.
    pub fn new(keyword: &str, policy: HighlightPolicy) -> Result<Self, PatternError> {
        Ok(Self::with_matcher(
            Arc::new(CompiledMatcher::compile(keyword)?),
            policy,
        ))
    }

    /// Use an already-compiled (e.g. cached) matcher.
    pub fn with_matcher(matcher: Arc<CompiledMatcher>, policy: HighlightPolicy) -> Self {
        Self { matcher, policy }
    }

    pub fn matcher(&self) -> &CompiledMatcher {
        &self.matcher
    }

    pub fn policy(&self) -> HighlightPolicy {
        self.policy
    }

    pub fn render<'t>(&self, text: &'t str) -> Rendered<'t> {
        render_with(text, &self.matcher, self.policy)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
