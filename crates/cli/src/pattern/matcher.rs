// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled pattern matchers with automatic engine selection.

use memchr::memmem::Finder;
use regex::Regex;
use serde::Serialize;

use super::ast::{Pattern, PatternSegment};

/// Which kind of pattern segment produced a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureKind {
    Literal,
    Wildcard,
}

/// One capture group's sub-range within a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    pub kind: CaptureKind,
    /// Byte offset where the capture starts.
    pub start: usize,
    /// Byte offset where the capture ends (exclusive).
    pub end: usize,
}

/// A full pattern match found in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Byte offset where match starts.
    pub start: usize,
    /// Byte offset where match ends.
    pub end: usize,
    /// One capture per pattern segment, in pattern order.
    pub captures: Vec<Capture>,
}

/// Error during pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// Engine chosen for a pattern, based on its structure.
pub enum MatchEngine {
    /// Empty keyword; never matches.
    Empty,
    /// No wildcards (SIMD substring search).
    Literal(LiteralMatcher),
    /// At least one wildcard.
    Regex(RegexMatcher),
}

/// Matcher for wildcard-free keywords using memchr.
pub struct LiteralMatcher {
    len: usize,
    finder: Finder<'static>,
}

/// Matcher for keywords containing wildcards.
pub struct RegexMatcher {
    regex: Regex,
}

/// A keyword compiled once and reusable across any number of texts.
pub struct CompiledMatcher {
    pattern: Pattern,
    kinds: Vec<CaptureKind>,
    engine: MatchEngine,
}

impl CompiledMatcher {
    /// Compile a raw keyword.
    pub fn compile(raw: &str) -> Result<Self, PatternError> {
        Self::from_pattern(Pattern::parse(raw))
    }

    /// Compile an already-parsed pattern.
    ///
    /// Selects the engine from the pattern's shape:
    /// - no segments -> Empty
    /// - single literal -> LiteralMatcher
    /// - anything with a wildcard -> RegexMatcher
    pub fn from_pattern(pattern: Pattern) -> Result<Self, PatternError> {
        let kinds = pattern
            .segments()
            .iter()
            .map(|s| match s {
                PatternSegment::Literal(_) => CaptureKind::Literal,
                PatternSegment::Wildcard => CaptureKind::Wildcard,
            })
            .collect();

        let engine = if pattern.is_empty() {
            MatchEngine::Empty
        } else if let Some(text) = pattern.as_literal() {
            MatchEngine::Literal(LiteralMatcher::new(text))
        } else {
            MatchEngine::Regex(RegexMatcher::new(&pattern.to_regex())?)
        };

        tracing::debug!(
            engine = engine.name(),
            segments = pattern.segments().len(),
            "compiled pattern"
        );

        Ok(Self {
            pattern,
            kinds,
            engine,
        })
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Capture-group kinds, in group order (group 1 first).
    pub fn capture_kinds(&self) -> &[CaptureKind] {
        &self.kinds
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Find all non-overlapping matches, leftmost first.
    pub fn find_all(&self, text: &str) -> Vec<PatternMatch> {
        match &self.engine {
            MatchEngine::Empty => Vec::new(),
            MatchEngine::Literal(m) => m.find_all(text),
            MatchEngine::Regex(m) => m.find_all(text, &self.kinds),
        }
    }

    /// Whether `text` contains at least one match.
    pub fn is_match(&self, text: &str) -> bool {
        match &self.engine {
            MatchEngine::Empty => false,
            MatchEngine::Literal(m) => m.finder.find(text.as_bytes()).is_some(),
            MatchEngine::Regex(m) => m.regex.is_match(text),
        }
    }
}

impl MatchEngine {
    /// Short engine name for logs and `explain` output.
    pub fn name(&self) -> &'static str {
        match self {
            MatchEngine::Empty => "empty",
            MatchEngine::Literal(_) => "literal",
            MatchEngine::Regex(_) => "regex",
        }
    }
}

impl LiteralMatcher {
    pub fn new(literal: &str) -> Self {
        Self {
            len: literal.len(),
            finder: Finder::new(literal).into_owned(),
        }
    }

    pub fn find_all(&self, text: &str) -> Vec<PatternMatch> {
        // memmem reports non-overlapping occurrences, and a UTF-8 needle can
        // only match a UTF-8 haystack on char boundaries.
        self.finder
            .find_iter(text.as_bytes())
            .map(|start| {
                let end = start + self.len;
                PatternMatch {
                    start,
                    end,
                    captures: vec![Capture {
                        kind: CaptureKind::Literal,
                        start,
                        end,
                    }],
                }
            })
            .collect()
    }
}

impl RegexMatcher {
    pub fn new(expr: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(expr)?;
        Ok(Self { regex })
    }

    /// The compiled regular expression source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn find_all(&self, text: &str, kinds: &[CaptureKind]) -> Vec<PatternMatch> {
        let mut matches = Vec::new();
        let mut at = 0;

        while at <= text.len() {
            let Some(caps) = self.regex.captures_at(text, at) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };

            let captures = kinds
                .iter()
                .enumerate()
                .filter_map(|(i, &kind)| {
                    caps.get(i + 1).map(|m| Capture {
                        kind,
                        start: m.start(),
                        end: m.end(),
                    })
                })
                .collect();

            matches.push(PatternMatch {
                start: whole.start(),
                end: whole.end(),
                captures,
            });

            at = if whole.is_empty() {
                // Step over one scalar so an empty match cannot repeat.
                whole.end() + text[whole.end()..].chars().next().map_or(1, char::len_utf8)
            } else {
                whole.end()
            };
        }

        matches
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
