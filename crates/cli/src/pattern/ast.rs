// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Keyword pattern syntax tree.
//!
//! A keyword is literal text interspersed with `*` wildcard markers. Each
//! marker stands for exactly one word character (see [`is_word_char`]).

use serde::Serialize;

/// The wildcard marker character in a raw keyword.
pub const WILDCARD_MARKER: char = '*';

/// Character class a wildcard may match, in regex syntax.
///
/// Kept in sync with [`is_word_char`].
pub(crate) const WORD_CLASS: &str = r"[\x{4E00}-\x{9FA5}A-Za-z0-9]";

/// One element of a parsed keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum PatternSegment {
    /// Verbatim text (never empty).
    Literal(String),
    /// Exactly one word character.
    Wildcard,
}

/// A parsed keyword: an ordered list of literal and wildcard segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Pattern {
    segments: Vec<PatternSegment>,
}

impl Pattern {
    /// Parse a raw keyword.
    ///
    /// Consecutive non-marker characters merge into one literal; every
    /// marker becomes its own wildcard, so `"a**b"` parses to
    /// `[Literal("a"), Wildcard, Wildcard, Literal("b")]`.
    pub fn parse(raw: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();

        for c in raw.chars() {
            if c == WILDCARD_MARKER {
                if !literal.is_empty() {
                    segments.push(PatternSegment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(PatternSegment::Wildcard);
            } else {
                literal.push(c);
            }
        }
        if !literal.is_empty() {
            segments.push(PatternSegment::Literal(literal));
        }

        Self { segments }
    }

    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of wildcard segments.
    pub fn wildcard_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, PatternSegment::Wildcard))
            .count()
    }

    /// The literal text if the pattern has no wildcards.
    pub fn as_literal(&self) -> Option<&str> {
        match self.segments.as_slice() {
            [PatternSegment::Literal(text)] => Some(text),
            _ => None,
        }
    }

    /// Render as a regular expression with one capture group per segment.
    pub fn to_regex(&self) -> String {
        let mut expr = String::new();
        for segment in &self.segments {
            expr.push('(');
            match segment {
                PatternSegment::Literal(text) => expr.push_str(&regex::escape(text)),
                PatternSegment::Wildcard => expr.push_str(WORD_CLASS),
            }
            expr.push(')');
        }
        expr
    }
}

/// Whether `c` can be matched by a wildcard.
///
/// Word characters are CJK unified ideographs (U+4E00 to U+9FA5), ASCII
/// letters, and ASCII digits. Whitespace and punctuation never match.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('\u{4E00}'..='\u{9FA5}').contains(&c)
}

#[cfg(test)]
#[path = "ast_tests.rs"]
mod tests;
