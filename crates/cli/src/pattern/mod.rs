// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wildcard keyword patterns.
//!
//! A keyword is parsed into a [`Pattern`] syntax tree, then compiled into a
//! [`CompiledMatcher`] using the cheapest engine that fits:
//! - Empty keyword: never matches
//! - No wildcards: memchr::memmem
//! - Wildcards: regex crate, one capture group per segment

pub mod ast;
pub mod matcher;

pub use ast::{Pattern, PatternSegment, WILDCARD_MARKER, is_word_char};
pub use matcher::{
    Capture, CaptureKind, CompiledMatcher, MatchEngine, PatternError, PatternMatch,
};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
