// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled matcher cache keyed by raw keyword.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;

use crate::pattern::{CompiledMatcher, PatternError};

/// Thread-safe memo of compiled matchers.
#[derive(Default)]
pub struct MatcherCache {
    inner: DashMap<String, Arc<CompiledMatcher>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

/// Cache statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

impl MatcherCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached matcher for `raw`, compiling it on a miss.
    ///
    /// Failed compilations are not cached.
    pub fn get_or_compile(&self, raw: &str) -> Result<Arc<CompiledMatcher>, PatternError> {
        if let Some(entry) = self.inner.get(raw) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Arc::clone(entry.value()));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(keyword = raw, "matcher cache miss");
        let compiled = Arc::new(CompiledMatcher::compile(raw)?);

        // Another thread may have raced us here; keep whichever landed first.
        let entry = self
            .inner
            .entry(raw.to_string())
            .or_insert_with(|| compiled);
        Ok(Arc::clone(entry.value()))
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.inner.len(),
        }
    }

    pub fn clear(&self) {
        self.inner.clear();
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
