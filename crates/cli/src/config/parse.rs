// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse helper functions for configuration.

use std::path::Path;

use super::{HighlightConfig, InputConfig, config_err};
use crate::error::Result;
use crate::highlight::HighlightPolicy;

const KNOWN_HIGHLIGHT_KEYS: &[&str] = &["policy", "class"];
const KNOWN_INPUT_KEYS: &[&str] = &["max_file_size"];

/// Print a warning for an unrecognized config key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "sutra-hl: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

/// Warn about keys of `table` not listed in `known`, prefixed with `section`.
fn warn_unknown_in(table: &toml::Table, known: &[&str], section: &str, path: &Path) {
    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("{}.{}", section, key));
        }
    }
}

/// Parse the highlight policy name.
fn parse_policy(value: Option<&toml::Value>, path: &Path) -> Result<HighlightPolicy> {
    match value {
        None => Ok(HighlightPolicy::default()),
        Some(v) => match v.as_str() {
            Some("all") => Ok(HighlightPolicy::All),
            Some("wildcards") => Ok(HighlightPolicy::WildcardsOnly),
            _ => Err(config_err(
                format!(
                    "invalid highlight.policy {} (expected \"all\" or \"wildcards\")",
                    v
                ),
                path,
            )),
        },
    }
}

/// Parse `[highlight]` from TOML value.
pub(super) fn parse_highlight_config(
    value: Option<&toml::Value>,
    path: &Path,
) -> Result<HighlightConfig> {
    let Some(toml::Value::Table(t)) = value else {
        return Ok(HighlightConfig::default());
    };
    warn_unknown_in(t, KNOWN_HIGHLIGHT_KEYS, "highlight", path);

    let class = match t.get("class") {
        None => HighlightConfig::default_class(),
        Some(v) => match v.as_str() {
            Some(s) if !s.trim().is_empty() => s.to_string(),
            _ => {
                return Err(config_err(
                    "highlight.class must be a non-empty string",
                    path,
                ));
            }
        },
    };

    Ok(HighlightConfig {
        policy: parse_policy(t.get("policy"), path)?,
        class,
    })
}

/// Parse `[input]` from TOML value.
pub(super) fn parse_input_config(value: Option<&toml::Value>, path: &Path) -> Result<InputConfig> {
    let Some(toml::Value::Table(t)) = value else {
        return Ok(InputConfig::default());
    };
    warn_unknown_in(t, KNOWN_INPUT_KEYS, "input", path);

    let max_file_size = match t.get("max_file_size") {
        None => InputConfig::default_max_file_size(),
        Some(v) => match v.as_integer() {
            Some(n) if n > 0 => n as u64,
            _ => {
                return Err(config_err(
                    "input.max_file_size must be a positive integer",
                    path,
                ));
            }
        },
    };

    Ok(InputConfig { max_file_size })
}
