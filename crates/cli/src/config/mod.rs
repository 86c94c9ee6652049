// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles sutra-hl.toml parsing with version validation and unknown key warnings.

mod parse;

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::highlight::HighlightPolicy;
use crate::reader::MAX_FILE_SIZE;
use parse::{parse_highlight_config, parse_input_config, warn_unknown_key};

/// Config file name searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "sutra-hl.toml";

/// The only config version this build understands.
pub const SUPPORTED_VERSION: i64 = 1;

/// Default CSS class for highlighted spans in HTML output.
pub const DEFAULT_HIGHLIGHT_CLASS: &str = "highlight";

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "highlight", "input"];

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[serde(default)]
    version: Option<i64>,

    #[serde(default)]
    highlight: Option<toml::Value>,

    #[serde(default)]
    input: Option<toml::Value>,

    #[serde(flatten)]
    unknown: std::collections::BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,
    pub highlight: HighlightConfig,
    pub input: InputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            highlight: HighlightConfig::default(),
            input: InputConfig::default(),
        }
    }
}

/// `[highlight]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightConfig {
    /// Which capture kinds to highlight (default: all).
    pub policy: HighlightPolicy,

    /// CSS class for highlighted spans in HTML output.
    pub class: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            policy: HighlightPolicy::default(),
            class: Self::default_class(),
        }
    }
}

impl HighlightConfig {
    pub(crate) fn default_class() -> String {
        DEFAULT_HIGHLIGHT_CLASS.to_string()
    }
}

/// `[input]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputConfig {
    /// Maximum bytes read from one input.
    pub max_file_size: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_file_size: Self::default_max_file_size(),
        }
    }
}

impl InputConfig {
    pub(crate) fn default_max_file_size() -> u64 {
        MAX_FILE_SIZE
    }
}

fn config_err(message: impl Into<String>, path: &Path) -> Error {
    Error::Config {
        message: message.into(),
        path: Some(path.to_path_buf()),
    }
}

/// Load and validate config from a file path, warning on unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse and validate config content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_err(e.to_string(), path))?;

    let version = flexible
        .version
        .ok_or_else(|| config_err("missing required field: version", path))?;
    if version != SUPPORTED_VERSION {
        return Err(config_err(
            format!(
                "unsupported config version {} (supported: {})\n  Upgrade sutra-hl to use this config.",
                version, SUPPORTED_VERSION
            ),
            path,
        ));
    }

    let unknown_keys: BTreeSet<&String> = flexible
        .unknown
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .collect();
    for key in unknown_keys {
        warn_unknown_key(path, key);
    }

    Ok(Config {
        version,
        highlight: parse_highlight_config(flexible.highlight.as_ref(), path)?,
        input: parse_input_config(flexible.input.as_ref(), path)?,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
