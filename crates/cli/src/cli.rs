// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::highlight::HighlightPolicy;

/// Wildcard-aware keyword highlighting for paragraph text
#[derive(Parser)]
#[command(name = "sutra-hl")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SUTRA_HL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Highlight keyword matches in paragraphs
    Highlight(HighlightArgs),
    /// Show how a keyword is parsed and compiled
    Explain(ExplainArgs),
}

#[derive(clap::Args)]
pub struct HighlightArgs {
    /// Keyword; `*` matches one CJK ideograph, ASCII letter, or digit
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,

    /// Files to read (stdin when omitted or `-`)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Which parts of a match to highlight (overrides config)
    #[arg(long, value_name = "POLICY")]
    pub policy: Option<HighlightPolicy>,

    /// Show paragraphs without matches too
    #[arg(long)]
    pub all: bool,

    /// Print only per-document match counts
    #[arg(long, short = 'c')]
    pub count: bool,

    /// Maximum paragraphs to display
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,
}

impl HighlightArgs {
    /// The keyword with surrounding whitespace removed.
    pub fn trimmed_keyword(&self) -> &str {
        self.keyword.trim()
    }
}

#[derive(clap::Args)]
pub struct ExplainArgs {
    /// Keyword to explain
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: ExplainFormat,
}

impl ExplainArgs {
    /// The keyword as `highlight` would search for it.
    pub fn trimmed_keyword(&self) -> &str {
        self.keyword.trim()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ExplainFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
