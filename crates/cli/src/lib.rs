pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod explain;
pub mod highlight;
pub mod output;
pub mod pattern;
pub mod reader;

pub use cli::{Cli, Command, ExplainArgs, ExplainFormat, HighlightArgs, OutputFormat};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use highlight::{
    HighlightPolicy, Highlighter, MatcherCache, Rendered, Segment, render, render_with,
};
pub use pattern::{CompiledMatcher, Pattern, PatternError, PatternMatch, PatternSegment};
pub use reader::{Document, DocumentReader, Input, Paragraph};

#[cfg(test)]
pub mod test_utils;
