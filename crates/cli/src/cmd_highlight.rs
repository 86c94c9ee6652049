// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Highlight command implementation.

use termcolor::StandardStream;

use sutra_hl::cli::{Cli, HighlightArgs, OutputFormat};
use sutra_hl::color::resolve_color_with_flags;
use sutra_hl::config::{self, Config};
use sutra_hl::discovery;
use sutra_hl::error::{Error, ExitCode};
use sutra_hl::highlight::Highlighter;
use sutra_hl::output::html::HtmlFormatter;
use sutra_hl::output::json::JsonFormatter;
use sutra_hl::output::text::TextFormatter;
use sutra_hl::output::{Report, ReportOptions};
use sutra_hl::reader::{DocumentReader, Input};

/// Run the highlight command.
pub fn run(cli: &Cli, args: &HighlightArgs) -> anyhow::Result<ExitCode> {
    let keyword = args.trimmed_keyword();
    if keyword.is_empty() {
        return Err(Error::Argument("keyword must not be empty".to_string()).into());
    }

    let cwd = std::env::current_dir()?;
    let config = match discovery::resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load(&path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };

    let policy = args.policy.unwrap_or(config.highlight.policy);
    let highlighter = Highlighter::new(keyword, policy).map_err(Error::from)?;
    tracing::debug!(keyword, ?policy, "highlighting");

    let reader = DocumentReader::with_max_size(config.input.max_file_size);
    let inputs = Input::from_args(&args.paths)?;
    let documents = inputs
        .iter()
        .map(|input| reader.read(input))
        .collect::<Result<Vec<_>, _>>()?;

    let options = ReportOptions {
        show_all: args.all,
        counts_only: args.count,
        limit: args.limit,
    };
    let report = Report::build(keyword, &highlighter, &documents, &options);

    match args.output {
        OutputFormat::Text => {
            let color = resolve_color_with_flags(args.color, args.no_color);
            TextFormatter::new(StandardStream::stdout(color)).write_report(&report, args.count)?;
        }
        OutputFormat::Json => JsonFormatter::new(std::io::stdout().lock()).write(&report)?,
        OutputFormat::Html => HtmlFormatter::new(std::io::stdout().lock(), &config.highlight.class)
            .write_report(&report, args.count)?,
    }

    Ok(if report.has_matches() {
        ExitCode::Success
    } else {
        ExitCode::NoMatch
    })
}
