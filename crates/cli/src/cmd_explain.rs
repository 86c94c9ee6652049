// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Explain command implementation.

use sutra_hl::cli::{ExplainArgs, ExplainFormat};
use sutra_hl::error::{Error, ExitCode};
use sutra_hl::explain::Explanation;
use sutra_hl::output::json::JsonFormatter;
use sutra_hl::pattern::CompiledMatcher;

/// Run the explain command.
pub fn run(args: &ExplainArgs) -> anyhow::Result<ExitCode> {
    let keyword = args.trimmed_keyword();
    let matcher = CompiledMatcher::compile(keyword).map_err(Error::from)?;
    let explanation = Explanation::new(keyword, &matcher);

    let stdout = std::io::stdout().lock();
    match args.output {
        ExplainFormat::Text => explanation.write_text(stdout)?,
        ExplainFormat::Json => JsonFormatter::new(stdout).write(&explanation)?,
    }

    Ok(ExitCode::Success)
}
