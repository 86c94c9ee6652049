#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn parse_bare_invocation() {
    let cli = Cli::parse_from(["sutra-hl"]);
    assert!(cli.command.is_none());
    assert!(cli.config.is_none());
}

#[test]
fn parse_highlight_command() {
    let cli = Cli::parse_from(["sutra-hl", "highlight", "波*蜜"]);
    let Some(Command::Highlight(args)) = cli.command else {
        panic!("expected highlight command");
    };
    assert_eq!(args.keyword, "波*蜜");
    assert!(args.paths.is_empty());
    assert_eq!(args.output, OutputFormat::Text);
    assert!(args.policy.is_none());
    assert!(!args.all);
}

#[test]
fn parse_highlight_with_paths() {
    let cli = Cli::parse_from(["sutra-hl", "highlight", "般若", "a.txt", "b.txt"]);
    let Some(Command::Highlight(args)) = cli.command else {
        panic!("expected highlight command");
    };
    assert_eq!(args.paths.len(), 2);
}

#[test]
fn parse_highlight_with_output_format() {
    let cli = Cli::parse_from(["sutra-hl", "highlight", "般若", "-o", "html"]);
    let Some(Command::Highlight(args)) = cli.command else {
        panic!("expected highlight command");
    };
    assert_eq!(args.output, OutputFormat::Html);
}

#[test]
fn parse_highlight_policy() {
    let cli = Cli::parse_from(["sutra-hl", "highlight", "*", "--policy", "wildcards"]);
    let Some(Command::Highlight(args)) = cli.command else {
        panic!("expected highlight command");
    };
    assert_eq!(args.policy, Some(HighlightPolicy::WildcardsOnly));
}

#[test]
fn parse_highlight_flags() {
    let cli = Cli::parse_from([
        "sutra-hl", "highlight", "a", "--all", "--count", "--limit", "3", "--no-color",
    ]);
    let Some(Command::Highlight(args)) = cli.command else {
        panic!("expected highlight command");
    };
    assert!(args.all);
    assert!(args.count);
    assert_eq!(args.limit, Some(3));
    assert!(args.no_color);
}

#[test]
fn color_flags_conflict() {
    let result = Cli::try_parse_from(["sutra-hl", "highlight", "a", "--color", "--no-color"]);
    assert!(result.is_err());
}

#[test]
fn keyword_is_required() {
    assert!(Cli::try_parse_from(["sutra-hl", "highlight"]).is_err());
}

#[test]
fn trimmed_keyword_strips_whitespace() {
    let cli = Cli::parse_from(["sutra-hl", "highlight", "  般若 "]);
    let Some(Command::Highlight(args)) = cli.command else {
        panic!("expected highlight command");
    };
    assert_eq!(args.trimmed_keyword(), "般若");
}

#[test]
fn explain_trimmed_keyword_matches_highlight() {
    let cli = Cli::parse_from(["sutra-hl", "explain", " 般若\t"]);
    let Some(Command::Explain(args)) = cli.command else {
        panic!("expected explain command");
    };
    assert_eq!(args.keyword, " 般若\t");
    assert_eq!(args.trimmed_keyword(), "般若");
}

#[test]
fn parse_explain_command() {
    let cli = Cli::parse_from(["sutra-hl", "explain", "a*", "-o", "json"]);
    let Some(Command::Explain(args)) = cli.command else {
        panic!("expected explain command");
    };
    assert_eq!(args.keyword, "a*");
    assert_eq!(args.output, ExplainFormat::Json);
}

#[test]
fn explain_rejects_html() {
    assert!(Cli::try_parse_from(["sutra-hl", "explain", "a", "-o", "html"]).is_err());
}

#[test]
fn parse_global_config_flag() {
    let cli = Cli::parse_from(["sutra-hl", "highlight", "a", "-C", "custom.toml"]);
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
}
