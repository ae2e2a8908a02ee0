//! CLI parse tests.

use super::Cli;
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn cli_parse_all_options() {
    let cli = parse(&[
        "arcgrep",
        "--input",
        "crawl.arc.gz",
        "--output",
        "out.txt",
        "--pattern",
        r"http://a\.com/.*",
    ])
    .unwrap();
    assert_eq!(cli.inputs, vec![PathBuf::from("crawl.arc.gz")]);
    assert_eq!(cli.output, PathBuf::from("out.txt"));
    assert_eq!(cli.pattern, r"http://a\.com/.*");
}

#[test]
fn cli_parse_repeated_inputs_keep_order() {
    let cli = parse(&[
        "arcgrep",
        "-i",
        "a.arc",
        "-i",
        "b.arc",
        "-o",
        "out.txt",
        "-p",
        ".*",
    ])
    .unwrap();
    assert_eq!(
        cli.inputs,
        vec![PathBuf::from("a.arc"), PathBuf::from("b.arc")]
    );
}

#[test]
fn cli_missing_pattern_is_rejected() {
    let err = parse(&["arcgrep", "-i", "a.arc", "-o", "out.txt"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn cli_missing_input_is_rejected() {
    let err = parse(&["arcgrep", "-o", "out.txt", "-p", ".*"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn cli_missing_output_is_rejected() {
    let err = parse(&["arcgrep", "-i", "a.arc", "-p", ".*"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn cli_usage_mentions_all_required_options() {
    let err = parse(&["arcgrep"]).unwrap_err();
    let rendered = err.to_string();
    assert!(rendered.contains("--input"));
    assert!(rendered.contains("--output"));
    assert!(rendered.contains("--pattern"));
}
