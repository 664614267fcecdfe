//! Tests for the form subcommand.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_form() {
    match parse(&["vmssform", "form"]) {
        CliCommand::Form { check_url } => assert!(check_url.is_none()),
        _ => panic!("expected Form"),
    }
}

#[test]
fn cli_parse_form_with_url() {
    match parse(&[
        "vmssform",
        "form",
        "--check-url",
        "https://jenkins.example.com/checkCustomImage",
    ]) {
        CliCommand::Form { check_url } => {
            assert_eq!(
                check_url.as_deref(),
                Some("https://jenkins.example.com/checkCustomImage")
            );
        }
        _ => panic!("expected Form with --check-url"),
    }
}
