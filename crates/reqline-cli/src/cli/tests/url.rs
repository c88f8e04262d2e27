//! Tests for parse, host and timeout subcommands.

use super::parse;
use crate::cli::CliCommand;
use reqline_core::timeout::TimeoutInput;

#[test]
fn cli_parse_parse() {
    match parse(&["reqline", "parse", "http://example.com/a?b"]) {
        CliCommand::Parse { url, json } => {
            assert_eq!(url, "http://example.com/a?b");
            assert!(!json);
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_parse_json() {
    match parse(&["reqline", "parse", "/foo", "--json"]) {
        CliCommand::Parse { url, json } => {
            assert_eq!(url, "/foo");
            assert!(json);
        }
        _ => panic!("expected Parse with --json"),
    }
}

#[test]
fn cli_parse_host() {
    match parse(&["reqline", "host", "[::1]:80"]) {
        CliCommand::Host { url } => assert_eq!(url, "[::1]:80"),
        _ => panic!("expected Host"),
    }
}

#[test]
fn cli_parse_timeout_defaults() {
    match parse(&["reqline", "timeout"]) {
        CliCommand::Timeout {
            connect,
            read,
            total,
            elapsed,
        } => {
            assert!(connect.is_none());
            assert!(read.is_none());
            assert!(total.is_none());
            assert!(elapsed.is_none());
        }
        _ => panic!("expected Timeout"),
    }
}

#[test]
fn cli_parse_timeout_values() {
    match parse(&[
        "reqline",
        "timeout",
        "--connect",
        "false",
        "--read",
        "none",
        "--total",
        "2.5",
        "--elapsed",
        "1",
    ]) {
        CliCommand::Timeout {
            connect,
            read,
            total,
            elapsed,
        } => {
            assert_eq!(connect, Some(TimeoutInput::Bool(false)));
            assert_eq!(read, Some(TimeoutInput::Text("none".to_string())));
            assert_eq!(total, Some(TimeoutInput::Float(2.5)));
            assert_eq!(elapsed, Some(1.0));
        }
        _ => panic!("expected Timeout with values"),
    }
}
