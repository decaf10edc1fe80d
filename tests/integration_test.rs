//! Integration tests for cidr-report
//!
//! These tests drive the whole run from parsed command line to written report.

use cidr_report::output::Format;
use cidr_report::{failed_run, run, Cli, Error};
use clap::Parser;

fn run_args(args: &[&str]) -> (Result<cidr_report::Summary, Error>, String, String) {
    let cli = Cli::try_parse_from(args).expect("Failed to parse args");
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = run(&cli, "cidr-report", &mut out, &mut err);
    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_class_c_row() {
    let (result, out, err) = run_args(&["cidr-report", "192.168.1.0/24"]);
    let summary = result.expect("run failed");
    assert_eq!(summary.processed, 1);
    assert_eq!(summary.failed, 0);
    assert!(err.is_empty());

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3, "header, row and summary");
    let cols: Vec<&str> = lines[1].split('\t').filter(|c| !c.is_empty()).collect();
    assert_eq!(
        cols,
        vec![
            "192.168.1.0",
            "192.168.1.0",
            "ffffff00",
            "192.168.1.255",
            "24",
            "32",
            "254"
        ]
    );
}

#[test]
fn test_class_a_row() {
    let (result, out, _) = run_args(&["cidr-report", "10.0.0.0/8"]);
    result.expect("run failed");
    let row = out.lines().nth(1).expect("missing row");
    let cols: Vec<&str> = row.split('\t').filter(|c| !c.is_empty()).collect();
    assert_eq!(cols[1], "10.0.0.0");
    assert_eq!(cols[3], "10.255.255.255");
    assert_eq!(cols[6], "16777214");
}

#[test]
fn test_malformed_token() {
    let (result, out, err) = run_args(&["cidr-report", "not-an-ip"]);
    let summary = result.expect("a bad token is not fatal");
    assert_eq!(summary.failed, 1);
    assert_eq!(out.lines().count(), 2, "no row for a bad token");
    assert_eq!(err.lines().count(), 1);
    assert!(err.contains("not-an-ip"));
    assert!(out.ends_with("of which 1 failed\n"));
}

#[test]
fn test_no_networks_is_usage_error() {
    let (result, out, err) = run_args(&["cidr-report"]);
    match result {
        Err(Error::Usage { program }) => assert_eq!(program, "cidr-report"),
        other => panic!("expected usage error, got {other:?}"),
    }
    assert!(out.is_empty());
    assert!(err.is_empty());
}

#[test]
fn test_mixed_tokens_keep_order() {
    let args = [
        "cidr-report",
        "172.16.0.1/12",
        "999.1.1.1/8",
        "10.1.1.1/31",
        "10.1.1.1/32",
        "10.1.1.1/-1",
    ];
    let (result, out, err) = run_args(&args);
    let summary = result.expect("run failed");
    assert_eq!(summary.processed, args.len() - 1);
    assert_eq!(summary.failed, 2);

    let rows: Vec<Vec<&str>> = out
        .lines()
        .skip(1)
        .take(summary.succeeded())
        .map(|l| l.split('\t').filter(|c| !c.is_empty()).collect())
        .collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][0], "172.16.0.1");
    assert_eq!(rows[0][1], "172.16.0.0");
    assert_eq!(rows[0][3], "172.31.255.255");
    assert_eq!(rows[1][6], "0");
    assert_eq!(rows[2][6], "-1");

    assert_eq!(err.lines().count(), 2);
    assert!(err.lines().next().unwrap().contains("999.1.1.1/8"));
}

#[test]
fn test_strict_exit_status() {
    let cli = Cli::try_parse_from(["cidr-report", "--strict", "10.0.0.0/8", "x"]).unwrap();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let summary = run(&cli, "cidr-report", &mut out, &mut err).unwrap();
    assert!(failed_run(&cli, &summary));

    let lenient = Cli::try_parse_from(["cidr-report", "10.0.0.0/8", "x"]).unwrap();
    assert!(!failed_run(&lenient, &summary));
}

#[test]
fn test_json_format() {
    let (result, out, _) = run_args(&["cidr-report", "-f", "json", "192.168.1.0/24", "nope"]);
    result.expect("run failed");
    let values: Vec<serde_json::Value> = out
        .lines()
        .map(|l| serde_json::from_str(l).expect("invalid json line"))
        .collect();
    assert_eq!(values.len(), 2);
    assert_eq!(values[0]["net_addr"], "192.168.1.0");
    assert_eq!(values[0]["max_hosts"], 254);
    assert_eq!(values[1]["processed"], 2);
    assert_eq!(values[1]["failed"], 1);
}

#[test]
fn test_csv_format() {
    let cli = Cli::try_parse_from(["cidr-report", "--format", "csv", "10.0.0.0/8"]).unwrap();
    assert_eq!(cli.format, Format::Csv);
    let mut out = Vec::new();
    let mut err = Vec::new();
    run(&cli, "cidr-report", &mut out, &mut err).unwrap();
    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains(r#""net_addr""#));
    assert!(lines[1].contains(r#""10.255.255.255""#));
    assert!(lines[2].starts_with("# Processed 1 networks"));
}

#[test]
fn test_hyphen_tokens_are_counted_not_fatal() {
    let args = ["cidr-report", "10.0.0.0/8", "-5.0.0.0/8"];
    let (result, out, err) = run_args(&args);
    let summary = result.expect("a hyphen token is not fatal");
    assert_eq!(summary.processed, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.succeeded() + summary.failed, args.len() - 1);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3, "header, one row and summary");
    assert!(lines[1].starts_with("10.0.0.0\t10.0.0.0\tff000000\t10.255.255.255\t"));
    assert_eq!(err.lines().count(), 1);
    assert!(err.contains("-5.0.0.0/8"));
}

#[test]
fn test_option_lookalikes_each_count_as_failures() {
    let args = ["cidr-report", "192.168.1.0/24", "-x", "-", "--nope", "10.0.0.0/024"];
    let (result, out, err) = run_args(&args);
    let summary = result.expect("run failed");
    assert_eq!(summary.processed, 5);
    assert_eq!(summary.failed, 3);
    assert_eq!(err.lines().count(), 3);
    // leading zeros in the prefix are accepted
    let last_row = out.lines().nth(2).expect("missing row");
    assert!(last_row.starts_with("10.0.0.0\t10.0.0.0\tffffff00\t10.0.0.255\t24"));
}
