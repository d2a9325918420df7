//! Workflow Integration Tests
//!
//! SalesReportWorkflow の統合テスト

use chrono::NaiveDate;
use clap::Parser;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use stallsum::adapter::config::Config;
use stallsum::domain::entities::sales_summary::{NoDataReason, SortDirection};
use stallsum::driver::cli::Args;
use stallsum::driver::workflow::SalesReportWorkflow;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
}

/// テスト用のログファイルを作成
fn write_log(dir: &Path, name: &str, lines: &[&str]) {
    fs::write(dir.join(name), lines.join("\n")).unwrap();
}

fn args(dir: &Path, extra: &[&str]) -> Args {
    let mut argv = vec!["stallsum", "--folder", dir.to_str().unwrap()];
    argv.extend_from_slice(extra);
    Args::parse_from(argv)
}

/// 5つのアイテムをそれぞれ earned 50, 10, 30, 40, 20 で販売したログ
fn create_five_items(dir: &Path) {
    write_log(
        dir,
        "PlayerShopLog_250610_120000.txt",
        &[
            "Tue Jun 10 12:00 - Alice bought Alpha at a cost of 50 per 1 = 50",
            "Tue Jun 10 12:01 - Bob bought Bravo at a cost of 10 per 1 = 10",
            "Tue Jun 10 12:02 - Alice bought Charlie at a cost of 30 per 1 = 30",
            "Tue Jun 10 12:03 - Bob bought Delta at a cost of 40 per 1 = 40",
            "Tue Jun 10 12:04 - Carol bought Echo at a cost of 20 per 1 = 20",
        ],
    );
}

#[test]
fn test_workflow_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("readme.md"), "nothing here").unwrap();
    let workflow = SalesReportWorkflow::new(Config::default());

    let outcome = workflow.run(&args(temp_dir.path(), &[]), today()).unwrap();

    assert_eq!(outcome.no_data_reason(), Some(NoDataReason::NoLogFiles));
}

#[test]
fn test_workflow_missing_folder_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");
    let workflow = SalesReportWorkflow::new(Config::default());

    let result = workflow.run(&args(&missing, &[]), today());

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("valid folder"));
}

#[test]
fn test_workflow_top_two_by_total_earned() {
    let temp_dir = TempDir::new().unwrap();
    create_five_items(temp_dir.path());
    let workflow = SalesReportWorkflow::new(Config::default());

    let outcome = workflow
        .run(
            &args(temp_dir.path(), &["--sort-by", "TotalEarned", "--top", "2"]),
            today(),
        )
        .unwrap();
    let summary = outcome.summary().unwrap();

    let rows: Vec<_> = summary
        .rows
        .iter()
        .map(|r| (r.group.as_str(), r.total_earned))
        .collect();
    assert_eq!(rows, vec![("Alpha", 50), ("Delta", 40)]);
    assert_eq!(summary.total_earned(), 90);
    assert_eq!(summary.top_n, Some(2));
}

#[test]
fn test_workflow_non_numeric_top_shows_all() {
    let temp_dir = TempDir::new().unwrap();
    create_five_items(temp_dir.path());
    let workflow = SalesReportWorkflow::new(Config::default());

    let outcome = workflow
        .run(&args(temp_dir.path(), &["--top", "lots"]), today())
        .unwrap();
    let summary = outcome.summary().unwrap();

    assert_eq!(summary.rows.len(), 5);
    assert_eq!(summary.top_n, None);
    assert_eq!(summary.total_earned(), 150);
}

#[test]
fn test_workflow_group_by_buyer_ascending() {
    let temp_dir = TempDir::new().unwrap();
    create_five_items(temp_dir.path());
    let workflow = SalesReportWorkflow::new(Config::default());

    let outcome = workflow
        .run(
            &args(temp_dir.path(), &["-g", "Buyer", "-s", "TotalEarned", "--ascending"]),
            today(),
        )
        .unwrap();
    let summary = outcome.summary().unwrap();

    let rows: Vec<_> = summary
        .rows
        .iter()
        .map(|r| (r.group.as_str(), r.total_earned))
        .collect();
    assert_eq!(rows, vec![("Carol", 20), ("Bob", 50), ("Alice", 80)]);
    assert_eq!(summary.direction, SortDirection::Ascending);
}

#[test]
fn test_workflow_filters_and_stage_messages() {
    let temp_dir = TempDir::new().unwrap();
    create_five_items(temp_dir.path());
    let workflow = SalesReportWorkflow::new(Config::default());

    let outcome = workflow
        .run(&args(temp_dir.path(), &["--buyer", "Zed"]), today())
        .unwrap();
    assert_eq!(outcome.no_data_reason(), Some(NoDataReason::NoMatchingSales));

    let outcome = workflow
        .run(
            &args(temp_dir.path(), &["--start", "07/01/2025", "--end", "07/31/2025"]),
            today(),
        )
        .unwrap();
    assert_eq!(outcome.no_data_reason(), Some(NoDataReason::NoSalesInRange));
}

#[test]
fn test_workflow_unreadable_file_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    create_five_items(temp_dir.path());
    fs::write(
        temp_dir.path().join("PlayerShopLog_250611_080000.txt"),
        b"Wed Jun 11 08:00 - Eve bought Gem at a cost of 1 per 1 = 1\n\xff\xfe\n",
    )
    .unwrap();
    let workflow = SalesReportWorkflow::new(Config::default());

    let outcome = workflow.run(&args(temp_dir.path(), &[]), today()).unwrap();
    let summary = outcome.summary().unwrap();

    assert_eq!(summary.rows.len(), 5);
    assert!(summary.rows.iter().all(|r| r.group != "Gem"));
}

#[test]
fn test_workflow_reflects_current_directory_contents() {
    let temp_dir = TempDir::new().unwrap();
    create_five_items(temp_dir.path());
    let workflow = SalesReportWorkflow::new(Config::default());

    let first = workflow.run(&args(temp_dir.path(), &[]), today()).unwrap();
    assert_eq!(first.summary().unwrap().total_earned(), 150);

    write_log(
        temp_dir.path(),
        "PlayerShopLog_250612_080000.txt",
        &["Thu Jun 12 08:00 - Dan bought Foxtrot x2 at a cost of 5 per 1 = 10"],
    );

    let second = workflow.run(&args(temp_dir.path(), &[]), today()).unwrap();
    assert_eq!(second.summary().unwrap().total_earned(), 160);
}
