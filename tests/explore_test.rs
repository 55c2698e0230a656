//! 探索分析の統合テスト
//!
//! 抽出・ソート・集計・グラフ出力を実データ風のCSVで検証

use career_path_common::types::{COL_AVERAGE_WAGE, COL_INDUSTRY};
use career_path_common::Table;
use career_path_rust::cli::ExportFormat;
use career_path_rust::explore::{
    run_explore, ExploreOptions, BOXPLOT_FILE, HISTOGRAM_FILE, SCATTER_FILE,
};
use std::path::Path;
use tempfile::tempdir;

const DATASET: &str = "\
IndustryCluster,JobTitle,EntryLevelWage,AverageWage,City
Information Technology,Software Developer,4000,7000,Cluj
Finance,Accountant,3000,4500,Iasi
Information Technology,QA Engineer,3500,5500,Bucuresti
Healthcare,Nurse,2800,4200,Timisoara
Information Technology,Data Analyst,3800,5500,Cluj
Finance,Auditor,3200,5000,Bucuresti
Logistics,Warehouse Operator,2200,,Brasov
";

fn write_dataset(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("jobs.csv");
    std::fs::write(&path, DATASET).unwrap();
    path
}

fn options(dir: &Path, format: ExportFormat, plots: bool) -> ExploreOptions {
    ExploreOptions {
        input: write_dataset(dir),
        industry: "Information Technology".to_string(),
        output: dir.join("it_jobs.csv"),
        format,
        plots_dir: plots.then(|| dir.join("plots")),
        bins: 20,
        top_n: 10,
    }
}

#[test]
fn test_filtered_output_contains_only_industry() {
    let dir = tempdir().expect("Failed to create temp dir");
    let summary = run_explore(&options(dir.path(), ExportFormat::Csv, false)).unwrap();

    assert_eq!(summary.shape, (7, 5));
    assert_eq!(summary.written, vec![dir.path().join("it_jobs.csv")]);

    let written = Table::read_csv(&dir.path().join("it_jobs.csv")).unwrap();
    assert_eq!(written.len(), 3);
    assert_eq!(written.headers().len(), 5);
    assert!(written
        .column(COL_INDUSTRY)
        .unwrap()
        .iter()
        .all(|v| *v == "Information Technology"));
    // 元の順序を維持
    assert_eq!(written.rows()[0][1], "Software Developer");
    assert_eq!(written.rows()[2][1], "Data Analyst");
}

#[test]
fn test_sorted_non_increasing_and_stable() {
    let dir = tempdir().expect("Failed to create temp dir");
    let summary = run_explore(&options(dir.path(), ExportFormat::Csv, false)).unwrap();

    let wages = summary.sorted.numeric_column(COL_AVERAGE_WAGE).unwrap();
    let present: Vec<f64> = wages.iter().flatten().copied().collect();
    assert!(present.windows(2).all(|w| w[0] >= w[1]));
    // 欠損は末尾
    assert_eq!(wages.last().unwrap(), &None);

    // 5500 の同値は QA Engineer → Data Analyst の順
    let titles: Vec<&str> = summary.sorted.rows().iter().map(|r| r[1].as_str()).collect();
    assert_eq!(&titles[1..3], &["QA Engineer", "Data Analyst"]);
}

#[test]
fn test_group_mean_by_industry() {
    let dir = tempdir().expect("Failed to create temp dir");
    let summary = run_explore(&options(dir.path(), ExportFormat::Csv, false)).unwrap();

    let means = &summary.mean_wage_by_industry;
    let names: Vec<&str> = means.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["Finance", "Healthcare", "Information Technology", "Logistics"]);
    assert!((means[0].1 - 4750.0).abs() < 1e-9);
    assert!((means[2].1 - 6000.0).abs() < 1e-9);
    assert!(means[3].1.is_nan());
}

#[test]
fn test_correlation_matrix_symmetric() {
    let dir = tempdir().expect("Failed to create temp dir");
    let summary = run_explore(&options(dir.path(), ExportFormat::Csv, false)).unwrap();

    let m = summary.correlation;
    assert!((m[0][0] - 1.0).abs() < 1e-9);
    assert!((m[1][1] - 1.0).abs() < 1e-9);
    assert_eq!(m[0][1], m[1][0]);
    assert!(m[0][1] > 0.5 && m[0][1] <= 1.0);
}

#[test]
fn test_plots_are_written() {
    let dir = tempdir().expect("Failed to create temp dir");
    let summary = run_explore(&options(dir.path(), ExportFormat::Csv, true)).unwrap();

    assert_eq!(summary.plots.len(), 3);
    for name in [HISTOGRAM_FILE, BOXPLOT_FILE, SCATTER_FILE] {
        let path = dir.path().join("plots").join(name);
        let bytes = std::fs::read(&path).expect("グラフが出力されていない");
        assert_eq!(&bytes[1..4], b"PNG", "{} がPNGではない", name);
    }
}

#[test]
fn test_export_both_formats() {
    let dir = tempdir().expect("Failed to create temp dir");
    let summary = run_explore(&options(dir.path(), ExportFormat::Both, false)).unwrap();

    assert_eq!(summary.written.len(), 2);
    assert!(dir.path().join("it_jobs.csv").exists());
    let xlsx = std::fs::read(dir.path().join("it_jobs.xlsx")).expect("Excelが出力されていない");
    assert_eq!(&xlsx[..2], b"PK");
}

#[test]
fn test_unknown_industry_writes_header_only() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut opts = options(dir.path(), ExportFormat::Csv, false);
    opts.industry = "Agriculture".to_string();

    let summary = run_explore(&opts).unwrap();
    assert!(summary.filtered.is_empty());

    let content = std::fs::read_to_string(dir.path().join("it_jobs.csv")).unwrap();
    assert_eq!(content.trim(), "IndustryCluster,JobTitle,EntryLevelWage,AverageWage,City");
}
