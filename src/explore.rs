//! 探索分析モジュール
//!
//! 統計表示 → 業界抽出・賃金ソート → 業界別平均 → グラフ → 相関 → 抽出結果の出力

use crate::cli::ExportFormat;
use crate::error::{CareerPathError, Result};
use crate::{export, plot, report};
use career_path_common::stats::{self, BoxStats};
use career_path_common::types::{COL_AVERAGE_WAGE, COL_ENTRY_WAGE, COL_INDUSTRY, COL_JOB_TITLE};
use career_path_common::{profile, JobListing, Table};
use std::path::{Path, PathBuf};

const HEAD_ROWS: usize = 5;

pub const HISTOGRAM_FILE: &str = "entry_wage_histogram.png";
pub const BOXPLOT_FILE: &str = "average_wage_boxplot.png";
pub const SCATTER_FILE: &str = "wage_scatter.png";

/// 探索分析のオプション
#[derive(Debug, Clone)]
pub struct ExploreOptions {
    pub input: PathBuf,
    pub industry: String,
    pub output: PathBuf,
    pub format: ExportFormat,
    /// `None` ならグラフを生成しない
    pub plots_dir: Option<PathBuf>,
    pub bins: usize,
    pub top_n: usize,
}

/// 探索分析の結果
#[derive(Debug, Clone)]
pub struct ExploreSummary {
    pub shape: (usize, usize),
    pub filtered: Table,
    pub sorted: Table,
    pub mean_wage_by_industry: Vec<(String, f64)>,
    pub correlation: [[f64; 2]; 2],
    pub plots: Vec<PathBuf>,
    pub written: Vec<PathBuf>,
}

/// 業界で抽出
pub fn filter_by_industry(table: &Table, industry: &str) -> Result<Table> {
    Ok(table.filter_eq(COL_INDUSTRY, industry)?)
}

/// 業界別の箱ひげ図統計（業界名昇順）
pub fn average_wage_boxes(jobs: &[JobListing]) -> Vec<(String, BoxStats)> {
    let mut industries: Vec<&str> = jobs.iter().map(|j| j.industry_cluster.as_str()).collect();
    industries.sort_unstable();
    industries.dedup();

    industries
        .into_iter()
        .filter_map(|industry| {
            let wages: Vec<Option<f64>> = jobs
                .iter()
                .filter(|j| j.industry_cluster == industry)
                .map(|j| j.average_wage)
                .collect();
            stats::box_stats(&wages).map(|b| (industry.to_string(), b))
        })
        .collect()
}

/// 散布図の点（両方の賃金があるものだけ）
pub fn wage_points(jobs: &[JobListing]) -> Vec<(f64, f64)> {
    jobs.iter()
        .filter_map(|j| Some((j.entry_level_wage?, j.average_wage?)))
        .collect()
}

fn render_plots(jobs: &[JobListing], bins: usize, dir: &Path) -> Result<Vec<PathBuf>> {
    let entry: Vec<Option<f64>> = jobs.iter().map(|j| j.entry_level_wage).collect();

    let histogram_path = dir.join(HISTOGRAM_FILE);
    plot::render_histogram(&stats::histogram(&entry, bins), &histogram_path)?;
    println!("✔ 入門賃金の分布 (ヒストグラム): {}", histogram_path.display());

    let boxplot_path = dir.join(BOXPLOT_FILE);
    plot::render_boxplot(&average_wage_boxes(jobs), &boxplot_path)?;
    println!("✔ 業界別の平均賃金の分布 (箱ひげ図): {}", boxplot_path.display());

    let scatter_path = dir.join(SCATTER_FILE);
    plot::render_scatter(&wage_points(jobs), &scatter_path)?;
    println!("✔ 入門賃金と平均賃金の相関 (散布図): {}", scatter_path.display());

    Ok(vec![histogram_path, boxplot_path, scatter_path])
}

/// 探索分析を実行
pub fn run_explore(opts: &ExploreOptions) -> Result<ExploreSummary> {
    if !opts.input.exists() {
        return Err(CareerPathError::FileNotFound(opts.input.display().to_string()));
    }

    // 1. 読み込みと概要
    println!("[1/5] データセットを読み込み中...");
    let table = Table::read_csv(&opts.input)?;
    let jobs = JobListing::from_table(&table)?;
    tracing::info!(rows = table.len(), path = %opts.input.display(), "データセットを読み込み");

    println!("\n先頭{}行:", HEAD_ROWS);
    println!("{}", report::format_table(&table, HEAD_ROWS));

    let shape = table.shape();
    println!("\nデータセットの大きさ (行, 列): ({}, {})", shape.0, shape.1);

    println!("\n列の型と欠損でない値の数:");
    println!("{}", report::format_info(&profile::column_info(&table), table.len()));

    println!("\n数値列の要約統計:");
    println!("{}", report::format_describe(&profile::describe(&table)?));

    println!("\n'{}' のユニーク値:", COL_INDUSTRY);
    println!("{}", report::format_values(&profile::unique_values(&table, COL_INDUSTRY)?));

    println!("\n'{}' のユニーク値:", COL_JOB_TITLE);
    println!("{}", report::format_values(&profile::unique_values(&table, COL_JOB_TITLE)?));

    // 2. 抽出とソート
    println!("\n[2/5] 抽出・ソート中...");
    let filtered = filter_by_industry(&table, &opts.industry)?;
    println!("\n'{}' の求人 ({}件):", opts.industry, filtered.len());
    println!("{}", report::format_table(&filtered, HEAD_ROWS));
    if filtered.is_empty() {
        tracing::warn!(industry = %opts.industry, "該当する求人がありません");
    }

    let sorted = table.sort_desc_by(COL_AVERAGE_WAGE)?;
    println!("\n平均賃金の上位{}件:", opts.top_n);
    println!("{}", report::format_table(&sorted, opts.top_n));

    // 3. 業界別平均
    println!("\n[3/5] 業界別に集計中...");
    let industries: Vec<&str> = jobs.iter().map(|j| j.industry_cluster.as_str()).collect();
    let wages: Vec<Option<f64>> = jobs.iter().map(|j| j.average_wage).collect();
    let mean_wage_by_industry = stats::group_mean(&industries, &wages);
    println!("\n業界別の平均賃金:");
    println!(
        "{}",
        report::format_group_mean(&mean_wage_by_industry, COL_INDUSTRY, COL_AVERAGE_WAGE)
    );

    // 4. グラフと相関
    println!("\n[4/5] グラフ・相関を計算中...");
    let plots = match &opts.plots_dir {
        Some(dir) => render_plots(&jobs, opts.bins, dir)?,
        None => {
            println!("- グラフ生成をスキップ");
            Vec::new()
        }
    };

    let entry: Vec<Option<f64>> = jobs.iter().map(|j| j.entry_level_wage).collect();
    let correlation = stats::correlation_matrix(&entry, &wages);
    println!("\n入門賃金と平均賃金の相関行列:");
    println!(
        "{}",
        report::format_correlation([COL_ENTRY_WAGE, COL_AVERAGE_WAGE], &correlation)
    );

    // 5. 抽出結果の出力
    println!("\n[5/5] 抽出結果を出力中...");
    let written = export::export_table(&filtered, opts.format, &opts.output, &opts.industry)?;

    Ok(ExploreSummary {
        shape,
        filtered,
        sorted,
        mean_wage_by_industry,
        correlation,
        plots,
        written,
    })
}
