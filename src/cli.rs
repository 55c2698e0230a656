use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "career-path")]
#[command(about = "求人データセットの探索分析・スキルマッチングツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// データセットの統計・グラフ・業界別抽出
    Explore {
        /// 入力CSVファイル（省略時は設定値）
        input: Option<PathBuf>,

        /// 抽出する業界 (IndustryCluster)
        #[arg(short, long)]
        industry: Option<String>,

        /// 抽出結果の出力ファイル
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 抽出結果の出力形式 (csv/excel/both)
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,

        /// グラフ画像の出力フォルダ
        #[arg(long)]
        plots_dir: Option<PathBuf>,

        /// ヒストグラムのビン数
        #[arg(short, long)]
        bins: Option<usize>,

        /// 平均賃金上位の表示件数
        #[arg(short, long)]
        top: Option<usize>,

        /// グラフを生成しない
        #[arg(long)]
        no_plots: bool,
    },

    /// スキルを選んでマッチスコアを計算
    Match {
        /// 入力CSVファイル（省略時は設定値）
        input: Option<PathBuf>,

        /// 出力先（省略時は上書き）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// スキル番号を一括指定（例: 3,7,12,20,31）
        #[arg(short, long, value_delimiter = ',')]
        choices: Option<Vec<String>>,

        /// データセットのSkills列からカタログを作成
        #[arg(long)]
        catalog_from_dataset: bool,

        /// 結果の上位表示件数
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// スキルカタログを表示
    Catalog {
        /// このCSVのSkills列からカタログを作成
        #[arg(long)]
        from_dataset: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 抽出する業界のデフォルトを設定
        #[arg(long)]
        set_industry: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Excel,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use csv, excel, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("xlsx".parse::<ExportFormat>().unwrap(), ExportFormat::Excel);
        assert_eq!("both".parse::<ExportFormat>().unwrap(), ExportFormat::Both);
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_parse_match_choices() {
        let cli = Cli::parse_from(["career-path", "match", "jobs.csv", "--choices", "3,7,12"]);
        match cli.command {
            Commands::Match { input, choices, .. } => {
                assert_eq!(input, Some(PathBuf::from("jobs.csv")));
                assert_eq!(choices, Some(vec!["3".to_string(), "7".into(), "12".into()]));
            }
            _ => panic!("match サブコマンドとして解釈されていない"),
        }
    }
}
