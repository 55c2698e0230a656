use clap::Parser;
use career_path_common::{SkillCatalog, Table};
use career_path_rust::{cli, config, error, explore, logging, matcher};
use cli::{Cli, Commands};
use config::Config;
use error::{CareerPathError, Result};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("✘ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Explore { input, industry, output, format, plots_dir, bins, top, no_plots } => {
            println!("📊 career-path - 探索分析\n");

            let opts = explore::ExploreOptions {
                input: input.unwrap_or_else(|| config.explore_dataset.clone()),
                industry: industry.unwrap_or_else(|| config.filter_industry.clone()),
                output: output.unwrap_or_else(|| config.filtered_output.clone()),
                format,
                plots_dir: if no_plots {
                    None
                } else {
                    Some(plots_dir.unwrap_or_else(|| config.plots_dir.clone()))
                },
                bins: bins.unwrap_or(config.histogram_bins).max(1),
                top_n: top.unwrap_or(config.top_n),
            };

            let summary = explore::run_explore(&opts)?;
            tracing::debug!(
                filtered = summary.filtered.len(),
                plots = summary.plots.len(),
                "探索分析が完了"
            );

            println!("\n✅ 探索分析完了");
        }

        Commands::Match { input, output, choices, catalog_from_dataset, top } => {
            println!("🧩 career-path - スキルマッチング\n");

            let opts = matcher::MatchOptions {
                input: input.unwrap_or_else(|| config.match_dataset.clone()),
                output,
                choices,
                catalog_from_dataset,
                top_n: top.unwrap_or(config.top_n),
            };

            let mut prompt = matcher::TerminalPrompt;
            matcher::run_match(&opts, &mut prompt)?;

            println!("\n✅ マッチング完了");
        }

        Commands::Catalog { from_dataset } => {
            let catalog = match from_dataset {
                Some(path) => {
                    if !path.exists() {
                        return Err(CareerPathError::FileNotFound(path.display().to_string()));
                    }
                    SkillCatalog::from_table(&Table::read_csv(&path)?)?
                }
                None => SkillCatalog::builtin(),
            };
            println!("スキルカタログ ({}件):\n", catalog.len());
            matcher::print_catalog(&catalog);
        }

        Commands::Config { set_industry, show } => {
            let mut config = config;

            if let Some(industry) = set_industry {
                config.set_filter_industry(industry)?;
                println!("✔ 抽出する業界を設定しました: {}", config.filter_industry);
            }

            if show {
                println!("設定 ({}):", Config::config_path()?.display());
                println!("  探索分析の入力: {}", config.explore_dataset.display());
                println!("  マッチングの入力: {}", config.match_dataset.display());
                println!("  抽出する業界: {}", config.filter_industry);
                println!("  抽出結果の出力: {}", config.filtered_output.display());
                println!("  グラフ出力先: {}", config.plots_dir.display());
                println!("  ヒストグラムのビン数: {}", config.histogram_bins);
                println!("  上位表示件数: {}", config.top_n);
            }
        }
    }

    Ok(())
}
