//! 対話式スキルマッチングモジュール
//!
//! カタログ表示 → スキルを規定数選択 → 全行のマッチスコアを計算 → CSVを上書き

mod prompt;

pub use prompt::{LinePrompt, SkillPrompt, TerminalPrompt};

use crate::error::{CareerPathError, Result};
use crate::export;
use career_path_common::types::{COL_INDUSTRY, COL_JOB_TITLE};
use career_path_common::{
    apply_match_scores, SelectionOutcome, SkillCatalog, SkillSelector, Table, REQUIRED_SKILLS,
};
use std::path::PathBuf;

/// スキルマッチングのオプション
#[derive(Debug, Clone)]
pub struct MatchOptions {
    pub input: PathBuf,
    /// `None` なら入力ファイルを上書き
    pub output: Option<PathBuf>,
    /// 指定時は対話せずにこの番号列で選択
    pub choices: Option<Vec<String>>,
    pub catalog_from_dataset: bool,
    pub top_n: usize,
}

/// スキルマッチングの結果
#[derive(Debug, Clone)]
pub struct MatchSummary {
    pub selected: Vec<String>,
    pub scores: Vec<usize>,
    pub output: PathBuf,
}

/// 番号付きカタログを表示
pub fn print_catalog(catalog: &SkillCatalog) {
    for (number, skill) in catalog.enumerate() {
        println!("{}. {}", number, skill);
    }
}

/// 規定数そろうまで対話で選択させる
pub fn collect_skills_interactive(
    catalog: &SkillCatalog,
    required: usize,
    prompt: &mut dyn SkillPrompt,
) -> Result<Vec<String>> {
    let mut selector = SkillSelector::new(catalog, required);

    while !selector.is_complete() {
        let message = format!(
            "スキル {} を選択 (1-{})",
            selector.next_position(),
            selector.catalog_len()
        );
        let input = prompt.ask(&message)?;

        match selector.submit(&input) {
            SelectionOutcome::Selected(skill) => println!("→ 選択: {}", skill),
            SelectionOutcome::Duplicate(skill) => {
                println!("⚠ 「{}」は選択済みです。別のスキルを選んでください", skill)
            }
            SelectionOutcome::OutOfRange(_) => {
                println!("⚠ 無効な番号です。範囲内の番号を入力してください")
            }
            SelectionOutcome::NotANumber(_) => println!("⚠ 無効な入力です。数字を入力してください"),
            SelectionOutcome::Complete => break,
        }
    }

    Ok(selector.into_selected())
}

/// 番号列で一括選択（不正な番号はエラー）
pub fn collect_skills_from_choices(
    catalog: &SkillCatalog,
    required: usize,
    choices: &[String],
) -> Result<Vec<String>> {
    let mut selector = SkillSelector::new(catalog, required);

    for choice in choices {
        match selector.submit(choice) {
            SelectionOutcome::Selected(_) => {}
            SelectionOutcome::Duplicate(skill) => {
                return Err(CareerPathError::InvalidChoice(format!("{} (重複: {})", choice, skill)))
            }
            SelectionOutcome::OutOfRange(n) => {
                return Err(CareerPathError::InvalidChoice(format!(
                    "{} (範囲 1-{})",
                    n,
                    catalog.len()
                )))
            }
            SelectionOutcome::NotANumber(s) => {
                return Err(CareerPathError::InvalidChoice(format!("{} (数字ではありません)", s)))
            }
            SelectionOutcome::Complete => {
                return Err(CareerPathError::InvalidChoice(format!(
                    "{}個を超えて指定されています",
                    required
                )))
            }
        }
    }

    if !selector.is_complete() {
        return Err(CareerPathError::InvalidChoice(format!(
            "{}個必要ですが {}個しか指定されていません",
            required,
            selector.selected().len()
        )));
    }

    Ok(selector.into_selected())
}

/// スコア上位の行番号（スコア降順、同点は元の順）
pub fn top_matches(scores: &[usize], n: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].cmp(&scores[a]));
    order.truncate(n);
    order
}

fn describe_row(table: &Table, row: usize) -> String {
    let cell = |name: &str| {
        table
            .column_index(name)
            .ok()
            .map(|idx| table.rows()[row][idx].clone())
    };
    match (cell(COL_JOB_TITLE), cell(COL_INDUSTRY)) {
        (Some(title), Some(industry)) => format!("{} ({})", title, industry),
        (Some(title), None) => title,
        _ => format!("行 {}", row + 1),
    }
}

/// スキルマッチングを実行
pub fn run_match(opts: &MatchOptions, prompt: &mut dyn SkillPrompt) -> Result<MatchSummary> {
    if !opts.input.exists() {
        return Err(CareerPathError::FileNotFound(opts.input.display().to_string()));
    }

    // 1. 読み込み
    println!("[1/4] データセットを読み込み中...");
    let mut table = Table::read_csv(&opts.input)?;
    tracing::info!(rows = table.len(), path = %opts.input.display(), "データセットを読み込み");

    let catalog = if opts.catalog_from_dataset {
        SkillCatalog::from_table(&table)?
    } else {
        SkillCatalog::builtin()
    };
    if catalog.len() < REQUIRED_SKILLS {
        return Err(CareerPathError::EmptyCatalog(format!(
            "{}個のスキルが必要ですが、カタログには{}個しかありません",
            REQUIRED_SKILLS,
            catalog.len()
        )));
    }

    // 2. スキル選択
    println!(
        "\n[2/4] 自分を表すスキルを{}個選んでください (番号を入力):\n",
        REQUIRED_SKILLS
    );
    let selected = match &opts.choices {
        Some(choices) => collect_skills_from_choices(&catalog, REQUIRED_SKILLS, choices)?,
        None => {
            print_catalog(&catalog);
            println!();
            collect_skills_interactive(&catalog, REQUIRED_SKILLS, prompt)?
        }
    };
    println!("\n選択したスキル: {}", crate::report::format_values(&selected));

    // 3. スコア計算
    println!("\n[3/4] マッチスコアを計算中...");
    let scores = apply_match_scores(&mut table, &selected)?;
    tracing::debug!(rows = scores.len(), "マッチスコアを更新");

    for row in top_matches(&scores, opts.top_n) {
        println!("  {} : {}", scores[row], describe_row(&table, row));
    }

    // 4. 保存（表全体）
    println!("\n[4/4] 保存中...");
    let output = opts.output.clone().unwrap_or_else(|| opts.input.clone());
    export::csv::write_table(&table, &output)?;
    println!("✔ マッチスコアを更新しました: {}", output.display());

    Ok(MatchSummary {
        selected,
        scores,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// 決められた入力を順に返す
    struct Scripted(VecDeque<&'static str>);

    impl SkillPrompt for Scripted {
        fn ask(&mut self, _message: &str) -> Result<String> {
            self.0
                .pop_front()
                .map(|s| s.to_string())
                .ok_or_else(|| CareerPathError::Prompt("入力が尽きました".into()))
        }
    }

    fn catalog() -> SkillCatalog {
        SkillCatalog::new(["Python", "Java", "SQL", "Excel", "Research", "Teamwork"])
    }

    #[test]
    fn test_interactive_reprompts_on_invalid_and_duplicate() {
        let catalog = catalog();
        let mut prompt = Scripted(VecDeque::from(vec![
            "3", "3", "abc", "0", "99", "1", "4", "1", "5", "6",
        ]));
        let selected = collect_skills_interactive(&catalog, 5, &mut prompt).unwrap();
        assert_eq!(selected, vec!["SQL", "Python", "Excel", "Research", "Teamwork"]);
        assert!(prompt.0.is_empty());
    }

    #[test]
    fn test_interactive_propagates_prompt_error() {
        let catalog = catalog();
        let mut prompt = Scripted(VecDeque::from(vec!["1"]));
        let err = collect_skills_interactive(&catalog, 5, &mut prompt).unwrap_err();
        assert!(matches!(err, CareerPathError::Prompt(_)));
    }

    #[test]
    fn test_choices_rejects_duplicate() {
        let catalog = catalog();
        let choices: Vec<String> = ["3", "3", "1", "2", "4"].iter().map(|s| s.to_string()).collect();
        let err = collect_skills_from_choices(&catalog, 5, &choices).unwrap_err();
        assert!(matches!(err, CareerPathError::InvalidChoice(_)));
    }

    #[test]
    fn test_choices_requires_exact_count() {
        let catalog = catalog();
        let short: Vec<String> = vec!["1".into(), "2".into()];
        assert!(collect_skills_from_choices(&catalog, 5, &short).is_err());

        let long: Vec<String> = ["1", "2", "3", "4", "5", "6"].iter().map(|s| s.to_string()).collect();
        assert!(collect_skills_from_choices(&catalog, 5, &long).is_err());

        let exact: Vec<String> = ["1", "2", "3", "4", "5"].iter().map(|s| s.to_string()).collect();
        assert_eq!(collect_skills_from_choices(&catalog, 5, &exact).unwrap().len(), 5);
    }

    #[test]
    fn test_top_matches_stable() {
        assert_eq!(top_matches(&[1, 3, 0, 3, 2], 3), vec![1, 3, 4]);
        assert_eq!(top_matches(&[], 3), Vec::<usize>::new());
    }
}
