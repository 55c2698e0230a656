//! スキル選択とマッチスコア計算
//!
//! 入力の検証は `SkillSelector` に閉じ込め、端末I/Oとは分離する。

use crate::error::Result;
use crate::skills::{parse_skills, SkillCatalog};
use crate::table::Table;
use crate::types::{COL_MATCH_SCORE, COL_SKILLS};
use std::collections::HashSet;
use std::num::IntErrorKind;

/// 選択するスキル数
pub const REQUIRED_SKILLS: usize = 5;

/// 1回の入力に対する判定
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// 選択を受理
    Selected(String),
    /// 既に選択済み
    Duplicate(String),
    /// 番号が範囲外
    OutOfRange(String),
    /// 数値ではない
    NotANumber(String),
    /// 必要数に達しているため無視
    Complete,
}

/// 重複なしで規定数のスキルを集める
#[derive(Debug, Clone)]
pub struct SkillSelector<'a> {
    catalog: &'a SkillCatalog,
    required: usize,
    selected: Vec<String>,
}

impl<'a> SkillSelector<'a> {
    pub fn new(catalog: &'a SkillCatalog, required: usize) -> Self {
        Self {
            catalog,
            required,
            selected: Vec::with_capacity(required),
        }
    }

    /// 入力文字列を判定し、受理なら選択に追加
    pub fn submit(&mut self, input: &str) -> SelectionOutcome {
        if self.is_complete() {
            return SelectionOutcome::Complete;
        }

        let trimmed = input.trim();
        let number = match trimmed.parse::<i64>() {
            Ok(n) => n,
            Err(e) => {
                return match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        SelectionOutcome::OutOfRange(trimmed.to_string())
                    }
                    _ => SelectionOutcome::NotANumber(trimmed.to_string()),
                }
            }
        };

        let skill = match usize::try_from(number).ok().and_then(|n| self.catalog.get(n)) {
            Some(s) => s,
            None => return SelectionOutcome::OutOfRange(trimmed.to_string()),
        };

        if self.selected.iter().any(|s| s == skill) {
            return SelectionOutcome::Duplicate(skill.to_string());
        }

        self.selected.push(skill.to_string());
        SelectionOutcome::Selected(skill.to_string())
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_complete(&self) -> bool {
        self.selected.len() >= self.required
    }

    /// 次に選ぶ番号（1始まり）
    pub fn next_position(&self) -> usize {
        self.selected.len() + 1
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    pub fn into_selected(self) -> Vec<String> {
        self.selected
    }
}

/// 共通スキル数
pub fn match_score<S: AsRef<str>>(user_skills: &[S], job_skills: &[String]) -> usize {
    let user: HashSet<&str> = user_skills.iter().map(|s| s.as_ref()).collect();
    let job: HashSet<&str> = job_skills.iter().map(|s| s.as_str()).collect();
    user.intersection(&job).count()
}

/// 全行のスコアを計算
pub fn score_rows<S: AsRef<str>>(table: &Table, user_skills: &[S]) -> Result<Vec<usize>> {
    table
        .column(COL_SKILLS)?
        .into_iter()
        .enumerate()
        .map(|(i, cell)| Ok(match_score(user_skills, &parse_skills(cell, i + 1)?)))
        .collect()
}

/// スコア列を追加または更新し、スコアを返す
pub fn apply_match_scores<S: AsRef<str>>(table: &mut Table, user_skills: &[S]) -> Result<Vec<usize>> {
    let scores = score_rows(table, user_skills)?;
    table.set_column(
        COL_MATCH_SCORE,
        scores.iter().map(|s| s.to_string()).collect(),
    );
    Ok(scores)
}
