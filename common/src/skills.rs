//! スキルカタログとスキル列のパーサ
//!
//! スキル列はリスト表記 `['Python', 'SQL']`（二重引用符も可）、
//! またはカンマ区切り `Python, SQL` を受け付ける。

use crate::error::{Error, Result};
use crate::table::{is_null_cell, Table};
use crate::types::COL_SKILLS;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// 業界別スキル辞書（参照用の組み込みカタログ）
pub const INDUSTRY_SKILLS: &[(&str, &[&str])] = &[
    (
        "Information Technology",
        &[
            "Python", "Java", "SQL", "Problem Solving", "Cybersecurity", "Data Analysis",
            "Network Configuration", "Machine Learning", "Cloud Computing",
            "Software Development", "Database Management", "Technical Support",
        ],
    ),
    (
        "Engineering",
        &[
            "CAD Software", "Project Management", "Mathematics", "Design Thinking",
            "Analytical Skills", "Quality Control", "Mechanical Design", "Electrical Systems",
            "Civil Engineering", "Thermodynamics", "Structural Analysis", "Automation",
        ],
    ),
    (
        "Finance",
        &[
            "Financial Analysis", "Accounting Principles", "Data Analysis",
            "Attention to Detail", "Risk Management", "Budgeting", "Financial Forecasting",
            "Compliance", "Investment Analysis", "Tax Planning", "Financial Reporting",
        ],
    ),
    (
        "Healthcare",
        &[
            "Patient Care", "Medical Knowledge", "Attention to Detail", "Communication",
            "Problem Solving", "Clinical Procedures", "Medical Documentation",
            "Emergency Response", "Diagnostic Skills", "Patient Assessment", "Health Education",
        ],
    ),
    (
        "Logistics",
        &[
            "Inventory Management", "Supply Chain Optimization", "Data Entry",
            "Attention to Detail", "Project Management", "Freight Management",
            "Vendor Relations", "Order Processing", "Logistics Coordination",
            "Forecasting Demand", "Warehouse Operations",
        ],
    ),
    (
        "General",
        &[
            "Communication", "Time Management", "Teamwork", "Critical Thinking", "Adaptability",
            "Microsoft Office", "Organizational Skills", "Research", "Customer Service",
            "Basic Accounting", "Scheduling", "Resource Management",
        ],
    ),
];

lazy_static! {
    static ref LIST_LITERAL: Regex = Regex::new(
        r#"^\[\s*(?:(?:'[^']*'|"[^"]*")\s*(?:,\s*(?:'[^']*'|"[^"]*")\s*)*,?\s*)?\]$"#
    )
    .expect("list literal regex");
    static ref QUOTED_ITEM: Regex =
        Regex::new(r#"'([^']*)'|"([^"]*)""#).expect("quoted item regex");
}

/// 番号付きで選択するスキル一覧
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCatalog {
    skills: Vec<String>,
}

impl SkillCatalog {
    /// 重複を除いて出現順に並べる
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let skills = skills
            .into_iter()
            .map(Into::into)
            .filter(|s: &String| !s.is_empty() && seen.insert(s.clone()))
            .collect();
        Self { skills }
    }

    /// 組み込みの業界別辞書から作成
    pub fn builtin() -> Self {
        Self::new(
            INDUSTRY_SKILLS
                .iter()
                .flat_map(|(_, skills)| skills.iter().copied()),
        )
    }

    /// データセットのスキル列から作成
    pub fn from_table(table: &Table) -> Result<Self> {
        let mut all = Vec::new();
        for (i, cell) in table.column(COL_SKILLS)?.into_iter().enumerate() {
            all.extend(parse_skills(cell, i + 1)?);
        }
        Ok(Self::new(all))
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// 1始まりの番号で取得
    pub fn get(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.skills.get(i))
            .map(|s| s.as_str())
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// (番号, スキル) の列挙
    pub fn enumerate(&self) -> impl Iterator<Item = (usize, &str)> {
        self.skills.iter().enumerate().map(|(i, s)| (i + 1, s.as_str()))
    }
}

/// スキル列の値をリストに変換
///
/// `row` はエラー表示用の1始まりのデータ行番号。
pub fn parse_skills(value: &str, row: usize) -> Result<Vec<String>> {
    let trimmed = value.trim();

    if is_null_cell(trimmed) {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') || trimmed.ends_with(']') {
        if !LIST_LITERAL.is_match(trimmed) {
            return Err(Error::MalformedSkills {
                row,
                value: value.to_string(),
            });
        }
        return Ok(QUOTED_ITEM
            .captures_iter(trimmed)
            .filter_map(|c| c.get(1).or_else(|| c.get(2)))
            .map(|m| m.as_str().to_string())
            .filter(|s| !s.is_empty())
            .collect());
    }

    Ok(trimmed
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}
