//! データセットのプロファイル（列情報・要約統計・ユニーク値）

use crate::error::Result;
use crate::stats::{summarize, Summary};
use crate::table::{is_null_cell, Table};
use std::collections::HashSet;

/// 推定した列の型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    Text,
}

impl ColumnKind {
    pub fn is_numeric(&self) -> bool {
        !matches!(self, ColumnKind::Text)
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnKind::Integer => write!(f, "int64"),
            ColumnKind::Float => write!(f, "float64"),
            ColumnKind::Text => write!(f, "object"),
        }
    }
}

/// 列情報
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub name: String,
    pub non_null: usize,
    pub kind: ColumnKind,
}

/// 値の並びから列の型を推定
///
/// 欠損を含む整数列は Float 扱い（全欠損も Float）。
pub fn infer_kind<'a, I>(cells: I) -> ColumnKind
where
    I: IntoIterator<Item = &'a str>,
{
    let mut all_int = true;
    let mut has_null = false;

    for cell in cells {
        if is_null_cell(cell) {
            has_null = true;
            continue;
        }
        let trimmed = cell.trim();
        if trimmed.parse::<i64>().is_err() {
            all_int = false;
            if trimmed.parse::<f64>().is_err() {
                return ColumnKind::Text;
            }
        }
    }

    if all_int && !has_null {
        ColumnKind::Integer
    } else {
        ColumnKind::Float
    }
}

pub fn column_info(table: &Table) -> Vec<ColumnInfo> {
    table
        .headers()
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let cells = table.rows().iter().map(|r| r[idx].as_str());
            ColumnInfo {
                name: name.clone(),
                non_null: cells.clone().filter(|c| !is_null_cell(c)).count(),
                kind: infer_kind(cells),
            }
        })
        .collect()
}

/// 数値列すべての要約統計
pub fn describe(table: &Table) -> Result<Vec<(String, Summary)>> {
    let mut out = Vec::new();
    for info in column_info(table) {
        if info.kind.is_numeric() {
            let values = table.numeric_column(&info.name)?;
            out.push((info.name, summarize(&values)));
        }
    }
    Ok(out)
}

/// ユニーク値（出現順）
pub fn unique_values(table: &Table, column: &str) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    Ok(table
        .column(column)?
        .into_iter()
        .filter(|v| seen.insert(*v))
        .map(|v| v.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        let csv = "IndustryCluster,JobTitle,EntryLevelWage,AverageWage\n\
                   Finance,Analyst,2000,3500.5\n\
                   Healthcare,Nurse,2100,\n\
                   Finance,Auditor,2200,4000\n";
        Table::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_infer_kind() {
        assert_eq!(infer_kind(["1", "2"]), ColumnKind::Integer);
        assert_eq!(infer_kind(["1", "2.5"]), ColumnKind::Float);
        assert_eq!(infer_kind(["1", ""]), ColumnKind::Float);
        assert_eq!(infer_kind(["", ""]), ColumnKind::Float);
        assert_eq!(infer_kind(["1", "abc"]), ColumnKind::Text);
    }

    #[test]
    fn test_column_info() {
        let info = column_info(&table());
        assert_eq!(info.len(), 4);
        assert_eq!(info[0].kind, ColumnKind::Text);
        assert_eq!(info[2].kind, ColumnKind::Integer);
        assert_eq!(info[3].kind, ColumnKind::Float);
        assert_eq!(info[3].non_null, 2);
        assert_eq!(format!("{}", info[0].kind), "object");
    }

    #[test]
    fn test_describe_numeric_only() {
        let stats = describe(&table()).unwrap();
        let names: Vec<&str> = stats.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["EntryLevelWage", "AverageWage"]);
        assert_eq!(stats[1].1.count, 2);
    }

    #[test]
    fn test_unique_values_in_order() {
        let uniq = unique_values(&table(), "IndustryCluster").unwrap();
        assert_eq!(uniq, vec!["Finance", "Healthcare"]);
    }
}
