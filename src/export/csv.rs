//! CSV出力

use crate::error::Result;
use career_path_common::Table;
use std::path::Path;

/// 表をCSVに書き出し（親フォルダは作成）
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    table.write_csv(path)?;
    tracing::debug!(rows = table.len(), path = %path.display(), "CSVを書き出し");
    Ok(())
}
