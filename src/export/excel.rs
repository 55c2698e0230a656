//! Excel生成（CLI版）
//!
//! 共通ライブラリの excel_core でバッファを作り、ファイルに保存する

use crate::error::{CareerPathError, Result};
use career_path_common::export::excel_core::generate_table_excel_buffer;
use career_path_common::Table;
use std::path::Path;

/// Excelのシート名は31文字まで
const MAX_SHEET_NAME: usize = 31;

pub fn generate_excel(table: &Table, output_path: &Path, sheet_name: &str) -> Result<()> {
    let sheet_name = sanitize_sheet_name(sheet_name);
    let buffer = generate_table_excel_buffer(table, &sheet_name)
        .map_err(CareerPathError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_path, buffer)?;
    Ok(())
}

/// シート名に使えない文字を置換して切り詰める
fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            _ => c,
        })
        .take(MAX_SHEET_NAME)
        .collect();
    let cleaned = cleaned.trim_matches('\'').trim().to_string();
    if cleaned.is_empty() {
        "Sheet1".to_string()
    } else {
        cleaned
    }
}
