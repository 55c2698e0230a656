//! Excel生成（共通ライブラリ）
//!
//! 表をそのまま1シートに書き出す。数値として解釈できるセルは数値で書く。

use crate::table::{is_null_cell, Table};
use rust_xlsxwriter::*;

/// 列幅の上限（文字数）
const MAX_COL_WIDTH: usize = 60;

/// Excelをバッファに生成
///
/// # Arguments
/// * `table` - 出力する表
/// * `sheet_name` - シート名
pub fn generate_table_excel_buffer(table: &Table, sheet_name: &str) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    for (col, header) in table.headers().iter().enumerate() {
        let col = col as u16;
        worksheet
            .write_string_with_format(0, col, header.as_str(), &header_format)
            .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;

        let width = table
            .rows()
            .iter()
            .map(|r| r[col as usize].chars().count())
            .chain(std::iter::once(header.chars().count()))
            .max()
            .unwrap_or(0)
            .min(MAX_COL_WIDTH);
        worksheet
            .set_column_width(col, (width + 2) as f64)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
    }

    for (i, row) in table.rows().iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            if is_null_cell(cell) {
                continue;
            }
            match cell.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => worksheet.write_number(r, col, n),
                _ => worksheet.write_string(r, col, cell.as_str()),
            }
            .map_err(|e| format!("セル書き込みエラー: {}", e))?;
        }
    }

    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
