pub mod csv;
pub mod excel;

use crate::cli::ExportFormat;
use crate::error::Result;
use career_path_common::Table;
use std::path::{Path, PathBuf};

/// 形式に応じた出力パス（拡張子を差し替え）
fn output_path_for_format(output: &Path, extension: &str) -> PathBuf {
    if output.extension().map(|e| e == extension).unwrap_or(false) {
        output.to_path_buf()
    } else {
        output.with_extension(extension)
    }
}

/// 表を指定形式で出力し、書き出したパスを返す
pub fn export_table(
    table: &Table,
    format: ExportFormat,
    output: &Path,
    sheet_name: &str,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if matches!(format, ExportFormat::Csv | ExportFormat::Both) {
        let path = output_path_for_format(output, "csv");
        println!("- CSVを出力中...");
        csv::write_table(table, &path)?;
        println!("✔ CSV出力: {}", path.display());
        written.push(path);
    }

    if matches!(format, ExportFormat::Excel | ExportFormat::Both) {
        let path = output_path_for_format(output, "xlsx");
        println!("- Excelを生成中...");
        excel::generate_excel(table, &path, sheet_name)?;
        println!("✔ Excel出力: {}", path.display());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_for_format() {
        let p = Path::new("out/jobs.csv");
        assert_eq!(output_path_for_format(p, "csv"), PathBuf::from("out/jobs.csv"));
        assert_eq!(output_path_for_format(p, "xlsx"), PathBuf::from("out/jobs.xlsx"));
        assert_eq!(output_path_for_format(Path::new("jobs"), "csv"), PathBuf::from("jobs.csv"));
    }
}
