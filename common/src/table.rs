//! 表データ（CSV）モジュール
//!
//! ヘッダー順と未知の列を保持したまま読み書きする。
//! 型付きの参照は `types::JobListing` を経由する。

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// 欠損値とみなすセル表記
const NULL_MARKERS: &[&str] = &["", "NaN", "nan", "NA", "N/A", "null", "None"];

/// 欠損セル判定
pub fn is_null_cell(value: &str) -> bool {
    NULL_MARKERS.contains(&value.trim())
}

/// セルを数値として解釈（欠損は `None`）
///
/// `row` はエラー表示用の1始まりのデータ行番号。
pub fn parse_number(value: &str, column: &str, row: usize) -> Result<Option<f64>> {
    if is_null_cell(value) {
        return Ok(None);
    }
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(Error::InvalidNumber {
            column: column.to_string(),
            row,
            value: value.to_string(),
        }),
    }
}

/// ヘッダー付きの表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// CSVファイルを読み込み
    pub fn read_csv(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        Ok(Self { headers, rows })
    }

    /// CSVファイルに書き出し（既存ファイルは上書き）
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.to_writer(BufWriter::new(file))
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(&self.headers)?;
        for row in &self.rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// (行数, 列数)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.headers.len())
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    }

    /// 列の値を取得
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|r| r[idx].as_str()).collect())
    }

    /// 列を数値として取得
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let idx = self.column_index(name)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(i, r)| parse_number(&r[idx], name, i + 1))
            .collect()
    }

    /// 列を追加、既存なら上書き
    ///
    /// # Panics
    /// `values` の長さが行数と一致しない場合
    pub fn set_column(&mut self, name: &str, values: Vec<String>) {
        assert_eq!(values.len(), self.rows.len(), "column length mismatch");

        match self.headers.iter().position(|h| h == name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
    }

    /// 指定列が値と一致する行のみ抽出
    pub fn filter_eq(&self, column: &str, value: &str) -> Result<Table> {
        let idx = self.column_index(column)?;
        let rows = self
            .rows
            .iter()
            .filter(|r| r[idx] == value)
            .cloned()
            .collect();
        Ok(Table::new(self.headers.clone(), rows))
    }

    /// 数値列で降順ソート（安定、欠損は末尾）
    pub fn sort_desc_by(&self, column: &str) -> Result<Table> {
        let keys = self.numeric_column(column)?;
        let mut order: Vec<usize> = (0..self.rows.len()).collect();
        order.sort_by(|&a, &b| compare_desc(keys[a], keys[b]));

        let rows = order.into_iter().map(|i| self.rows[i].clone()).collect();
        Ok(Table::new(self.headers.clone(), rows))
    }
}

fn compare_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
