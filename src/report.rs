//! コンソール出力用の整形

use career_path_common::profile::ColumnInfo;
use career_path_common::stats::Summary;
use career_path_common::Table;

/// 数値表示（NaNはそのまま表示）
pub fn fmt_float(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// 右寄せの表を組み立てる（先頭列は左寄せ）
fn render_grid(header: &[String], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = (0..header.len())
        .map(|c| {
            rows.iter()
                .map(|r| r[c].chars().count())
                .chain(std::iter::once(header[c].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(c, cell)| {
                if c == 0 {
                    format!("{:<w$}", cell, w = widths[c])
                } else {
                    format!("{:>w$}", cell, w = widths[c])
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = line(header);
    for row in rows {
        out.push('\n');
        out.push_str(&line(row.as_slice()));
    }
    out
}

/// 表の先頭を行番号付きで表示
pub fn format_table(table: &Table, max_rows: usize) -> String {
    if table.is_empty() {
        return format!("(0行) 列: {}", table.headers().join(", "));
    }

    let header: Vec<String> = std::iter::once(String::new())
        .chain(table.headers().iter().cloned())
        .collect();
    let rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .take(max_rows)
        .enumerate()
        .map(|(i, r)| std::iter::once(i.to_string()).chain(r.iter().cloned()).collect())
        .collect();

    render_grid(&header, &rows)
}

pub fn format_info(info: &[ColumnInfo], rows: usize) -> String {
    let header = vec!["Column".to_string(), "Non-Null Count".into(), "Dtype".into()];
    let body: Vec<Vec<String>> = info
        .iter()
        .map(|c| vec![c.name.clone(), format!("{} non-null", c.non_null), c.kind.to_string()])
        .collect();
    format!(
        "RangeIndex: {} entries\nData columns (total {} columns):\n{}",
        rows,
        info.len(),
        render_grid(&header, &body)
    )
}

/// 要約統計（統計量を行、列を列に並べる）
pub fn format_describe(stats: &[(String, Summary)]) -> String {
    if stats.is_empty() {
        return "(数値列がありません)".to_string();
    }

    let header: Vec<String> = std::iter::once(String::new())
        .chain(stats.iter().map(|(name, _)| name.clone()))
        .collect();

    let rows_def: [(&str, fn(&Summary) -> f64); 8] = [
        ("count", |s: &Summary| s.count as f64),
        ("mean", |s: &Summary| s.mean),
        ("std", |s: &Summary| s.std),
        ("min", |s: &Summary| s.min),
        ("25%", |s: &Summary| s.q25),
        ("50%", |s: &Summary| s.median),
        ("75%", |s: &Summary| s.q75),
        ("max", |s: &Summary| s.max),
    ];

    let rows: Vec<Vec<String>> = rows_def
        .iter()
        .map(|(label, get)| {
            std::iter::once(label.to_string())
                .chain(stats.iter().map(|(_, s)| fmt_float(get(s), 2)))
                .collect()
        })
        .collect();

    render_grid(&header, &rows)
}

pub fn format_values(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("'{}'", v)).collect();
    format!("[{}]", quoted.join(", "))
}

pub fn format_group_mean(groups: &[(String, f64)], key: &str, value: &str) -> String {
    let header = vec![key.to_string(), value.to_string()];
    let rows: Vec<Vec<String>> = groups
        .iter()
        .map(|(k, v)| vec![k.clone(), fmt_float(*v, 2)])
        .collect();
    render_grid(&header, &rows)
}

pub fn format_correlation(names: [&str; 2], matrix: &[[f64; 2]; 2]) -> String {
    let header = vec![String::new(), names[0].to_string(), names[1].to_string()];
    let rows: Vec<Vec<String>> = (0..2)
        .map(|i| {
            vec![
                names[i].to_string(),
                fmt_float(matrix[i][0], 6),
                fmt_float(matrix[i][1], 6),
            ]
        })
        .collect();
    render_grid(&header, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_float() {
        assert_eq!(fmt_float(1.23456, 2), "1.23");
        assert_eq!(fmt_float(f64::NAN, 2), "NaN");
    }

    #[test]
    fn test_format_table_head() {
        let table = Table::new(
            vec!["JobTitle".into(), "AverageWage".into()],
            vec![
                vec!["Developer".into(), "5000".into()],
                vec!["QA".into(), "4000".into()],
                vec!["Ops".into(), "3000".into()],
            ],
        );
        let out = format_table(&table, 2);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("JobTitle"));
        assert!(lines[1].starts_with('0'));
        assert!(lines[2].contains("QA"));
        assert!(!out.contains("Ops"));
    }

    #[test]
    fn test_format_correlation_nan() {
        let out = format_correlation(["A", "B"], &[[1.0, f64::NAN], [f64::NAN, f64::NAN]]);
        assert!(out.contains("1.000000"));
        assert!(out.contains("NaN"));
    }

    #[test]
    fn test_format_values() {
        assert_eq!(format_values(&["IT".into(), "Finance".into()]), "['IT', 'Finance']");
    }
}
