//! 記述統計
//!
//! 未定義の値（空データの平均、分散ゼロの相関など）は `f64::NAN` で返す。

use std::collections::BTreeMap;

/// 要約統計量
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// ヒストグラム（等幅ビン）
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// ビン境界（`counts.len() + 1` 個）
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

/// 箱ひげ図の統計量
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// 下限（Q1 - 1.5IQR 以上の最小値）
    pub lower_whisker: f64,
    /// 上限（Q3 + 1.5IQR 以下の最大値）
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

/// 欠損を除いた値
pub fn present(values: &[Option<f64>]) -> Vec<f64> {
    values.iter().filter_map(|v| *v).collect()
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// 標本標準偏差（n-1）
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}

/// 分位点（ソート済み入力、最近接順位間の線形補間）
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

pub fn summarize(values: &[Option<f64>]) -> Summary {
    let data = present(values);
    let sorted = sorted_copy(&data);

    Summary {
        count: data.len(),
        mean: mean(&data),
        std: std_dev(&data),
        min: sorted.first().copied().unwrap_or(f64::NAN),
        q25: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        q75: quantile_sorted(&sorted, 0.75),
        max: sorted.last().copied().unwrap_or(f64::NAN),
    }
}

/// ピアソン相関係数（両方が存在する行のみ使用）
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();

    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mx = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let my = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let mut cov = 0.0_f64;
    let mut vx = 0.0_f64;
    let mut vy = 0.0_f64;
    for (x, y) in &pairs {
        cov += (x - mx) * (y - my);
        vx += (x - mx).powi(2);
        vy += (y - my).powi(2);
    }

    if vx == 0.0 || vy == 0.0 {
        return f64::NAN;
    }
    (cov / (vx.sqrt() * vy.sqrt())).clamp(-1.0, 1.0)
}

/// 2変数の相関行列
pub fn correlation_matrix(a: &[Option<f64>], b: &[Option<f64>]) -> [[f64; 2]; 2] {
    let ab = pearson(a, b);
    [[pearson(a, a), ab], [ab, pearson(b, b)]]
}

/// カテゴリ別平均（キー昇順、欠損値は除外）
pub fn group_mean(keys: &[&str], values: &[Option<f64>]) -> Vec<(String, f64)> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for (key, value) in keys.iter().zip(values) {
        let entry = groups.entry(*key).or_insert((0.0, 0));
        if let Some(v) = value {
            entry.0 += v;
            entry.1 += 1;
        }
    }

    groups
        .into_iter()
        .map(|(k, (sum, n))| {
            let m = if n == 0 { f64::NAN } else { sum / n as f64 };
            (k.to_string(), m)
        })
        .collect()
}

/// 等幅ビンのヒストグラム
///
/// 全値が同一の場合は値の前後0.5の範囲を使う。最終ビンは右端を含む。
pub fn histogram(values: &[Option<f64>], bins: usize) -> Histogram {
    let bins = bins.max(1);
    let data = present(values);

    let (lo, hi) = match data.iter().copied().fold(None, |acc: Option<(f64, f64)>, v| match acc {
        None => Some((v, v)),
        Some((a, b)) => Some((a.min(v), b.max(v))),
    }) {
        None => (0.0, 1.0),
        Some((a, b)) if a == b => (a - 0.5, b + 0.5),
        Some(range) => range,
    };

    let width = (hi - lo) / bins as f64;
    let edges = (0..=bins).map(|i| lo + width * i as f64).collect();
    let mut counts = vec![0usize; bins];

    for v in data {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Histogram { edges, counts }
}

/// 箱ひげ図の統計量（データが無ければ `None`）
pub fn box_stats(values: &[Option<f64>]) -> Option<BoxStats> {
    let data = present(values);
    if data.is_empty() {
        return None;
    }
    let sorted = sorted_copy(&data);

    let q1 = quantile_sorted(&sorted, 0.25);
    let median = quantile_sorted(&sorted, 0.5);
    let q3 = quantile_sorted(&sorted, 0.75);
    let iqr = q3 - q1;
    let lo_fence = q1 - 1.5 * iqr;
    let hi_fence = q3 + 1.5 * iqr;

    let inside: Vec<f64> = sorted
        .iter()
        .copied()
        .filter(|v| *v >= lo_fence && *v <= hi_fence)
        .collect();
    let outliers = sorted
        .iter()
        .copied()
        .filter(|v| *v < lo_fence || *v > hi_fence)
        .collect();

    Some(BoxStats {
        q1,
        median,
        q3,
        lower_whisker: inside.first().copied().unwrap_or(q1),
        upper_whisker: inside.last().copied().unwrap_or(q3),
        outliers,
    })
}
