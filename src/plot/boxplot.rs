//! カテゴリ別の箱ひげ図

use super::{Canvas, ACCENT, AXIS, PRIMARY};
use crate::error::Result;
use career_path_common::stats::BoxStats;
use std::path::Path;

pub fn draw_boxplot(groups: &[(String, BoxStats)], width: u32, height: u32) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    canvas.draw_axes();

    if groups.is_empty() {
        return canvas;
    }

    let lo = groups
        .iter()
        .flat_map(|(_, b)| b.outliers.iter().copied().chain(std::iter::once(b.lower_whisker)))
        .fold(f64::INFINITY, f64::min);
    let hi = groups
        .iter()
        .flat_map(|(_, b)| b.outliers.iter().copied().chain(std::iter::once(b.upper_whisker)))
        .fold(f64::NEG_INFINITY, f64::max);

    let (left, top, right, bottom) = canvas.plot_area();
    let ys = super::Scale::padded(lo, hi, bottom, top);
    let slot = (right - left) / groups.len() as f64;
    let half = slot * 0.3;

    for (i, (_, b)) in groups.iter().enumerate() {
        let cx = left + slot * (i as f64 + 0.5);

        // ひげ
        canvas.line(cx, ys.map(b.lower_whisker), cx, ys.map(b.q1), AXIS);
        canvas.line(cx, ys.map(b.q3), cx, ys.map(b.upper_whisker), AXIS);
        canvas.line(cx - half / 2.0, ys.map(b.lower_whisker), cx + half / 2.0, ys.map(b.lower_whisker), AXIS);
        canvas.line(cx - half / 2.0, ys.map(b.upper_whisker), cx + half / 2.0, ys.map(b.upper_whisker), AXIS);

        // 箱と中央値
        canvas.fill_rect(cx - half, ys.map(b.q3), cx + half, ys.map(b.q1), PRIMARY);
        canvas.stroke_rect(cx - half, ys.map(b.q3), cx + half, ys.map(b.q1), AXIS);
        canvas.line(cx - half, ys.map(b.median), cx + half, ys.map(b.median), ACCENT);

        for &v in &b.outliers {
            canvas.fill_circle(cx, ys.map(v), 3.0, AXIS);
        }
    }

    canvas
}

/// 箱ひげ図をPNG出力
pub fn render_boxplot(groups: &[(String, BoxStats)], path: &Path) -> Result<()> {
    tracing::debug!(groups = groups.len(), path = %path.display(), "箱ひげ図描画");
    draw_boxplot(groups, 1200, 800).save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_body_is_filled() {
        let stats = BoxStats {
            q1: 2.0,
            median: 3.0,
            q3: 8.0,
            lower_whisker: 0.0,
            upper_whisker: 10.0,
            outliers: vec![],
        };
        let canvas = draw_boxplot(&[("IT".to_string(), stats)], 400, 300);
        let (left, top, right, bottom) = canvas.plot_area();
        let cx = ((left + right) / 2.0) as u32;
        let ys = crate::plot::Scale::padded(0.0, 10.0, bottom, top);
        // 中央値と Q3 の間は箱の塗り
        let y = ys.map(6.0).round() as u32;
        assert_eq!(canvas.pixel(cx + 5, y), PRIMARY);
    }
}
