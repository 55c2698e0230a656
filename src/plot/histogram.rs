//! ヒストグラム

use super::{Canvas, AXIS, PRIMARY};
use crate::error::Result;
use career_path_common::stats::Histogram;
use std::path::Path;

pub fn draw_histogram(hist: &Histogram, width: u32, height: u32) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    canvas.draw_axes();

    let (Some(&lo), Some(&hi)) = (hist.edges.first(), hist.edges.last()) else {
        return canvas;
    };
    let max_count = hist.counts.iter().copied().max().unwrap_or(0) as f64;
    let xs = canvas.x_scale(lo, hi);
    let ys = canvas.y_scale(0.0, max_count.max(1.0) * 1.05);

    for (i, &count) in hist.counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let x0 = xs.map(hist.edges[i]);
        let x1 = xs.map(hist.edges[i + 1]);
        let y = ys.map(count as f64);
        let base = ys.map(0.0);
        canvas.fill_rect(x0, y, x1, base, PRIMARY);
        canvas.stroke_rect(x0, y, x1, base, AXIS);
    }

    canvas
}

/// ヒストグラムをPNG出力
pub fn render_histogram(hist: &Histogram, path: &Path) -> Result<()> {
    tracing::debug!(bins = hist.counts.len(), path = %path.display(), "ヒストグラム描画");
    draw_histogram(hist, 1000, 600).save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::BACKGROUND;

    #[test]
    fn test_tallest_bar_is_filled() {
        let hist = Histogram {
            edges: vec![0.0, 1.0, 2.0],
            counts: vec![1, 4],
        };
        let canvas = draw_histogram(&hist, 400, 300);
        let (left, top, right, bottom) = canvas.plot_area();
        // 2本目の棒の中央付近
        let x = (left + (right - left) * 0.75) as u32;
        let y = (bottom - (bottom - top) * 0.5) as u32;
        assert_eq!(canvas.pixel(x, y), PRIMARY);

        // 1本目の棒の上方は塗られない
        let x = (left + (right - left) * 0.25) as u32;
        let y = (top + 5.0) as u32;
        assert_ne!(canvas.pixel(x, y), PRIMARY);
        assert_eq!(canvas.pixel(0, 0), BACKGROUND);
    }
}
