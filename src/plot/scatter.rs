//! 散布図

use super::{Canvas, PRIMARY};
use crate::error::Result;
use std::path::Path;

const POINT_RADIUS: f64 = 3.0;

pub fn draw_scatter(points: &[(f64, f64)], width: u32, height: u32) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    canvas.draw_axes();

    if points.is_empty() {
        return canvas;
    }

    let (min_x, max_x) = bounds(points.iter().map(|p| p.0));
    let (min_y, max_y) = bounds(points.iter().map(|p| p.1));
    let (left, top, right, bottom) = canvas.plot_area();
    let xs = super::Scale::padded(min_x, max_x, left, right);
    let ys = super::Scale::padded(min_y, max_y, bottom, top);

    for &(x, y) in points {
        canvas.fill_circle(xs.map(x), ys.map(y), POINT_RADIUS, PRIMARY);
    }

    canvas
}

fn bounds<I: Iterator<Item = f64>>(values: I) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

/// 散布図をPNG出力
pub fn render_scatter(points: &[(f64, f64)], path: &Path) -> Result<()> {
    tracing::debug!(points = points.len(), path = %path.display(), "散布図描画");
    draw_scatter(points, 800, 600).save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(bounds([3.0, -1.0, 2.0].into_iter()), (-1.0, 3.0));
    }

    #[test]
    fn test_point_is_drawn() {
        let canvas = draw_scatter(&[(0.0, 0.0), (10.0, 10.0)], 400, 300);
        let (left, top, right, bottom) = canvas.plot_area();
        let xs = crate::plot::Scale::padded(0.0, 10.0, left, right);
        let ys = crate::plot::Scale::padded(0.0, 10.0, bottom, top);
        let (x, y) = (xs.map(10.0).round() as u32, ys.map(10.0).round() as u32);
        assert_eq!(canvas.pixel(x, y), PRIMARY);
    }
}
