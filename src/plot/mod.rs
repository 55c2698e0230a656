//! グラフ描画（PNG）
//!
//! `image` の RgbImage に直接ラスタライズする。文字は描かないため、
//! 軸ラベルやタイトルはファイル名とコンソール出力で補う。

pub mod histogram;
pub mod boxplot;
pub mod scatter;

pub use boxplot::render_boxplot;
pub use histogram::render_histogram;
pub use scatter::render_scatter;

use crate::error::{CareerPathError, Result};
use image::{Rgb, RgbImage};
use std::path::Path;

pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub const AXIS: Rgb<u8> = Rgb([40, 40, 40]);
pub const GRID: Rgb<u8> = Rgb([225, 225, 225]);
pub const PRIMARY: Rgb<u8> = Rgb([76, 114, 176]);
pub const ACCENT: Rgb<u8> = Rgb([221, 132, 82]);

/// 描画領域の余白(px)
const MARGIN: u32 = 60;
/// 目盛りの数
const TICKS: u32 = 5;

/// ピクセル座標に丸める（非有限値は `None`、遠すぎる値は画像の近くに寄せる）
fn to_pixel(value: f64, extent: u32) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let bound = extent as f64 * 4.0;
    Some(value.clamp(-bound, bound).round() as i64)
}

/// 1次元の線形スケール（データ値 → ピクセル）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub min: f64,
    pub max: f64,
    pub start: f64,
    pub end: f64,
}

impl Scale {
    /// 範囲が潰れている場合は前後に広げる
    pub fn new(min: f64, max: f64, start: f64, end: f64) -> Self {
        let (min, max) = if !min.is_finite() || !max.is_finite() {
            (0.0, 1.0)
        } else if min == max {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };
        Self { min, max, start, end }
    }

    /// 値域に5%の余白を入れる
    pub fn padded(min: f64, max: f64, start: f64, end: f64) -> Self {
        let raw = Self::new(min, max, start, end);
        let pad = (raw.max - raw.min) * 0.05;
        Self::new(raw.min - pad, raw.max + pad, start, end)
    }

    pub fn map(&self, value: f64) -> f64 {
        let t = (value - self.min) / (self.max - self.min);
        self.start + t * (self.end - self.start)
    }
}

/// 描画キャンバス
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, BACKGROUND),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// プロット領域 (left, top, right, bottom)
    pub fn plot_area(&self) -> (f64, f64, f64, f64) {
        let m = MARGIN as f64;
        (m, m, self.width() as f64 - m, self.height() as f64 - m)
    }

    /// X軸スケール
    pub fn x_scale(&self, min: f64, max: f64) -> Scale {
        let (left, _, right, _) = self.plot_area();
        Scale::new(min, max, left, right)
    }

    /// Y軸スケール（上下反転）
    pub fn y_scale(&self, min: f64, max: f64) -> Scale {
        let (_, top, _, bottom) = self.plot_area();
        Scale::new(min, max, bottom, top)
    }

    pub fn put(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height() {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    /// 塗りつぶし矩形（座標は順不同）
    pub fn fill_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb<u8>) {
        let (w, h) = (self.width(), self.height());
        let (Some(x0), Some(y0), Some(x1), Some(y1)) =
            (to_pixel(x0, w), to_pixel(y0, h), to_pixel(x1, w), to_pixel(y1, h))
        else {
            return;
        };
        let (xa, xb) = (x0.min(x1).max(0), x0.max(x1).min(w as i64 - 1));
        let (ya, yb) = (y0.min(y1).max(0), y0.max(y1).min(h as i64 - 1));
        for y in ya..=yb {
            for x in xa..=xb {
                self.put(x, y, color);
            }
        }
    }

    /// 枠線のみの矩形
    pub fn stroke_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb<u8>) {
        self.line(x0, y0, x1, y0, color);
        self.line(x1, y0, x1, y1, color);
        self.line(x1, y1, x0, y1, color);
        self.line(x0, y1, x0, y0, color);
    }

    /// Bresenham の直線
    pub fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb<u8>) {
        let (w, h) = (self.width(), self.height());
        let (Some(mut x), Some(mut y), Some(xe), Some(ye)) =
            (to_pixel(x0, w), to_pixel(y0, h), to_pixel(x1, w), to_pixel(y1, h))
        else {
            return;
        };
        let dx = (xe - x).abs();
        let dy = -(ye - y).abs();
        let sx = if x < xe { 1 } else { -1 };
        let sy = if y < ye { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put(x, y, color);
            if x == xe && y == ye {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// 塗りつぶし円
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb<u8>) {
        let (Some(cxi), Some(cyi)) = (to_pixel(cx, self.width()), to_pixel(cy, self.height()))
        else {
            return;
        };
        if !radius.is_finite() || radius < 0.0 {
            return;
        }
        let r = radius.ceil() as i64;
        for dy in -r..=r {
            for dx in -r..=r {
                if ((dx * dx + dy * dy) as f64) <= radius * radius {
                    self.put(cxi + dx, cyi + dy, color);
                }
            }
        }
    }

    /// 軸・目盛り・補助線
    pub fn draw_axes(&mut self) {
        let (left, top, right, bottom) = self.plot_area();

        for i in 0..=TICKS {
            let t = i as f64 / TICKS as f64;
            let y = bottom + (top - bottom) * t;
            let x = left + (right - left) * t;
            if i > 0 {
                self.line(left, y, right, y, GRID);
            }
            self.line(left - 5.0, y, left, y, AXIS);
            self.line(x, bottom, x, bottom + 5.0, AXIS);
        }

        self.line(left, bottom, right, bottom, AXIS);
        self.line(left, top, left, bottom, AXIS);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.image.get_pixel(x, y)
    }

    /// PNGとして保存
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| CareerPathError::PlotRendering(format!("{}: {}", path.display(), e)))
    }
}
