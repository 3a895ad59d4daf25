//! Point renderer
//!
//! Every raw move event leaves a small mark, every click a larger one. Marks are
//! blended straight into a viewport-sized RGBA raster, so the layer costs the same
//! no matter how many events it has seen. The raster is wiped by `clear` and
//! re-allocated (blank) by `resize`.

use crate::config::MarkStyle;
use crate::draw::{Color, Point};

/// Pixel region changed since the frontend last synced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl DirtyRect {
    pub fn union(self, other: DirtyRect) -> DirtyRect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = (self.x + self.width).max(other.x + other.width);
        let bottom = (self.y + self.height).max(other.y + other.height);
        DirtyRect {
            x,
            y,
            width: right - x,
            height: bottom - y,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PointLayer {
    width: usize,
    height: usize,
    /// Row-major RGBA, straight alpha
    pixels: Vec<u8>,
    dirty: Option<DirtyRect>,
    marks_drawn: u64,
    move_style: MarkStyle,
    click_style: MarkStyle,
}

impl PointLayer {
    pub fn new(width: usize, height: usize, move_style: MarkStyle, click_style: MarkStyle) -> Self {
        let mut layer = Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
            dirty: None,
            marks_drawn: 0,
            move_style,
            click_style,
        };
        layer.resize(width, height);
        layer
    }

    pub fn on_move(&mut self, pos: Point) {
        self.stamp(pos, self.move_style);
    }

    pub fn on_click(&mut self, pos: Point) {
        self.stamp(pos, self.click_style);
    }

    /// Erase everything, keeping the current size
    pub fn clear(&mut self) {
        self.pixels.fill(0);
        self.marks_drawn = 0;
        self.dirty = self.full_rect();
    }

    /// New blank raster of the given size, like resizing a canvas
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; width * height * 4];
        self.marks_drawn = 0;
        self.dirty = self.full_rect();
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Marks stamped since the last clear or resize
    pub fn marks_drawn(&self) -> u64 {
        self.marks_drawn
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&b| b == 0)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        let p = &self.pixels[idx..idx + 4];
        Some(Color::rgba(p[0], p[1], p[2], p[3]))
    }

    /// Region touched since the previous call
    pub fn take_dirty(&mut self) -> Option<DirtyRect> {
        self.dirty.take()
    }

    /// Copy of the RGBA rows covered by `rect`
    pub fn region_rgba(&self, rect: DirtyRect) -> Vec<u8> {
        let mut out = Vec::with_capacity(rect.width * rect.height * 4);
        for row in rect.y..rect.y + rect.height {
            let start = (row * self.width + rect.x) * 4;
            out.extend_from_slice(&self.pixels[start..start + rect.width * 4]);
        }
        out
    }

    fn full_rect(&self) -> Option<DirtyRect> {
        (self.width > 0 && self.height > 0).then_some(DirtyRect {
            x: 0,
            y: 0,
            width: self.width,
            height: self.height,
        })
    }

    fn stamp(&mut self, center: Point, style: MarkStyle) {
        self.marks_drawn += 1;
        if self.width == 0 || self.height == 0 {
            return;
        }

        // Pixels whose centre lies inside the disc; tiny radii still hit one pixel
        let r = style.radius.max(0.5);
        let x0 = ((center.x - r).floor() as i64).max(0);
        let y0 = ((center.y - r).floor() as i64).max(0);
        let x1 = ((center.x + r).ceil() as i64).min(self.width as i64 - 1);
        let y1 = ((center.y + r).ceil() as i64).min(self.height as i64 - 1);
        if x0 > x1 || y0 > y1 {
            return;
        }

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r * r {
                    self.blend(x as usize, y as usize, style.color);
                }
            }
        }

        let rect = DirtyRect {
            x: x0 as usize,
            y: y0 as usize,
            width: (x1 - x0 + 1) as usize,
            height: (y1 - y0 + 1) as usize,
        };
        self.dirty = Some(self.dirty.map_or(rect, |d| d.union(rect)));
    }

    /// Source-over in straight alpha
    fn blend(&mut self, x: usize, y: usize, src: Color) {
        let idx = (y * self.width + x) * 4;
        let dst = &mut self.pixels[idx..idx + 4];
        let sa = src.a as f32 / 255.0;
        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return;
        }
        for (d, s) in dst[..3].iter_mut().zip([src.r, src.g, src.b]) {
            let v = (s as f32 * sa + *d as f32 * da * (1.0 - sa)) / out_a;
            *d = v.round().clamp(0.0, 255.0) as u8;
        }
        dst[3] = (out_a * 255.0).round() as u8;
    }
}
