//! Strip-chart renderer
//!
//! Redraws the whole sample series on every change. The chart auto-scales to the
//! largest sample, advances one pixel per sample, and is a pure function of the
//! samples and the chart area: the same input always yields the same display list.

use crate::config::ChartStyle;
use crate::draw::{DrawCommand, Point};

/// Pixel extent of the chart surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChartArea {
    pub width: f32,
    pub height: f32,
}

impl ChartArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Number of samples that fit, one per horizontal pixel
    pub fn sample_capacity(&self) -> usize {
        self.width.floor() as usize
    }
}

#[derive(Debug, Clone)]
pub struct StripChart {
    grid_spacing: f32,
    style: ChartStyle,
}

impl StripChart {
    pub fn new(grid_spacing: f32, style: ChartStyle) -> Self {
        Self { grid_spacing, style }
    }

    /// Build the display list for `samples` in `area`
    ///
    /// Drawing order: grid with value labels, top and bottom borders, data line,
    /// then the corner labels. An empty series only gets the borders.
    pub fn redraw(&self, samples: &[f64], area: ChartArea) -> Vec<DrawCommand> {
        let (w, h) = (area.width, area.height);
        let mut out = Vec::new();

        let Some(max_value) = samples.iter().copied().reduce(f64::max) else {
            self.push_borders(&mut out, w, h);
            return out;
        };
        let scale = if max_value > 0.0 { h as f64 / max_value } else { 0.0 };

        self.push_grid(&mut out, w, h, max_value);
        self.push_borders(&mut out, w, h);

        let points = samples.iter().enumerate().map(|(i, &s)| Point::new(i as f32, (h as f64 - s * scale) as f32)).collect();
        out.push(DrawCommand::Polyline { points, color: self.style.line });

        out.push(self.text(2.0, h - 2.0, "0 ms".to_string()));
        out.push(self.text(w - 70.0, h - 2.0, format!("{} samples", samples.len())));
        out.push(self.text(2.0, 10.0, format!("{:.2} ms", max_value)));
        out
    }

    fn push_grid(&self, out: &mut Vec<DrawCommand>, w: f32, h: f32, max_value: f64) {
        if !(self.grid_spacing > 0.0 && self.grid_spacing.is_finite()) {
            return;
        }
        for step in 0.. {
            let y = step as f32 * self.grid_spacing;
            if y > h {
                break;
            }
            out.push(DrawCommand::Line {
                from: Point::new(0.0, y),
                to: Point::new(w, y),
                color: self.style.grid,
            });
            let value = max_value * (h - y) as f64 / h as f64;
            if value.is_finite() {
                out.push(self.text(w - 50.0, y + 12.0, format!("{:.2} ms", value)));
            }
        }
    }

    fn push_borders(&self, out: &mut Vec<DrawCommand>, w: f32, h: f32) {
        out.push(DrawCommand::Line {
            from: Point::new(0.0, 0.0),
            to: Point::new(w, 0.0),
            color: self.style.border,
        });
        out.push(DrawCommand::Line {
            from: Point::new(0.0, h),
            to: Point::new(w, h),
            color: self.style.border,
        });
    }

    fn text(&self, x: f32, y: f32, text: String) -> DrawCommand {
        DrawCommand::Text {
            pos: Point::new(x, y),
            text,
            color: self.style.text,
        }
    }
}
