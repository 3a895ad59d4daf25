//! Display list emitted by the strip-chart renderer
//!
//! Renderers never touch a drawing backend directly. They emit a list of
//! [`DrawCommand`]s in the local coordinates of the surface they target, and a
//! frontend (the egui overlay or the PNG exporter) replays that list.

use serde::{Deserialize, Serialize};

/// RGBA colour, straight (non-premultiplied) alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GREEN: Color = Color::rgb(0, 128, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

/// A point in surface-local pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// One drawing primitive
///
/// `Text` is anchored at its bottom-left corner, like a canvas `fillText` call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line { from: Point, to: Point, color: Color },
    Polyline { points: Vec<Point>, color: Color },
    Text { pos: Point, text: String, color: Color },
}

impl DrawCommand {
    /// Shift the command by `(dx, dy)`, used to place a surface on screen
    pub fn translated(&self, dx: f32, dy: f32) -> DrawCommand {
        match self {
            DrawCommand::Line { from, to, color } => DrawCommand::Line {
                from: from.offset(dx, dy),
                to: to.offset(dx, dy),
                color: *color,
            },
            DrawCommand::Polyline { points, color } => DrawCommand::Polyline {
                points: points.iter().map(|p| p.offset(dx, dy)).collect(),
                color: *color,
            },
            DrawCommand::Text { pos, text, color } => DrawCommand::Text {
                pos: pos.offset(dx, dy),
                text: text.clone(),
                color: *color,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_constructors() {
        assert_eq!(Color::rgb(1, 2, 3), Color { r: 1, g: 2, b: 3, a: 255 });
        assert!(Color::BLUE.is_opaque());
        assert!(!Color::rgba(0, 0, 0, 10).is_opaque());
    }

    #[test]
    fn test_translated_moves_every_point() {
        let cmd = DrawCommand::Polyline {
            points: vec![Point::new(0.0, 0.0), Point::new(1.0, 5.0)],
            color: Color::BLUE,
        };
        let moved = cmd.translated(10.0, 100.0);
        assert_eq!(
            moved,
            DrawCommand::Polyline {
                points: vec![Point::new(10.0, 100.0), Point::new(11.0, 105.0)],
                color: Color::BLUE,
            }
        );
    }

    #[test]
    fn test_translated_text_keeps_content() {
        let cmd = DrawCommand::Text {
            pos: Point::new(2.0, 198.0),
            text: "0 ms".to_string(),
            color: Color::BLACK,
        };
        match cmd.translated(0.0, 600.0) {
            DrawCommand::Text { pos, text, .. } => {
                assert_eq!(pos, Point::new(2.0, 798.0));
                assert_eq!(text, "0 ms");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
