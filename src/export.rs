//! PNG snapshots of a display list
//!
//! Replays draw commands onto an in-memory bitmap with plotters and encodes the
//! result with `image`.

use crate::draw::{Color, DrawCommand, Point};
use anyhow::{Result, anyhow};
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_bitmap::BitMapBackend;
use std::path::Path;

fn rgba(c: Color) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.a as f64 / 255.0)
}

fn coord(p: Point) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

/// Rasterise `commands` onto a white `width` x `height` image and save it as PNG
pub fn export_png(commands: &[DrawCommand], width: u32, height: u32, path: &Path) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(anyhow!("cannot export an empty {}x{} surface", width, height));
    }
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| anyhow!("failed to clear bitmap: {}", e))?;
        for cmd in commands {
            draw_command(&root, cmd)?;
        }
        root.present().map_err(|e| anyhow!("failed to finish bitmap: {}", e))?;
    }

    let image = image::RgbImage::from_raw(width, height, buffer).ok_or_else(|| anyhow!("bitmap buffer has the wrong size"))?;
    image.save(path).map_err(|e| anyhow!("failed to write {}: {}", path.display(), e))?;
    Ok(())
}

fn draw_command(root: &DrawingArea<BitMapBackend<'_>, Shift>, cmd: &DrawCommand) -> Result<()> {
    let drawn = match cmd {
        DrawCommand::Line { from, to, color } => root.draw(&PathElement::new(vec![coord(*from), coord(*to)], &rgba(*color))),
        DrawCommand::Polyline { points, color } => root.draw(&PathElement::new(points.iter().copied().map(coord).collect::<Vec<_>>(), &rgba(*color))),
        DrawCommand::Text { pos, text, color } => {
            let style = ("sans-serif", 12).into_font().color(&rgba(*color)).pos(Pos::new(HPos::Left, VPos::Bottom));
            root.draw(&Text::new(text.clone(), coord(*pos), style))
        }
    };
    drawn.map_err(|e| anyhow!("failed to draw {:?}: {}", cmd, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_frame_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        let commands = vec![
            DrawCommand::Line {
                from: Point::new(0.0, 0.0),
                to: Point::new(63.0, 0.0),
                color: Color::GRAY,
            },
            DrawCommand::Polyline {
                points: vec![Point::new(0.0, 20.0), Point::new(1.0, 5.0), Point::new(2.0, 30.0)],
                color: Color::BLUE,
            },
            DrawCommand::Line {
                from: Point::new(20.0, 16.0),
                to: Point::new(40.0, 16.0),
                color: Color::GREEN,
            },
        ];

        export_png(&commands, 64, 32, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (64, 32));
        assert_eq!(img.get_pixel(30, 16).0, [0, 128, 0]);
        assert_eq!(img.get_pixel(50, 20).0, [255, 255, 255]);
    }

    #[test]
    fn test_export_empty_surface_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(export_png(&[], 0, 10, &dir.path().join("x.png")).is_err());
    }
}
