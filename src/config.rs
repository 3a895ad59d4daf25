use crate::draw::Color;
use crate::sampler::DEFAULT_ACCEPTANCE_WINDOW_MS;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Look of a single pointer mark
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkStyle {
    pub radius: f32,
    pub color: Color,
}

/// Colours used by the strip chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub grid: Color,
    pub border: Color,
    pub line: Color,
    pub text: Color,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            grid: Color::LIGHT_GRAY,
            border: Color::GRAY,
            line: Color::BLUE,
            text: Color::BLACK,
        }
    }
}

/// Overlay settings, loaded from JSON. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Largest delta (ms) still counted as continuous movement
    pub acceptance_window_ms: f64,
    /// Height of the strip chart along the bottom edge
    pub chart_height: f32,
    /// Vertical distance between grid lines
    pub grid_spacing: f32,
    pub move_mark: MarkStyle,
    pub click_mark: MarkStyle,
    pub chart: ChartStyle,
    /// Initial size of the host window
    pub window_size: [f32; 2],
    /// Where F2 chart snapshots are written
    pub snapshot_dir: PathBuf,
    pub debug_logging: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            acceptance_window_ms: DEFAULT_ACCEPTANCE_WINDOW_MS,
            chart_height: 200.0,
            grid_spacing: 20.0,
            move_mark: MarkStyle {
                radius: 2.0,
                color: Color::rgba(128, 128, 128, 160),
            },
            click_mark: MarkStyle {
                radius: 5.0,
                color: Color::GREEN,
            },
            chart: ChartStyle::default(),
            window_size: [1200.0, 800.0],
            snapshot_dir: PathBuf::from("."),
            debug_logging: false,
        }
    }
}

impl OverlayConfig {
    /// Load settings from `path`; `None` yields the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(content)?;
        Ok(cfg)
    }
}
