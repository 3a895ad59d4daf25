//! Overlay controller
//!
//! Single owner of all overlay state. Host events come in through `on_move`,
//! `on_click`, `on_resize` and `reset`; each handler updates the sampler and
//! refreshes whichever consumers (readout, chart display list) it affects.

use crate::chart::StripChart;
use crate::config::OverlayConfig;
use crate::draw::{DrawCommand, Point};
use crate::layering::LayerAssignments;
use crate::point_layer::{DirtyRect, PointLayer};
use crate::readout::StatusReadout;
use crate::sampler::{MoveOutcome, SamplerSnapshot, TimingSampler};
use crate::surface::{HostSurface, OverlaySurfaces, Viewport};
use tracing::{debug, info};

pub struct Overlay {
    surfaces: OverlaySurfaces,
    sampler: TimingSampler,
    points: PointLayer,
    chart: StripChart,
    chart_commands: Vec<DrawCommand>,
    readout: StatusReadout,
}

impl Overlay {
    pub fn initialize(config: &OverlayConfig, host: &dyn HostSurface) -> Self {
        let surfaces = OverlaySurfaces::initialize(host, config.chart_height);
        let capacity = surfaces.chart_area().sample_capacity();
        let [width, height] = raster_size(surfaces.viewport());
        let mut overlay = Self {
            sampler: TimingSampler::new(capacity, config.acceptance_window_ms),
            points: PointLayer::new(width, height, config.move_mark, config.click_mark),
            chart: StripChart::new(config.grid_spacing, config.chart),
            chart_commands: Vec::new(),
            readout: StatusReadout::default(),
            surfaces,
        };
        overlay.redraw_chart();
        info!(
            width = overlay.viewport().width,
            height = overlay.viewport().height,
            baseline = overlay.layers().baseline(),
            capacity,
            "overlay initialised"
        );
        overlay
    }

    /// Pointer moved. Every event leaves a mark; only accepted deltas touch the chart.
    pub fn on_move(&mut self, timestamp_ms: f64, pos: Point) -> MoveOutcome {
        self.points.on_move(pos);
        let outcome = self.sampler.on_move(timestamp_ms, pos);
        self.readout.update(&self.sampler.snapshot());
        if outcome.is_accepted() {
            self.redraw_chart();
        }
        outcome
    }

    pub fn on_click(&mut self, pos: Point) {
        self.points.on_click(pos);
    }

    /// Follow a new host viewport. Point marks are lost; timing history is kept
    /// but re-bounded to the new chart width.
    pub fn on_resize(&mut self, viewport: Viewport) {
        if !self.surfaces.resize(viewport) {
            return;
        }
        let [width, height] = raster_size(viewport);
        self.points.resize(width, height);
        let capacity = self.surfaces.chart_area().sample_capacity();
        self.sampler.set_capacity(capacity);
        self.readout.update(&self.sampler.snapshot());
        self.redraw_chart();
        debug!(width = viewport.width, height = viewport.height, capacity, "overlay resized");
    }

    /// Clear control: empty buffer, fresh sampler, blank surfaces, zero readout
    pub fn reset(&mut self) {
        debug!(discarded_elapsed_ms = self.sampler.elapsed_ms(), discarded_samples = self.sampler.count(), "overlay reset");
        self.sampler.reset();
        self.points.clear();
        self.readout.reset();
        self.redraw_chart();
    }

    pub fn viewport(&self) -> Viewport {
        self.surfaces.viewport()
    }

    pub fn layers(&self) -> LayerAssignments {
        self.surfaces.layers()
    }

    pub fn surfaces(&self) -> &OverlaySurfaces {
        &self.surfaces
    }

    pub fn sampler(&self) -> &TimingSampler {
        &self.sampler
    }

    pub fn snapshot(&self) -> SamplerSnapshot {
        self.sampler.snapshot()
    }

    pub fn readout(&self) -> &str {
        self.readout.text()
    }

    pub fn point_layer(&self) -> &PointLayer {
        &self.points
    }

    /// Point raster region changed since the last call, for texture upload
    pub fn take_point_damage(&mut self) -> Option<DirtyRect> {
        self.points.take_dirty()
    }

    /// Chart display list in chart-local coordinates
    pub fn chart_commands(&self) -> &[DrawCommand] {
        &self.chart_commands
    }

    fn redraw_chart(&mut self) {
        self.chart_commands = self.chart.redraw(self.sampler.samples(), self.surfaces.chart_area());
    }
}

fn raster_size(viewport: Viewport) -> [usize; 2] {
    [viewport.width.round() as usize, viewport.height.round() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestHost(Viewport);

    impl HostSurface for TestHost {
        fn viewport(&self) -> Viewport {
            self.0
        }

        fn declared_z_orders(&self) -> Vec<Option<i32>> {
            vec![Some(1)]
        }
    }

    fn overlay(width: f32) -> Overlay {
        Overlay::initialize(&OverlayConfig::default(), &TestHost(Viewport::new(width, 600.0)))
    }

    #[test]
    fn test_initial_state() {
        let overlay = overlay(800.0);
        assert_eq!(overlay.sampler().capacity(), 800);
        assert_eq!(overlay.layers().baseline(), 2);
        assert_eq!(overlay.readout(), "Average Frequency: 0.00 Hz, count:0, x:0, y:0");
        // Frame only
        assert_eq!(overlay.chart_commands().len(), 2);
    }

    #[test]
    fn test_move_updates_readout_and_chart() {
        let mut overlay = overlay(800.0);
        overlay.on_move(0.0, Point::new(10.0, 10.0));
        overlay.on_move(20.0, Point::new(12.0, 11.0));

        assert_eq!(overlay.readout(), "Average Frequency: 50.00 Hz, count:1, x:12, y:11");
        assert!(overlay.chart_commands().iter().any(|c| matches!(c, DrawCommand::Polyline { .. })));
        assert_eq!(overlay.point_layer().marks_drawn(), 2);
    }

    #[test]
    fn test_rejected_move_still_marks_and_moves_position() {
        let mut overlay = overlay(800.0);
        overlay.on_move(0.0, Point::new(1.0, 1.0));
        let outcome = overlay.on_move(150.0, Point::new(30.0, 40.0));

        assert!(!outcome.is_accepted());
        assert_eq!(overlay.readout(), "Average Frequency: 0.00 Hz, count:0, x:30, y:40");
        assert_eq!(overlay.point_layer().marks_drawn(), 2);
        assert_eq!(overlay.chart_commands().len(), 2);
    }

    #[test]
    fn test_click_marks_without_sampling() {
        let mut overlay = overlay(800.0);
        overlay.on_click(Point::new(5.0, 5.0));
        assert_eq!(overlay.point_layer().marks_drawn(), 1);
        assert_eq!(overlay.sampler().last_timestamp_ms(), None);
    }

    #[test]
    fn test_resize_clears_points_keeps_history() {
        let mut overlay = overlay(800.0);
        for (i, t) in [0.0, 10.0, 20.0, 30.0, 40.0].into_iter().enumerate() {
            overlay.on_move(t, Point::new(i as f32, 0.0));
        }
        assert_eq!(overlay.sampler().count(), 4);

        overlay.on_resize(Viewport::new(2.0, 600.0));
        assert!(overlay.point_layer().is_blank());
        assert_eq!(overlay.point_layer().size(), [2, 600]);
        assert_eq!(overlay.sampler().capacity(), 2);
        assert_eq!(overlay.sampler().samples(), &[10.0, 10.0]);
        assert!(overlay.readout().contains("count:2"));
    }

    #[test]
    fn test_resize_to_same_viewport_keeps_points() {
        let mut overlay = overlay(800.0);
        overlay.on_move(0.0, Point::new(1.0, 1.0));
        overlay.on_resize(Viewport::new(800.0, 600.0));
        assert_eq!(overlay.point_layer().marks_drawn(), 1);
    }

    #[test]
    fn test_reset_twice_equals_once() {
        let mut overlay = overlay(800.0);
        overlay.on_move(0.0, Point::new(1.0, 1.0));
        overlay.on_move(16.0, Point::new(2.0, 2.0));
        overlay.on_click(Point::new(2.0, 2.0));

        overlay.reset();
        let readout_once = overlay.readout().to_string();
        let chart_once = overlay.chart_commands().to_vec();
        overlay.reset();

        assert_eq!(overlay.readout(), readout_once);
        assert_eq!(overlay.chart_commands(), chart_once.as_slice());
        assert_eq!(readout_once, "Average Frequency: 0.00 Hz, count:0, x:0, y:0");
        assert!(overlay.point_layer().is_blank());
        assert_eq!(overlay.sampler().count(), 0);
    }
}
