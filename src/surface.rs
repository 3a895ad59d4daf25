//! Overlay surface manager
//!
//! Owns the geometry of the two drawable surfaces: the point layer covering the
//! whole viewport and the chart layer along its bottom edge. Both follow the host
//! viewport on resize.

use crate::chart::ChartArea;
use crate::draw::Point;
use crate::layering::{LayerAssignments, compute_baseline};

/// Visible area of the host, in host pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// The surface the overlay is layered on
///
/// Implementations report the current viewport and the z-order each existing
/// element declares (`None` when it declares none).
pub trait HostSurface {
    fn viewport(&self) -> Viewport;
    fn declared_z_orders(&self) -> Vec<Option<i32>>;
}

#[derive(Debug, Clone)]
pub struct OverlaySurfaces {
    viewport: Viewport,
    chart_height: f32,
    layers: LayerAssignments,
}

impl OverlaySurfaces {
    /// Size both surfaces to the host viewport and stack them above its content
    pub fn initialize(host: &dyn HostSurface, chart_height: f32) -> Self {
        let baseline = compute_baseline(host.declared_z_orders());
        Self {
            viewport: host.viewport(),
            chart_height: chart_height.max(0.0),
            layers: LayerAssignments::from_baseline(baseline),
        }
    }

    /// Adopt a new viewport; returns false when nothing changed
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;
        true
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn layers(&self) -> LayerAssignments {
        self.layers
    }

    /// The chart spans the full width; its height is capped by the viewport
    pub fn chart_area(&self) -> ChartArea {
        ChartArea::new(self.viewport.width, self.chart_height.min(self.viewport.height))
    }

    /// Top-left corner of the chart surface in host coordinates
    pub fn chart_origin(&self) -> Point {
        Point::new(0.0, self.viewport.height - self.chart_area().height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedHost {
        viewport: Viewport,
        z: Vec<Option<i32>>,
    }

    impl HostSurface for FixedHost {
        fn viewport(&self) -> Viewport {
            self.viewport
        }

        fn declared_z_orders(&self) -> Vec<Option<i32>> {
            self.z.clone()
        }
    }

    #[test]
    fn test_initialize_layers_above_host() {
        let host = FixedHost {
            viewport: Viewport::new(800.0, 600.0),
            z: vec![None, Some(5), Some(2)],
        };
        let surfaces = OverlaySurfaces::initialize(&host, 200.0);
        assert_eq!(surfaces.layers().point_layer, 6);
        assert_eq!(surfaces.layers().chart_layer, 9);
        assert_eq!(surfaces.viewport(), Viewport::new(800.0, 600.0));
    }

    #[test]
    fn test_chart_geometry() {
        let host = FixedHost {
            viewport: Viewport::new(800.0, 600.0),
            z: Vec::new(),
        };
        let mut surfaces = OverlaySurfaces::initialize(&host, 200.0);
        assert_eq!(surfaces.chart_area(), ChartArea::new(800.0, 200.0));
        assert_eq!(surfaces.chart_origin(), Point::new(0.0, 400.0));

        // Short viewport: chart shrinks to fit
        assert!(surfaces.resize(Viewport::new(300.0, 120.0)));
        assert_eq!(surfaces.chart_area(), ChartArea::new(300.0, 120.0));
        assert_eq!(surfaces.chart_origin(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_resize_same_viewport_is_noop() {
        let host = FixedHost {
            viewport: Viewport::new(10.0, 10.0),
            z: Vec::new(),
        };
        let mut surfaces = OverlaySurfaces::initialize(&host, 5.0);
        assert!(!surfaces.resize(Viewport::new(10.0, 10.0)));
    }

    #[test]
    fn test_zero_area_viewport() {
        let vp = Viewport::new(0.0, -4.0);
        assert!(vp.is_empty());
        assert_eq!(vp.height, 0.0);
    }
}
