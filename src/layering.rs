//! Z-order baseline for the overlay surfaces
//!
//! The overlay must sit above everything already on the host. The baseline is
//! computed once from the host's declared z-orders and the four overlay surfaces
//! take consecutive slots above it.

/// Z-order slots assigned to the overlay surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerAssignments {
    pub point_layer: i32,
    pub reset_control: i32,
    pub readout: i32,
    pub chart_layer: i32,
}

impl LayerAssignments {
    /// Assign consecutive slots starting at `baseline`
    pub fn from_baseline(baseline: i32) -> Self {
        Self {
            point_layer: baseline,
            reset_control: baseline.saturating_add(1),
            readout: baseline.saturating_add(2),
            chart_layer: baseline.saturating_add(3),
        }
    }

    pub fn baseline(&self) -> i32 {
        self.point_layer
    }
}

/// Smallest z-order strictly above every host element
///
/// Elements without a declared z-order count as 0, so the result is at least 1.
pub fn compute_baseline<I>(declared: I) -> i32
where
    I: IntoIterator<Item = Option<i32>>,
{
    let peak = declared.into_iter().map(|z| z.unwrap_or(0)).fold(0, i32::max);
    peak.saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_host() {
        assert_eq!(compute_baseline(Vec::new()), 1);
    }

    #[test]
    fn test_undeclared_elements_only() {
        assert_eq!(compute_baseline(vec![None, None]), 1);
    }

    #[test]
    fn test_above_highest_declared() {
        assert_eq!(compute_baseline(vec![Some(3), None, Some(42), Some(-7)]), 43);
    }

    #[test]
    fn test_negative_only_still_above_auto() {
        assert_eq!(compute_baseline(vec![Some(-5), Some(-1)]), 1);
    }

    #[test]
    fn test_saturates_at_max() {
        let baseline = compute_baseline(vec![Some(i32::MAX)]);
        assert_eq!(baseline, i32::MAX);
        let layers = LayerAssignments::from_baseline(baseline);
        assert_eq!(layers.chart_layer, i32::MAX);
    }

    #[test]
    fn test_consecutive_assignments() {
        let layers = LayerAssignments::from_baseline(10);
        assert_eq!(layers.point_layer, 10);
        assert_eq!(layers.reset_control, 11);
        assert_eq!(layers.readout, 12);
        assert_eq!(layers.chart_layer, 13);
        assert_eq!(layers.baseline(), 10);
    }
}
