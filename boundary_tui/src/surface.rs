use boundary_core::{Axis, PlotAdapter, SeriesId};

/// Everything the chart widget needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub class0: Vec<(f64, f64)>,
    pub class1: Vec<(f64, f64)>,
    pub boundary: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            class0: Vec::new(),
            class1: Vec::new(),
            boundary: Vec::new(),
            x_bounds: [0.0, 1.0],
            y_bounds: [0.0, 1.0],
        }
    }
}

impl ChartFrame {
    fn series_mut(&mut self, series: SeriesId) -> &mut Vec<(f64, f64)> {
        match series {
            SeriesId::Class0 => &mut self.class0,
            SeriesId::Class1 => &mut self.class1,
            SeriesId::Boundary => &mut self.boundary,
        }
    }
}

/// Plot adapter backing the ratatui chart.
///
/// Writes go to a pending frame which only becomes visible on `redraw`, so
/// the UI never renders a half-updated plot.
#[derive(Debug, Default)]
pub struct ChartSurface {
    pending: ChartFrame,
    shown: ChartFrame,
    redraws: u64,
}

impl ChartSurface {
    /// The last published frame.
    pub fn frame(&self) -> &ChartFrame {
        &self.shown
    }

    pub fn redraws(&self) -> u64 {
        self.redraws
    }
}

impl PlotAdapter for ChartSurface {
    fn set_series(&mut self, series: SeriesId, points: &[(f64, f64)]) {
        *self.pending.series_mut(series) = points.to_vec();
    }

    fn set_axis_bounds(&mut self, axis: Axis, min: f64, max: f64) {
        match axis {
            Axis::X => self.pending.x_bounds = [min, max],
            Axis::Y => self.pending.y_bounds = [min, max],
        }
    }

    fn redraw(&mut self) {
        self.shown.clone_from(&self.pending);
        self.redraws += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_redraw() {
        let mut surface = ChartSurface::default();
        surface.set_series(SeriesId::Class1, &[(1.0, 2.0)]);
        surface.set_axis_bounds(Axis::Y, -3.0, 3.0);

        assert!(surface.frame().class1.is_empty());
        assert_eq!(surface.frame().y_bounds, [0.0, 1.0]);

        surface.redraw();
        assert_eq!(surface.frame().class1, vec![(1.0, 2.0)]);
        assert_eq!(surface.frame().y_bounds, [-3.0, 3.0]);
        assert_eq!(surface.redraws(), 1);
    }

    #[test]
    fn series_replaced_not_appended() {
        let mut surface = ChartSurface::default();
        surface.set_series(SeriesId::Boundary, &[(0.0, 0.0), (1.0, 1.0)]);
        surface.set_series(SeriesId::Boundary, &[]);
        surface.redraw();

        assert!(surface.frame().boundary.is_empty());
    }
}
