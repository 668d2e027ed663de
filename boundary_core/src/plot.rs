/// The series a plot surface has to keep apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesId {
    /// Points labelled 0.
    Class0,
    /// Points labelled 1.
    Class1,
    /// The decision boundary segment, zero or two points.
    Boundary,
}

impl SeriesId {
    /// The series holding points with label `y`.
    pub fn for_label(y: u8) -> Self {
        if y == 0 { Self::Class0 } else { Self::Class1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// A rendering surface driven by the session.
///
/// The session only ever writes to it. Changes made through
/// [`set_series`](PlotAdapter::set_series) and
/// [`set_axis_bounds`](PlotAdapter::set_axis_bounds) are expected to become
/// visible on the next [`redraw`](PlotAdapter::redraw).
pub trait PlotAdapter {
    /// Replaces every point of `series`.
    fn set_series(&mut self, series: SeriesId, points: &[(f64, f64)]);

    fn set_axis_bounds(&mut self, axis: Axis, min: f64, max: f64);

    fn redraw(&mut self);
}
