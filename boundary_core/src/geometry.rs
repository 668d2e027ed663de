use crate::weights::WeightTriple;

/// Coefficients whose magnitude is at or below this are treated as zero.
pub const EPSILON: f64 = 1e-12;

/// Rectangular plot area, `x` along the first feature and `y` along the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// A square `[min, max] x [min, max]`.
    pub fn square(min: f64, max: f64) -> Self {
        Self::new(min, max, min, max)
    }
}

/// The drawable part of a decision boundary inside some bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// The boundary is undefined, nothing is drawn.
    Empty,
    Line { from: (f64, f64), to: (f64, f64) },
}

impl Segment {
    fn line(from: (f64, f64), to: (f64, f64)) -> Self {
        Self::Line { from, to }
    }

    /// Returns the endpoints as plot points, none for [`Segment::Empty`].
    pub fn points(&self) -> Vec<(f64, f64)> {
        match *self {
            Segment::Empty => Vec::new(),
            Segment::Line { from, to } => vec![from, to],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Segment::Empty)
    }
}

/// Computes the segment of `w0 + w1*x1 + w2*x2 = 0` spanning `bounds`.
///
/// `None` is the baseline: the horizontal line `x2 = 0`. Otherwise the line
/// is evaluated at both horizontal edges when `w2` is non-negligible, drawn
/// vertically when only `w1` is, and left empty when both vanish.
///
/// # Arguments
/// * `weights` - The weights of the current step, if any.
/// * `bounds` - The current axis bounds.
pub fn line_for(weights: Option<&WeightTriple>, bounds: &Bounds) -> Segment {
    let &Bounds {
        x_min,
        x_max,
        y_min,
        y_max,
    } = bounds;

    let Some(&WeightTriple { w0, w1, w2 }) = weights else {
        return Segment::line((x_min, 0.0), (x_max, 0.0));
    };

    if w2.abs() > EPSILON {
        let x2 = |x1: f64| -(w0 + w1 * x1) / w2;
        return Segment::line((x_min, x2(x_min)), (x_max, x2(x_max)));
    }

    if w1.abs() > EPSILON {
        let x = -w0 / w1;
        return Segment::line((x, y_min), (x, y_max));
    }

    Segment::Empty
}
