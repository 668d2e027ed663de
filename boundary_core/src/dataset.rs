use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, VizErr},
    geometry::Bounds,
    rng::Mulberry32,
    sampler::normal,
};

/// Number of points generated when nothing else is requested.
pub const DEFAULT_N: usize = 200;
/// Seed used when nothing else is requested.
pub const DEFAULT_SEED: u32 = 42;

const BOX_MIN: f64 = 0.0;
const BOX_MAX: f64 = 10.0;
const EXTENT_PAD: f64 = 1.0;
const EMPTY_EXTENT: f64 = 5.0;

/// A labelled sample in feature space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x1: f64,
    pub x2: f64,
    /// Class label, either 0 or 1.
    pub y: u8,
}

/// Where the two class-conditional Gaussians sit and whether samples are
/// kept inside a fixed box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterLayout {
    /// Means (3, 3) and (7, 7), std 1.5, clamped into `[0, 10]`.
    #[default]
    Boxed,
    /// Means (-1.5, -1.5) and (1.5, 1.5), std 1.0, unclamped.
    Centered,
}

impl ClusterLayout {
    /// Class means, indexed by label.
    pub fn means(self) -> [(f64, f64); 2] {
        match self {
            ClusterLayout::Boxed => [(3.0, 3.0), (7.0, 7.0)],
            ClusterLayout::Centered => [(-1.5, -1.5), (1.5, 1.5)],
        }
    }

    /// Standard deviation shared by both classes and both features.
    pub fn std_dev(self) -> f64 {
        match self {
            ClusterLayout::Boxed => 1.5,
            ClusterLayout::Centered => 1.0,
        }
    }

    fn clamp(self, v: f64) -> f64 {
        match self {
            ClusterLayout::Boxed => v.clamp(BOX_MIN, BOX_MAX),
            ClusterLayout::Centered => v,
        }
    }

    /// Axis bounds for plotting `points` under this layout.
    ///
    /// Boxed layouts always use the box. Centered layouts pad the data
    /// extent and round it outward to whole units.
    pub fn bounds(self, points: &[Point]) -> Bounds {
        match self {
            ClusterLayout::Boxed => Bounds::square(BOX_MIN, BOX_MAX),
            ClusterLayout::Centered => {
                if points.is_empty() {
                    return Bounds::square(-EMPTY_EXTENT, EMPTY_EXTENT);
                }

                let (x_min, x_max) = extent(points.iter().map(|p| p.x1));
                let (y_min, y_max) = extent(points.iter().map(|p| p.x2));
                Bounds::new(
                    (x_min - EXTENT_PAD).floor(),
                    (x_max + EXTENT_PAD).ceil(),
                    (y_min - EXTENT_PAD).floor(),
                    (y_max + EXTENT_PAD).ceil(),
                )
            }
        }
    }
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// A validated, non-negative number of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSize(usize);

impl DatasetSize {
    pub fn new(n: usize) -> Self {
        Self(n)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for DatasetSize {
    fn default() -> Self {
        Self(DEFAULT_N)
    }
}

impl TryFrom<i64> for DatasetSize {
    type Error = VizErr;

    fn try_from(n: i64) -> Result<Self> {
        usize::try_from(n)
            .map(Self)
            .map_err(|_| VizErr::InvalidSize { n })
    }
}

/// The current set of labelled points.
///
/// The first `n / 2` points carry label 0 and the rest label 1, in that
/// order. Nothing downstream may assume the points are shuffled.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    seed: u32,
    layout: ClusterLayout,
    points: Vec<Point>,
}

impl Dataset {
    /// Samples `n` points from the two class-conditional Gaussians of `layout`.
    ///
    /// # Arguments
    /// * `n` - The number of points.
    /// * `seed` - Seed fully determining the sampled coordinates.
    /// * `layout` - Class means, spread and clamping policy.
    pub fn generate(n: DatasetSize, seed: u32, layout: ClusterLayout) -> Self {
        let n = n.get();
        let mut rng = Mulberry32::new(seed);
        let means = layout.means();
        let std = layout.std_dev();

        let points = (0..n)
            .map(|i| {
                let y = u8::from(i >= n / 2);
                let (m1, m2) = means[y as usize];
                let x1 = m1 + std * normal(&mut rng);
                let x2 = m2 + std * normal(&mut rng);

                Point {
                    x1: layout.clamp(x1),
                    x2: layout.clamp(x2),
                    y,
                }
            })
            .collect();

        debug!(seed = seed, n = n, layout:? = layout; "generated dataset");
        Self {
            seed,
            layout,
            points,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn layout(&self) -> ClusterLayout {
        self.layout
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Plot coordinates of every point with label `y`, in generation order.
    pub fn class(&self, y: u8) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter(|p| p.y == y)
            .map(|p| (p.x1, p.x2))
            .collect()
    }

    /// Axis bounds for this dataset.
    pub fn bounds(&self) -> Bounds {
        self.layout.bounds(&self.points)
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::generate(DatasetSize::default(), DEFAULT_SEED, ClusterLayout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_size_rejected() {
        let err = DatasetSize::try_from(-1).unwrap_err();
        assert!(matches!(err, VizErr::InvalidSize { n: -1 }));
        assert_eq!(DatasetSize::try_from(0).unwrap().get(), 0);
    }

    #[test]
    fn empty_dataset() {
        let ds = Dataset::generate(DatasetSize::new(0), 1, ClusterLayout::Boxed);
        assert!(ds.is_empty());
        assert_eq!(ds.bounds(), Bounds::square(0.0, 10.0));
    }

    #[test]
    fn defaults() {
        let ds = Dataset::default();
        assert_eq!(ds.len(), DEFAULT_N);
        assert_eq!(ds.seed(), DEFAULT_SEED);
        assert_eq!(ds.layout(), ClusterLayout::Boxed);
    }

    #[test]
    fn boxed_points_stay_in_box() {
        let ds = Dataset::generate(DatasetSize::new(2_000), 3, ClusterLayout::Boxed);
        assert!(
            ds.points()
                .iter()
                .all(|p| (0.0..=10.0).contains(&p.x1) && (0.0..=10.0).contains(&p.x2))
        );
    }

    #[test]
    fn centered_bounds_cover_points() {
        let ds = Dataset::generate(DatasetSize::new(300), 11, ClusterLayout::Centered);
        let b = ds.bounds();

        for p in ds.points() {
            assert!(b.x_min < p.x1 && p.x1 < b.x_max);
            assert!(b.y_min < p.x2 && p.x2 < b.y_max);
        }
        assert_eq!(b.x_min, b.x_min.floor());
        assert_eq!(b.y_max, b.y_max.ceil());
    }

    #[test]
    fn centered_empty_bounds() {
        assert_eq!(
            ClusterLayout::Centered.bounds(&[]),
            Bounds::square(-5.0, 5.0)
        );
    }

    #[test]
    fn class_split_follows_position() {
        let ds = Dataset::generate(DatasetSize::new(7), 42, ClusterLayout::Centered);
        let labels: Vec<u8> = ds.points().iter().map(|p| p.y).collect();
        assert_eq!(labels, vec![0, 0, 0, 1, 1, 1, 1]);
        assert_eq!(ds.class(0).len(), 3);
        assert_eq!(ds.class(1).len(), 4);
    }

    #[test]
    fn layout_from_json() {
        let layout: ClusterLayout = serde_json::from_str("\"centered\"").unwrap();
        assert_eq!(layout, ClusterLayout::Centered);
    }
}
