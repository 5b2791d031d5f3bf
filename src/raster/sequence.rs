//! Ordered cell sequences produced by the rasterizers.

use std::collections::HashSet;

use crate::geometry::Point;

/// An ordered, append-only log of emitted grid cells.
///
/// Every rasterizer call produces a fresh `Raster`; points appear in the
/// algorithm's traversal order and duplicates are kept as emitted. Callers
/// wanting unique cells apply [`Raster::deduplicated`] afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Raster {
    points: Vec<Point>,
}

impl Raster {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append an emitted point. Emission order is the traversal order.
    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Get the emitted points in emission order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of emitted points, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether nothing was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First emitted point, if any.
    #[must_use]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Last emitted point, if any.
    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Iterate over the emitted points.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Consume the raster, yielding the emitted points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Copy with duplicate cells removed, keeping the first occurrence of
    /// each cell in emission order.
    ///
    /// Circle rasterization emits some cells more than once (at the axes and
    /// on the diagonal); this is the explicit cleanup step for callers that
    /// want each cell exactly once.
    #[must_use]
    pub fn deduplicated(&self) -> Self {
        let mut seen = HashSet::with_capacity(self.points.len());
        Self {
            points: self
                .points
                .iter()
                .copied()
                .filter(|point| seen.insert(*point))
                .collect(),
        }
    }
}

impl IntoIterator for Raster {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Raster {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
