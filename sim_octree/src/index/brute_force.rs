/// Brute-force index: linear scan over every stored point.
///
/// Suitable for small point sets or as a baseline for comparison.
/// Uses the same boundary contract as the octree (points outside the
/// boundary are rejected) so both can be swapped behind `SpatialIndex`.

use crate::geometry::{Point, Region};
use super::spatial_index::SpatialIndex;

/// Flat point list answering queries in O(n).
#[derive(Debug, Clone)]
pub struct BruteForceIndex<T> {
    boundary: Region,
    points: Vec<Point<T>>,
}

impl<T> BruteForceIndex<T> {
    pub fn new(boundary: Region) -> Self {
        Self {
            boundary,
            points: Vec::new(),
        }
    }

    pub fn boundary(&self) -> &Region {
        &self.boundary
    }

    /// Stored points in insertion order.
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Insert a point. Returns `false` if it lies outside the boundary.
    pub fn insert(&mut self, point: Point<T>) -> bool {
        if !self.boundary.contains(&point) {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Collect stored points contained in `range`, in insertion order.
    pub fn query(&self, range: &Region) -> Vec<&Point<T>> {
        self.points.iter().filter(|point| range.contains(*point)).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<T> SpatialIndex<T> for BruteForceIndex<T> {
    fn insert(&mut self, point: Point<T>) -> bool {
        BruteForceIndex::insert(self, point)
    }

    fn query_into<'a>(&'a self, range: &Region, found: &mut Vec<&'a Point<T>>) {
        found.extend(self.points.iter().filter(|point| range.contains(*point)));
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}
