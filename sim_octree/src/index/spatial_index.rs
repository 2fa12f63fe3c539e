/// Spatial point indexes.
///
/// A SpatialIndex stores points with attached payloads and answers
/// axis-aligned range queries. Implementations include the Octree and a
/// brute-force linear scan used as a baseline.
///
/// Ownership: the caller creates and owns the index. Points are moved in
/// on insert and borrowed back out by queries.

use crate::geometry::{Point, Region};

/// Trait for range-queryable point storage.
pub trait SpatialIndex<T> {
    /// Insert a point. Returns `false` if the index rejected it.
    fn insert(&mut self, point: Point<T>) -> bool;

    /// Append every stored point contained in `range` to `found`.
    fn query_into<'a>(&'a self, range: &Region, found: &mut Vec<&'a Point<T>>);

    /// Collect every stored point contained in `range`.
    fn query(&self, range: &Region) -> Vec<&Point<T>> {
        let mut found = Vec::new();
        self.query_into(range, &mut found);
        found
    }

    /// Number of stored points.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
