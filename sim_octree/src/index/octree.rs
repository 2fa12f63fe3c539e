/// Octree: dynamic point octree with lazy subdivision.
///
/// Owns the root `OctreeNode` and the construction config. Leaves hold up
/// to `capacity` points; a full leaf subdivides on the next insert and
/// every later point in its region descends into the eight children.
///
/// Insert and query cost is bounded by tree depth and by the number of
/// points in the nodes the query window touches, not by the total point
/// count.
///
/// Mutation takes `&mut self`, so the single-writer rule holds without a
/// lock. Use `SharedOctree` to share one tree across threads.

use crate::config::OctreeConfig;
use crate::error::Result;
use crate::geometry::{Point, Region};
use super::octree_node::OctreeNode;
use super::spatial_index::SpatialIndex;

const SOURCE: &str = "sim::Octree";

/// Structural summary of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OctreeStats {
    /// Total nodes, root included
    pub node_count: usize,
    /// Nodes that never subdivided
    pub leaf_count: usize,
    /// Points stored across all nodes
    pub point_count: usize,
    /// Depth of the deepest node (root = 0)
    pub depth: u32,
}

/// Point octree over a fixed world region.
#[derive(Debug)]
pub struct Octree<T> {
    root: OctreeNode<T>,
    config: OctreeConfig,
    len: usize,
}

impl<T> Octree<T> {
    /// Create an empty octree with the given capacity and no depth guard.
    ///
    /// # Arguments
    ///
    /// * `boundary` - World region; points outside it are rejected
    /// * `capacity` - Points a leaf holds before subdividing (at least 1)
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCapacity` if `capacity` is 0.
    pub fn new(boundary: Region, capacity: usize) -> Result<Self> {
        Self::with_config(boundary, OctreeConfig::new(capacity))
    }

    /// Create an empty octree from a full config.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCapacity` if `config.capacity` is 0.
    pub fn with_config(boundary: Region, config: OctreeConfig) -> Result<Self> {
        config.validate()?;

        crate::octree_debug!(
            SOURCE,
            "Created octree (center {:?}, half extents {:?}, capacity {}, max depth {:?})",
            boundary.center,
            boundary.half_extents,
            config.capacity,
            config.max_depth
        );

        Ok(Self {
            root: OctreeNode::new(boundary, config.capacity, 0),
            config,
            len: 0,
        })
    }

    /// Insert a point. Returns `false` if it was rejected.
    ///
    /// A rejected point is dropped; use `try_insert` to get it back.
    pub fn insert(&mut self, point: Point<T>) -> bool {
        self.try_insert(point).is_ok()
    }

    /// Insert a point, handing it back if the tree rejects it.
    ///
    /// Rejection happens when the point lies outside the root boundary,
    /// when the depth guard blocks a needed subdivision, or when no child
    /// region admits the point.
    pub fn try_insert(&mut self, point: Point<T>) -> std::result::Result<(), Point<T>> {
        match self.root.insert(point, &self.config) {
            Ok(()) => {
                self.len += 1;
                Ok(())
            }
            Err(rejected) => {
                crate::octree_debug!(SOURCE, "Rejected point at {:?}", rejected.position());
                Err(rejected)
            }
        }
    }

    /// Collect every stored point contained in `range`.
    ///
    /// Results are in pre-order: a node's own points before its
    /// children's, children in octant order. Repeating a query on an
    /// unmodified tree returns the same points in the same order.
    pub fn query(&self, range: &Region) -> Vec<&Point<T>> {
        let mut found = Vec::new();
        self.root.query_into(range, &mut found);
        found
    }

    /// Append every stored point contained in `range` to `found`.
    pub fn query_into<'a>(&'a self, range: &Region, found: &mut Vec<&'a Point<T>>) {
        self.root.query_into(range, found);
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// World region covered by the tree.
    pub fn boundary(&self) -> &Region {
        self.root.boundary()
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn config(&self) -> &OctreeConfig {
        &self.config
    }

    pub fn root(&self) -> &OctreeNode<T> {
        &self.root
    }

    /// Iterate over every stored point in query order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: vec![&self.root],
            current: Default::default(),
        }
    }

    /// Walk the tree and summarize its shape.
    pub fn stats(&self) -> OctreeStats {
        let mut stats = OctreeStats::default();
        Self::collect_stats(&self.root, &mut stats);
        stats
    }

    fn collect_stats(node: &OctreeNode<T>, stats: &mut OctreeStats) {
        stats.node_count += 1;
        stats.point_count += node.points().len();
        stats.depth = stats.depth.max(node.depth());

        match node.children() {
            Some(children) => {
                for child in children {
                    Self::collect_stats(child, stats);
                }
            }
            None => stats.leaf_count += 1,
        }
    }
}

// ===== ITERATION =====

/// Pre-order iterator over all points of an `Octree`.
///
/// Yields points in the same order as a query whose range covers the
/// whole tree.
pub struct Iter<'a, T> {
    stack: Vec<&'a OctreeNode<T>>,
    current: std::slice::Iter<'a, Point<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Point<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(point) = self.current.next() {
                return Some(point);
            }

            let node = self.stack.pop()?;
            self.current = node.points().iter();
            if let Some(children) = node.children() {
                // Reverse push so octant 0 is visited first
                self.stack.extend(children.iter().rev());
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a Octree<T> {
    type Item = &'a Point<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ===== SPATIAL INDEX TRAIT =====

impl<T> SpatialIndex<T> for Octree<T> {
    fn insert(&mut self, point: Point<T>) -> bool {
        Octree::insert(self, point)
    }

    fn query_into<'a>(&'a self, range: &Region, found: &mut Vec<&'a Point<T>>) {
        Octree::query_into(self, range, found);
    }

    fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
#[path = "octree_tests.rs"]
mod tests;
