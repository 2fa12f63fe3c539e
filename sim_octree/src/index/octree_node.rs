/// OctreeNode: one region of the point octree.
///
/// A node starts as a leaf holding up to `capacity` points directly. When
/// a full leaf receives another point it subdivides once into eight
/// children and forwards that point (and every later one) to them. Points
/// stored before the subdivision stay in this node permanently; nothing is
/// ever redistributed.
///
/// Child octant layout: bit0 = X, bit1 = Y, bit2 = Z (0 = low, 1 = high).
/// The same order is used for insertion attempts and for query traversal.

use crate::config::OctreeConfig;
use crate::geometry::{Point, Region, OCTANT_COUNT};

const SOURCE: &str = "sim::OctreeNode";

/// A single node in the octree.
#[derive(Debug)]
pub struct OctreeNode<T> {
    /// Region owned by this node
    boundary: Region,
    /// Maximum points stored directly while this node is a leaf
    capacity: usize,
    /// Distance from the root (root = 0)
    depth: u32,
    /// Points stored directly in this node, in insertion order
    points: Vec<Point<T>>,
    /// Eight children, created on the first overflow
    children: Option<Box<[OctreeNode<T>; OCTANT_COUNT]>>,
}

impl<T> OctreeNode<T> {
    /// Create an empty leaf.
    pub(crate) fn new(boundary: Region, capacity: usize, depth: u32) -> Self {
        Self {
            boundary,
            capacity,
            depth,
            points: Vec::new(),
            children: None,
        }
    }

    pub fn boundary(&self) -> &Region {
        &self.boundary
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Points stored directly in this node (not in its children).
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    pub fn is_subdivided(&self) -> bool {
        self.children.is_some()
    }

    /// The eight children in octant order, once subdivided.
    pub fn children(&self) -> Option<&[OctreeNode<T>; OCTANT_COUNT]> {
        self.children.as_deref()
    }

    /// Split this leaf into eight children. Called at most once per node.
    fn subdivide(&mut self) {
        debug_assert!(self.children.is_none(), "node subdivided twice");

        let capacity = self.capacity;
        let depth = self.depth + 1;
        let children = self
            .boundary
            .octants()
            .map(|region| OctreeNode::new(region, capacity, depth));
        self.children = Some(Box::new(children));

        crate::octree_trace!(
            SOURCE,
            "Subdivided node at depth {} (center {:?}, half extents {:?})",
            self.depth,
            self.boundary.center,
            self.boundary.half_extents
        );
    }

    /// Insert a point into this subtree.
    ///
    /// On rejection the point is handed back unchanged. A rejection means
    /// the point lies outside this boundary, the depth guard stopped a
    /// full leaf from subdividing, or no child admitted the point (child
    /// regions that have collapsed to zero size under `f64` halving).
    pub(crate) fn insert(
        &mut self,
        point: Point<T>,
        config: &OctreeConfig,
    ) -> Result<(), Point<T>> {
        if !self.boundary.contains(&point) {
            return Err(point);
        }

        if self.children.is_none() {
            if self.points.len() < self.capacity {
                self.points.push(point);
                return Ok(());
            }

            if !config.can_subdivide_at(self.depth) {
                crate::octree_warn!(
                    SOURCE,
                    "Depth limit reached at depth {}; rejecting point at {:?}",
                    self.depth,
                    point.position()
                );
                return Err(point);
            }

            self.subdivide();
        }

        let Some(children) = self.children.as_mut() else {
            return Err(point);
        };

        let mut point = point;
        for child in children.iter_mut() {
            match child.insert(point, config) {
                Ok(()) => return Ok(()),
                Err(rejected) => point = rejected,
            }
        }

        Err(point)
    }

    /// Append every point of this subtree contained in `range` to `found`.
    ///
    /// Pre-order, depth-first: this node's own matches come before its
    /// children's, and children are visited in octant order. Subtrees
    /// whose boundary does not intersect `range` are skipped.
    pub fn query_into<'a>(&'a self, range: &Region, found: &mut Vec<&'a Point<T>>) {
        if !self.boundary.intersects(range) {
            return;
        }

        found.extend(self.points.iter().filter(|point| range.contains(*point)));

        if let Some(children) = &self.children {
            for child in children.iter() {
                child.query_into(range, found);
            }
        }
    }
}
