//! OctreeConfig - construction parameters for an Octree.

use crate::error::{log_and_return_error, Error, Result};

/// Default number of points a leaf holds before it subdivides.
pub const DEFAULT_CAPACITY: usize = 8;

/// Construction parameters for an [`Octree`](crate::index::Octree).
///
/// Both values are fixed for the lifetime of the tree and inherited
/// unchanged by every node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OctreeConfig {
    /// Maximum points held directly by a leaf. Must be at least 1.
    pub capacity: usize,

    /// Deepest level at which a node may still subdivide (root = 0).
    ///
    /// `None` means no depth guard. A full leaf at `max_depth` rejects
    /// further inserts instead of subdividing.
    pub max_depth: Option<u32>,
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_depth: None,
        }
    }
}

impl OctreeConfig {
    /// Config with the given capacity and no depth guard.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            max_depth: None,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Remove the depth guard.
    pub fn unbounded(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Whether a node at `depth` is allowed to subdivide.
    #[inline]
    pub fn can_subdivide_at(&self, depth: u32) -> bool {
        self.max_depth.map_or(true, |max| depth < max)
    }

    /// Check the config before building a tree from it.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCapacity` if `capacity` is 0.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(log_and_return_error(
                "sim::OctreeConfig",
                Error::InvalidCapacity(self.capacity),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
