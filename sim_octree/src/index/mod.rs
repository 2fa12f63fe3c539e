//! Spatial index module
//!
//! Provides the octree point index, the `SpatialIndex` seam it shares
//! with the brute-force baseline, and a lock-guarded shared handle.

mod spatial_index;
mod octree_node;
mod octree;
mod brute_force;
mod shared;

pub use spatial_index::SpatialIndex;
pub use octree_node::OctreeNode;
pub use octree::{Octree, OctreeStats, Iter};
pub use brute_force::BruteForceIndex;
pub use shared::SharedOctree;
