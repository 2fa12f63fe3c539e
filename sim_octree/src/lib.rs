/*!
# Sim Octree

Point octree for 3D range queries.

Stores point-like entities with an arbitrary payload and answers
axis-aligned range queries. A node holds up to `capacity` points directly;
the first insert past that splits it into eight octants and later points
descend into them. Query cost follows the regions the query window
touches instead of the total point count.

## Architecture

- **Point**: immutable position plus caller payload
- **Region**: center + half extents box (half-open containment, inclusive intersection)
- **OctreeNode**: one region of the tree, leaf or subdivided
- **Octree**: root node, config and point count
- **SpatialIndex**: trait shared by Octree and BruteForceIndex
- **SharedOctree**: lock-guarded handle for multi-threaded use

## Example

```
use sim_octree::sim::{Octree, Point, Region};

let world = Region::new(0.0, 0.0, 0.0, 100.0, 100.0, 100.0);
let mut octree = Octree::new(world, 8)?;

octree.insert(Point::new(10.0, 5.0, -3.0, "crate"));
octree.insert(Point::new(-40.0, 20.0, 60.0, "barrel"));

let nearby = octree.query(&Region::new(10.0, 5.0, -3.0, 5.0, 5.0, 5.0));
assert_eq!(nearby.len(), 1);
assert_eq!(*nearby[0].payload(), "crate");
# Ok::<(), sim_octree::sim::Error>(())
```
*/

// Internal modules
mod error;
mod config;
pub mod log;
pub mod geometry;
pub mod index;

// Main sim namespace module
pub mod sim {
    // Error types
    pub use crate::error::{Error, Result};

    // Configuration
    pub use crate::config::{OctreeConfig, DEFAULT_CAPACITY};

    // Geometry primitives
    pub use crate::geometry::{Point, Region, OCTANT_COUNT};

    // Indexes
    pub use crate::index::{
        Octree, OctreeNode, OctreeStats, Iter,
        SpatialIndex, BruteForceIndex, SharedOctree,
    };

    // Logging sub-module (types and global logger controls, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, set_min_severity, min_severity, enabled,
            log, log_detailed,
        };
        // Note: octree_* macros are exported at the crate root (sim_octree::octree_info!, ...)
    }
}

// Re-export math library at crate root
pub use glam;
