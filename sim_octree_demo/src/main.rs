//! Octree demo
//!
//! Builds an index over a world cube, fills it with a lattice of
//! entities, then runs a few range queries and prints what they return.

use sim_octree::glam::DVec3;
use sim_octree::octree_info;
use sim_octree::sim::log::{self, LogSeverity};
use sim_octree::sim::{Octree, OctreeConfig, Point, Region, Result};

const SOURCE: &str = "demo";

#[derive(Debug, Clone)]
struct Entity {
    id: u32,
    kind: &'static str,
}

fn build_world() -> Result<Octree<Entity>> {
    let world = Region::cube(DVec3::ZERO, 100.0);
    let config = OctreeConfig::default().with_capacity(8).with_max_depth(12);
    let mut octree = Octree::with_config(world, config)?;

    let kinds = ["tree", "rock", "crate", "lamp"];
    let mut id = 0;
    let mut rejected = 0;
    for x in (-100..100).step_by(10) {
        for y in (-100..100).step_by(25) {
            for z in (-100..100).step_by(10) {
                let entity = Entity { id, kind: kinds[id as usize % kinds.len()] };
                if !octree.insert(Point::new(x as f64 + 0.5, y as f64, z as f64 + 0.5, entity)) {
                    rejected += 1;
                }
                id += 1;
            }
        }
    }

    // One entity past the world edge
    if !octree.insert(Point::new(150.0, 0.0, 0.0, Entity { id, kind: "stray" })) {
        rejected += 1;
    }

    octree_info!(SOURCE, "Inserted {} entities ({} rejected)", octree.len(), rejected);
    Ok(octree)
}

fn main() -> Result<()> {
    log::set_min_severity(LogSeverity::Debug);

    let octree = build_world()?;
    let stats = octree.stats();
    octree_info!(
        SOURCE,
        "Tree: {} nodes, {} leaves, depth {}",
        stats.node_count,
        stats.leaf_count,
        stats.depth
    );

    let queries = [
        ("camera box", Region::new(0.0, 0.0, 0.0, 20.0, 30.0, 20.0)),
        ("interaction radius", Region::cube(DVec3::new(-40.0, 0.0, 40.0), 6.0)),
        ("far corner", Region::from_min_max(DVec3::splat(80.0), DVec3::splat(100.0))),
        ("outside", Region::cube(DVec3::splat(500.0), 10.0)),
    ];

    for (name, range) in &queries {
        let found = octree.query(range);
        let sample: Vec<String> = found
            .iter()
            .take(3)
            .map(|p| format!("#{} {} @ ({}, {}, {})", p.payload().id, p.payload().kind, p.x(), p.y(), p.z()))
            .collect();
        octree_info!(SOURCE, "{}: {} hits {:?}", name, found.len(), sample);
    }

    Ok(())
}
