use super::*;
use crate::error::Error;
use crate::index::BruteForceIndex;
use glam::DVec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ============================================================================
// Helpers
// ============================================================================

fn world() -> Region {
    Region::cube(DVec3::ZERO, 10.0)
}

fn random_points(count: usize, seed: u64) -> Vec<Point<usize>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|id| {
            Point::new(
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
                id,
            )
        })
        .collect()
}

fn sorted_ids<'a>(points: impl IntoIterator<Item = &'a Point<usize>>) -> Vec<usize> {
    let mut ids: Vec<usize> = points.into_iter().map(|p| *p.payload()).collect();
    ids.sort_unstable();
    ids
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_is_empty_leaf() {
    let octree: Octree<()> = Octree::new(world(), 4).unwrap();
    assert!(octree.is_empty());
    assert_eq!(octree.capacity(), 4);
    assert_eq!(octree.boundary(), &world());
    assert!(!octree.root().is_subdivided());
    assert!(octree.root().children().is_none());
}

#[test]
fn test_huge_capacity_allocates_lazily() {
    let mut octree = Octree::new(world(), usize::MAX).unwrap();
    assert_eq!(octree.capacity(), usize::MAX);
    assert!(octree.root().points().is_empty());

    for id in 0..5 {
        assert!(octree.insert(Point::new(id as f64, 0.0, 0.0, id)));
    }
    assert!(!octree.root().is_subdivided());

    let found = octree.query(&world());
    assert_eq!(sorted_ids(found), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_new_rejects_zero_capacity() {
    let result: Result<Octree<()>> = Octree::new(world(), 0);
    assert_eq!(result.unwrap_err(), Error::InvalidCapacity(0));
}

#[test]
fn test_with_config_keeps_config() {
    let config = OctreeConfig::new(3).with_max_depth(5);
    let octree: Octree<()> = Octree::with_config(world(), config.clone()).unwrap();
    assert_eq!(octree.config(), &config);
}

// ============================================================================
// Insertion
// ============================================================================

#[test]
fn test_insert_inside_is_accepted() {
    let mut octree = Octree::new(world(), 4).unwrap();
    assert!(octree.insert(Point::new(1.0, 2.0, 3.0, "a")));
    assert_eq!(octree.len(), 1);
    assert_eq!(octree.root().points().len(), 1);
}

#[test]
fn test_insert_outside_is_rejected() {
    let mut octree = Octree::new(world(), 4).unwrap();
    octree.insert(Point::new(0.0, 0.0, 0.0, "inside"));

    assert!(!octree.insert(Point::new(50.0, 0.0, 0.0, "outside")));
    // Upper bound of the world is open
    assert!(!octree.insert(Point::new(10.0, 0.0, 0.0, "edge")));
    assert_eq!(octree.len(), 1);
    assert_eq!(octree.stats().point_count, 1);
}

#[test]
fn test_insert_on_lower_world_edge_is_accepted() {
    let mut octree = Octree::new(world(), 4).unwrap();
    assert!(octree.insert(Point::new(-10.0, -10.0, -10.0, ())));
}

#[test]
fn test_try_insert_returns_rejected_point() {
    let mut octree = Octree::new(world(), 4).unwrap();
    let rejected = octree.try_insert(Point::new(0.0, 99.0, 0.0, String::from("far"))).unwrap_err();
    assert_eq!(rejected.payload(), "far");
    assert_eq!(rejected.y(), 99.0);
    assert!(octree.is_empty());
}

#[test]
fn test_subdivision_on_first_overflow() {
    let mut octree = Octree::new(world(), 4).unwrap();
    octree.insert(Point::new(-5.0, -5.0, -5.0, 0));
    octree.insert(Point::new(5.0, 5.0, 5.0, 1));
    octree.insert(Point::new(-5.0, 5.0, -5.0, 2));
    octree.insert(Point::new(5.0, -5.0, 5.0, 3));
    assert!(!octree.root().is_subdivided());

    assert!(octree.insert(Point::new(1.0, 1.0, 1.0, 4)));
    assert!(octree.root().is_subdivided());

    let children = octree.root().children().unwrap();
    assert!(children.iter().all(|child| !child.is_subdivided()));
    assert!(children.iter().all(|child| child.depth() == 1));
    assert!(children.iter().all(|child| child.capacity() == 4));

    // The overflowing point lands in the (+,+,+) octant
    assert_eq!(children[7].points().len(), 1);
    assert_eq!(*children[7].points()[0].payload(), 4);
}

#[test]
fn test_points_stay_in_node_after_subdivision() {
    let mut octree = Octree::new(world(), 2).unwrap();
    octree.insert(Point::new(-1.0, -1.0, -1.0, 0));
    octree.insert(Point::new(1.0, 1.0, 1.0, 1));
    octree.insert(Point::new(2.0, 2.0, 2.0, 2));
    octree.insert(Point::new(-2.0, -2.0, -2.0, 3));

    let root_ids: Vec<usize> = octree.root().points().iter().map(|p| *p.payload()).collect();
    assert_eq!(root_ids, vec![0, 1]);

    let children = octree.root().children().unwrap();
    assert_eq!(*children[7].points()[0].payload(), 2);
    assert_eq!(*children[0].points()[0].payload(), 3);
}

#[test]
fn test_point_on_internal_face_goes_to_high_octant() {
    let mut octree = Octree::new(world(), 1).unwrap();
    octree.insert(Point::new(-5.0, -5.0, -5.0, 0));
    octree.insert(Point::new(0.0, 0.0, 0.0, 1));

    let children = octree.root().children().unwrap();
    assert_eq!(children[7].points().len(), 1);
    let owners = children.iter().filter(|c| !c.points().is_empty()).count();
    assert_eq!(owners, 1);
}

#[test]
fn test_coincident_points_subdivide_without_depth_guard() {
    let mut octree = Octree::new(world(), 1).unwrap();
    for id in 0..3 {
        assert!(octree.insert(Point::new(2.5, 2.5, 2.5, id)));
    }

    let stats = octree.stats();
    assert_eq!(stats.depth, 2);
    assert_eq!(stats.point_count, 3);
}

#[test]
fn test_coincident_points_terminate_when_regions_collapse() {
    let mut octree = Octree::new(world(), 1).unwrap();
    let accepted = (0..200)
        .filter(|&id| octree.insert(Point::new(0.3, 0.3, 0.3, id)))
        .count();

    assert!(accepted < 200, "f64 halving should eventually reject");
    assert_eq!(octree.len(), accepted);
    assert_eq!(octree.query(&world()).len(), accepted);
}

#[test]
fn test_depth_guard_rejects_instead_of_subdividing() {
    let config = OctreeConfig::new(1).with_max_depth(1);
    let mut octree = Octree::with_config(world(), config).unwrap();

    assert!(octree.insert(Point::new(2.5, 2.5, 2.5, 0)));
    assert!(octree.insert(Point::new(2.5, 2.5, 2.5, 1)));
    assert!(!octree.insert(Point::new(2.5, 2.5, 2.5, 2)));

    assert_eq!(octree.len(), 2);
    assert_eq!(octree.stats().depth, 1);

    // Other octants at depth 1 still have room
    assert!(octree.insert(Point::new(-2.5, -2.5, -2.5, 3)));
}

#[test]
fn test_depth_guard_zero_keeps_root_leaf() {
    let config = OctreeConfig::new(2).with_max_depth(0);
    let mut octree = Octree::with_config(world(), config).unwrap();

    assert!(octree.insert(Point::new(1.0, 1.0, 1.0, 0)));
    assert!(octree.insert(Point::new(-1.0, 1.0, 1.0, 1)));
    assert!(!octree.insert(Point::new(1.0, -1.0, 1.0, 2)));
    assert!(!octree.root().is_subdivided());
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_query_full_world_returns_everything() {
    for capacity in [1, 2, 4, 8, 64] {
        let points = random_points(500, 11);
        let mut octree = Octree::new(world(), capacity).unwrap();
        for point in points {
            assert!(octree.insert(point));
        }

        let found = octree.query(&world());
        assert_eq!(sorted_ids(found), (0..500).collect::<Vec<_>>(), "capacity {}", capacity);
    }
}

#[test]
fn test_query_excludes_points_outside_range() {
    let mut octree = Octree::new(world(), 2).unwrap();
    octree.insert(Point::new(-8.0, -8.0, -8.0, 0));
    octree.insert(Point::new(1.0, 1.0, 1.0, 1));
    octree.insert(Point::new(8.0, 8.0, 8.0, 2));
    octree.insert(Point::new(1.5, 0.5, 1.0, 3));

    let range = Region::cube(DVec3::new(1.0, 1.0, 1.0), 1.0);
    let found = octree.query(&range);

    assert_eq!(sorted_ids(found), vec![1, 3]);
}

#[test]
fn test_query_range_upper_bound_is_open() {
    let mut octree = Octree::new(world(), 4).unwrap();
    octree.insert(Point::new(2.0, 0.0, 0.0, 0));

    let range = Region::cube(DVec3::ZERO, 2.0);
    assert!(octree.query(&range).is_empty());
}

#[test]
fn test_query_disjoint_range_is_empty() {
    let mut octree = Octree::new(world(), 2).unwrap();
    for point in random_points(100, 3) {
        octree.insert(point);
    }

    let range = Region::cube(DVec3::splat(100.0), 5.0);
    assert!(octree.query(&range).is_empty());
}

#[test]
fn test_query_matches_brute_force() {
    let points = random_points(1000, 42);
    let mut octree = Octree::new(world(), 4).unwrap();
    let mut baseline = BruteForceIndex::new(world());
    for point in points {
        octree.insert(point.clone());
        baseline.insert(point);
    }

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let center = DVec3::new(
            rng.random_range(-12.0..12.0),
            rng.random_range(-12.0..12.0),
            rng.random_range(-12.0..12.0),
        );
        let half = DVec3::new(
            rng.random_range(0.0..6.0),
            rng.random_range(0.0..6.0),
            rng.random_range(0.0..6.0),
        );
        let range = Region::from_center_half_extents(center, half);

        assert_eq!(sorted_ids(octree.query(&range)), sorted_ids(baseline.query(&range)));
    }
}

#[test]
fn test_query_is_deterministic() {
    let mut octree = Octree::new(world(), 3).unwrap();
    for point in random_points(300, 5) {
        octree.insert(point);
    }

    let range = Region::new(1.0, -2.0, 0.5, 6.0, 5.0, 7.0);
    let first: Vec<usize> = octree.query(&range).iter().map(|p| *p.payload()).collect();
    let second: Vec<usize> = octree.query(&range).iter().map(|p| *p.payload()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_query_order_is_preorder() {
    let mut octree = Octree::new(world(), 1).unwrap();
    octree.insert(Point::new(5.0, 5.0, 5.0, 0)); // root
    octree.insert(Point::new(5.0, 5.0, 5.0, 1)); // octant 7, depth 1
    octree.insert(Point::new(-5.0, -5.0, -5.0, 2)); // octant 0, depth 1
    octree.insert(Point::new(-5.0, 5.0, -5.0, 3)); // octant 2, depth 1

    let ids: Vec<usize> = octree.query(&world()).iter().map(|p| *p.payload()).collect();
    assert_eq!(ids, vec![0, 2, 3, 1]);
}

#[test]
fn test_query_into_appends_to_accumulator() {
    let mut octree = Octree::new(world(), 4).unwrap();
    octree.insert(Point::new(1.0, 1.0, 1.0, 10));

    let other = Point::new(0.0, 0.0, 0.0, 99);
    let mut found = vec![&other];
    octree.query_into(&world(), &mut found);

    let ids: Vec<usize> = found.iter().map(|p| *p.payload()).collect();
    assert_eq!(ids, vec![99, 10]);
}

// ============================================================================
// Iteration and stats
// ============================================================================

#[test]
fn test_iter_matches_full_query_order() {
    let mut octree = Octree::new(world(), 2).unwrap();
    for point in random_points(250, 9) {
        octree.insert(point);
    }

    let queried: Vec<usize> = octree.query(&world()).iter().map(|p| *p.payload()).collect();
    let iterated: Vec<usize> = octree.iter().map(|p| *p.payload()).collect();
    assert_eq!(queried, iterated);

    let by_ref: Vec<usize> = (&octree).into_iter().map(|p| *p.payload()).collect();
    assert_eq!(by_ref, iterated);
}

#[test]
fn test_iter_empty_tree() {
    let octree: Octree<u8> = Octree::new(world(), 2).unwrap();
    assert_eq!(octree.iter().count(), 0);
}

#[test]
fn test_stats_single_leaf() {
    let mut octree = Octree::new(world(), 4).unwrap();
    octree.insert(Point::new(0.0, 0.0, 0.0, ()));

    let stats = octree.stats();
    assert_eq!(
        stats,
        OctreeStats { node_count: 1, leaf_count: 1, point_count: 1, depth: 0 }
    );
}

#[test]
fn test_stats_after_one_subdivision() {
    let mut octree = Octree::new(world(), 1).unwrap();
    octree.insert(Point::new(1.0, 1.0, 1.0, ()));
    octree.insert(Point::new(-1.0, -1.0, -1.0, ()));

    let stats = octree.stats();
    assert_eq!(stats.node_count, 9);
    assert_eq!(stats.leaf_count, 8);
    assert_eq!(stats.point_count, 2);
    assert_eq!(stats.depth, 1);
}

#[test]
fn test_len_matches_stats_point_count() {
    let mut octree = Octree::new(world(), 3).unwrap();
    for point in random_points(400, 21) {
        octree.insert(point);
    }
    octree.insert(Point::new(0.0, 0.0, 40.0, 9999));

    assert_eq!(octree.len(), 400);
    assert_eq!(octree.stats().point_count, 400);
}

// ============================================================================
// SpatialIndex trait
// ============================================================================

fn fill<I: SpatialIndex<usize>>(index: &mut I, points: Vec<Point<usize>>) -> usize {
    points.into_iter().map(|p| index.insert(p)).filter(|ok| *ok).count()
}

#[test]
fn test_spatial_index_trait_on_octree() {
    let mut octree = Octree::new(world(), 4).unwrap();
    let accepted = fill(&mut octree, random_points(64, 1));

    assert_eq!(accepted, 64);
    assert_eq!(SpatialIndex::len(&octree), 64);
    assert!(!SpatialIndex::is_empty(&octree));
    assert_eq!(SpatialIndex::query(&octree, &world()).len(), 64);
}
