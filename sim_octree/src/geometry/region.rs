/// Region: axis-aligned box described by a center and half extents.
///
/// Containment is half-open on every axis: `[center - half, center + half)`.
/// Intersection is inclusive: boxes that only touch on a face intersect.
/// Sibling octants share faces; the half-open test gives every point
/// exactly one owning child.
///
/// Half extents are expected to be non-negative. Negative values are not
/// rejected; they yield an empty region for containment purposes.

use glam::DVec3;
use super::point::Point;

/// Number of children produced by one subdivision.
pub const OCTANT_COUNT: usize = 8;

/// Axis-aligned box used as node boundary and as query window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Center (x, y, z)
    pub center: DVec3,
    /// Half extents (w, h, d)
    pub half_extents: DVec3,
}

impl Region {
    /// Create a region from its center `(x, y, z)` and half extents `(w, h, d)`.
    pub fn new(x: f64, y: f64, z: f64, w: f64, h: f64, d: f64) -> Self {
        Self {
            center: DVec3::new(x, y, z),
            half_extents: DVec3::new(w, h, d),
        }
    }

    pub fn from_center_half_extents(center: DVec3, half_extents: DVec3) -> Self {
        Self { center, half_extents }
    }

    /// Create a region spanning `min..max`.
    pub fn from_min_max(min: DVec3, max: DVec3) -> Self {
        Self {
            center: (min + max) * 0.5,
            half_extents: (max - min) * 0.5,
        }
    }

    /// Cube with the same half extent on every axis.
    pub fn cube(center: DVec3, half_extent: f64) -> Self {
        Self {
            center,
            half_extents: DVec3::splat(half_extent),
        }
    }

    /// Inclusive lower corner.
    pub fn min(&self) -> DVec3 {
        self.center - self.half_extents
    }

    /// Exclusive upper corner.
    pub fn max(&self) -> DVec3 {
        self.center + self.half_extents
    }

    /// Test whether a point lies inside this region.
    pub fn contains<T>(&self, point: &Point<T>) -> bool {
        self.contains_position(point.position())
    }

    /// Half-open containment test on a raw position.
    pub fn contains_position(&self, p: DVec3) -> bool {
        let min = self.min();
        let max = self.max();
        p.x >= min.x && p.x < max.x
            && p.y >= min.y && p.y < max.y
            && p.z >= min.z && p.z < max.z
    }

    /// Test whether two regions overlap or touch.
    ///
    /// Returns `false` only when the regions are strictly separated on at
    /// least one axis.
    pub fn intersects(&self, other: &Region) -> bool {
        let (self_min, self_max) = (self.min(), self.max());
        let (other_min, other_max) = (other.min(), other.max());
        !(other_min.x > self_max.x || other_max.x < self_min.x
            || other_min.y > self_max.y || other_max.y < self_min.y
            || other_min.z > self_max.z || other_max.z < self_min.z)
    }

    /// Compute the region of a specific octant (0-7).
    ///
    /// Octant bit layout: bit0 = X, bit1 = Y, bit2 = Z.
    /// - 0 = negative offset, 1 = positive offset for each axis.
    pub fn octant(&self, octant: usize) -> Region {
        debug_assert!(octant < OCTANT_COUNT, "octant out of range: {}", octant);
        let half = self.half_extents * 0.5;
        let offset = DVec3::new(
            if octant & 1 == 0 { -half.x } else { half.x },
            if octant & 2 == 0 { -half.y } else { half.y },
            if octant & 4 == 0 { -half.z } else { half.z },
        );
        Region {
            center: self.center + offset,
            half_extents: half,
        }
    }

    /// All eight octants in enumeration order.
    pub fn octants(&self) -> [Region; OCTANT_COUNT] {
        std::array::from_fn(|octant| self.octant(octant))
    }
}

#[cfg(test)]
#[path = "region_tests.rs"]
mod tests;
