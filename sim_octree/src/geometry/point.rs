/// A point-like entity stored in a spatial index.
///
/// Coordinates are fixed at construction: there is no mutable accessor,
/// so a stored point can never drift outside the node that accepted it.
/// The payload is owned by the point and never inspected by the index.

use glam::DVec3;

/// Immutable 3D position plus an opaque payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Point<T> {
    position: DVec3,
    payload: T,
}

impl<T> Point<T> {
    /// Create a point from individual coordinates.
    pub fn new(x: f64, y: f64, z: f64, payload: T) -> Self {
        Self {
            position: DVec3::new(x, y, z),
            payload,
        }
    }

    /// Create a point from a position vector.
    pub fn at(position: DVec3, payload: T) -> Self {
        Self { position, payload }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Consume the point and return its payload.
    pub fn into_payload(self) -> T {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let point = Point::new(1.0, -2.0, 3.5, "crate");
        assert_eq!(point.x(), 1.0);
        assert_eq!(point.y(), -2.0);
        assert_eq!(point.z(), 3.5);
        assert_eq!(point.position(), DVec3::new(1.0, -2.0, 3.5));
        assert_eq!(*point.payload(), "crate");
    }

    #[test]
    fn test_at_matches_new() {
        let a = Point::at(DVec3::new(4.0, 5.0, 6.0), 9u32);
        let b = Point::new(4.0, 5.0, 6.0, 9u32);
        assert_eq!(a, b);
        assert_eq!(a.into_payload(), 9);
    }
}
