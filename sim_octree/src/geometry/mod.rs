//! Geometry module: points and axis-aligned regions.
//!
//! Passive value types shared by every index implementation. Regions
//! double as node boundaries and as query windows.

mod point;
mod region;

pub use point::Point;
pub use region::{Region, OCTANT_COUNT};
