//! Shapes supported by minkowski.

pub use self::ball::{Ball, Circle, Sphere};
pub use self::polytope::{ConvexPolygon, ConvexPolyhedron, Polytope};
pub use self::shape::{AsBody, Body, Dim, Shape};
pub use self::support_map::SupportMap;

mod ball;
mod polytope;
mod shape;
mod support_map;
