/*!
minkowski
=========

**minkowski** answers a single question about two convex shapes, in 2 or 3
dimensions: do they intersect?

The test is performed by the Gilbert-Johnson-Keerthi (GJK) algorithm, which
only ever looks at the shapes through their support functions and grows a
simplex inside their Minkowski difference until it either encloses the origin
(the shapes overlap) or proves that it never can (the shapes are disjoint).

```
use minkowski::math::Point2;
use minkowski::query;
use minkowski::shape::Shape;

let square = vec![
    Point2::new(-0.5, -0.5),
    Point2::new(0.5, -0.5),
    Point2::new(0.5, 0.5),
    Point2::new(-0.5, 0.5),
];
let a = Shape::polygon(square.clone(), Point2::new(0.0, 0.0));
let b = Shape::polygon(square, Point2::new(0.5, 0.5));

assert!(query::collides(&a, &b).unwrap());
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(not(feature = "f32"))]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Aliases for the mathematical types used by this crate.
///
/// Every geometric type is generic over its dimension `D`, which is `2` for
/// planar shapes and `3` for spatial ones.
pub mod math {
    pub use super::real::*;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The number of decimal digits kept when comparing dot products approximately.
    pub const DEFAULT_PRECISION_DIGITS: u32 = 4;

    /// The point type.
    pub type Point<const D: usize> = na::Point<Real, D>;

    /// The vector type.
    pub type Vector<const D: usize> = na::SVector<Real, D>;

    /// The unit vector type.
    pub type UnitVector<const D: usize> = na::Unit<Vector<D>>;

    /// A 2D point.
    pub type Point2 = Point<2>;

    /// A 3D point.
    pub type Point3 = Point<3>;

    /// A 2D vector.
    pub type Vector2 = Vector<2>;

    /// A 3D vector.
    pub type Vector3 = Vector<3>;

    /// A 2D unit vector.
    pub type UnitVector2 = UnitVector<2>;

    /// A 3D unit vector.
    pub type UnitVector3 = UnitVector<3>;
}
