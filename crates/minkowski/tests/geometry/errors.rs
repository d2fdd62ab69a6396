use super::{cube, square};
use minkowski::math::{Point2, Point3};
use minkowski::query::{self, GjkError};
use minkowski::shape::{Dim, Shape};

#[test]
fn mixed_dimensions_are_rejected() {
    let planar = square(0.0, 0.0);
    let spatial = cube(0.0, 0.0, 0.0);

    assert_eq!(
        query::collides(&planar, &spatial),
        Err(GjkError::DimensionMismatch {
            expected: Dim::Two,
            found: Dim::Three
        })
    );
    assert_eq!(
        query::collides(&spatial, &Shape::circle(Point2::origin(), 1.0)),
        Err(GjkError::DimensionMismatch {
            expected: Dim::Three,
            found: Dim::Two
        })
    );
}

#[test]
fn empty_polytope_is_rejected() {
    let empty = Shape::polyhedron(Vec::new(), Point3::new(3.0, 0.0, 0.0));
    let sphere = Shape::sphere(Point3::origin(), 1.0);

    assert_eq!(query::collides(&empty, &sphere), Err(GjkError::EmptyShape));
    assert_eq!(query::collides(&sphere, &empty), Err(GjkError::EmptyShape));
}

#[test]
fn error_messages() {
    let err = GjkError::DimensionMismatch {
        expected: Dim::Two,
        found: Dim::Three,
    };
    assert_eq!(
        err.to_string(),
        "dimension mismatch: expected a 2D shape, found a 3D shape"
    );
}
