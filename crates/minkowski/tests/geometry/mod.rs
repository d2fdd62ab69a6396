mod ball_ball;
mod ball_polytope;
mod errors;
mod polyhedron_polyhedron;
mod properties;

use minkowski::math::{Point2, Point3, Real};
use minkowski::shape::Shape;

/// An axis-aligned square of side 1 centered at `(x, y)`.
pub fn square(x: Real, y: Real) -> Shape {
    Shape::polygon(
        vec![
            Point2::new(-0.5, -0.5),
            Point2::new(0.5, -0.5),
            Point2::new(0.5, 0.5),
            Point2::new(-0.5, 0.5),
        ],
        Point2::new(x, y),
    )
}

/// An axis-aligned cube of side 1 centered at `(x, y, z)`.
pub fn cube(x: Real, y: Real, z: Real) -> Shape {
    let mut vertices = Vec::with_capacity(8);
    for vx in [-0.5, 0.5] {
        for vy in [-0.5, 0.5] {
            for vz in [-0.5, 0.5] {
                vertices.push(Point3::new(vx, vy, vz));
            }
        }
    }
    Shape::polyhedron(vertices, Point3::new(x, y, z))
}

/// Tests both argument orders and checks they agree.
pub fn collide(a: &Shape, b: &Shape) -> bool {
    let ab = minkowski::query::collides(a, b).unwrap();
    let ba = minkowski::query::collides(b, a).unwrap();
    assert_eq!(ab, ba, "the intersection test must be symmetric");
    ab
}
