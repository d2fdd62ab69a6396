use super::{collide, cube};
use minkowski::math::Point3;
use minkowski::shape::Shape;

fn tetrahedron(x: f64, y: f64, z: f64) -> Shape {
    Shape::polyhedron(
        vec![
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, -0.5),
            Point3::new(-1.0, 0.5, -0.5),
            Point3::new(-0.5, -1.0, -0.5),
        ],
        Point3::new(x as _, y as _, z as _),
    )
}

#[test]
fn overlapping_cubes() {
    assert!(collide(&cube(0.0, 0.0, 0.0), &cube(0.5, 0.3, 0.2)));
    assert!(collide(&cube(0.0, 0.0, 0.0), &cube(0.9, 0.9, 0.9)));
}

#[test]
fn distant_cubes() {
    assert!(!collide(&cube(0.0, 0.0, 0.0), &cube(1.5, 0.2, 0.1)));
    assert!(!collide(&cube(0.0, 0.0, 0.0), &cube(1.2, 1.2, 1.2)));
}

#[test]
fn face_touching_cubes() {
    assert!(collide(&cube(0.0, 0.0, 0.0), &cube(1.0, 0.0, 0.0)));
    assert!(collide(&cube(0.0, 0.0, 0.0), &cube(1.0, 0.3, 0.2)));
}

#[test]
fn tetrahedron_cube() {
    assert!(collide(&tetrahedron(0.0, 0.0, 0.0), &cube(0.9, 0.1, 0.2)));
    assert!(!collide(&tetrahedron(0.0, 0.0, 0.0), &cube(0.2, 0.3, 1.8)));
}
