use super::{collide, cube, square};
use minkowski::math::{Point2, Point3};
use minkowski::shape::Shape;

#[test]
fn square_circle() {
    let sq = square(0.0, 0.0);

    assert!(collide(&sq, &Shape::circle(Point2::new(1.2, 0.3), 0.8)));
    assert!(collide(&sq, &Shape::circle(Point2::new(0.8, 0.8), 0.5)));
    assert!(!collide(&sq, &Shape::circle(Point2::new(1.5, 1.5), 0.5)));
}

#[test]
fn cube_sphere() {
    let cb = cube(0.0, 0.0, 0.0);

    // Sphere fully inside of the cube.
    assert!(collide(&cb, &Shape::sphere(Point3::origin(), 0.4)));
    assert!(collide(&cb, &Shape::sphere(Point3::new(0.8, 0.2, 0.1), 0.4)));
    assert!(collide(&cb, &Shape::sphere(Point3::new(0.7, 0.7, 0.7), 0.4)));
    assert!(!collide(&cb, &Shape::sphere(Point3::new(2.0, 0.0, 0.0), 0.4)));
    assert!(!collide(&cb, &Shape::sphere(Point3::new(0.9, 0.9, 0.9), 0.4)));
}
