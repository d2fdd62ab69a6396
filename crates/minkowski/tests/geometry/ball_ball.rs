use super::collide;
use minkowski::math::{Point2, Point3};
use minkowski::shape::Shape;

#[test]
fn circles() {
    let c1 = Shape::circle(Point2::new(0.0, 0.0), 1.0);

    assert!(collide(&c1, &Shape::circle(Point2::new(1.5, 0.5), 1.0)));
    assert!(!collide(&c1, &Shape::circle(Point2::new(2.1, 0.0), 1.0)));
}

#[test]
fn touching_circles() {
    let c1 = Shape::circle(Point2::new(0.0, 0.0), 1.0);
    let c2 = Shape::circle(Point2::new(2.0, 0.0), 1.0);

    assert!(collide(&c1, &c2));
}

#[test]
fn spheres() {
    let s1 = Shape::sphere(Point3::origin(), 1.0);

    assert!(collide(&s1, &Shape::sphere(Point3::new(1.5, 0.5, 0.2), 1.0)));
    assert!(collide(&s1, &Shape::sphere(Point3::new(2.0, 0.0, 0.0), 1.0)));
    assert!(!collide(&s1, &Shape::sphere(Point3::new(1.5, 1.5, 0.2), 1.0)));
}
