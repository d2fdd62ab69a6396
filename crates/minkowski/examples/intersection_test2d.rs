extern crate nalgebra as na;

use minkowski::query;
use minkowski::shape::Shape;
use na::Point2;

fn main() {
    let square = vec![
        Point2::new(-0.5, -0.5),
        Point2::new(0.5, -0.5),
        Point2::new(0.5, 0.5),
        Point2::new(-0.5, 0.5),
    ];

    let square_pos = Point2::origin();
    let circle_pos_intersecting = Point2::new(1.2, 0.3);
    let circle_pos_too_far = Point2::new(1.5, 1.5);

    let polygon = Shape::polygon(square.clone(), square_pos);
    let circle_intersecting = Shape::circle(circle_pos_intersecting, 0.8);
    let circle_too_far = Shape::circle(circle_pos_too_far, 0.5);
    let touching = Shape::polygon(square, Point2::new(1.0, 1.0));

    assert!(query::collides(&polygon, &circle_intersecting).unwrap());
    assert!(!query::collides(&polygon, &circle_too_far).unwrap());
    assert!(query::collides(&polygon, &touching).unwrap());

    println!("2D intersection tests passed.");
}
