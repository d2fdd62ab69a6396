extern crate nalgebra as na;

use minkowski::query::{self, GjkOptions, GjkResult};
use minkowski::shape::Shape;
use na::Point3;

fn main() {
    let mut cube = Vec::new();
    for x in [-0.5, 0.5] {
        for y in [-0.5, 0.5] {
            for z in [-0.5, 0.5] {
                cube.push(Point3::new(x, y, z));
            }
        }
    }

    let polyhedron = Shape::polyhedron(cube, Point3::origin());
    let sphere_intersecting = Shape::sphere(Point3::new(0.8, 0.2, 0.1), 0.4);
    let sphere_too_far = Shape::sphere(Point3::new(2.0, 0.0, 0.0), 0.4);

    let options = GjkOptions::default().with_debug_mode(true);

    let res_intersecting =
        query::intersection_test_with_params(&polyhedron, &sphere_intersecting, &options)
            .unwrap();
    let res_too_far =
        query::intersection_test_with_params(&polyhedron, &sphere_too_far, &options).unwrap();

    assert_eq!(res_intersecting, GjkResult::Intersection);
    assert_eq!(res_too_far, GjkResult::Separated);

    println!("3D intersection tests passed.");
}
