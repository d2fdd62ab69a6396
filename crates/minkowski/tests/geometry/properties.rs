use super::{collide, cube, square};
use minkowski::math::{Point2, Point3, Vector2, Vector3};
use minkowski::query::{self, GjkOptions, GjkResult};
use minkowski::shape::{Dim, Shape};

#[test]
fn shapes_collide_with_themselves() {
    let shapes = [
        square(1.0, 2.0),
        Shape::circle(Point2::new(-3.0, 0.5), 0.7),
        cube(1.0, 2.0, 3.0),
        Shape::sphere(Point3::new(0.0, -1.0, 4.0), 0.2),
    ];

    for shape in &shapes {
        assert!(collide(shape, shape));
    }
}

#[test]
fn translating_both_shapes_preserves_the_verdict() {
    let pairs = [
        (square(0.0, 0.0), square(0.5, 0.5), true),
        (square(0.0, 0.0), square(1.1, 0.0), false),
        (
            square(0.0, 0.0),
            Shape::circle(Point2::new(1.2, 0.3), 0.8),
            true,
        ),
    ];
    let offset = Vector2::new(7.0, -3.0);

    for (a, b, expected) in &pairs {
        let moved_a = a.translated(&offset).unwrap();
        let moved_b = b.translated(&offset).unwrap();
        assert_eq!(collide(a, b), *expected);
        assert_eq!(collide(&moved_a, &moved_b), *expected);
    }

    let a = cube(0.0, 0.0, 0.0);
    let b = Shape::sphere(Point3::new(0.8, 0.2, 0.1), 0.4);
    let offset = Vector3::new(-2.0, 5.0, 1.0);
    assert!(collide(
        &a.translated(&offset).unwrap(),
        &b.translated(&offset).unwrap()
    ));
}

#[test]
fn exhausted_iteration_budget_is_not_a_collision() {
    let options = GjkOptions::default().with_max_iterations(Dim::Two, 0);
    let a = square(0.0, 0.0);
    let b = square(0.5, 0.5);

    assert_eq!(
        query::intersection_test_with_params(&a, &b, &options),
        Ok(GjkResult::IterationLimit)
    );
    assert_eq!(query::collides_with_options(&a, &b, &options), Ok(false));

    // The spatial budget doesn't apply to planar shapes.
    let options = GjkOptions::default().with_max_iterations(Dim::Three, 0);
    assert_eq!(query::collides_with_options(&a, &b, &options), Ok(true));
}

#[test]
fn separation_is_reported() {
    assert_eq!(
        query::intersection_test(&square(0.0, 0.0), &square(10.0, 10.0)),
        Ok(GjkResult::Separated)
    );
}

#[test]
fn debug_mode_only_logs() {
    let mut options = GjkOptions::default();
    options.set_debug_mode(true);

    let a = cube(0.0, 0.0, 0.0);
    let b = cube(0.5, 0.3, 0.2);
    let c = cube(1.5, 0.2, 0.1);

    assert_eq!(query::collides_with_options(&a, &b, &options), Ok(true));
    assert_eq!(query::collides_with_options(&a, &c, &options), Ok(false));
}

#[test]
fn precision_digits_bound_the_reported_gap() {
    // Separated by a 0.004 gap, well under 1% of the CSO size.
    let a = square(0.0, 0.0);
    let b = square(1.004, 0.3);

    assert!(collide(&a, &b));

    let precise = GjkOptions::default().with_precision_digits(8);
    assert_eq!(query::collides_with_options(&a, &b, &precise), Ok(false));
    assert_eq!(query::collides_with_options(&b, &a, &precise), Ok(false));
}
