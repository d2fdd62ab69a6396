use crate::math::{Vector2, Vector3};

/// Computes the vector triple product `(a × b) × a`.
///
/// The result is orthogonal to `a`, lies in the plane spanned by `a` and `b`,
/// and points toward the side of `a` where `b` is.
#[inline]
pub fn triple_product(a: &Vector3, b: &Vector3) -> Vector3 {
    a.cross(b).cross(a)
}

/// The planar version of [`triple_product`].
///
/// Both operands are lifted to 3D with a zero `z` component, and the result is
/// projected back onto the plane by dropping that component.
#[inline]
pub fn triple_product2(a: &Vector2, b: &Vector2) -> Vector2 {
    let a = Vector3::new(a.x, a.y, 0.0);
    let b = Vector3::new(b.x, b.y, 0.0);
    triple_product(&a, &b).xy()
}
