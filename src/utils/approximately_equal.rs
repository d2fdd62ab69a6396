use crate::math::Real;

/// Tests whether `a` and `b` are equal once both are rounded to `digits` decimal digits.
///
/// This is how the simplex evolution decides that a dot product between unit
/// vectors is "one" (colinear) or "zero" (coplanar).
#[inline]
pub fn approximately_equal(a: Real, b: Real, digits: u32) -> bool {
    let scale = (10.0 as Real).powi(digits as i32);
    (a * scale).round() == (b * scale).round()
}
