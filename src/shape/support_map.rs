//! Traits for support mapping based shapes.

use crate::math::{Point, UnitVector};
use crate::query::GjkError;

/// Traits of convex shapes representable by a support mapping function.
///
/// The points returned by a support map are expressed in world-space: the
/// position of the shape is already applied to them, exactly once.
pub trait SupportMap<const D: usize> {
    /// Evaluates the support function of this shape toward the unit direction `dir`.
    ///
    /// A support function is a function associating a vector to the shape point which maximizes
    /// their dot product.
    fn support_point_toward(&self, dir: &UnitVector<D>) -> Result<Point<D>, GjkError>;
}
