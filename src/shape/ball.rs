use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::GjkError;
use crate::shape::SupportMap;

/// A ball: a circle in 2D, a sphere in 3D.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball<const D: usize> {
    /// The center of the ball.
    pub center: Point<D>,
    /// The radius of the ball.
    pub radius: Real,
}

/// A 2D ball.
pub type Circle = Ball<2>;

/// A 3D ball.
pub type Sphere = Ball<3>;

impl<const D: usize> Ball<D> {
    /// Creates a new ball with the given center and radius.
    #[inline]
    pub fn new(center: Point<D>, radius: Real) -> Ball<D> {
        Ball { center, radius }
    }

    /// This ball moved by `offset`.
    #[inline]
    pub fn translated(&self, offset: &Vector<D>) -> Ball<D> {
        Ball::new(self.center + offset, self.radius)
    }
}

impl<const D: usize> SupportMap<D> for Ball<D> {
    #[inline]
    fn support_point_toward(&self, dir: &UnitVector<D>) -> Result<Point<D>, GjkError> {
        Ok(self.center + dir.as_ref() * self.radius)
    }
}
