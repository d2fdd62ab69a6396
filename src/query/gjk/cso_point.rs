use crate::math::{Point, UnitVector, Vector};
use crate::query::GjkError;
use crate::shape::SupportMap;
use core::ops::Sub;

/// A point of a Configuration-Space Obstacle.
///
/// A Configuration-Space Obstacle (CSO) is the result of the
/// Minkowski Difference of two solids. In other words, each of its
/// points correspond to the difference of two point, each belonging
/// to a different solid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CsoPoint<const D: usize> {
    /// The point on the CSO. This is equal to `self.orig1 - self.orig2`.
    pub point: Point<D>,
    /// The original point on the first shape used to compute `self.point`.
    pub orig1: Point<D>,
    /// The original point on the second shape used to compute `self.point`.
    pub orig2: Point<D>,
}

impl<const D: usize> CsoPoint<D> {
    /// Initializes a CSO point with `orig1 - orig2`.
    pub fn new(orig1: Point<D>, orig2: Point<D>) -> Self {
        CsoPoint {
            point: Point::from(orig1 - orig2),
            orig1,
            orig2,
        }
    }

    /// Computes the support point of the CSO of `g1` and `g2` toward the unit direction `dir`.
    ///
    /// Both shapes are sampled in world-space: `g1` toward `dir`, `g2` toward `-dir`.
    pub fn from_shapes_toward<G1, G2>(g1: &G1, g2: &G2, dir: &UnitVector<D>) -> Result<Self, GjkError>
    where
        G1: ?Sized + SupportMap<D>,
        G2: ?Sized + SupportMap<D>,
    {
        let sp1 = g1.support_point_toward(dir)?;
        let sp2 = g2.support_point_toward(&-*dir)?;

        Ok(CsoPoint::new(sp1, sp2))
    }
}

impl<const D: usize> Sub<CsoPoint<D>> for CsoPoint<D> {
    type Output = Vector<D>;

    #[inline]
    fn sub(self, rhs: CsoPoint<D>) -> Vector<D> {
        self.point - rhs.point
    }
}
