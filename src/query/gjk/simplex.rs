use arrayvec::ArrayVec;
use na::Unit;

use crate::math::{Point, UnitVector, Vector, DEFAULT_EPSILON};
use crate::query::gjk::{CsoPoint, GjkOptions};
use crate::query::GjkError;
use crate::shape::Dim;

/// A simplex of up to four points of the Minkowski difference of two shapes.
///
/// Points are kept in insertion order, the most recent one last. Evolving the
/// simplex only ever removes points; it never reorders them.
#[derive(Clone, Debug)]
pub struct Simplex<const D: usize> {
    points: ArrayVec<CsoPoint<D>, 4>,
}

/// The outcome of one simplex evolution step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SimplexStep<const D: usize> {
    /// The origin lies inside, or on the boundary of, the simplex.
    ContainsOrigin,
    /// The origin is outside of the simplex: search toward this unit direction next.
    Search(UnitVector<D>),
}

impl<const D: usize> SimplexStep<D> {
    /// Searches toward `dir` once normalized.
    ///
    /// A direction too small to be normalized means that the origin lies on the
    /// affine hull of the simplex, which is reported as containment.
    pub fn toward(dir: Vector<D>, options: &GjkOptions) -> Self {
        match Unit::try_new(dir, DEFAULT_EPSILON) {
            Some(dir) => SimplexStep::Search(dir),
            None => {
                if options.debug {
                    log::debug!("degenerate search direction {:?}, origin on the simplex", dir);
                }
                SimplexStep::ContainsOrigin
            }
        }
    }
}

/// The dimension-specific state machine refining a simplex around the origin.
pub trait EvolveSimplex<const D: usize> {
    /// The dimension this state machine works in.
    const DIM: Dim;

    /// Determines whether this simplex contains the origin and, if it doesn't,
    /// drops the points that can't help enclosing it and returns the next
    /// search direction.
    fn evolve(&mut self, options: &GjkOptions) -> Result<SimplexStep<D>, GjkError>;
}

impl<const D: usize> Simplex<D> {
    /// Creates a simplex made of a single point.
    pub fn new(pt: CsoPoint<D>) -> Self {
        let mut points = ArrayVec::new();
        points.push(pt);
        Simplex { points }
    }

    /// Appends a point to this simplex.
    ///
    /// Fails if the simplex already has four points.
    pub fn push(&mut self, pt: CsoPoint<D>) -> Result<(), GjkError> {
        let size = self.points.len() + 1;
        self.points
            .try_push(pt)
            .map_err(|_| GjkError::UnsupportedSimplexSize {
                dim: if D == 2 { Dim::Two } else { Dim::Three },
                size,
            })
    }

    /// Removes the `i`-th point of this simplex, keeping the order of the others.
    pub fn remove(&mut self, i: usize) -> CsoPoint<D> {
        self.points.remove(i)
    }

    /// The number of points of this simplex.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is this simplex empty?
    ///
    /// This is never the case for a simplex built with [`Simplex::new`].
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The i-th CSO point of this simplex.
    pub fn cso_point(&self, i: usize) -> &CsoPoint<D> {
        &self.points[i]
    }

    /// The i-th point of this simplex.
    pub fn point(&self, i: usize) -> Point<D> {
        self.points[i].point
    }

    /// The CSO points of this simplex, oldest first.
    pub fn cso_points(&self) -> &[CsoPoint<D>] {
        &self.points
    }
}
