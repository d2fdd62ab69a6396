//! The Gilbert-Johnson-Keerthi intersection test.
//!
//! # How it works
//!
//! Two convex shapes intersect if and only if their Minkowski difference (also
//! called Configuration Space Obstacle, or CSO) contains the origin. GJK never
//! builds the CSO: it samples it through the support functions of both shapes
//! and maintains a simplex of CSO points (a segment, a triangle, or a
//! tetrahedron) that it drags toward the origin:
//!
//! 1. Start with the CSO support point along the direction joining both shapes.
//! 2. Find the CSO support point toward the origin. If it does not go past the
//!    origin, nothing in the CSO does: the shapes are disjoint.
//! 3. Add it to the simplex. If the simplex now encloses the origin, the shapes
//!    intersect. Otherwise drop the points that can't help, pick the next
//!    direction toward the origin, and go back to 2.
//!
//! Shapes that merely touch are reported as intersecting.

use na::Unit;

use crate::math::DEFAULT_EPSILON;
use crate::query::gjk::{CsoPoint, EvolveSimplex, GjkOptions, Simplex, SimplexStep};
use crate::query::GjkError;
use crate::shape::Body;

/// Results of the GJK intersection test.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GjkResult {
    /// The shapes intersect, or touch.
    Intersection,
    /// A direction along which the shapes are separated was found.
    Separated,
    /// The iteration limit was reached before reaching a verdict.
    ///
    /// This is treated as no intersection by [`collides`](crate::query::collides).
    IterationLimit,
}

impl GjkResult {
    /// Does this result mean the shapes intersect?
    #[inline]
    pub fn is_intersection(self) -> bool {
        self == GjkResult::Intersection
    }
}

/// Runs the GJK intersection test between two bodies of the same dimension.
///
/// Both bodies are expressed in world-space. Reaching the iteration limit of
/// `options` yields [`GjkResult::IterationLimit`].
pub fn intersection_test<const D: usize>(
    g1: &Body<D>,
    g2: &Body<D>,
    options: &GjkOptions,
) -> Result<GjkResult, GjkError>
where
    Simplex<D>: EvolveSimplex<D>,
{
    let result = run(g1, g2, options)?;

    if options.debug {
        log::debug!("GJK {} verdict: {:?}", <Simplex<D> as EvolveSimplex<D>>::DIM, result);
    }

    Ok(result)
}

fn run<const D: usize>(
    g1: &Body<D>,
    g2: &Body<D>,
    options: &GjkOptions,
) -> Result<GjkResult, GjkError>
where
    Simplex<D>: EvolveSimplex<D>,
{
    let p1 = g1.position();
    let p2 = g2.position();

    if relative_eq!(p1, p2) {
        return Ok(GjkResult::Intersection);
    }

    let Some(mut dir) = Unit::try_new(p2 - p1, DEFAULT_EPSILON) else {
        return Ok(GjkResult::Intersection);
    };

    let initial = CsoPoint::from_shapes_toward(g1, g2, &dir)?;
    let Some(initial_dir) = Unit::try_new(-initial.point.coords, DEFAULT_EPSILON) else {
        // The first support point is the origin itself: the shapes touch.
        return Ok(GjkResult::Intersection);
    };

    let mut simplex = Simplex::new(initial);
    dir = initial_dir;

    let max_iterations = options.max_iterations(<Simplex<D> as EvolveSimplex<D>>::DIM);

    for niter in 0..max_iterations {
        let support = CsoPoint::from_shapes_toward(g1, g2, &dir)?;

        if options.debug {
            log::debug!(
                "GJK iteration {}: direction {:?}, support point {:?}, simplex size {}",
                niter,
                dir.as_ref(),
                support.point.coords,
                simplex.len()
            );
        }

        let Some(to_origin) = Unit::try_new(-support.point.coords, DEFAULT_EPSILON) else {
            return Ok(GjkResult::Intersection);
        };

        if to_origin.dot(&*dir) > 0.0 {
            // The support point didn't reach the origin.
            return Ok(GjkResult::Separated);
        }

        simplex.push(support)?;

        match simplex.evolve(options)? {
            SimplexStep::ContainsOrigin => return Ok(GjkResult::Intersection),
            SimplexStep::Search(next) => dir = next,
        }
    }

    if options.debug {
        log::debug!("GJK reached its iteration limit ({})", max_iterations);
    }

    Ok(GjkResult::IterationLimit)
}
