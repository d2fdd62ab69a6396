use crate::math::DEFAULT_EPSILON;
use crate::query::gjk::{EvolveSimplex, GjkOptions, Simplex, SimplexStep};
use crate::query::GjkError;
use crate::shape::Dim;
use crate::utils::{approximately_equal, triple_product2};

impl EvolveSimplex<2> for Simplex<2> {
    const DIM: Dim = Dim::Two;

    fn evolve(&mut self, options: &GjkOptions) -> Result<SimplexStep<2>, GjkError> {
        match self.len() {
            2 => Ok(self.evolve_segment(options)),
            3 => Ok(self.evolve_triangle(options)),
            size => Err(GjkError::UnsupportedSimplexSize {
                dim: Dim::Two,
                size,
            }),
        }
    }
}

impl Simplex<2> {
    fn evolve_segment(&mut self, options: &GjkOptions) -> SimplexStep<2> {
        let p1 = *self.cso_point(0);
        let p2 = *self.cso_point(1);

        let (Some(e), Some(o)) = (
            (p1 - p2).try_normalize(DEFAULT_EPSILON),
            (-p2.point.coords).try_normalize(DEFAULT_EPSILON),
        ) else {
            return SimplexStep::ContainsOrigin;
        };

        if approximately_equal(e.dot(&o), 1.0, options.precision_digits) {
            // The origin is on the segment.
            return SimplexStep::ContainsOrigin;
        }

        // Already oriented toward the origin.
        SimplexStep::toward(triple_product2(&e, &o), options)
    }

    fn evolve_triangle(&mut self, options: &GjkOptions) -> SimplexStep<2> {
        let p1 = *self.cso_point(0);
        let p2 = *self.cso_point(1);
        let p3 = *self.cso_point(2);

        let (Some(e1), Some(e2), Some(o)) = (
            (p1 - p3).try_normalize(DEFAULT_EPSILON),
            (p2 - p3).try_normalize(DEFAULT_EPSILON),
            (-p3.point.coords).try_normalize(DEFAULT_EPSILON),
        ) else {
            return SimplexStep::ContainsOrigin;
        };

        let digits = options.precision_digits;
        if approximately_equal(o.dot(&e1).abs(), 1.0, digits)
            || approximately_equal(o.dot(&e2).abs(), 1.0, digits)
        {
            // The origin is on one of the edges adjacent to the newest point.
            return SimplexStep::ContainsOrigin;
        }

        // Outward normals of the edges p1-p3 and p2-p3.
        let n1 = -triple_product2(&e1, &e2);
        let n2 = -triple_product2(&e2, &e1);

        if n1.dot(&o) > 0.0 {
            let _ = self.remove(1);
            SimplexStep::toward(n1, options)
        } else if n2.dot(&o) > 0.0 {
            let _ = self.remove(0);
            SimplexStep::toward(n2, options)
        } else {
            SimplexStep::ContainsOrigin
        }
    }
}
