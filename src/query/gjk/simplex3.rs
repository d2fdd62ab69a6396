use crate::math::{Vector3, DEFAULT_EPSILON};
use crate::query::gjk::{EvolveSimplex, GjkOptions, Simplex, SimplexStep};
use crate::query::GjkError;
use crate::shape::Dim;
use crate::utils::{approximately_equal, triple_product};

impl EvolveSimplex<3> for Simplex<3> {
    const DIM: Dim = Dim::Three;

    fn evolve(&mut self, options: &GjkOptions) -> Result<SimplexStep<3>, GjkError> {
        match self.len() {
            2 => Ok(self.evolve_segment(options)),
            3 => Ok(self.evolve_triangle(options)),
            4 => Ok(self.evolve_tetrahedron(options)),
            size => Err(GjkError::UnsupportedSimplexSize {
                dim: Dim::Three,
                size,
            }),
        }
    }
}

impl Simplex<3> {
    fn evolve_segment(&mut self, options: &GjkOptions) -> SimplexStep<3> {
        let p1 = *self.cso_point(0);
        let p2 = *self.cso_point(1);

        let (Some(e), Some(o)) = (
            (p1 - p2).try_normalize(DEFAULT_EPSILON),
            (-p2.point.coords).try_normalize(DEFAULT_EPSILON),
        ) else {
            return SimplexStep::ContainsOrigin;
        };

        if approximately_equal(e.dot(&o), 1.0, options.precision_digits) {
            return SimplexStep::ContainsOrigin;
        }

        let mut dir = triple_product(&e, &o);
        if dir.dot(&o) < 0.0 {
            dir = -dir;
        }

        SimplexStep::toward(dir, options)
    }

    fn evolve_triangle(&mut self, options: &GjkOptions) -> SimplexStep<3> {
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

        let Some(mut normal) = e1.cross(&e2).try_normalize(DEFAULT_EPSILON) else {
            // Flat triangle.
            return SimplexStep::ContainsOrigin;
        };

        if approximately_equal(normal.dot(&o), 0.0, options.precision_digits) {
            // The origin lies on the plane of the triangle. Use the outward
            // normals of the two edges adjacent to the newest point to know if
            // it is inside of the triangle.
            let n1 = -triple_product(&e1, &e2);
            let n2 = -triple_product(&e2, &e1);

            if n1.dot(&o) <= 0.0 && n2.dot(&o) <= 0.0 {
                return SimplexStep::ContainsOrigin;
            }
        }

        if normal.dot(&o) < 0.0 {
            normal = -normal;
        }

        SimplexStep::Search(na::Unit::new_unchecked(normal))
    }

    fn evolve_tetrahedron(&mut self, options: &GjkOptions) -> SimplexStep<3> {
        let d = self.point(3);
        let to_origin = -d.coords;

        // Each face containing the newest point, with the index of the point
        // facing it.
        let faces = [(0, 1, 2), (1, 2, 0), (0, 2, 1)];

        for (i, j, opposite) in faces {
            let u = self.point(i) - d;
            let v = self.point(j) - d;
            let mut normal: Vector3 = u.cross(&v);

            if normal.dot(&(self.point(opposite) - d)) > 0.0 {
                normal = -normal;
            }

            if normal.dot(&to_origin) > 0.0 {
                match normal.try_normalize(DEFAULT_EPSILON) {
                    Some(normal) => {
                        if options.debug {
                            log::debug!("origin outside of the face ({}, {}, 3)", i, j);
                        }
                        let _ = self.remove(opposite);
                        return SimplexStep::Search(na::Unit::new_unchecked(normal));
                    }
                    None => {
                        if options.debug {
                            log::debug!(
                                "degenerate face ({}, {}, 3) with normal {:?}, skipped",
                                i,
                                j,
                                normal
                            );
                        }
                    }
                }
            }
        }

        SimplexStep::ContainsOrigin
    }
}
