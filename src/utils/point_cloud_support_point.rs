use crate::math::{Point, Vector};

/// Computes the support point of a cloud of points.
///
/// Ties are resolved in favor of the first point encountered. Returns `None`
/// if the cloud is empty.
#[inline]
pub fn point_cloud_support_point<const D: usize>(
    dir: &Vector<D>,
    points: impl IntoIterator<Item = Point<D>>,
) -> Option<Point<D>> {
    let mut points = points.into_iter();
    let mut best_pt = points.next()?;
    let mut best_dot = best_pt.coords.dot(dir);

    for p in points {
        let dot = p.coords.dot(dir);

        if dot > best_dot {
            best_dot = dot;
            best_pt = p;
        }
    }

    Some(best_pt)
}
