use crate::math::{Point, UnitVector, Vector};
use crate::query::GjkError;
use crate::shape::SupportMap;
use crate::utils;

/// A convex polytope: a polygon in 2D, a polyhedron in 3D.
///
/// The vertices are stored relative to the polytope's position; the
/// world-space vertices are `vertex + position`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Polytope<const D: usize> {
    vertices: Vec<Point<D>>,
    position: Point<D>,
}

/// A 2D convex polygon.
pub type ConvexPolygon = Polytope<2>;

/// A 3D convex polyhedron.
pub type ConvexPolyhedron = Polytope<3>;

impl<const D: usize> Polytope<D> {
    /// Creates a new polytope from its vertices, expressed relative to `position`.
    ///
    /// The vertices are assumed, but not checked, to be the vertices of a
    /// convex set. An empty vertex list is accepted here but every support
    /// query on it fails with [`GjkError::EmptyShape`].
    pub fn new(vertices: Vec<Point<D>>, position: Point<D>) -> Self {
        Polytope { vertices, position }
    }

    /// The vertices of this polytope, relative to its position.
    #[inline]
    pub fn vertices(&self) -> &[Point<D>] {
        &self.vertices
    }

    /// The position of this polytope.
    #[inline]
    pub fn position(&self) -> Point<D> {
        self.position
    }

    /// Iterates over the world-space vertices of this polytope.
    pub fn world_vertices(&self) -> impl Iterator<Item = Point<D>> + '_ {
        self.vertices.iter().map(move |v| *v + self.position.coords)
    }

    /// This polytope moved by `offset`.
    pub fn translated(&self, offset: &Vector<D>) -> Self {
        Polytope::new(self.vertices.clone(), self.position + offset)
    }
}

impl<const D: usize> SupportMap<D> for Polytope<D> {
    #[inline]
    fn support_point_toward(&self, dir: &UnitVector<D>) -> Result<Point<D>, GjkError> {
        utils::point_cloud_support_point(dir.as_ref(), self.world_vertices())
            .ok_or(GjkError::EmptyShape)
    }
}
