use core::fmt;

use crate::math::{Point, Point2, Point3, Real, UnitVector, UnitVector2, UnitVector3, Vector};
use crate::query::GjkError;
use crate::shape::{Ball, Polytope, SupportMap};

/// The dimension of the space a shape lives in.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dim {
    /// The plane.
    Two,
    /// The space.
    Three,
}

impl Dim {
    /// The number of coordinates of a point of this dimension.
    pub fn value(self) -> usize {
        match self {
            Dim::Two => 2,
            Dim::Three => 3,
        }
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dim::Two => f.pad("2D"),
            Dim::Three => f.pad("3D"),
        }
    }
}

/// A convex body of dimension `D`: a polytope or a ball.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Body<const D: usize> {
    /// A convex polygon or polyhedron.
    Polytope(Polytope<D>),
    /// A circle or sphere.
    Ball(Ball<D>),
}

impl<const D: usize> Body<D> {
    /// The position of this body: the center of a ball, the offset of a polytope.
    #[inline]
    pub fn position(&self) -> Point<D> {
        match self {
            Body::Polytope(p) => p.position(),
            Body::Ball(b) => b.center,
        }
    }

    /// Is this body a ball?
    #[inline]
    pub fn is_ball(&self) -> bool {
        matches!(self, Body::Ball(_))
    }

    /// This body moved by `offset`.
    pub fn translated(&self, offset: &Vector<D>) -> Self {
        match self {
            Body::Polytope(p) => Body::Polytope(p.translated(offset)),
            Body::Ball(b) => Body::Ball(b.translated(offset)),
        }
    }
}

impl<const D: usize> SupportMap<D> for Body<D> {
    #[inline]
    fn support_point_toward(&self, dir: &UnitVector<D>) -> Result<Point<D>, GjkError> {
        match self {
            Body::Polytope(p) => p.support_point_toward(dir),
            Body::Ball(b) => b.support_point_toward(dir),
        }
    }
}

/// Conversions between a [`Shape`] and the [`Body`] of a given dimension it wraps.
///
/// Implemented by [`Shape`] for `D = 2` and `D = 3`.
pub trait AsBody<const D: usize> {
    /// The body of dimension `D` of this shape, or a `DimensionMismatch` error.
    fn as_body(&self) -> Result<&Body<D>, GjkError>;
    /// Wraps a body of dimension `D` into a shape.
    fn from_body(body: Body<D>) -> Self;
}

/// A convex shape participating in an intersection query.
///
/// Shapes are immutable: every query reads them, none modifies them.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A 2D shape.
    Planar(Body<2>),
    /// A 3D shape.
    Spatial(Body<3>),
}

impl AsBody<2> for Shape {
    #[inline]
    fn as_body(&self) -> Result<&Body<2>, GjkError> {
        match self {
            Shape::Planar(body) => Ok(body),
            Shape::Spatial(_) => Err(GjkError::DimensionMismatch {
                expected: Dim::Two,
                found: Dim::Three,
            }),
        }
    }

    #[inline]
    fn from_body(body: Body<2>) -> Self {
        Shape::Planar(body)
    }
}

impl AsBody<3> for Shape {
    #[inline]
    fn as_body(&self) -> Result<&Body<3>, GjkError> {
        match self {
            Shape::Spatial(body) => Ok(body),
            Shape::Planar(_) => Err(GjkError::DimensionMismatch {
                expected: Dim::Three,
                found: Dim::Two,
            }),
        }
    }

    #[inline]
    fn from_body(body: Body<3>) -> Self {
        Shape::Spatial(body)
    }
}

impl Shape {
    /// Creates a 2D convex polygon from its vertices, expressed relative to `position`.
    pub fn polygon(vertices: Vec<Point2>, position: Point2) -> Shape {
        Shape::Planar(Body::Polytope(Polytope::new(vertices, position)))
    }

    /// Creates a 3D convex polyhedron from its vertices, expressed relative to `position`.
    pub fn polyhedron(vertices: Vec<Point3>, position: Point3) -> Shape {
        Shape::Spatial(Body::Polytope(Polytope::new(vertices, position)))
    }

    /// Creates a ball centered at `center`.
    ///
    /// The dimension of the shape is the one of `center`: a 2D center gives a
    /// circle, a 3D center gives a sphere.
    pub fn circle<const D: usize>(center: Point<D>, radius: Real) -> Shape
    where
        Shape: AsBody<D>,
    {
        <Shape as AsBody<D>>::from_body(Body::Ball(Ball::new(center, radius)))
    }

    /// Creates a sphere centered at `center`.
    pub fn sphere(center: Point3, radius: Real) -> Shape {
        Shape::circle(center, radius)
    }

    /// The dimension of this shape.
    pub fn dim(&self) -> Dim {
        match self {
            Shape::Planar(_) => Dim::Two,
            Shape::Spatial(_) => Dim::Three,
        }
    }

    /// Is this shape a circle or a sphere?
    pub fn is_ball(&self) -> bool {
        match self {
            Shape::Planar(body) => body.is_ball(),
            Shape::Spatial(body) => body.is_ball(),
        }
    }

    /// The body of dimension `D` of this shape.
    #[inline]
    pub fn body<const D: usize>(&self) -> Result<&Body<D>, GjkError>
    where
        Self: AsBody<D>,
    {
        <Self as AsBody<D>>::as_body(self)
    }

    /// The position of this shape, if it has dimension `D`.
    pub fn position<const D: usize>(&self) -> Result<Point<D>, GjkError>
    where
        Self: AsBody<D>,
    {
        Ok(self.body::<D>()?.position())
    }

    /// This shape moved by `offset`, if it has the dimension of `offset`.
    pub fn translated<const D: usize>(&self, offset: &Vector<D>) -> Result<Shape, GjkError>
    where
        Self: AsBody<D>,
    {
        Ok(<Shape as AsBody<D>>::from_body(
            self.body::<D>()?.translated(offset),
        ))
    }

    /// The world-space support point of this 2D shape toward `dir`.
    pub fn support_point2(&self, dir: &UnitVector2) -> Result<Point2, GjkError> {
        self.body::<2>()?.support_point_toward(dir)
    }

    /// The world-space support point of this 3D shape toward `dir`.
    pub fn support_point3(&self, dir: &UnitVector3) -> Result<Point3, GjkError> {
        self.body::<3>()?.support_point_toward(dir)
    }
}
