//! Non-persistent geometric queries.
//!
//! The main entry point is [`query::collides()`](collides), which determines
//! whether two [`Shape`](crate::shape::Shape)s of the same dimension intersect.
//! Finer control over the underlying GJK algorithm is given by
//! [`query::collides_with_options()`](collides_with_options) and
//! [`query::intersection_test_with_params()`](intersection_test_with_params).

pub use self::error::GjkError;
pub use self::gjk::{GjkOptions, GjkResult};
pub use self::intersection_test::{
    collides, collides_with_options, intersection_test, intersection_test_with_params,
};

mod error;
pub mod gjk;
