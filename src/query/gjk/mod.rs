//! The GJK algorithm for intersection tests.

pub use self::cso_point::CsoPoint;
pub use self::gjk::*;
pub use self::gjk_options::GjkOptions;
pub use self::simplex::{EvolveSimplex, Simplex, SimplexStep};

mod cso_point;
mod gjk;
mod gjk_options;
mod simplex;
mod simplex2;
mod simplex3;
