//! Various unsorted geometrical and logical operators.

pub use self::approximately_equal::approximately_equal;
pub use self::point_cloud_support_point::point_cloud_support_point;
pub use self::triple_product::{triple_product, triple_product2};

mod approximately_equal;
mod point_cloud_support_point;
mod triple_product;
