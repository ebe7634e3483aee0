//! Batched operations on homogeneous point sets and generator stacks.
//! Rows are processed in parallel.

pub mod batch;
pub mod metric;
pub mod utils;

pub use self::batch::{
    array3_to_generators, generators_to_array3, origin_images, transform_points,
    translation_distances,
};
pub use self::metric::{geometric_distance_batched, metric_inner, normalize_batched};
