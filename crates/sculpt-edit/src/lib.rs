//! Placed-voxel storage and shape fills.
#![forbid(unsafe_code)]

pub mod shapes;
pub mod store;

pub use shapes::{Shape, fill_shape};
pub use store::{VoxelStore, VoxelStoreStats};
