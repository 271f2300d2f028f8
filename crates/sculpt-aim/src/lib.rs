//! Camera orientation classification and voxel targeting.
//!
//! Everything here is a pure function of its inputs: the owner of the
//! camera state passes yaw, pitch, and reach in and decides what to commit.
#![forbid(unsafe_code)]

pub mod facing;
pub mod reach;
pub mod target;

pub use facing::{Facing, UNIT, classify_facing};
pub use reach::Reach;
pub use target::{TargetOffset, resolve_offset};
