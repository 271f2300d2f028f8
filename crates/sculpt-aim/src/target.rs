use crate::facing::{Facing, UNIT};
use crate::reach::Reach;
use sculpt_geom::{IVec3, Vec3};
use std::f32::consts::TAU;

/// Cell displacement from the camera's rounded position to the targeted
/// cell. Each component lies in `[-reach, reach]` for the reach it was
/// resolved with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TargetOffset(pub IVec3);

impl TargetOffset {
    #[inline]
    pub fn dx(self) -> i32 {
        self.0.x
    }

    #[inline]
    pub fn dy(self) -> i32 {
        self.0.y
    }

    #[inline]
    pub fn dz(self) -> i32 {
        self.0.z
    }

    /// Absolute cell targeted from a camera standing at `eye`.
    #[inline]
    pub fn apply(self, eye: Vec3) -> IVec3 {
        eye.round() + self.0
    }
}

// Tenths of a radian, floored.
#[inline]
fn fine(p: f32) -> i32 {
    (p * 10.0).floor() as i32
}

/// Offset of the cell the camera is aiming at.
///
/// Diagonal facings step a full reach on both horizontal axes. Cardinal
/// facings step a full reach forward and slide sideways with the yaw's
/// residual inside the octant, so sweeping across N moves the target
/// smoothly from the NE column to the NW column. The vertical component is
/// the pitch in tenths of a radian. Every axis is clamped to the reach.
pub fn resolve_offset(facing: Facing, yaw: f32, pitch: f32, reach: Reach) -> TargetOffset {
    let r = reach.get();
    let (mut x, mut z) = (0i32, 0i32);

    match facing {
        Facing::N => {
            // N straddles the seam: residual is measured from 0 on the low
            // side and from 2π on the high side.
            let p = if yaw < UNIT { yaw } else { yaw - TAU };
            z += r;
            x += fine(p);
        }
        Facing::E => {
            x -= r;
            z -= fine(12.0 * UNIT - yaw);
        }
        Facing::S => {
            z -= r;
            x += fine(8.0 * UNIT - yaw);
        }
        Facing::W => {
            x += r;
            z += fine(4.0 * UNIT - yaw);
        }
        Facing::NE => {
            z += r;
            x -= r;
        }
        Facing::SE => {
            z -= r;
            x -= r;
        }
        Facing::SW => {
            z -= r;
            x += r;
        }
        Facing::NW => {
            z += r;
            x += r;
        }
    }

    let y = fine(pitch).clamp(-r, r);
    TargetOffset(IVec3::new(x, y, z).clamp_each(-r, r))
}
