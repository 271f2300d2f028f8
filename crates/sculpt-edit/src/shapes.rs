use crate::store::VoxelStore;
use sculpt_geom::IVec3;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Sphere,
    Cube,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Sphere => "sphere",
            Shape::Cube => "cube",
        })
    }
}

/// Fill a `size`-wide block of cells starting at the origin and growing
/// along +X, +Y, +Z. Returns how many cells were newly occupied.
///
/// The sphere keeps cells whose distance from the centre cell is at most
/// the radius; both centre and radius are `size / 2` in integer cells, so
/// even sizes bias towards the low corner.
pub fn fill_shape(store: &mut VoxelStore, shape: Shape, size: i32) -> usize {
    let half = size / 2;
    let r = half as f32;
    let mut added = 0;
    for z in 0..size {
        for y in 0..size {
            for x in 0..size {
                let keep = match shape {
                    Shape::Cube => true,
                    Shape::Sphere => {
                        let (dx, dy, dz) = (x - half, y - half, z - half);
                        ((dx * dx + dy * dy + dz * dz) as f32).sqrt() <= r
                    }
                };
                if keep && store.insert(IVec3::new(x, y, z)) {
                    added += 1;
                }
            }
        }
    }
    log::debug!("filled {} size={} cells={}", shape, size, added);
    added
}
