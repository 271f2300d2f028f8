use std::fmt;

/// How many cells away, per axis, a voxel may be targeted.
///
/// Always within `[Reach::MIN, Reach::MAX]`; out-of-range requests are
/// clamped rather than rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reach(i32);

impl Reach {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 10;

    pub fn new(cells: i32) -> Self {
        Reach(cells.clamp(Self::MIN, Self::MAX))
    }

    #[inline]
    pub fn get(self) -> i32 {
        self.0
    }

    /// Step the reach by `delta`, clamping into range at both ends.
    pub fn adjust(self, delta: i32) -> Reach {
        Reach::new(self.0.saturating_add(delta))
    }
}

impl Default for Reach {
    fn default() -> Self {
        Reach(5)
    }
}

impl fmt::Display for Reach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
