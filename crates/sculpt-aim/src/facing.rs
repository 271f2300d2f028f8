use std::f32::consts::TAU;
use std::fmt;

/// One sixteenth of a turn. Each octant spans two units; N straddles the
/// 0/2π seam with one unit on either side.
pub const UNIT: f32 = TAU / 16.0;

/// Coarse compass direction the camera is looking along on the XZ plane.
///
/// Yaw grows counter-clockwise when seen from above: N looks down +Z,
/// W down +X, S down -Z, E down -X.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Facing {
    #[default]
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

// Exclusive upper bound of each band in units, checked in order; each band
// starts (inclusive) where the previous one ends.
// Anything from 15 units up to and including 2π is N.
const BANDS: [(f32, Facing); 8] = [
    (1.0, Facing::N),
    (3.0, Facing::NW),
    (5.0, Facing::W),
    (7.0, Facing::SW),
    (9.0, Facing::S),
    (11.0, Facing::SE),
    (13.0, Facing::E),
    (15.0, Facing::NE),
];

fn from_units(u: f32) -> Facing {
    BANDS
        .iter()
        .find(|(upper, _)| u < *upper)
        .map(|(_, f)| *f)
        .unwrap_or(Facing::N)
}

impl Facing {
    pub const ALL: [Facing; 8] = [
        Facing::N,
        Facing::NE,
        Facing::E,
        Facing::SE,
        Facing::S,
        Facing::SW,
        Facing::W,
        Facing::NW,
    ];

    /// Octant owning `yaw` (radians). Values outside `[0, 2π]` are folded
    /// back onto the circle first, so every finite input has an answer;
    /// NaN falls through to N.
    pub fn from_yaw(yaw: f32) -> Facing {
        let y = if (0.0..=TAU).contains(&yaw) {
            yaw
        } else {
            yaw.rem_euclid(TAU)
        };
        from_units(y / UNIT)
    }

    #[inline]
    pub fn is_diagonal(self) -> bool {
        matches!(self, Facing::NE | Facing::SE | Facing::SW | Facing::NW)
    }

    pub fn label(self) -> &'static str {
        match self {
            Facing::N => "N",
            Facing::NE => "NE",
            Facing::E => "E",
            Facing::SE => "SE",
            Facing::S => "S",
            Facing::SW => "SW",
            Facing::W => "W",
            Facing::NW => "NW",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reclassify `yaw` against the currently committed facing.
///
/// Returns `current` untouched when the yaw still maps to it, so a caller
/// can compare the result with what it holds and only commit real changes.
pub fn classify_facing(yaw: f32, current: Facing) -> Facing {
    let next = Facing::from_yaw(yaw);
    if next == current { current } else { next }
}
