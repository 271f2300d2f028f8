use sculpt_geom::Vec3;
use std::f32::consts::{FRAC_PI_2, TAU};

pub const PITCH_LIMIT: f32 = 1.5;

/// Map any finite yaw onto (0, 2π]. Zero and whole turns land on 2π so the
/// value never sits exactly on the lower bound.
pub fn normalize_yaw(yaw: f32) -> f32 {
    if yaw > 0.0 && yaw <= TAU {
        return yaw;
    }
    let r = yaw.rem_euclid(TAU);
    if r > 0.0 { r } else { TAU }
}

#[inline]
pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    LookUp,
    LookDown,
    TurnLeft,
    TurnRight,
    Rise,
    Fall,
}

/// What a renderer needs to build a look-at view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

/// Free-flying first-person camera. Angles are radians: yaw 0 looks down
/// +Z and grows towards +X; positive pitch looks up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub speed: f32,
}

impl CameraState {
    pub fn new(position: Vec3, yaw: f32, pitch: f32, speed: f32) -> Self {
        Self {
            position,
            yaw: normalize_yaw(yaw),
            pitch: clamp_pitch(pitch),
            speed,
        }
    }

    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(cp * sy, sp, cp * cy)
    }

    /// Horizontal travel direction; shortens as the camera tilts.
    pub fn walk(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let cp = self.pitch.cos();
        Vec3::new(cp * sy, 0.0, cp * cy)
    }

    pub fn right(&self) -> Vec3 {
        let (s, c) = (self.yaw - FRAC_PI_2).sin_cos();
        Vec3::new(s, 0.0, c)
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    pub fn view(&self) -> View {
        View {
            eye: self.position,
            target: self.position + self.forward(),
            up: self.up(),
        }
    }

    pub fn apply_move(&mut self, m: Move) {
        let step = self.speed;
        let turn = 0.5 * self.speed;
        match m {
            Move::Forward => self.position += self.walk() * step,
            Move::Back => self.position -= self.walk() * step,
            Move::StrafeLeft => self.position -= self.right() * step,
            Move::StrafeRight => self.position += self.right() * step,
            Move::LookUp => self.pitch += turn,
            Move::LookDown => self.pitch -= turn,
            Move::TurnLeft => self.yaw += turn,
            Move::TurnRight => self.yaw -= turn,
            Move::Rise => self.position.y += turn,
            Move::Fall => self.position.y -= turn,
        }
        self.settle();
    }

    /// Mouse look relative to the window centre: a pointer left of centre
    /// turns left, above centre looks up.
    pub fn apply_mouse(&mut self, mouse: (f32, f32), display: (f32, f32)) {
        self.yaw += (display.0 / 2.0 - mouse.0) * self.speed / 100.0;
        self.pitch += (display.1 / 2.0 - mouse.1) * self.speed / 100.0;
        self.settle();
    }

    fn settle(&mut self) {
        self.yaw = normalize_yaw(self.yaw);
        self.pitch = clamp_pitch(self.pitch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-5
    }

    fn vapprox(a: Vec3, b: Vec3) -> bool {
        approx(a.x, b.x) && approx(a.y, b.y) && approx(a.z, b.z)
    }

    fn cam(yaw: f32, pitch: f32) -> CameraState {
        CameraState::new(Vec3::ZERO, yaw, pitch, 0.1)
    }

    #[test]
    fn yaw_normalization() {
        assert!(approx(normalize_yaw(1.0), 1.0));
        assert!(approx(normalize_yaw(0.0), TAU));
        assert!(approx(normalize_yaw(TAU), TAU));
        assert!(approx(normalize_yaw(TAU + 0.1), 0.1));
        assert!(approx(normalize_yaw(-0.1), TAU - 0.1));
        assert!(approx(normalize_yaw(-TAU), TAU));
    }

    #[test]
    fn pitch_clamps() {
        assert_eq!(cam(1.0, 3.0).pitch, PITCH_LIMIT);
        assert_eq!(cam(1.0, -3.0).pitch, -PITCH_LIMIT);
    }

    #[test]
    fn basis_at_north() {
        let c = cam(TAU, 0.0);
        assert!(vapprox(c.forward(), Vec3::new(0.0, 0.0, 1.0)));
        assert!(vapprox(c.right(), Vec3::new(-1.0, 0.0, 0.0)));
        assert!(vapprox(c.up(), Vec3::UP));
    }

    #[test]
    fn strafe_left_moves_towards_west() {
        let mut c = cam(TAU, 0.0);
        c.apply_move(Move::StrafeLeft);
        assert!(vapprox(c.position, Vec3::new(0.1, 0.0, 0.0)));
        c.apply_move(Move::Forward);
        assert!(vapprox(c.position, Vec3::new(0.1, 0.0, 0.1)));
        c.apply_move(Move::Rise);
        assert!(approx(c.position.y, 0.05));
    }

    #[test]
    fn turning_wraps_across_the_seam() {
        let mut c = cam(0.02, 0.0);
        c.apply_move(Move::TurnRight);
        assert!(approx(c.yaw, TAU - 0.03));
        c.apply_move(Move::TurnLeft);
        c.apply_move(Move::TurnLeft);
        assert!(approx(c.yaw, 0.07));
    }

    #[test]
    fn look_up_stops_at_limit() {
        let mut c = cam(1.0, 1.48);
        c.apply_move(Move::LookUp);
        assert_eq!(c.pitch, PITCH_LIMIT);
    }

    #[test]
    fn mouse_left_of_centre_turns_left() {
        let mut c = cam(1.0, 0.0);
        c.apply_mouse((300.0, 300.0), (800.0, 600.0));
        // (400 - 300) * 0.1 / 100 = 0.1
        assert!(approx(c.yaw, 1.1));
        assert!(approx(c.pitch, 0.0));
    }

    #[test]
    fn view_targets_one_unit_ahead() {
        let c = CameraState::new(Vec3::new(0.0, 0.0, -3.0), TAU, 0.0, 0.1);
        let v = c.view();
        assert!(vapprox(v.target, Vec3::new(0.0, 0.0, -2.0)));
    }
}
