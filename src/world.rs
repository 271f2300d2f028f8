use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::camera::{CameraState, Move};
use crate::config::SculptConfig;
use sculpt_aim::{Facing, Reach, TargetOffset, classify_facing, resolve_offset};
use sculpt_edit::{Shape, VoxelStore, fill_shape};
use sculpt_geom::{Aabb, IVec3};

/// Slightly larger than a cell so the cursor outline shows around a voxel.
pub const CURSOR_HALF_EXTENT: f32 = 0.52;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Place,
    Remove,
    Regenerate(Shape),
    Reach(i32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Placed(IVec3),
    AlreadyOccupied(IVec3),
    Removed(IVec3),
    NothingToRemove(IVec3),
    Regenerated { shape: Shape, size: i32, cells: usize },
    ReachChanged { from: Reach, to: Reach },
}

/// Where the renderer draws the targeting cursor this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetCursor {
    pub cell: IVec3,
    pub offset: TargetOffset,
    pub bounds: Aabb,
}

pub struct WorldController {
    camera: CameraState,
    facing: Facing,
    reach: Reach,
    store: VoxelStore,
    display: (f32, f32),
    shape_sizes: (i32, i32),
    rng: StdRng,
}

impl WorldController {
    pub fn new(cfg: &SculptConfig, seed: u64) -> Self {
        let camera = CameraState::new(
            cfg.camera.start_position(),
            cfg.camera.yaw,
            cfg.camera.pitch,
            cfg.camera.speed,
        );
        let mut store = VoxelStore::default();
        store.insert(IVec3::ZERO);
        Self {
            facing: Facing::from_yaw(camera.yaw),
            camera,
            reach: Reach::new(cfg.reach.initial),
            store,
            display: (cfg.display.width as f32, cfg.display.height as f32),
            shape_sizes: cfg.shapes.size_range(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn reach(&self) -> Reach {
        self.reach
    }

    pub fn store(&self) -> &VoxelStore {
        &self.store
    }

    pub fn apply_move(&mut self, step: Move) {
        self.camera.apply_move(step);
    }

    pub fn apply_mouse(&mut self, x: f32, y: f32) {
        self.camera.apply_mouse((x, y), self.display);
    }

    /// Commit the facing for the current yaw. Returns true when it changed.
    pub fn refresh_facing(&mut self) -> bool {
        let next = classify_facing(self.camera.yaw, self.facing);
        if next == self.facing {
            return false;
        }
        log::debug!(
            "facing {} -> {} (yaw {:.3})",
            self.facing,
            next,
            self.camera.yaw
        );
        self.facing = next;
        true
    }

    pub fn target_offset(&mut self) -> TargetOffset {
        self.refresh_facing();
        resolve_offset(self.facing, self.camera.yaw, self.camera.pitch, self.reach)
    }

    pub fn target_cell(&mut self) -> IVec3 {
        self.target_offset().apply(self.camera.position)
    }

    pub fn frame(&mut self) -> TargetCursor {
        let offset = self.target_offset();
        let cell = offset.apply(self.camera.position);
        TargetCursor {
            cell,
            offset,
            bounds: Aabb::cell(cell, CURSOR_HALF_EXTENT),
        }
    }

    pub fn do_action(&mut self, action: Action) -> ActionOutcome {
        match action {
            Action::Place => {
                let cell = self.target_cell();
                if self.store.insert(cell) {
                    ActionOutcome::Placed(cell)
                } else {
                    ActionOutcome::AlreadyOccupied(cell)
                }
            }
            Action::Remove => {
                let cell = self.target_cell();
                if self.store.remove(cell) {
                    ActionOutcome::Removed(cell)
                } else {
                    ActionOutcome::NothingToRemove(cell)
                }
            }
            Action::Regenerate(shape) => {
                let (lo, hi) = self.shape_sizes;
                let size = self.rng.gen_range(lo..=hi);
                self.store.clear();
                let cells = fill_shape(&mut self.store, shape, size);
                ActionOutcome::Regenerated { shape, size, cells }
            }
            Action::Reach(delta) => {
                let from = self.reach;
                self.reach = from.adjust(delta);
                ActionOutcome::ReachChanged { from, to: self.reach }
            }
        }
    }
}
