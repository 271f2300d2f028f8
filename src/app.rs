use crate::event::{Event, EventQueue};
use crate::script::Step;
use crate::world::{Action, ActionOutcome, TargetCursor, WorldController};

pub struct App {
    pub world: WorldController,
    pub queue: EventQueue,
    pub cursor: Option<TargetCursor>,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub ticks: u64,
    pub events: u64,
    pub placed: u64,
    pub removed: u64,
    pub misses: u64,
}

impl App {
    pub fn new(world: WorldController) -> Self {
        Self {
            world,
            queue: EventQueue::new(),
            cursor: None,
        }
    }

    /// Queue a script relative to the current tick. Each command lands one
    /// tick after the previous; `Wait(n)` pushes the rest `n` ticks further.
    pub fn schedule(&mut self, steps: &[Step]) {
        let mut at = 0u64;
        for step in steps {
            match *step {
                Step::Emit(ev) => {
                    self.queue.emit_after(at, ev);
                    at = at.saturating_add(1);
                }
                Step::Wait(n) => at = at.saturating_add(n),
            }
        }
    }

    /// Drain the queue tick by tick, refreshing the cursor after each tick
    /// that carried events. Empty ticks in between are skipped.
    pub fn run_until_idle(&mut self) -> RunStats {
        let mut stats = RunStats::default();
        while !self.queue.is_idle() {
            self.queue.skip_idle();
            self.step(&mut stats);
        }
        stats
    }

    fn step(&mut self, stats: &mut RunStats) {
        while let Some(env) = self.queue.pop_ready() {
            stats.events += 1;
            log::trace!(target: "events", "[tick {}] dispatch #{}", env.tick, env.id);
            self.handle(env.tick, env.kind, stats);
        }
        let cursor = self.world.frame();
        log::trace!(target: "events", "[tick {}] cursor ({},{},{}) facing={} reach={}",
            self.queue.now, cursor.cell.x, cursor.cell.y, cursor.cell.z,
            self.world.facing(), self.world.reach());
        self.cursor = Some(cursor);
        self.queue.advance_tick();
        stats.ticks += 1;
    }

    fn handle(&mut self, tick: u64, ev: Event, stats: &mut RunStats) {
        let action = match ev {
            Event::MoveRequested { step } => {
                self.world.apply_move(step);
                let cam = self.world.camera();
                log::trace!(target: "events", "[tick {}] MoveRequested {:?} yaw={:.3} pitch={:.3}",
                    tick, step, cam.yaw, cam.pitch);
                return;
            }
            Event::MouseMoved { x, y } => {
                self.world.apply_mouse(x, y);
                log::trace!(target: "events", "[tick {}] MouseMoved ({:.0}, {:.0})", tick, x, y);
                return;
            }
            Event::PlaceRequested => Action::Place,
            Event::RemoveRequested => Action::Remove,
            Event::ShapeRequested { shape } => Action::Regenerate(shape),
            Event::ReachAdjusted { delta } => Action::Reach(delta),
        };
        match self.world.do_action(action) {
            ActionOutcome::Placed(c) => {
                stats.placed += 1;
                log::info!(target: "events", "[tick {}] BlockPlaced ({},{},{})", tick, c.x, c.y, c.z);
            }
            ActionOutcome::AlreadyOccupied(c) => {
                stats.misses += 1;
                log::info!(target: "events", "[tick {}] PlaceSkipped occupied ({},{},{})", tick, c.x, c.y, c.z);
            }
            ActionOutcome::Removed(c) => {
                stats.removed += 1;
                log::info!(target: "events", "[tick {}] BlockRemoved ({},{},{})", tick, c.x, c.y, c.z);
            }
            ActionOutcome::NothingToRemove(c) => {
                stats.misses += 1;
                log::info!(target: "events", "[tick {}] RemoveSkipped empty ({},{},{})", tick, c.x, c.y, c.z);
            }
            ActionOutcome::Regenerated { shape, size, cells } => {
                log::info!(target: "events", "[tick {}] ShapeGenerated {} size={} cells={}", tick, shape, size, cells);
            }
            ActionOutcome::ReachChanged { from, to } => {
                log::info!(target: "events", "[tick {}] ReachChanged {} -> {}", tick, from, to);
            }
        }
    }
}
