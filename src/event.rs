use std::collections::{BTreeMap, VecDeque};

use crate::camera::Move;
use sculpt_edit::Shape;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    // Camera intents
    MoveRequested { step: Move },
    MouseMoved { x: f32, y: f32 },

    // Voxel edits aimed at the current target cell
    PlaceRequested,
    RemoveRequested,
    ShapeRequested { shape: Shape },

    ReachAdjusted { delta: i32 },
}

pub struct EventEnvelope {
    pub id: u64,
    pub tick: u64,
    pub kind: Event,
}

pub struct EventQueue {
    // map of tick -> FIFO queue of events
    by_tick: BTreeMap<u64, VecDeque<EventEnvelope>>,
    pub now: u64,
    next_id: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self {
            by_tick: BTreeMap::new(),
            now: 0,
            next_id: 1,
        }
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    /// Ticks in the past are clamped to the current tick.
    pub fn emit_at(&mut self, tick: u64, kind: Event) -> u64 {
        let tick = tick.max(self.now);
        let id = self.alloc_id();
        let env = EventEnvelope { id, tick, kind };
        self.by_tick.entry(tick).or_default().push_back(env);
        id
    }

    pub fn emit_after(&mut self, delta: u64, kind: Event) -> u64 {
        self.emit_at(self.now.saturating_add(delta), kind)
    }

    pub fn pop_ready(&mut self) -> Option<EventEnvelope> {
        self.by_tick.get_mut(&self.now)?.pop_front()
    }

    pub fn advance_tick(&mut self) {
        if self.by_tick.get(&self.now).is_some_and(|q| q.is_empty()) {
            self.by_tick.remove(&self.now);
        }
        self.now = self.now.wrapping_add(1);
    }

    /// Earliest tick that still holds events.
    pub fn next_tick(&self) -> Option<u64> {
        self.by_tick
            .iter()
            .find(|(_, q)| !q.is_empty())
            .map(|(&t, _)| t)
    }

    /// Jump over empty ticks to the next one with events queued.
    pub fn skip_idle(&mut self) {
        if let Some(t) = self.next_tick() {
            self.now = self.now.max(t);
        }
    }

    pub fn pending(&self) -> usize {
        self.by_tick.values().map(|q| q.len()).sum()
    }

    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }
}
