/*
 * Input Module
 *
 * This module turns pointer events into simulation inputs. Event handlers
 * run whenever the host delivers them; the frame driver drains the queue
 * once at the start of each tick.
 *
 * - Pointer moves: last writer wins
 * - Pointer leaving the viewport: clears the cursor so nothing chases a stale spot
 * - Clicks: accumulate, one bubble burst each
 */

use glam::Vec2;

use crate::world::World;

/// Latest cursor change since the previous tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CursorUpdate {
    Moved(Vec2),
    Left,
}

impl CursorUpdate {
    pub fn target(self) -> Option<Vec2> {
        match self {
            CursorUpdate::Moved(position) => Some(position),
            CursorUpdate::Left => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct InputQueue {
    cursor: Option<CursorUpdate>,
    clicks: Vec<Vec2>,
}

/// Everything collected between two ticks.
#[derive(Debug, Default, PartialEq)]
pub struct PendingInput {
    pub cursor: Option<CursorUpdate>,
    pub clicks: Vec<Vec2>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    // Pointer position in simulation coordinates
    pub fn pointer_moved(&mut self, position: Vec2) {
        self.cursor = Some(CursorUpdate::Moved(position));
    }

    pub fn pointer_left(&mut self) {
        self.cursor = Some(CursorUpdate::Left);
    }

    pub fn clicked(&mut self, position: Vec2) {
        self.clicks.push(position);
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.is_none() && self.clicks.is_empty()
    }

    pub fn drain(&mut self) -> PendingInput {
        PendingInput {
            cursor: self.cursor.take(),
            clicks: std::mem::take(&mut self.clicks),
        }
    }

    pub fn clear(&mut self) {
        self.cursor = None;
        self.clicks.clear();
    }
}

/// Apply a batch of inputs to the world. Returns how many bubbles were spawned.
pub fn ingest(world: &mut World, pending: PendingInput) -> usize {
    if let Some(update) = pending.cursor {
        world.set_cursor(update.target());
    }

    pending
        .clicks
        .into_iter()
        .map(|origin| world.spawn_burst(origin))
        .sum()
}
