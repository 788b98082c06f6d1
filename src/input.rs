//! Pending input between frames
//!
//! Event handlers only flip fields here. The frame loop drains the latch once
//! per tick, so a handler can never run simulation logic mid-frame.

use glam::Vec2;

use crate::sim::TickInput;

/// Input written by event handlers, read once per frame
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    pointer: Option<Vec2>,
    fire: bool,
    action: bool,
    start: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer moved to `pos` (playfield pixels)
    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    /// Click on the playfield
    pub fn fire(&mut self) {
        self.fire = true;
    }

    /// Space bar
    pub fn action(&mut self) {
        self.action = true;
    }

    /// Start/restart button
    pub fn start(&mut self) {
        self.start = true;
    }

    /// Hand the pending input to the frame loop and reset the latch
    pub fn drain(&mut self) -> TickInput {
        TickInput {
            pointer: self.pointer.take(),
            fire: std::mem::take(&mut self.fire),
            action: std::mem::take(&mut self.action),
            start: std::mem::take(&mut self.start),
        }
    }
}
