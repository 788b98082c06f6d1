//! Frogshot - a color-matching frog shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (cluster motion, shots, collisions, game state)
//! - `config`: Difficulty tuning and persisted settings
//! - `input`: Pending-input latch drained once per frame
//! - `renderer`: Canvas 2D drawing and DOM HUD (wasm32 only)

pub mod config;
pub mod error;
pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod sim;

pub use config::{Difficulty, Settings, Tuning};
pub use error::WebError;
pub use input::InputLatch;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default playfield dimensions (canvas pixels)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Shooter sits this far above the bottom edge
    pub const SHOOTER_BOTTOM_OFFSET: f32 = 60.0;
    /// Distance from shooter center to where shots spawn
    pub const MUZZLE_OFFSET: f32 = 40.0;
    /// Drawn size of the shooter sprite
    pub const SHOOTER_SPRITE_SIZE: f32 = 80.0;
    /// Next-shot preview is lifted above the muzzle by this much
    pub const PREVIEW_LIFT: f32 = 30.0;

    /// Center distance below which a shot touches a target (any difficulty)
    pub const HIT_THRESHOLD: f32 = 20.0;
    /// Score for each popped target
    pub const POINTS_PER_POP: u32 = 10;
    pub const INITIAL_LIVES: u8 = 3;

    /// Cluster phase increment per frame (radians)
    pub const PHASE_STEP: f32 = 0.01;
    /// Vertical drop when the cluster bounces off a wall
    pub const DROP_STEP: f32 = 35.0;
    /// Game over once the cluster is lower than height - LOSS_MARGIN
    pub const LOSS_MARGIN: f32 = 100.0;

    /// Spawn layout for a fresh cluster
    pub const SPAWN_X: f32 = 250.0;
    pub const SPAWN_SPACING: f32 = 50.0;
    pub const SPAWN_Y: f32 = 250.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
