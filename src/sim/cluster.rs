//! The descending target cluster
//!
//! Targets share one oscillation phase. Each frame every target slides
//! sideways by `sin(phase) * speed`; touching a side wall flips the phase by
//! half a turn (reversing travel) and drops the whole cluster one step.

use std::f32::consts::PI;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::palette::BallColor;
use crate::consts::*;
use crate::normalize_angle;

/// A single colored target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub pos: Vec2,
    pub color: BallColor,
}

/// What happened to the cluster during one `advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterStep {
    /// Slid sideways only
    Moved,
    /// Hit a wall, reversed and dropped
    Dropped,
    /// Dropped below the loss line
    Breached,
}

/// Ordered targets sharing one phase
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cluster {
    /// Targets in spawn order (first = leftmost at spawn)
    pub targets: Vec<Target>,
    /// Shared oscillation phase (radians, normalized to [-π, π))
    pub phase: f32,
}

impl Cluster {
    /// Spawn `count` targets in a row with independent random colors
    pub fn spawn(count: u32, rng: &mut impl Rng) -> Self {
        let targets = (0..count)
            .map(|i| Target {
                pos: Vec2::new(SPAWN_X + i as f32 * SPAWN_SPACING, SPAWN_Y),
                color: BallColor::random(rng),
            })
            .collect();
        Self {
            targets,
            phase: 0.0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Remove and return the target at `index`, keeping order
    pub fn remove(&mut self, index: usize) -> Target {
        self.targets.remove(index)
    }

    /// Largest y of any target (they all share one row today)
    pub fn lowest_y(&self) -> Option<f32> {
        self.targets.iter().map(|t| t.pos.y).reduce(f32::max)
    }

    /// Advance the phase and slide every target, then apply the wall rule
    pub fn advance(&mut self, delta_phase: f32, speed: f32, playfield: Vec2) -> ClusterStep {
        self.phase = normalize_angle(self.phase + delta_phase);

        let dx = self.phase.sin() * speed;
        for target in &mut self.targets {
            target.pos.x += dx;
        }

        self.check_walls(playfield)
    }

    fn check_walls(&mut self, playfield: Vec2) -> ClusterStep {
        debug_assert!(!self.targets.is_empty(), "wall check on an empty cluster");
        let (Some(first), Some(last)) = (self.targets.first(), self.targets.last()) else {
            return ClusterStep::Moved;
        };

        if first.pos.x > 0.0 && last.pos.x < playfield.x {
            return ClusterStep::Moved;
        }

        self.phase = normalize_angle(self.phase + PI);
        for target in &mut self.targets {
            target.pos.y += DROP_STEP;
        }

        match self.lowest_y() {
            Some(y) if y > playfield.y - LOSS_MARGIN => ClusterStep::Breached,
            _ => ClusterStep::Dropped,
        }
    }
}
