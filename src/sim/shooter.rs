//! The frog shooter and its single in-flight shot

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::palette::BallColor;
use crate::consts::*;
use crate::{cartesian_to_polar, polar_to_cartesian};

/// A fired ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Unit travel direction
    pub dir: Vec2,
    pub color: BallColor,
}

impl Projectile {
    pub fn is_inside(&self, playfield: Vec2) -> bool {
        self.pos.x >= 0.0 && self.pos.x <= playfield.x && self.pos.y >= 0.0 && self.pos.y <= playfield.y
    }
}

/// The player's shooter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shooter {
    /// Fixed position near the bottom center
    pub pos: Vec2,
    /// Aim angle (radians, screen coordinates: +y is down)
    pub angle: f32,
    /// Color loaded for the next shot
    pub next_color: BallColor,
    /// At most one shot in flight
    pub projectile: Option<Projectile>,
}

impl Shooter {
    pub fn new(playfield: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            pos: Vec2::new(playfield.x / 2.0, playfield.y - SHOOTER_BOTTOM_OFFSET),
            angle: FRAC_PI_2,
            next_color: BallColor::random(rng),
            projectile: None,
        }
    }

    /// Point the shooter at a pointer position
    pub fn aim(&mut self, pointer: Vec2) {
        let (_, angle) = cartesian_to_polar(pointer - self.pos);
        self.angle = angle;
    }

    /// Where shots leave the shooter
    pub fn muzzle(&self) -> Vec2 {
        self.pos + polar_to_cartesian(MUZZLE_OFFSET, self.angle)
    }

    /// Where the next-shot preview is drawn
    pub fn preview_pos(&self) -> Vec2 {
        self.muzzle() - Vec2::new(0.0, PREVIEW_LIFT)
    }

    /// Fire the loaded color. Returns false (and changes nothing) while a
    /// shot is already in flight.
    pub fn fire(&mut self, rng: &mut impl Rng) -> bool {
        if self.projectile.is_some() {
            return false;
        }

        self.projectile = Some(Projectile {
            pos: self.muzzle(),
            dir: polar_to_cartesian(1.0, self.angle),
            color: self.next_color,
        });
        self.next_color = BallColor::random(rng);
        true
    }

    /// Move the in-flight shot by `speed` along its direction
    pub fn tick(&mut self, speed: f32) {
        if let Some(shot) = &mut self.projectile {
            shot.pos += shot.dir * speed;
        }
    }

    /// Drop the shot if it left the playfield. Returns true if one was dropped.
    pub fn clear_if_outside(&mut self, playfield: Vec2) -> bool {
        match self.projectile {
            Some(shot) if !shot.is_inside(playfield) => {
                self.projectile = None;
                true
            }
            _ => false,
        }
    }
}
