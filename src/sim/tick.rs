//! Per-frame simulation step
//!
//! Pipeline while playing: cluster motion, shot motion, collision, then the
//! out-of-bounds check. The pipeline stops as soon as the run ends.

use glam::Vec2;

use super::cluster::ClusterStep;
use super::collision::{HitOutcome, check_shot};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Latest pointer position (playfield pixels), if it moved
    pub pointer: Option<Vec2>,
    /// Fire (click)
    pub fire: bool,
    /// Space: start when idle, fire while playing
    pub action: bool,
    /// Explicit start/restart (menu button)
    pub start: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if let Some(pointer) = input.pointer {
        state.shooter.aim(pointer);
    }

    match state.phase {
        GamePhase::Menu | GamePhase::GameOver => {
            if input.start || input.action {
                state.start();
            }
            return;
        }
        GamePhase::Playing => {}
    }

    if (input.fire || input.action) && state.shooter.fire(&mut state.rng) {
        if let Some(shot) = state.shooter.projectile {
            state.events.push(GameEvent::Fired { color: shot.color });
        }
    }

    state.time_ticks += 1;

    match state
        .cluster
        .advance(PHASE_STEP, state.tuning.cluster_speed, state.playfield)
    {
        ClusterStep::Moved => {}
        ClusterStep::Dropped => {
            let lowest_y = state.cluster.lowest_y().unwrap_or_default();
            state.events.push(GameEvent::ClusterDropped { lowest_y });
            log::debug!("Cluster dropped to y={}", lowest_y);
        }
        ClusterStep::Breached => {
            let lowest_y = state.cluster.lowest_y().unwrap_or_default();
            state.events.push(GameEvent::ClusterDropped { lowest_y });
            state.game_over();
            return;
        }
    }

    state.shooter.tick(state.tuning.projectile_speed);

    resolve_collision(state);
    if state.phase != GamePhase::Playing {
        return;
    }

    if state.shooter.clear_if_outside(state.playfield) {
        state.events.push(GameEvent::ShotLeftPlayfield);
    }
}

/// Resolve the in-flight shot against the cluster (at most one target)
pub fn resolve_collision(state: &mut GameState) -> HitOutcome {
    let Some(shot) = state.shooter.projectile else {
        return HitOutcome::Miss;
    };

    let outcome = check_shot(&shot, &state.cluster.targets);
    match outcome {
        HitOutcome::Miss => {}
        HitOutcome::Match { index } => {
            let target = state.cluster.remove(index);
            state.score += POINTS_PER_POP;
            state.shooter.projectile = None;
            state.events.push(GameEvent::TargetPopped {
                color: target.color,
            });
            log::debug!("Popped {:?}, score {}", target.color, state.score);

            if state.cluster.is_empty() {
                state.advance_level();
            }
        }
        HitOutcome::Mismatch { .. } => {
            state.lives = state.lives.saturating_sub(1);
            state.events.push(GameEvent::LifeLost {
                lives_left: state.lives,
            });
            if state.lives == 0 {
                // Shot stays where it hit; the frame is frozen
                state.game_over();
            } else {
                state.shooter.projectile = None;
            }
        }
    }
    outcome
}
