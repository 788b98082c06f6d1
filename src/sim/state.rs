//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`]; the renderer
//! only reads it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::cluster::Cluster;
use super::palette::BallColor;
use super::shooter::Shooter;
use crate::config::{Difficulty, Tuning};
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first start
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// Things that happened during a tick, for the adapter to log/display
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Started,
    Fired { color: BallColor },
    TargetPopped { color: BallColor },
    LifeLost { lives_left: u8 },
    ShotLeftPlayfield,
    ClusterDropped { lowest_y: f32 },
    LevelCleared { new_level: u32 },
    GameOver { score: u32, level: u32 },
}

/// What the page HUD shows for a given state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudView {
    /// Status line; `None` in the menu, where the page keeps its own text
    pub status: Option<String>,
    pub menu_visible: bool,
    pub game_over_visible: bool,
    /// Score for the game-over screen
    pub final_score: Option<u32>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Color source; seeded once so identical inputs replay identically
    pub(crate) rng: Pcg32,
    /// Difficulty fixed at load time
    pub difficulty: Difficulty,
    /// Constants resolved from `difficulty`
    pub tuning: Tuning,
    /// Playfield size in pixels
    pub playfield: Vec2,
    pub phase: GamePhase,
    pub score: u32,
    /// Current level (starts at 1)
    pub level: u32,
    pub lives: u8,
    pub cluster: Cluster,
    pub shooter: Shooter,
    /// Simulation tick counter (Playing frames only)
    pub time_ticks: u64,
    /// Events recorded since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session in the menu with the default playfield
    pub fn new(seed: u64, difficulty: Difficulty) -> Self {
        Self::with_playfield(seed, difficulty, Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT))
    }

    /// Create a session in the menu for a given playfield size
    pub fn with_playfield(seed: u64, difficulty: Difficulty, playfield: Vec2) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let shooter = Shooter::new(playfield, &mut rng);
        Self {
            seed,
            rng,
            difficulty,
            tuning: difficulty.tuning(),
            playfield,
            phase: GamePhase::Menu,
            score: 0,
            level: 1,
            lives: INITIAL_LIVES,
            cluster: Cluster::default(),
            shooter,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Reset the session and start playing. Used for both start and restart.
    pub fn start(&mut self) {
        self.score = 0;
        self.level = 1;
        self.lives = INITIAL_LIVES;
        self.cluster = Cluster::spawn(self.level, &mut self.rng);
        self.shooter.projectile = None;
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Started);
        log::info!(
            "Session started ({}, seed {})",
            self.difficulty.as_str(),
            self.seed
        );
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Move to the next level with a fresh cluster of `level` targets
    pub(crate) fn advance_level(&mut self) {
        self.level += 1;
        self.cluster = Cluster::spawn(self.level, &mut self.rng);
        self.shooter.projectile = None;
        self.events.push(GameEvent::LevelCleared {
            new_level: self.level,
        });
        log::info!("Level {} ({} targets)", self.level, self.cluster.len());
    }

    /// Freeze the session; the final score stays as is
    pub(crate) fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver {
            score: self.score,
            level: self.level,
        });
        log::info!("Game over: score {} at level {}", self.score, self.level);
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// HUD status line
    pub fn status_line(&self) -> String {
        format!(
            "Score: {} | Level: {} | Lives: {}",
            self.score, self.level, self.lives
        )
    }

    /// HUD contents. The status line stays live after game over so the
    /// final lives count is shown.
    pub fn hud_view(&self) -> HudView {
        match self.phase {
            GamePhase::Menu => HudView {
                status: None,
                menu_visible: true,
                game_over_visible: false,
                final_score: None,
            },
            GamePhase::Playing => HudView {
                status: Some(self.status_line()),
                menu_visible: false,
                game_over_visible: false,
                final_score: None,
            },
            GamePhase::GameOver => HudView {
                status: Some(self.status_line()),
                menu_visible: false,
                game_over_visible: true,
                final_score: Some(self.score),
            },
        }
    }
}
