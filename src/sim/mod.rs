//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - One step per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (cluster order)
//! - No rendering or platform dependencies

pub mod cluster;
pub mod collision;
pub mod palette;
pub mod shooter;
pub mod state;
pub mod tick;

pub use cluster::{Cluster, ClusterStep, Target};
pub use collision::{HitOutcome, check_shot, first_in_range, within_hit_range};
pub use palette::BallColor;
pub use shooter::{Projectile, Shooter};
pub use state::{GameEvent, GamePhase, GameState, HudView};
pub use tick::{TickInput, resolve_collision, tick};
