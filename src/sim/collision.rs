//! Shot-vs-target proximity
//!
//! A shot touches a target when their centers are closer than
//! `HIT_THRESHOLD`. Targets are scanned in cluster order and the first one in
//! range wins, even if a later one is closer.

use glam::Vec2;

use super::cluster::Target;
use super::shooter::Projectile;
use crate::consts::HIT_THRESHOLD;

/// Result of checking one shot against the cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Nothing in range
    Miss,
    /// Touched a target of the same color
    Match { index: usize },
    /// Touched a target of a different color
    Mismatch { index: usize },
}

/// True if two centers are within hit range
#[inline]
pub fn within_hit_range(a: Vec2, b: Vec2) -> bool {
    a.distance(b) < HIT_THRESHOLD
}

/// Index of the first target in range of `pos`, in slice order
pub fn first_in_range(pos: Vec2, targets: &[Target]) -> Option<usize> {
    targets.iter().position(|t| within_hit_range(pos, t.pos))
}

/// Classify the shot against the targets
pub fn check_shot(shot: &Projectile, targets: &[Target]) -> HitOutcome {
    match first_in_range(shot.pos, targets) {
        None => HitOutcome::Miss,
        Some(index) if targets[index].color == shot.color => HitOutcome::Match { index },
        Some(index) => HitOutcome::Mismatch { index },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::palette::BallColor;

    fn target(x: f32, y: f32, color: BallColor) -> Target {
        Target {
            pos: Vec2::new(x, y),
            color,
        }
    }

    fn shot(x: f32, y: f32, color: BallColor) -> Projectile {
        Projectile {
            pos: Vec2::new(x, y),
            dir: Vec2::NEG_Y,
            color,
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(within_hit_range(Vec2::ZERO, Vec2::new(19.99, 0.0)));
        assert!(!within_hit_range(Vec2::ZERO, Vec2::new(20.0, 0.0)));
    }

    #[test]
    fn test_match_and_mismatch() {
        let targets = [target(100.0, 100.0, BallColor::Red)];
        assert_eq!(
            check_shot(&shot(105.0, 100.0, BallColor::Red), &targets),
            HitOutcome::Match { index: 0 }
        );
        assert_eq!(
            check_shot(&shot(105.0, 100.0, BallColor::Blue), &targets),
            HitOutcome::Mismatch { index: 0 }
        );
        assert_eq!(
            check_shot(&shot(200.0, 100.0, BallColor::Red), &targets),
            HitOutcome::Miss
        );
    }

    #[test]
    fn test_first_match_wins_over_closest() {
        // Shot is 15 from the first target and 5 from the second
        let targets = [
            target(100.0, 100.0, BallColor::Blue),
            target(120.0, 100.0, BallColor::Red),
        ];
        assert_eq!(
            check_shot(&shot(115.0, 100.0, BallColor::Red), &targets),
            HitOutcome::Mismatch { index: 0 }
        );
    }
}
