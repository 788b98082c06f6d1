//! Ball color palette
//!
//! Colors are sampled uniformly and independently; repeats are allowed.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The five ball colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
}

impl BallColor {
    /// Every color, in palette order
    pub const ALL: [BallColor; 5] = [
        BallColor::Red,
        BallColor::Blue,
        BallColor::Green,
        BallColor::Yellow,
        BallColor::Purple,
    ];

    /// Pick a color uniformly at random
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// CSS color name used by the canvas adapter
    pub fn css(&self) -> &'static str {
        match self {
            BallColor::Red => "red",
            BallColor::Blue => "blue",
            BallColor::Green => "green",
            BallColor::Yellow => "yellow",
            BallColor::Purple => "purple",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_random_covers_palette() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(BallColor::random(&mut rng));
        }
        assert_eq!(seen.len(), BallColor::ALL.len());
    }

    #[test]
    fn test_random_is_seed_deterministic() {
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for _ in 0..32 {
            assert_eq!(BallColor::random(&mut a), BallColor::random(&mut b));
        }
    }
}
