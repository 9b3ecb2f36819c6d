//! The four prototype iterations as named presets
//!
//! Each iteration is a feature-flag combination on the single configurable
//! kernel rather than its own code path.

use serde::{Deserialize, Serialize};

use crate::sim::{CollisionStrategy, SimConfig};

/// Which of the four prototype iterations to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IterationPreset {
    /// Bare chase: bat, bug, radius overlap
    One,
    /// Fog-of-war spotlight around the bat
    Two,
    /// Switch to bounding-box overlap
    Three,
    /// Bounding boxes plus the impassable tree
    #[default]
    Four,
}

impl IterationPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            IterationPreset::One => "1",
            IterationPreset::Two => "2",
            IterationPreset::Three => "3",
            IterationPreset::Four => "4",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "1" | "one" => Some(IterationPreset::One),
            "2" | "two" => Some(IterationPreset::Two),
            "3" | "three" => Some(IterationPreset::Three),
            "4" | "four" => Some(IterationPreset::Four),
            _ => None,
        }
    }

    /// Kernel feature flags for this iteration
    pub fn sim_config(&self) -> SimConfig {
        match self {
            IterationPreset::One => SimConfig {
                collision: CollisionStrategy::Radius,
                ..Default::default()
            },
            IterationPreset::Two => SimConfig {
                collision: CollisionStrategy::Radius,
                visibility_mask: true,
                ..Default::default()
            },
            IterationPreset::Three => SimConfig {
                collision: CollisionStrategy::Aabb,
                ..Default::default()
            },
            IterationPreset::Four => SimConfig {
                collision: CollisionStrategy::Aabb,
                has_tree: true,
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for p in [
            IterationPreset::One,
            IterationPreset::Two,
            IterationPreset::Three,
            IterationPreset::Four,
        ] {
            assert_eq!(IterationPreset::from_str(p.as_str()), Some(p));
        }
        assert_eq!(IterationPreset::from_str("5"), None);
    }

    #[test]
    fn test_presets_select_features() {
        assert!(!IterationPreset::One.sim_config().visibility_mask);
        assert!(IterationPreset::Two.sim_config().visibility_mask);
        assert_eq!(
            IterationPreset::Three.sim_config().collision,
            CollisionStrategy::Aabb
        );
        let four = IterationPreset::Four.sim_config();
        assert!(four.has_tree && !four.visibility_mask);
    }
}
