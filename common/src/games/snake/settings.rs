use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::GameError;
use super::bounds::PlayableBounds;

const PROBABILITY_TOLERANCE: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodProbabilities {
    pub regular: f64,
    pub rare: f64,
    pub golden: f64,
}

impl Default for FoodProbabilities {
    fn default() -> Self {
        Self {
            regular: 0.7,
            rare: 0.2,
            golden: 0.1,
        }
    }
}

impl Validate for FoodProbabilities {
    fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("regular", self.regular),
            ("rare", self.rare),
            ("golden", self.golden),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!(
                    "{} food probability must be between 0.0 and 1.0, got {}",
                    name, value
                ));
            }
        }
        let sum = self.regular + self.rare + self.golden;
        if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(format!("Food probabilities must sum to 1.0, got {}", sum));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Insane,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Insane];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Insane => "Insane",
        }
    }

    fn initial_delay_ms(&self) -> u32 {
        match self {
            Difficulty::Easy => 100,
            Difficulty::Medium => 90,
            Difficulty::Insane => 80,
        }
    }

    fn poison_probability(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.3,
            Difficulty::Medium => 0.4,
            Difficulty::Insane => 0.5,
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "insane" => Ok(Difficulty::Insane),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

/// Immutable per-game settings. Distances are in pixels and snap to
/// `cell_size`; delays are in milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
    pub initial_delay_ms: u32,
    pub food_probabilities: FoodProbabilities,
    pub poison_probability: f64,
    pub milestone_interval: u32,
    pub speed_step_ms: u32,
    pub min_delay_ms: u32,
    pub allow_reversal: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            cell_size: 20,
            initial_delay_ms: 100,
            food_probabilities: FoodProbabilities::default(),
            poison_probability: 0.3,
            milestone_interval: 50,
            speed_step_ms: 10,
            min_delay_ms: 30,
            allow_reversal: false,
        }
    }
}

impl GameSettings {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            initial_delay_ms: difficulty.initial_delay_ms(),
            poison_probability: difficulty.poison_probability(),
            ..Self::default()
        }
    }

    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms as u64)
    }

    pub fn bounds(&self) -> PlayableBounds {
        PlayableBounds::from_settings(self)
    }

    /// Same checks as [`Validate::validate`], as a game error.
    pub fn check(&self) -> Result<(), GameError> {
        self.validate().map_err(GameError::InvalidConfiguration)
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.width <= 0 || self.height <= 0 {
            return Err(format!(
                "Board dimensions must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        if self.cell_size <= 0 {
            return Err(format!("Cell size must be positive, got {}", self.cell_size));
        }
        if self.cell_size > self.width || self.cell_size > self.height {
            return Err(format!(
                "Cell size {} is larger than the {}x{} board",
                self.cell_size, self.width, self.height
            ));
        }

        let bounds = self.bounds();
        if bounds.is_empty() {
            return Err("Board leaves no playable cells".to_string());
        }
        let head = bounds.center();
        let tail = head.offset(super::Direction::Left, self.cell_size);
        if !bounds.contains(head) || !bounds.contains(tail) {
            return Err("Board is too small for the starting snake".to_string());
        }
        if bounds.cell_count() < 3 {
            return Err("Board needs room for the snake and one food item".to_string());
        }

        if self.initial_delay_ms == 0 {
            return Err("Initial delay must be positive".to_string());
        }
        if self.min_delay_ms == 0 {
            return Err("Minimum delay must be positive".to_string());
        }
        if self.min_delay_ms > self.initial_delay_ms {
            return Err(format!(
                "Minimum delay {}ms exceeds initial delay {}ms",
                self.min_delay_ms, self.initial_delay_ms
            ));
        }
        if self.milestone_interval == 0 {
            return Err("Milestone interval must be positive".to_string());
        }

        self.food_probabilities.validate()?;
        if !(0.0..=1.0).contains(&self.poison_probability) {
            return Err(format!(
                "Poison probability must be between 0.0 and 1.0, got {}",
                self.poison_probability
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(GameSettings::default().validate().is_ok());
        for difficulty in Difficulty::ALL {
            assert!(GameSettings::for_difficulty(difficulty).validate().is_ok());
        }
    }

    #[test]
    fn test_difficulty_presets() {
        let insane = GameSettings::for_difficulty(Difficulty::Insane);
        assert_eq!(insane.initial_delay_ms, 80);
        assert_eq!(insane.poison_probability, 0.5);
        let medium = GameSettings::for_difficulty(Difficulty::Medium);
        assert_eq!(medium.initial_delay_ms, 90);
        assert_eq!(medium.poison_probability, 0.4);
    }

    #[test]
    fn test_non_positive_dimensions_rejected() {
        let settings = GameSettings {
            width: 0,
            ..GameSettings::default()
        };
        assert!(matches!(
            settings.check(),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_cell_larger_than_board_rejected() {
        let settings = GameSettings {
            width: 100,
            height: 100,
            cell_size: 120,
            ..GameSettings::default()
        };
        assert!(settings.validate().unwrap_err().contains("larger"));
    }

    #[test]
    fn test_huge_cell_fails_validation_without_overflow() {
        let settings = GameSettings {
            width: 2_000_000_000,
            height: 2_000_000_000,
            cell_size: 1_500_000_000,
            ..GameSettings::default()
        };
        assert!(matches!(
            settings.check(),
            Err(GameError::InvalidConfiguration(_))
        ));

        let short = GameSettings {
            height: 50,
            ..GameSettings::default()
        };
        assert!(short.validate().unwrap_err().contains("no playable"));
    }

    #[test]
    fn test_probabilities_must_sum_to_one() {
        let settings = GameSettings {
            food_probabilities: FoodProbabilities {
                regular: 0.5,
                rare: 0.2,
                golden: 0.1,
            },
            ..GameSettings::default()
        };
        assert!(settings.validate().unwrap_err().contains("sum to 1.0"));
    }

    #[test]
    fn test_min_delay_above_initial_rejected() {
        let settings = GameSettings {
            initial_delay_ms: 20,
            min_delay_ms: 30,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let settings: GameSettings = serde_yaml_ng::from_str("cell_size: 10\nallow_reversal: true\n").unwrap();
        assert_eq!(settings.cell_size, 10);
        assert!(settings.allow_reversal);
        assert_eq!(settings.width, 600);
        assert_eq!(settings.food_probabilities, FoodProbabilities::default());
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!("Insane".parse::<Difficulty>(), Ok(Difficulty::Insane));
        assert!("nightmare".parse::<Difficulty>().is_err());
    }
}
