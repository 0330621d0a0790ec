use std::time::Duration;

use super::settings::GameSettings;

/// Speeds the game up each time the score passes a milestone.
#[derive(Clone, Debug)]
pub struct DifficultyController {
    initial_delay_ms: u32,
    speed_step_ms: u32,
    min_delay_ms: u32,
    milestone_interval: u32,
    current_delay_ms: u32,
    last_milestone: u32,
}

impl DifficultyController {
    pub fn new(settings: &GameSettings) -> Self {
        Self {
            initial_delay_ms: settings.initial_delay_ms,
            speed_step_ms: settings.speed_step_ms,
            min_delay_ms: settings.min_delay_ms,
            milestone_interval: settings.milestone_interval.max(1),
            current_delay_ms: settings.initial_delay_ms,
            last_milestone: 0,
        }
    }

    pub fn reset(&mut self) {
        self.current_delay_ms = self.initial_delay_ms;
        self.last_milestone = 0;
    }

    pub fn current_delay_ms(&self) -> u32 {
        self.current_delay_ms
    }

    pub fn current_delay(&self) -> Duration {
        Duration::from_millis(self.current_delay_ms as u64)
    }

    /// Highest milestone score reached so far (0 before the first one).
    pub fn last_milestone(&self) -> u32 {
        self.last_milestone * self.milestone_interval
    }

    /// Records the new score. Returns how many milestones were newly crossed;
    /// the delay shrinks one step per crossing, never below the floor.
    pub fn on_score(&mut self, score: u32) -> u32 {
        let reached = score / self.milestone_interval;
        if reached <= self.last_milestone {
            return 0;
        }

        let crossed = reached - self.last_milestone;
        self.last_milestone = reached;
        let reduction = self.speed_step_ms.saturating_mul(crossed);
        self.current_delay_ms = self
            .current_delay_ms
            .saturating_sub(reduction)
            .max(self.min_delay_ms);
        crossed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndMessageTier {
    Rookie,
    Amateur,
    Skilled,
    Expert,
    Legendary,
}

impl EndMessageTier {
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=50 => EndMessageTier::Rookie,
            51..=100 => EndMessageTier::Amateur,
            101..=150 => EndMessageTier::Skilled,
            151..=200 => EndMessageTier::Expert,
            _ => EndMessageTier::Legendary,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            EndMessageTier::Rookie => "Nice try! Every snake starts small.",
            EndMessageTier::Amateur => "Not bad! You're getting the hang of it.",
            EndMessageTier::Skilled => "Impressive! That snake was well fed.",
            EndMessageTier::Expert => "Outstanding! Few snakes grow this long.",
            EndMessageTier::Legendary => "Legendary! You are the snake master.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> DifficultyController {
        DifficultyController::new(&GameSettings::default())
    }

    #[test]
    fn test_crossing_fifty_speeds_up_once() {
        let mut difficulty = controller();
        assert_eq!(difficulty.on_score(49), 0);
        assert_eq!(difficulty.current_delay_ms(), 100);
        assert_eq!(difficulty.on_score(50), 1);
        assert_eq!(difficulty.current_delay_ms(), 90);
        assert_eq!(difficulty.on_score(55), 0);
        assert_eq!(difficulty.current_delay_ms(), 90);
        assert_eq!(difficulty.last_milestone(), 50);
    }

    #[test]
    fn test_delay_floored() {
        let mut difficulty = controller();
        for score in (50..=1000).step_by(50) {
            difficulty.on_score(score);
        }
        assert_eq!(difficulty.current_delay_ms(), 30);
        assert_eq!(difficulty.current_delay(), Duration::from_millis(30));
    }

    #[test]
    fn test_skipping_milestones_counts_each() {
        let mut difficulty = controller();
        assert_eq!(difficulty.on_score(120), 2);
        assert_eq!(difficulty.current_delay_ms(), 80);
    }

    #[test]
    fn test_reset_restores_initial_delay() {
        let mut difficulty = controller();
        difficulty.on_score(200);
        difficulty.reset();
        assert_eq!(difficulty.current_delay_ms(), 100);
        assert_eq!(difficulty.last_milestone(), 0);
        assert_eq!(difficulty.on_score(50), 1);
    }

    #[test]
    fn test_end_message_bands() {
        assert_eq!(EndMessageTier::from_score(0), EndMessageTier::Rookie);
        assert_eq!(EndMessageTier::from_score(50), EndMessageTier::Rookie);
        assert_eq!(EndMessageTier::from_score(51), EndMessageTier::Amateur);
        assert_eq!(EndMessageTier::from_score(100), EndMessageTier::Amateur);
        assert_eq!(EndMessageTier::from_score(150), EndMessageTier::Skilled);
        assert_eq!(EndMessageTier::from_score(200), EndMessageTier::Expert);
        assert_eq!(EndMessageTier::from_score(201), EndMessageTier::Legendary);
    }
}
