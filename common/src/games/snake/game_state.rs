use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use crate::{log, log_debug, log_warn, GameError};
use crate::games::SessionRng;
use crate::high_score::HighScoreStore;
use super::bounds::PlayableBounds;
use super::collision;
use super::difficulty::{DifficultyController, EndMessageTier};
use super::food::FoodSpawner;
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{DeathReason, Direction, FoodItem, FoodKind, GameStatus, Point};

#[derive(Clone, Debug, PartialEq)]
pub struct GameOverSummary {
    pub score: u32,
    pub reason: DeathReason,
    pub tier: EndMessageTier,
    pub is_new_high_score: bool,
    pub best_score: u32,
    pub ticks: u64,
}

impl GameOverSummary {
    pub fn message(&self) -> &'static str {
        self.tier.message()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    FoodEaten {
        kind: FoodKind,
        position: Point,
        score: u32,
    },
    PoisonCleared {
        count: usize,
    },
    PoisonSpawned {
        position: Point,
    },
    SpeedIncreased {
        delay_ms: u32,
    },
    GameOver(GameOverSummary),
}

/// Owned copy of everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub body: Vec<Point>,
    pub direction: Direction,
    pub food: FoodItem,
    pub poison: Vec<FoodItem>,
    pub score: u32,
    pub best_score: u32,
    pub delay_ms: u32,
    pub status: GameStatus,
    pub summary: Option<GameOverSummary>,
    pub tick: u64,
    pub bounds: PlayableBounds,
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

pub struct SnakeGame {
    settings: GameSettings,
    bounds: PlayableBounds,
    spawner: FoodSpawner,
    difficulty: DifficultyController,
    rng: SessionRng,
    high_scores: Box<dyn HighScoreStore>,
    snake: Snake,
    food: FoodItem,
    poison: Vec<FoodItem>,
    score: u32,
    status: GameStatus,
    death_reason: Option<DeathReason>,
    summary: Option<GameOverSummary>,
    tick: u64,
}

impl SnakeGame {
    pub fn new(
        settings: GameSettings,
        mut rng: SessionRng,
        high_scores: Box<dyn HighScoreStore>,
    ) -> Result<Self, GameError> {
        settings.check()?;

        let bounds = settings.bounds();
        let spawner = FoodSpawner::new(bounds, settings.food_probabilities, settings.poison_probability);
        let difficulty = DifficultyController::new(&settings);
        let (snake, food) = Self::fresh_round(&settings, &bounds, &spawner, &mut rng)?;

        log!(
            "New game: {}x{} board, cell {}, delay {}ms, seed {}",
            settings.width,
            settings.height,
            settings.cell_size,
            settings.initial_delay_ms,
            rng.seed()
        );

        Ok(Self {
            settings,
            bounds,
            spawner,
            difficulty,
            rng,
            high_scores,
            snake,
            food,
            poison: Vec::new(),
            score: 0,
            status: GameStatus::Running,
            death_reason: None,
            summary: None,
            tick: 0,
        })
    }

    fn fresh_round(
        settings: &GameSettings,
        bounds: &PlayableBounds,
        spawner: &FoodSpawner,
        rng: &mut SessionRng,
    ) -> Result<(Snake, FoodItem), GameError> {
        let snake = Snake::new(bounds.center(), Direction::Right, settings.cell_size);
        let excluded: HashSet<Point> = snake.body().iter().copied().collect();
        let food = spawner.spawn_consumable(&excluded, rng)?;
        Ok((snake, food))
    }

    /// Rebuilds every piece of round state. Nothing is touched if the first
    /// food item cannot be placed.
    pub fn restart(&mut self) -> Result<(), GameError> {
        let (snake, food) = Self::fresh_round(&self.settings, &self.bounds, &self.spawner, &mut self.rng)?;

        self.snake = snake;
        self.food = food;
        self.poison.clear();
        self.score = 0;
        self.difficulty.reset();
        self.status = GameStatus::Running;
        self.death_reason = None;
        self.summary = None;
        self.tick = 0;

        log!("Game restarted");
        Ok(())
    }

    /// Queues a turn for the next tick; returns whether it was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.is_terminated() {
            return false;
        }
        self.snake
            .set_pending_direction(direction, self.settings.allow_reversal)
    }

    pub fn set_direction_input(&mut self, input: &str) -> Result<bool, GameError> {
        let direction: Direction = input.parse()?;
        Ok(self.set_direction(direction))
    }

    /// Runs one tick. Does nothing once the game is over.
    pub fn advance(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.is_terminated() {
            return events;
        }

        self.tick += 1;
        let direction = self.snake.take_pending_direction();
        self.snake.move_step(direction);

        if collision::food_hit(self.snake.head(), &self.food)
            && let Err(reason) = self.consume_food(&mut events)
        {
            self.terminate(reason, &mut events);
            return events;
        }

        if let Some(reason) = collision::first_fatal(&self.snake, &self.bounds, &self.poison) {
            self.terminate(reason, &mut events);
        }

        events
    }

    fn consume_food(&mut self, events: &mut Vec<GameEvent>) -> Result<(), DeathReason> {
        let eaten = self.food;
        self.snake.grow();
        self.score += eaten.kind.points();
        events.push(GameEvent::FoodEaten {
            kind: eaten.kind,
            position: eaten.position,
            score: self.score,
        });
        log_debug!(
            "Ate {:?} at ({}, {}). Score: {}",
            eaten.kind,
            eaten.position.x,
            eaten.position.y,
            self.score
        );

        if eaten.kind.clears_poison() && !self.poison.is_empty() {
            let count = self.poison.len();
            self.poison.clear();
            events.push(GameEvent::PoisonCleared { count });
            log_debug!("Golden apple cleared {} poison apples", count);
        }

        if self.difficulty.on_score(self.score) > 0 {
            let delay_ms = self.difficulty.current_delay_ms();
            events.push(GameEvent::SpeedIncreased { delay_ms });
            log!("Milestone {} reached, delay now {}ms", self.difficulty.last_milestone(), delay_ms);
        }

        let mut excluded = self.occupied_cells();
        self.food = self
            .spawner
            .spawn_consumable(&excluded, &mut self.rng)
            .map_err(|e| {
                log_warn!("Cannot place the next food item: {}", e);
                DeathReason::BoardFull
            })?;

        if self.spawner.roll_poison(&mut self.rng) {
            excluded.insert(self.food.position);
            match self.spawner.spawn_poison(&excluded, &mut self.rng) {
                Ok(item) => {
                    events.push(GameEvent::PoisonSpawned {
                        position: item.position,
                    });
                    log_debug!("Poison spawned at ({}, {})", item.position.x, item.position.y);
                    self.poison.push(item);
                }
                Err(e) => log_debug!("Skipping poison spawn: {}", e),
            }
        }

        Ok(())
    }

    fn terminate(&mut self, reason: DeathReason, events: &mut Vec<GameEvent>) {
        self.status = GameStatus::Terminated;
        self.death_reason = Some(reason);

        let is_new_high_score = self.high_scores.check_and_update_high_score(self.score);
        let summary = GameOverSummary {
            score: self.score,
            reason,
            tier: EndMessageTier::from_score(self.score),
            is_new_high_score,
            best_score: self.high_scores.best(),
            ticks: self.tick,
        };

        log!(
            "Game over after {} ticks: {} (score {}{})",
            self.tick,
            reason.description(),
            self.score,
            if is_new_high_score { ", new high score" } else { "" }
        );

        self.summary = Some(summary.clone());
        events.push(GameEvent::GameOver(summary));
    }

    fn occupied_cells(&self) -> HashSet<Point> {
        self.snake
            .body()
            .iter()
            .copied()
            .chain(self.poison.iter().map(|item| item.position))
            .collect()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn snake_body(&self) -> &VecDeque<Point> {
        self.snake.body()
    }

    pub fn active_food(&self) -> &FoodItem {
        &self.food
    }

    pub fn active_poison(&self) -> &[FoodItem] {
        &self.poison
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.high_scores.best()
    }

    pub fn current_delay(&self) -> Duration {
        self.difficulty.current_delay()
    }

    pub fn current_delay_ms(&self) -> u32 {
        self.difficulty.current_delay_ms()
    }

    pub fn last_milestone(&self) -> u32 {
        self.difficulty.last_milestone()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminated(&self) -> bool {
        self.status == GameStatus::Terminated
    }

    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    pub fn end_message(&self) -> Option<&'static str> {
        self.summary.as_ref().map(GameOverSummary::message)
    }

    pub fn summary(&self) -> Option<&GameOverSummary> {
        self.summary.as_ref()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            body: self.snake.body().iter().copied().collect(),
            direction: self.snake.direction(),
            food: self.food,
            poison: self.poison.clone(),
            score: self.score,
            best_score: self.high_scores.best(),
            delay_ms: self.difficulty.current_delay_ms(),
            status: self.status,
            summary: self.summary.clone(),
            tick: self.tick,
            bounds: self.bounds,
            width: self.settings.width,
            height: self.settings.height,
            cell_size: self.settings.cell_size,
        }
    }

    #[cfg(test)]
    fn set_food(&mut self, food: FoodItem) {
        self.food = food;
    }

    #[cfg(test)]
    fn set_poison(&mut self, poison: Vec<FoodItem>) {
        self.poison = poison;
    }

    #[cfg(test)]
    fn set_score(&mut self, score: u32) {
        self.score = score;
        self.difficulty.on_score(score);
    }

    #[cfg(test)]
    fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }
}
