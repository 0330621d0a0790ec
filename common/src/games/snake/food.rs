use std::collections::HashSet;

use crate::GameError;
use crate::games::SessionRng;
use super::bounds::PlayableBounds;
use super::settings::FoodProbabilities;
use super::types::{FoodItem, FoodKind, Point};

const MIN_SPAWN_ATTEMPTS: usize = 64;
const ATTEMPTS_PER_CELL: usize = 4;

/// Places food on free cells by rejection sampling.
///
/// Sampling is capped; once the cap is hit the free cells are enumerated and
/// one is picked uniformly, so a dense board still terminates and only a
/// completely full board yields [`GameError::SpawnExhausted`].
#[derive(Clone, Debug)]
pub struct FoodSpawner {
    bounds: PlayableBounds,
    probabilities: FoodProbabilities,
    poison_probability: f64,
    max_attempts: usize,
}

impl FoodSpawner {
    pub fn new(bounds: PlayableBounds, probabilities: FoodProbabilities, poison_probability: f64) -> Self {
        let max_attempts = bounds.cell_count().saturating_mul(ATTEMPTS_PER_CELL).max(MIN_SPAWN_ATTEMPTS);
        Self {
            bounds,
            probabilities,
            poison_probability,
            max_attempts,
        }
    }

    pub fn bounds(&self) -> &PlayableBounds {
        &self.bounds
    }

    pub fn pick_kind(&self, rng: &mut SessionRng) -> FoodKind {
        let roll = rng.unit();
        if roll < self.probabilities.regular {
            FoodKind::Regular
        } else if roll < self.probabilities.regular + self.probabilities.rare {
            FoodKind::Rare
        } else {
            FoodKind::Golden
        }
    }

    pub fn roll_poison(&self, rng: &mut SessionRng) -> bool {
        rng.chance(self.poison_probability)
    }

    pub fn spawn_consumable(
        &self,
        excluded: &HashSet<Point>,
        rng: &mut SessionRng,
    ) -> Result<FoodItem, GameError> {
        let kind = self.pick_kind(rng);
        let position = self.free_position(excluded, rng)?;
        Ok(FoodItem::new(position, kind))
    }

    pub fn spawn_poison(
        &self,
        excluded: &HashSet<Point>,
        rng: &mut SessionRng,
    ) -> Result<FoodItem, GameError> {
        let position = self.free_position(excluded, rng)?;
        Ok(FoodItem::new(position, FoodKind::Poison))
    }

    fn random_cell(&self, rng: &mut SessionRng) -> Point {
        let column = rng.random_range(0..self.bounds.columns());
        let row = rng.random_range(0..self.bounds.rows());
        self.bounds.cell_at(column, row)
    }

    fn free_position(&self, excluded: &HashSet<Point>, rng: &mut SessionRng) -> Result<Point, GameError> {
        if self.bounds.is_empty() {
            return Err(GameError::SpawnExhausted { free_cells: 0 });
        }

        for _ in 0..self.max_attempts {
            let candidate = self.random_cell(rng);
            if !excluded.contains(&candidate) {
                return Ok(candidate);
            }
        }

        let free: Vec<Point> = self
            .bounds
            .cells()
            .filter(|cell| !excluded.contains(cell))
            .collect();
        if free.is_empty() {
            return Err(GameError::SpawnExhausted { free_cells: 0 });
        }
        Ok(free[rng.random_range(0..free.len())])
    }
}
