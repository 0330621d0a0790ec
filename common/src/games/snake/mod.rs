mod bounds;
mod collision;
mod difficulty;
mod food;
mod game_state;
mod settings;
mod snake;
mod types;

pub use bounds::PlayableBounds;
pub use collision::{first_fatal, food_hit, poison_hit, self_hit, wall_hit};
pub use difficulty::{DifficultyController, EndMessageTier};
pub use food::FoodSpawner;
pub use game_state::{GameEvent, GameOverSummary, GameSnapshot, SnakeGame};
pub use settings::{Difficulty, FoodProbabilities, GameSettings};
pub use snake::Snake;
pub use types::{DeathReason, Direction, FoodItem, FoodKind, GameStatus, Point};
