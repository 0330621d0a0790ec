pub mod config;
pub mod games;
pub mod high_score;
pub mod logger;
mod error;

pub use error::GameError;
pub use games::SessionRng;
pub use games::snake::{
    DeathReason, Difficulty, Direction, FoodItem, FoodKind, GameEvent, GameOverSummary,
    GameSettings, GameSnapshot, GameStatus, Point, SnakeGame,
};
pub use high_score::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};
