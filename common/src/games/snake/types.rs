use serde::{Deserialize, Serialize};

use crate::GameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one `cell` step away in `direction`.
    pub fn offset(&self, direction: Direction, cell: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx * cell, self.y + dy * cell)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step in screen coordinates: y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "w" => Ok(Direction::Up),
            "down" | "s" => Ok(Direction::Down),
            "left" | "a" => Ok(Direction::Left),
            "right" | "d" => Ok(Direction::Right),
            _ => Err(GameError::InvalidDirectionInput(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodKind {
    Regular,
    Rare,
    Golden,
    Poison,
}

impl FoodKind {
    pub fn points(&self) -> u32 {
        match self {
            FoodKind::Regular => 1,
            FoodKind::Rare => 5,
            FoodKind::Golden => 20,
            FoodKind::Poison => 0,
        }
    }

    pub fn is_consumable(&self) -> bool {
        !matches!(self, FoodKind::Poison)
    }

    pub fn clears_poison(&self) -> bool {
        matches!(self, FoodKind::Golden)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoodItem {
    pub position: Point,
    pub kind: FoodKind,
}

impl FoodItem {
    pub fn new(position: Point, kind: FoodKind) -> Self {
        Self { position, kind }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Terminated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    PoisonCollision,
    BoardFull,
}

impl DeathReason {
    pub fn description(&self) -> &'static str {
        match self {
            DeathReason::WallCollision => "You hit the wall",
            DeathReason::SelfCollision => "You bit yourself",
            DeathReason::PoisonCollision => "You ate a poison apple",
            DeathReason::BoardFull => "No room left on the board",
        }
    }
}
