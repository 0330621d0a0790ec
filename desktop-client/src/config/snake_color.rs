use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnakeColor {
    Black,
    Blue,
    Red,
    Pink,
}

impl SnakeColor {
    pub const ALL: [SnakeColor; 4] = [
        SnakeColor::Black,
        SnakeColor::Blue,
        SnakeColor::Red,
        SnakeColor::Pink,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SnakeColor::Black => "Black",
            SnakeColor::Blue => "Blue",
            SnakeColor::Red => "Red",
            SnakeColor::Pink => "Pink",
        }
    }
}
