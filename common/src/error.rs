#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    InvalidDirectionInput(String),
    SpawnExhausted { free_cells: usize },
    InvalidConfiguration(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidDirectionInput(input) => {
                write!(f, "Invalid direction input: {:?}", input)
            }
            GameError::SpawnExhausted { free_cells } => {
                write!(f, "No free cell to spawn food ({} free)", free_cells)
            }
            GameError::InvalidConfiguration(reason) => {
                write!(f, "Invalid configuration: {}", reason)
            }
        }
    }
}

impl std::error::Error for GameError {}
