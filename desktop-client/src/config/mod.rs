mod main_config;
mod snake_color;

pub use main_config::{get_config_manager, ClientConfigManager, Config};
pub use snake_color::SnakeColor;
