use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::snake::{Difficulty, GameSettings};
use serde::{Deserialize, Serialize};

use super::SnakeColor;

const CONFIG_FILE_NAME: &str = "extreme_snake_config.yaml";
const HIGH_SCORE_FILE_NAME: &str = "extreme_snake_scores.yaml";

pub type ClientConfigManager =
    ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

fn path_next_to_exe(file_name: &str) -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(file_name).to_string_lossy().into_owned();
    }
    file_name.to_string()
}

pub fn get_config_manager(path: Option<&str>) -> ClientConfigManager {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&path_next_to_exe(CONFIG_FILE_NAME)),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub difficulty: Difficulty,
    pub snake_color: SnakeColor,
    pub high_score_file: String,
    /// Replaces the difficulty presets entirely when present.
    #[serde(default)]
    pub custom_settings: Option<GameSettings>,
}

impl Config {
    pub fn game_settings(&self, difficulty: Difficulty) -> GameSettings {
        match &self.custom_settings {
            Some(settings) => settings.clone(),
            None => GameSettings::for_difficulty(difficulty),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.high_score_file.trim().is_empty() {
            return Err("high_score_file must not be empty".to_string());
        }
        if let Some(settings) = &self.custom_settings {
            settings.validate()?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            snake_color: SnakeColor::Black,
            high_score_file: path_next_to_exe(HIGH_SCORE_FILE_NAME),
            custom_settings: None,
        }
    }
}
