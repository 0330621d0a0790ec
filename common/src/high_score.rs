use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::config::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider,
    YamlConfigSerializer,
};
use crate::log_warn;

/// Persistence side of the game-over flow. The game calls it once per run.
pub trait HighScoreStore: Send {
    fn best(&self) -> u32;

    /// Records `score` if it beats the stored best. Returns whether it did.
    fn check_and_update_high_score(&mut self, score: u32) -> bool;
}

#[derive(Default)]
pub struct MemoryHighScoreStore {
    best: u32,
}

impl MemoryHighScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self { best }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn best(&self) -> u32 {
        self.best
    }

    fn check_and_update_high_score(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub best: u32,
    #[serde(default)]
    pub achieved_at: Option<String>,
}

/// Keeps the best score in a YAML score file.
pub struct FileHighScoreStore<TProvider = FileContentConfigProvider>
where
    TProvider: ConfigContentProvider + Send,
{
    provider: TProvider,
    serializer: YamlConfigSerializer,
    record: HighScoreRecord,
}

impl FileHighScoreStore<FileContentConfigProvider> {
    pub fn from_file(file_path: &str) -> Self {
        Self::open(FileContentConfigProvider::new(file_path))
    }
}

impl<TProvider> FileHighScoreStore<TProvider>
where
    TProvider: ConfigContentProvider + Send,
{
    /// Unreadable or corrupt score files start from zero rather than failing
    /// the game.
    pub fn open(provider: TProvider) -> Self {
        let serializer = YamlConfigSerializer::new();
        let record = match Self::load(&provider, &serializer) {
            Ok(record) => record,
            Err(e) => {
                log_warn!("Ignoring unreadable score file: {}", e);
                HighScoreRecord::default()
            }
        };

        Self {
            provider,
            serializer,
            record,
        }
    }

    fn load(provider: &TProvider, serializer: &YamlConfigSerializer) -> Result<HighScoreRecord, ConfigError> {
        match provider.get_config_content()? {
            Some(content) => serializer.deserialize(&content),
            None => Ok(HighScoreRecord::default()),
        }
    }

    pub fn record(&self) -> &HighScoreRecord {
        &self.record
    }

    fn save(&self) -> Result<(), ConfigError> {
        let content = self.serializer.serialize(&self.record)?;
        self.provider.set_config_content(&content)
    }
}

impl<TProvider> HighScoreStore for FileHighScoreStore<TProvider>
where
    TProvider: ConfigContentProvider + Send,
{
    fn best(&self) -> u32 {
        self.record.best
    }

    fn check_and_update_high_score(&mut self, score: u32) -> bool {
        if score <= self.record.best {
            return false;
        }

        self.record = HighScoreRecord {
            best: score,
            achieved_at: Some(Local::now().to_rfc3339()),
        };
        if let Err(e) = self.save() {
            log_warn!("Failed to save high score {}: {}", score, e);
        }
        true
    }
}
