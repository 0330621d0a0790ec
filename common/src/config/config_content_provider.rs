use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use super::ConfigError;

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError>;
    fn set_config_content(&self, content: &str) -> Result<(), ConfigError>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.file_path
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.file_path, content)?;
        Ok(())
    }
}

/// Keeps content in memory; used where a file would be overkill.
#[derive(Default)]
pub struct MemoryContentProvider {
    content: Mutex<Option<String>>,
}

impl MemoryContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: &str) -> Self {
        Self {
            content: Mutex::new(Some(content.to_string())),
        }
    }
}

impl ConfigContentProvider for MemoryContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        let guard = self
            .content
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(guard.clone())
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        let mut guard = self
            .content
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("extreme_snake_provider_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let provider = FileContentConfigProvider::new(get_temp_file_path());
        let content = provider.get_config_content().unwrap();
        assert!(content.is_none());
    }

    #[test]
    fn test_file_write_then_read() {
        let path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(path.clone());
        provider.set_config_content("best: 12").unwrap();
        assert_eq!(provider.get_config_content().unwrap().as_deref(), Some("best: 12"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_memory_provider_starts_empty() {
        let provider = MemoryContentProvider::new();
        assert!(provider.get_config_content().unwrap().is_none());
        provider.set_config_content("x: 1").unwrap();
        assert_eq!(provider.get_config_content().unwrap().as_deref(), Some("x: 1"));
    }
}
