//! Config management use case

use crate::domain::Category;
use crate::error::{Result, TwolistError};
use crate::infrastructure::{Config, FileSystemRepository, ListRepository};
use std::str::FromStr;

/// Service for managing list configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "category" => Ok(config.category.to_string().to_lowercase()),
            "log" => Ok(config.log),
            _ => Err(TwolistError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: category, log",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "category" => {
                config.category =
                    Category::from_str(value).map_err(TwolistError::InvalidCategory)?;
            }
            "log" => {
                if value.trim().is_empty() {
                    return Err(TwolistError::Config(
                        "Log filter cannot be empty".to_string(),
                    ));
                }
                config.log = value.to_string();
            }
            _ => {
                return Err(TwolistError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: category, log",
                    key
                )));
            }
        }

        self.repository.save_config(&config)
    }

    /// Persist the selected category
    pub fn select(&self, category: Category) -> Result<()> {
        let mut config = self.repository.load_config()?;
        config.category = category;
        self.repository.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::default()).unwrap();
        ConfigService::new(repo)
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert_eq!(service.get("category").unwrap(), "work");
        assert_eq!(service.get("log").unwrap(), "warn");
    }

    #[test]
    fn test_set_category() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("category", "Travel").unwrap();
        assert_eq!(service.get("category").unwrap(), "travel");
    }

    #[test]
    fn test_set_invalid_category() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        let result = service.set("category", "home");
        assert!(matches!(result, Err(TwolistError::InvalidCategory(_))));
        assert_eq!(service.get("category").unwrap(), "work");
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.get("editor").is_err());
        assert!(service.set("editor", "vim").is_err());
    }

    #[test]
    fn test_select_persists() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.select(Category::Travel).unwrap();
        assert_eq!(service.list().unwrap().category, Category::Travel);
    }
}
