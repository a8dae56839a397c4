//! List root discovery and layout

use crate::error::{Result, TwolistError};
use crate::infrastructure::config::STATE_DIR;
use crate::infrastructure::{Config, FileStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for list root operations
pub trait ListRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .twolist/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .twolist/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .twolist directory exists
    fn is_initialized(&self) -> bool;

    /// Create .twolist directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of ListRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the list root.
    /// Checks TWOLIST_ROOT first, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("TWOLIST_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_state_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TwolistError::Config(format!(
                    "TWOLIST_ROOT is set to '{}' but no .twolist directory found. \
                    Run 'twolist init' in that directory or unset TWOLIST_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the list root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_state_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(TwolistError::NotTwolistDirectory(start.to_path_buf())),
            }
        }
    }

    /// Key-value store holding the item maps of this root
    pub fn item_store(&self) -> FileStore {
        FileStore::new(self.root.join(STATE_DIR))
    }

    fn has_state_dir(path: &Path) -> bool {
        path.join(STATE_DIR).is_dir()
    }
}

impl ListRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_state_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let state_dir = self.root.join(STATE_DIR);

        if state_dir.exists() {
            return Err(TwolistError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&state_dir)?;
        Ok(())
    }
}
