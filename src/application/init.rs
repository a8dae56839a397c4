//! Initialize list root use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, ListRepository};
use std::fs;
use std::path::Path;

/// Initialize a new list root at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::default())?;

    println!("Initialized twolist at {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_nested_root_with_config() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("lists");

        init(&root).unwrap();

        let repo = FileSystemRepository::new(root);
        assert!(repo.is_initialized());
        assert_eq!(repo.load_config().unwrap(), Config::default());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();

        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_err());
    }
}
