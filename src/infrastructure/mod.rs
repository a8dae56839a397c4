//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod gateway;
pub mod repository;
pub mod storage;

pub use config::Config;
pub use gateway::{LoadedMaps, PersistenceGateway};
pub use repository::{FileSystemRepository, ListRepository};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
