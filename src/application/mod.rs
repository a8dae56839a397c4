//! Application layer - Use cases and orchestration

pub mod confirm;
pub mod init;
pub mod manage_config;
pub mod store;
pub mod writer;

pub use confirm::{AssumeYes, Confirm, TerminalConfirm};
pub use manage_config::ConfigService;
pub use store::ItemStore;
pub use writer::PersistenceWriter;
