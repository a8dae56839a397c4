//! twolist - Work and Travel to-do lists in the terminal
//!
//! Keeps two independent item lists in memory, persists each one as a
//! key-value blob, and restores both at startup.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TwolistError;
