//! The two fixed item partitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which list an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Work,
    Travel,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Work, Category::Travel];

    /// Storage key the category's item map is persisted under
    pub fn storage_key(&self) -> &'static str {
        match self {
            Category::Work => "works",
            Category::Travel => "travels",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Work => write!(f, "Work"),
            Category::Travel => write!(f, "Travel"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "work" | "works" => Ok(Category::Work),
            "travel" | "travels" => Ok(Category::Travel),
            _ => Err(s.to_string()),
        }
    }
}
