//! Persistence gateway between item maps and key-value storage
//!
//! Every failure here is swallowed and logged. Loads degrade to "no value"
//! for the failing category, saves are attempted once and never retried.

use crate::domain::{Category, ItemMap};
use crate::error::Result;
use crate::infrastructure::KeyValueStore;
use std::sync::Arc;
use tracing::{debug, error};

/// Result of the startup read; `None` means keep the empty default
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadedMaps {
    pub work: Option<ItemMap>,
    pub travel: Option<ItemMap>,
}

impl LoadedMaps {
    pub fn get(&self, category: Category) -> Option<&ItemMap> {
        match category {
            Category::Work => self.work.as_ref(),
            Category::Travel => self.travel.as_ref(),
        }
    }
}

pub struct PersistenceGateway {
    store: Arc<dyn KeyValueStore>,
}

impl PersistenceGateway {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        PersistenceGateway { store }
    }

    /// Read both categories concurrently
    pub async fn load(&self) -> LoadedMaps {
        let (work, travel) = tokio::join!(
            self.load_category(Category::Work),
            self.load_category(Category::Travel)
        );
        LoadedMaps { work, travel }
    }

    /// Serialize and write one category's map
    pub async fn save(&self, category: Category, items: &ItemMap) {
        match self.write(category, items).await {
            Ok(()) => debug!(%category, items = items.len(), "saved item map"),
            Err(e) => error!(%category, error = %e, "failed to save item map"),
        }
    }

    async fn load_category(&self, category: Category) -> Option<ItemMap> {
        match self.read(category).await {
            Ok(items) => items,
            Err(e) => {
                error!(%category, error = %e, "failed to load item map, starting empty");
                None
            }
        }
    }

    async fn read(&self, category: Category) -> Result<Option<ItemMap>> {
        let Some(raw) = self.store.get(category.storage_key()).await? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    async fn write(&self, category: Category, items: &ItemMap) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.store.set(category.storage_key(), &raw).await
    }
}
