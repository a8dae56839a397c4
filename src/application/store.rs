//! In-memory owner of the Work and Travel item maps

use crate::application::{Confirm, PersistenceWriter};
use crate::domain::{Category, IdGenerator, ItemId, ItemMap};
use crate::infrastructure::PersistenceGateway;
use std::sync::Arc;
use tracing::debug;

/// Both item maps plus the selected category.
///
/// Mutations update memory first and hand the new map to the background
/// writer; nothing here waits for or reports on storage.
pub struct ItemStore {
    selected: Category,
    work: ItemMap,
    travel: ItemMap,
    ids: Box<dyn IdGenerator>,
    writer: PersistenceWriter,
}

impl ItemStore {
    /// Load persisted maps and start the background writer
    pub async fn open(gateway: Arc<PersistenceGateway>, mut ids: Box<dyn IdGenerator>) -> Self {
        let loaded = gateway.load().await;
        let work = loaded.work.unwrap_or_default();
        let travel = loaded.travel.unwrap_or_default();
        for (id, _) in work.iter().chain(travel.iter()) {
            ids.observe(id);
        }

        ItemStore {
            selected: Category::default(),
            work,
            travel,
            ids,
            writer: PersistenceWriter::spawn(gateway),
        }
    }

    pub fn selected(&self) -> Category {
        self.selected
    }

    pub fn select_category(&mut self, category: Category) {
        self.selected = category;
    }

    pub fn items(&self, category: Category) -> &ItemMap {
        match category {
            Category::Work => &self.work,
            Category::Travel => &self.travel,
        }
    }

    /// Items of the selected category
    pub fn current_items(&self) -> &ItemMap {
        self.items(self.selected)
    }

    /// Add `text` under a fresh id. Empty text is ignored.
    pub fn add_item(&mut self, category: Category, text: &str) -> &ItemMap {
        if text.is_empty() {
            return self.items(category);
        }

        let mut id = self.ids.next_id();
        while self.items(category).contains(&id) {
            id = self.ids.next_id();
        }
        debug!(%category, %id, "adding item");
        let next = self.items(category).with_item(id, text);
        self.install(category, next)
    }

    /// Remove `id` once `confirm` agrees. Cancelling leaves everything as is;
    /// an unknown id still persists the (unchanged) map.
    pub fn remove_item(
        &mut self,
        category: Category,
        id: &ItemId,
        confirm: &dyn Confirm,
    ) -> &ItemMap {
        let prompt = match self.items(category).get(id) {
            Some(text) => format!("Delete \"{}\"?", text),
            None => format!("Delete item {}?", id),
        };
        if !confirm.confirm(&prompt) {
            debug!(%category, %id, "removal cancelled");
            return self.items(category);
        }

        debug!(%category, %id, "removing item");
        let next = self.items(category).without_item(id);
        self.install(category, next)
    }

    /// Wait for queued saves to be attempted
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    fn install(&mut self, category: Category, items: ItemMap) -> &ItemMap {
        self.writer.submit(category, items.clone());
        let slot = match category {
            Category::Work => &mut self.work,
            Category::Travel => &mut self.travel,
        };
        *slot = items;
        slot
    }
}
