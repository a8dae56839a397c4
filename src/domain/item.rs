//! Items and per-category item maps

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a single item
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        ItemId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_string())
    }
}

/// Mapping from item id to item text for one category.
///
/// Serializes as a flat JSON object (`{"1700000000000": "buy milk"}`).
/// Generated ids are fixed-width timestamps, so key order follows insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemMap(BTreeMap<ItemId, String>);

impl ItemMap {
    pub fn new() -> Self {
        ItemMap::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.0.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &str)> {
        self.0.iter().map(|(id, text)| (id, text.as_str()))
    }

    /// New map with `(id, text)` added
    pub fn with_item(&self, id: ItemId, text: impl Into<String>) -> ItemMap {
        let mut next = self.0.clone();
        next.insert(id, text.into());
        ItemMap(next)
    }

    /// New map without `id`; identical copy when `id` is absent
    pub fn without_item(&self, id: &ItemId) -> ItemMap {
        let mut next = self.0.clone();
        next.remove(id);
        ItemMap(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_item_leaves_original_untouched() {
        let empty = ItemMap::new();
        let one = empty.with_item(ItemId::from("1"), "buy milk");

        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
        assert_eq!(one.get(&ItemId::from("1")), Some("buy milk"));
    }

    #[test]
    fn test_without_missing_item_is_noop() {
        let map = ItemMap::new().with_item(ItemId::from("1"), "a");
        let same = map.without_item(&ItemId::from("2"));
        assert_eq!(map, same);
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let map = ItemMap::new()
            .with_item(ItemId::from("1700000000001"), "pay rent")
            .with_item(ItemId::from("1700000000000"), "buy milk");

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            r#"{"1700000000000":"buy milk","1700000000001":"pay rent"}"#
        );
    }

    #[test]
    fn test_deserializes_flat_object() {
        let map: ItemMap = serde_json::from_str(r#"{"5":"Tokyo","3":"Oslo"}"#).unwrap();
        let ids: Vec<&str> = map.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["3", "5"]);
        assert_eq!(map.get(&ItemId::from("5")), Some("Tokyo"));
    }

    #[test]
    fn test_rejects_non_string_values() {
        let result: Result<ItemMap, _> = serde_json::from_str(r#"{"1": 42}"#);
        assert!(result.is_err());
    }
}
