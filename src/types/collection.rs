//! Collection payloads.
//!
//! Provides the container decoded from list endpoints: an ordered sequence
//! of items plus pagination metadata.

use std::fmt;
use std::slice;

use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

use super::item::Item;

/// A decoded ordered sequence of resources plus page metadata.
///
/// The wire shape is a JSON object with exactly one array-valued top-level
/// field (the sequence, keyed by the resource name, e.g. `"listings"`) and
/// an optional unsigned-integer `page` field. Sequence order is preserved
/// exactly as returned by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    resource: String,
    items: Vec<Item>,
    page: Option<u64>,
}

impl Collection {
    /// Returns the resource name the sequence was keyed by.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Returns the decoded items in server order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the current page indicator, when the server sent one.
    #[must_use]
    pub fn page(&self) -> Option<u64> {
        self.page
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items in server order.
    pub fn iter(&self) -> slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl TryFrom<Value> for Collection {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(mut map) = value else {
            return Err("collection body is not a JSON object".to_string());
        };

        let page = match map.remove("page") {
            None => None,
            Some(value) => Some(
                value
                    .as_u64()
                    .ok_or_else(|| format!("page is not an unsigned integer: {}", value))?,
            ),
        };

        let mut sequences = map
            .into_iter()
            .filter(|(_, value)| value.is_array())
            .collect::<Vec<_>>();

        let (resource, entries) = match sequences.len() {
            0 => return Err("collection body has no sequence field".to_string()),
            1 => {
                let (resource, value) = sequences.remove(0);
                match value {
                    Value::Array(entries) => (resource, entries),
                    _ => unreachable!("filtered on is_array"),
                }
            }
            n => {
                return Err(format!(
                    "collection body has {} sequence fields, expected exactly one",
                    n
                ))
            }
        };

        let items = entries
            .into_iter()
            .map(|entry| match entry {
                Value::Object(map) => Ok(Item::from(map)),
                other => Err(format!(
                    "sequence entry in {} is not a JSON object: {}",
                    resource, other
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            resource,
            items,
            page,
        })
    }
}

impl<'de> Deserialize<'de> for Collection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::try_from(value).map_err(de::Error::custom)
    }
}

impl IntoIterator for Collection {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Item;
    type IntoIter = slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.items.len() == 1 { "item" } else { "items" };
        match self.page {
            Some(page) => write!(
                f,
                "{} ({} {}, page {})",
                self.resource,
                self.items.len(),
                noun,
                page
            ),
            None => write!(f, "{} ({} {})", self.resource, self.items.len(), noun),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_decodes_sequence_and_page() {
        let collection: Collection =
            serde_json::from_str(r#"{"listings":[{"id":1},{"id":2}],"page":0}"#)
                .expect("collection");
        assert_eq!(collection.resource(), "listings");
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.page(), Some(0));
        assert_eq!(collection.items()[0].get("id"), Some(&json!(1)));
        assert_eq!(collection.items()[1].get("id"), Some(&json!(2)));
    }

    #[test]
    fn test_collection_preserves_server_order() {
        let collection: Collection =
            serde_json::from_str(r#"{"loans":[{"id":"c"},{"id":"a"},{"id":"b"}]}"#)
                .expect("collection");
        let ids = collection
            .iter()
            .filter_map(|item| item.get("id").and_then(Value::as_str))
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_collection_page_absent() {
        let collection: Collection =
            serde_json::from_str(r#"{"webhooks":[]}"#).expect("collection");
        assert!(collection.page().is_none());
        assert!(collection.is_empty());
    }

    #[test]
    fn test_collection_rejects_non_object() {
        assert!(serde_json::from_str::<Collection>("[{\"id\":1}]").is_err());
    }

    #[test]
    fn test_collection_rejects_missing_sequence() {
        assert!(serde_json::from_str::<Collection>(r#"{"page":0}"#).is_err());
    }

    #[test]
    fn test_collection_rejects_ambiguous_sequence() {
        let body = r#"{"listings":[],"loans":[],"page":0}"#;
        assert!(serde_json::from_str::<Collection>(body).is_err());
    }

    #[test]
    fn test_collection_rejects_non_object_entry() {
        assert!(serde_json::from_str::<Collection>(r#"{"listings":[1,2]}"#).is_err());
    }

    #[test]
    fn test_collection_rejects_bad_page() {
        assert!(serde_json::from_str::<Collection>(r#"{"listings":[],"page":"0"}"#).is_err());
        assert!(serde_json::from_str::<Collection>(r#"{"listings":[],"page":-1}"#).is_err());
    }

    #[test]
    fn test_collection_into_iterator() {
        let collection: Collection =
            serde_json::from_str(r#"{"listings":[{"id":1},{"id":2}],"page":3}"#)
                .expect("collection");
        assert_eq!((&collection).into_iter().count(), 2);
        assert_eq!(collection.into_iter().count(), 2);
    }

    #[test]
    fn test_collection_display_singular() {
        let collection: Collection =
            serde_json::from_str(r#"{"listings":[{"id":1}],"page":2}"#).expect("collection");
        assert_eq!(collection.to_string(), "listings (1 item, page 2)");
    }

    #[test]
    fn test_collection_display_plural() {
        let collection: Collection =
            serde_json::from_str(r#"{"loans":[{"id":1},{"id":2}]}"#).expect("collection");
        assert_eq!(collection.to_string(), "loans (2 items)");
    }
}
