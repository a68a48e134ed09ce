use serde::{Deserialize, Serialize};

use crate::error::StashError;
use crate::ids::ItemId;
use crate::stack::item::{FileItem, StackItem, TimestampMs};

/// The ordered collection of stashed items.
///
/// Insertion order is what gets persisted. [`Stack::newest_first`] hands out a
/// re-sorted copy for presentation without touching that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stack {
    items: Vec<StackItem>,
}

/// Result of decoding a persisted blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedStack {
    pub stack: Stack,
    /// Entries that parsed as JSON but failed item validation.
    pub skipped: usize,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<StackItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[StackItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<StackItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&StackItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Appends to the end, keeping existing order.
    pub fn append(&mut self, items: impl IntoIterator<Item = StackItem>) {
        self.items.extend(items);
    }

    /// Removes the item with `id`. Unknown ids leave the stack untouched.
    pub fn remove_by_id(&mut self, id: &ItemId) -> Option<StackItem> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Empties the stack, returning how many items it held.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    /// Presentation copy sorted by `addedAt`, newest first.
    pub fn newest_first(&self) -> Vec<StackItem> {
        let mut sorted = self.items.clone();
        sorted.sort_by(|a, b| b.added_at().cmp(&a.added_at()));
        sorted
    }

    pub fn file_items(&self) -> impl Iterator<Item = &FileItem> {
        self.items.iter().filter_map(StackItem::as_file)
    }

    pub fn file_count(&self) -> usize {
        self.file_items().count()
    }

    pub fn text_count(&self) -> usize {
        self.len() - self.file_count()
    }

    /// Latest `addedAt` in the stack, if any.
    pub fn last_added_at(&self) -> Option<TimestampMs> {
        self.items.iter().map(StackItem::added_at).max()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.items)
    }

    /// Decode a persisted blob.
    ///
    /// A blob that is not a JSON array is `PersistCorrupt`. Entries of a valid
    /// array that do not form a valid item are dropped and counted in
    /// [`DecodedStack::skipped`].
    pub fn from_json(raw: &str) -> Result<DecodedStack, StashError> {
        let values: Vec<serde_json::Value> =
            serde_json::from_str(raw).map_err(|e| StashError::PersistCorrupt(e.to_string()))?;

        let mut items = Vec::with_capacity(values.len());
        let mut skipped = 0;
        for value in values {
            match serde_json::from_value::<StackItem>(value) {
                Ok(item) if item.validate().is_ok() => items.push(item),
                _ => skipped += 1,
            }
        }

        Ok(DecodedStack {
            stack: Stack { items },
            skipped,
        })
    }
}

impl FromIterator<StackItem> for Stack {
    fn from_iter<T: IntoIterator<Item = StackItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::item::TextItem;

    fn ts(ms: i64) -> TimestampMs {
        TimestampMs::from_epoch_millis(ms)
    }

    fn text(t: &str, ms: i64) -> StackItem {
        TextItem::new(t, ts(ms)).into()
    }

    fn file(path: &str, ms: i64) -> StackItem {
        FileItem::new(path, None, ts(ms)).unwrap().into()
    }

    #[test]
    fn remove_by_id_keeps_relative_order() {
        let a = text("a", 1);
        let b = text("b", 2);
        let c = text("c", 3);
        let mut stack = Stack::from_items(vec![a.clone(), b.clone(), c.clone()]);

        let removed = stack.remove_by_id(b.id());

        assert_eq!(removed, Some(b));
        assert_eq!(stack.items(), &[a, c]);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut stack = Stack::from_items(vec![text("a", 1), text("b", 2)]);
        let before = stack.clone();
        assert!(stack.remove_by_id(&ItemId::from("missing")).is_none());
        assert_eq!(stack, before);
    }

    #[test]
    fn newest_first_does_not_reorder_the_stack() {
        let old = text("old", 1);
        let new = text("new", 9);
        let stack = Stack::from_items(vec![old.clone(), new.clone()]);

        assert_eq!(stack.newest_first(), vec![new, old.clone()]);
        assert_eq!(stack.items()[0], old);
    }

    #[test]
    fn counts_by_variant() {
        let stack = Stack::from_items(vec![file("/a", 1), text("t", 2), file("/b", 3)]);
        assert_eq!(stack.file_count(), 2);
        assert_eq!(stack.text_count(), 1);
        assert_eq!(stack.last_added_at(), Some(ts(3)));
    }

    #[test]
    fn json_round_trip_preserves_order_and_fields() {
        let stack = Stack::from_items(vec![file("/Users/x/report.pdf", 1), text("hello", 2)]);
        let decoded = Stack::from_json(&stack.to_json().unwrap()).unwrap();

        assert_eq!(decoded.skipped, 0);
        assert_eq!(decoded.stack, stack);
        match &decoded.stack.items()[0] {
            StackItem::File(f) => {
                assert_eq!(f.path, "/Users/x/report.pdf");
                assert_eq!(f.name, "report.pdf");
            }
            StackItem::Text(_) => panic!("expected file item first"),
        }
    }

    #[test]
    fn non_array_blob_is_corrupt() {
        assert!(matches!(
            Stack::from_json("{not json"),
            Err(StashError::PersistCorrupt(_))
        ));
        assert!(matches!(
            Stack::from_json(r#"{"type":"text"}"#),
            Err(StashError::PersistCorrupt(_))
        ));
    }

    #[test]
    fn invalid_entries_are_skipped() {
        let raw = r#"[
            {"type":"text","id":"a","text":"keep","addedAt":1},
            {"type":"image","id":"b","addedAt":2},
            {"type":"file","id":"c","path":"","name":"x","addedAt":3},
            {"type":"file","id":"d","path":"/tmp/x","name":"x","addedAt":4}
        ]"#;
        let decoded = Stack::from_json(raw).unwrap();
        assert_eq!(decoded.skipped, 2);
        let ids: Vec<&str> = decoded.stack.items().iter().map(|i| i.id().as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
    }
}
