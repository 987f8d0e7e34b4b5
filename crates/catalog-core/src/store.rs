use catalog_models::{ContentItem, WatchStatus};
use tracing::debug;

/// Maximum length of personal review notes, in characters
pub const MAX_NOTES_LEN: usize = 500;

/// In-memory, session-scoped collection of catalog items.
///
/// Items are seeded once at construction; there is no create operation.
/// Every mutation locates the target by id and replaces that element only,
/// leaving all other elements untouched so consumers can skip re-render for
/// them. Mutations on an absent id are silent no-ops, never errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStore {
    items: Vec<ContentItem>,
}

impl CatalogStore {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items with the given watch status (watchlist tab badges)
    pub fn status_count(&self, status: WatchStatus) -> usize {
        self.items
            .iter()
            .filter(|item| item.watch_status == status)
            .count()
    }

    pub fn favorites(&self) -> impl Iterator<Item = &ContentItem> {
        self.items.iter().filter(|item| item.is_favorite)
    }

    /// Locate by id, clone the element, apply the edit, and replace it.
    /// Returns false (and leaves the collection unchanged) if the id is
    /// absent.
    fn replace_with(&mut self, id: u32, edit: impl FnOnce(&mut ContentItem)) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                let mut updated = self.items[index].clone();
                edit(&mut updated);
                self.items[index] = updated;
                true
            }
            None => {
                debug!(id, "mutation ignored: no item with this id");
                false
            }
        }
    }

    pub fn set_favorite(&mut self, id: u32, is_favorite: bool) {
        self.replace_with(id, |item| item.is_favorite = is_favorite);
    }

    pub fn toggle_favorite(&mut self, id: u32) {
        self.replace_with(id, |item| item.is_favorite = !item.is_favorite);
    }

    pub fn set_watch_status(&mut self, id: u32, status: WatchStatus) {
        self.replace_with(id, |item| item.watch_status = status);
    }

    /// Advance the item's status along the fixed cycle
    /// unwatched -> watching -> watched -> unwatched
    pub fn cycle_watch_status(&mut self, id: u32) {
        self.replace_with(id, |item| item.watch_status = item.watch_status.next());
    }

    /// Overwrite the personal rating and notes as one logical update.
    ///
    /// The rating is clamped to [0, 5] at this boundary; 0 is stored as
    /// `None` (unrated). Empty notes are stored as `None`.
    pub fn set_personal_review(&mut self, id: u32, rating: u8, notes: &str) {
        let rating = rating.min(5);
        self.replace_with(id, |item| {
            item.personal_rating = if rating == 0 { None } else { Some(rating) };
            item.personal_notes = if notes.is_empty() {
                None
            } else {
                Some(notes.to_string())
            };
        });
    }

    /// Delete the item. Irreversible within the session; later operations
    /// referencing this id are no-ops.
    pub fn remove(&mut self, id: u32) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            debug!(id, "remove ignored: no item with this id");
        }
    }
}

#[cfg(test)]
mod tests;
