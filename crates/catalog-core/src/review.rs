use catalog_models::ContentItem;
use tracing::debug;

use crate::store::{CatalogStore, MAX_NOTES_LEN};

/// Review-capture flow for a single item.
///
/// Closed -> Open (prefilled from the target's current review) -> Closed,
/// either by cancelling (edits discarded) or by saving (written through to
/// the store as one atomic update). A pending rating of 0 means unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ReviewEditor {
    #[default]
    Closed,
    Open {
        target: u32,
        pending_rating: u8,
        pending_notes: String,
    },
}

impl ReviewEditor {
    pub fn is_open(&self) -> bool {
        matches!(self, ReviewEditor::Open { .. })
    }

    pub fn target(&self) -> Option<u32> {
        match self {
            ReviewEditor::Open { target, .. } => Some(*target),
            ReviewEditor::Closed => None,
        }
    }

    pub fn pending_rating(&self) -> u8 {
        match self {
            ReviewEditor::Open { pending_rating, .. } => *pending_rating,
            ReviewEditor::Closed => 0,
        }
    }

    pub fn pending_notes(&self) -> &str {
        match self {
            ReviewEditor::Open { pending_notes, .. } => pending_notes,
            ReviewEditor::Closed => "",
        }
    }

    /// Open the editor for an item, prefilled from its current review
    pub fn open(&mut self, item: &ContentItem) {
        *self = ReviewEditor::Open {
            target: item.id,
            pending_rating: item.personal_rating.unwrap_or(0),
            pending_notes: item.personal_notes.clone().unwrap_or_default(),
        };
    }

    /// Set the pending rating, clamped to [0, 5]. No-op while closed.
    pub fn set_rating(&mut self, rating: u8) {
        if let ReviewEditor::Open { pending_rating, .. } = self {
            *pending_rating = rating.min(5);
        }
    }

    /// Replace the pending notes, truncated to 500 characters at this input
    /// boundary. No-op while closed.
    pub fn set_notes(&mut self, notes: &str) {
        if let ReviewEditor::Open { pending_notes, .. } = self {
            *pending_notes = notes.chars().take(MAX_NOTES_LEN).collect();
        }
    }

    /// Saving is rejected only when the rating is unset and the notes are
    /// empty or whitespace
    pub fn can_save(&self) -> bool {
        match self {
            ReviewEditor::Open {
                pending_rating,
                pending_notes,
                ..
            } => *pending_rating > 0 || !pending_notes.trim().is_empty(),
            ReviewEditor::Closed => false,
        }
    }

    /// Write the pending review through to the store and close. Returns
    /// false (leaving the editor open) if validation rejects the save.
    pub fn save(&mut self, store: &mut CatalogStore) -> bool {
        if !self.can_save() {
            debug!("review save rejected: no rating and empty notes");
            return false;
        }
        if let ReviewEditor::Open {
            target,
            pending_rating,
            pending_notes,
        } = self
        {
            store.set_personal_review(*target, *pending_rating, pending_notes);
        }
        *self = ReviewEditor::Closed;
        true
    }

    /// Close the editor, discarding all pending edits
    pub fn cancel(&mut self) {
        *self = ReviewEditor::Closed;
    }
}
