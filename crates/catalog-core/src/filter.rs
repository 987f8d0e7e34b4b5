use catalog_models::{ContentItem, ContentKind, WatchStatus};
use serde::{Deserialize, Serialize};

/// Active filter predicates, combined as a conjunction.
///
/// One explicit field per predicate; `None` means "no constraint" and is
/// vacuously true. Pages populate only the predicates they expose.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against the title or any genre tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Case-insensitive language equality
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Case-insensitive genre membership
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Minimum public rating threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WatchStatus>,
    /// Page category equality
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ContentKind>,
    /// Kids page: target age bracket equality, e.g. "3-8"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,
    /// Kids page: content type equality (Cartoon, Movie, Educational)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kids_type: Option<String>,
    /// News page: news category equality (Entertainment, Sports, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub news_category: Option<String>,
}

impl FilterCriteria {
    /// True iff the item passes every active predicate.
    ///
    /// Predicates are checked in the fixed order search -> language ->
    /// genre -> min rating -> status -> category; the order does not affect
    /// the result since they are conjunctive.
    pub fn matches(&self, item: &ContentItem) -> bool {
        if let Some(query) = &self.search {
            let query = query.to_lowercase();
            let title_hit = item.title.to_lowercase().contains(&query);
            let genre_hit = item
                .genre
                .iter()
                .any(|g| g.to_lowercase().contains(&query));
            if !title_hit && !genre_hit {
                return false;
            }
        }

        if let Some(language) = &self.language {
            if !item.language.eq_ignore_ascii_case(language) {
                return false;
            }
        }

        if let Some(genre) = &self.genre {
            if !item.genre.iter().any(|g| g.eq_ignore_ascii_case(genre)) {
                return false;
            }
        }

        if let Some(min_rating) = self.min_rating {
            if item.rating < min_rating {
                return false;
            }
        }

        if let Some(status) = self.status {
            if item.watch_status != status {
                return false;
            }
        }

        if let Some(kind) = self.kind {
            if item.kind != kind {
                return false;
            }
        }

        if let Some(age_group) = &self.age_group {
            let hit = item
                .kids
                .as_ref()
                .map(|meta| meta.age_group == *age_group)
                .unwrap_or(false);
            if !hit {
                return false;
            }
        }

        if let Some(kids_type) = &self.kids_type {
            let hit = item
                .kids
                .as_ref()
                .map(|meta| meta.content_type.eq_ignore_ascii_case(kids_type))
                .unwrap_or(false);
            if !hit {
                return false;
            }
        }

        if let Some(category) = &self.news_category {
            let hit = item
                .news
                .as_ref()
                .map(|meta| meta.category.eq_ignore_ascii_case(category))
                .unwrap_or(false);
            if !hit {
                return false;
            }
        }

        true
    }

    /// Derive the passing subset in input order. Never mutates the input.
    pub fn apply(&self, items: &[ContentItem]) -> Vec<ContentItem> {
        items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }
}
