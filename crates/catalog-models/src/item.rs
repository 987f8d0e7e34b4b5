use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::kind::ContentKind;
use crate::status::WatchStatus;

/// A single catalog entry (movie, show, kids title, or news item).
///
/// `id` is unique within its owning collection and assigned at data-load
/// time; every mutation locates by id and replaces the whole item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    pub id: u32,
    pub title: String,
    pub year: u32,
    /// Public/critic score on a 0-10 scale, immutable once loaded
    pub rating: f32,
    /// Ordered genre tags; display order is meaningful, not a set
    pub genre: Vec<String>,
    pub language: String,
    pub kind: ContentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub description: String,
    #[serde(default)]
    pub watch_status: WatchStatus,
    #[serde(default)]
    pub is_favorite: bool,
    /// Personal star rating 1-5. None means unrated; a 0 supplied at any
    /// input boundary is stored as None.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kids: Option<KidsMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub news: Option<NewsMeta>,
}

impl ContentItem {
    /// Personal rating with unrated treated as 0, the value the
    /// personal-rating sort directives compare on
    pub fn personal_rating_or_zero(&self) -> u8 {
        self.personal_rating.unwrap_or(0)
    }

    pub fn has_review(&self) -> bool {
        self.personal_rating.is_some()
            || self
                .personal_notes
                .as_deref()
                .map(|n| !n.trim().is_empty())
                .unwrap_or(false)
    }
}

/// Kids-page metadata driving the age-group and content-type filters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KidsMeta {
    /// Target age bracket, e.g. "3-8"
    pub age_group: String,
    /// Cartoon, Movie, Educational, ...
    pub content_type: String,
}

/// News-page metadata driving the category filter and live/trending rails
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsMeta {
    /// Entertainment, Sports, Technology, Politics, Business, ...
    pub category: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub is_live: bool,
    #[serde(default)]
    pub is_trending: bool,
}
