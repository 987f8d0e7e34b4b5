use catalog_core::SortDirective;
use catalog_models::ContentKind;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::paths::PathManager;

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("could not determine config directory")]
    NoConfigDir(#[source] anyhow::Error),
    #[error("failed to read preferences file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed preferences file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Per-page default sort directives.
///
/// Stored as plain directive strings so that an unrecognized value in the
/// file degrades to "no default" instead of failing the whole load, matching
/// the pipeline's lenient handling of unknown directives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SortPrefs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shows: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub news: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchlist: Option<String>,
}

/// User preferences for the browsing session defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Preferences {
    /// Language filter preselected on every browse page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    #[serde(default)]
    pub sort: SortPrefs,
}

impl Preferences {
    /// Load from the standard location; a missing file yields defaults
    pub fn load() -> Result<Self, PreferencesError> {
        let paths = PathManager::new().map_err(PreferencesError::NoConfigDir)?;
        Self::load_from(&paths.preferences_file())
    }

    pub fn load_from(path: &Path) -> Result<Self, PreferencesError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn save(&self) -> Result<(), PreferencesError> {
        let paths = PathManager::new().map_err(PreferencesError::NoConfigDir)?;
        self.save_to(&paths.preferences_file())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), PreferencesError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    /// Default sort for a browse page. Falls back to the built-in page
    /// default when unset or unrecognized.
    pub fn sort_for(&self, kind: ContentKind) -> Option<SortDirective> {
        let configured = match kind {
            ContentKind::Movie => &self.sort.movies,
            ContentKind::Show => &self.sort.shows,
            ContentKind::Kids => &self.sort.kids,
            ContentKind::News => &self.sort.news,
        };
        configured
            .as_deref()
            .and_then(SortDirective::parse_lenient)
            .or(match kind {
                // News renders in feed order by default
                ContentKind::News => None,
                _ => Some(SortDirective::YearDesc),
            })
    }

    pub fn watchlist_sort(&self) -> SortDirective {
        self.sort
            .watchlist
            .as_deref()
            .and_then(SortDirective::parse_lenient)
            .unwrap_or(SortDirective::RecentlyAdded)
    }
}
