use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Per-item, per-user watch status tracked for the browsing session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum WatchStatus {
    /// Not started yet (shown as "Want to Watch" on the watchlist)
    #[default]
    Unwatched,
    /// Currently watching
    Watching,
    /// Finished watching
    Watched,
}

impl WatchStatus {
    /// Next status along the fixed cycle unwatched -> watching -> watched -> unwatched
    pub fn next(self) -> Self {
        match self {
            WatchStatus::Unwatched => WatchStatus::Watching,
            WatchStatus::Watching => WatchStatus::Watched,
            WatchStatus::Watched => WatchStatus::Unwatched,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WatchStatus::Unwatched => "unwatched",
            WatchStatus::Watching => "watching",
            WatchStatus::Watched => "watched",
        }
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unwatched" => Ok(WatchStatus::Unwatched),
            "watching" => Ok(WatchStatus::Watching),
            "watched" => Ok(WatchStatus::Watched),
            _ => Err(format!(
                "Invalid watch status: {}. Use 'unwatched', 'watching', or 'watched'",
                s
            )),
        }
    }
}
