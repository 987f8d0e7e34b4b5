use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Page category an item belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Movie,
    Show,
    Kids,
    News,
}

impl ContentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Movie => "movie",
            ContentKind::Show => "show",
            ContentKind::Kids => "kids",
            ContentKind::News => "news",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" | "movies" => Ok(ContentKind::Movie),
            "show" | "shows" => Ok(ContentKind::Show),
            "kids" => Ok(ContentKind::Kids),
            "news" => Ok(ContentKind::News),
            _ => Err(format!(
                "Invalid category: {}. Use 'movies', 'shows', 'kids', or 'news'",
                s
            )),
        }
    }
}
