use catalog_models::ContentItem;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The selected sort rule.
///
/// `RecentlyAdded` and `Popularity` are simulated proxies: the id stands in
/// for a timestamp (higher id = added later), and popularity is
/// `rating * 100 + id`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SortDirective {
    TitleAsc,
    TitleDesc,
    YearDesc,
    YearAsc,
    RatingDesc,
    RatingAsc,
    PersonalRatingDesc,
    PersonalRatingAsc,
    RecentlyAdded,
    Popularity,
}

impl SortDirective {
    pub const ALL: [SortDirective; 10] = [
        SortDirective::TitleAsc,
        SortDirective::TitleDesc,
        SortDirective::YearDesc,
        SortDirective::YearAsc,
        SortDirective::RatingDesc,
        SortDirective::RatingAsc,
        SortDirective::PersonalRatingDesc,
        SortDirective::PersonalRatingAsc,
        SortDirective::RecentlyAdded,
        SortDirective::Popularity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirective::TitleAsc => "title-asc",
            SortDirective::TitleDesc => "title-desc",
            SortDirective::YearDesc => "year-desc",
            SortDirective::YearAsc => "year-asc",
            SortDirective::RatingDesc => "rating-desc",
            SortDirective::RatingAsc => "rating-asc",
            SortDirective::PersonalRatingDesc => "personal-rating-desc",
            SortDirective::PersonalRatingAsc => "personal-rating-asc",
            SortDirective::RecentlyAdded => "recently-added",
            SortDirective::Popularity => "popularity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortDirective::TitleAsc => "Title A-Z",
            SortDirective::TitleDesc => "Title Z-A",
            SortDirective::YearDesc => "Newest First",
            SortDirective::YearAsc => "Oldest First",
            SortDirective::RatingDesc => "Highest Rated",
            SortDirective::RatingAsc => "Lowest Rated",
            SortDirective::PersonalRatingDesc => "My Best Rated",
            SortDirective::PersonalRatingAsc => "My Worst Rated",
            SortDirective::RecentlyAdded => "Recently Added",
            SortDirective::Popularity => "Most Popular",
        }
    }

    /// Parse a directive string, mapping anything unrecognized to `None`.
    /// A `None` directive leaves the filtered sequence unsorted, so an
    /// unknown value degrades to identity behavior instead of failing.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl fmt::Display for SortDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirective {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortDirective::ALL
            .iter()
            .find(|directive| directive.as_str() == s.to_lowercase())
            .copied()
            .ok_or_else(|| format!("Invalid sort directive: {}", s))
    }
}

// Case-folded lexicographic comparison; stand-in for locale collation,
// which the catalog does not attempt (no internationalization).
fn compare_titles(a: &ContentItem, b: &ContentItem) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}

fn compare_f32(a: f32, b: f32) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn popularity_score(item: &ContentItem) -> f32 {
    item.rating * 100.0 + item.id as f32
}

/// Return a new sequence ordered by the directive. The input is never
/// mutated, and the sort is stable: equal-key items keep their relative
/// input order, which matters for directives with large tie groups such as
/// personal rating over mostly-unrated collections.
pub fn apply_sorting(items: &[ContentItem], directive: SortDirective) -> Vec<ContentItem> {
    let mut sorted = items.to_vec();

    match directive {
        SortDirective::TitleAsc => sorted.sort_by(compare_titles),
        SortDirective::TitleDesc => sorted.sort_by(|a, b| compare_titles(b, a)),
        SortDirective::YearDesc => sorted.sort_by(|a, b| b.year.cmp(&a.year)),
        SortDirective::YearAsc => sorted.sort_by(|a, b| a.year.cmp(&b.year)),
        SortDirective::RatingDesc => sorted.sort_by(|a, b| compare_f32(b.rating, a.rating)),
        SortDirective::RatingAsc => sorted.sort_by(|a, b| compare_f32(a.rating, b.rating)),
        SortDirective::PersonalRatingDesc => sorted.sort_by(|a, b| {
            b.personal_rating_or_zero().cmp(&a.personal_rating_or_zero())
        }),
        SortDirective::PersonalRatingAsc => sorted.sort_by(|a, b| {
            a.personal_rating_or_zero().cmp(&b.personal_rating_or_zero())
        }),
        SortDirective::RecentlyAdded => sorted.sort_by(|a, b| b.id.cmp(&a.id)),
        SortDirective::Popularity => {
            sorted.sort_by(|a, b| compare_f32(popularity_score(b), popularity_score(a)))
        }
    }

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_models::{ContentKind, WatchStatus};

    fn create_item(id: u32, title: &str, year: u32, rating: f32) -> ContentItem {
        ContentItem {
            id,
            title: title.to_string(),
            year,
            rating,
            genre: vec![],
            language: "Hindi".to_string(),
            kind: ContentKind::Movie,
            duration: None,
            description: String::new(),
            watch_status: WatchStatus::Unwatched,
            is_favorite: false,
            personal_rating: None,
            personal_notes: None,
            kids: None,
            news: None,
        }
    }

    fn titles(items: &[ContentItem]) -> Vec<&str> {
        items.iter().map(|item| item.title.as_str()).collect()
    }

    #[test]
    fn test_title_asc() {
        let items = vec![
            create_item(1, "Zeta", 2020, 7.0),
            create_item(2, "Alpha", 2022, 9.0),
        ];
        let sorted = apply_sorting(&items, SortDirective::TitleAsc);
        assert_eq!(titles(&sorted), vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn test_year_desc() {
        let items = vec![
            create_item(1, "Zeta", 2020, 7.0),
            create_item(2, "Alpha", 2022, 9.0),
        ];
        let sorted = apply_sorting(&items, SortDirective::YearDesc);
        assert_eq!(titles(&sorted), vec!["Alpha", "Zeta"]);
        assert_eq!(sorted[0].year, 2022);
    }

    #[test]
    fn test_rating_asc() {
        let items = vec![
            create_item(1, "Zeta", 2020, 7.0),
            create_item(2, "Alpha", 2022, 9.0),
        ];
        let sorted = apply_sorting(&items, SortDirective::RatingAsc);
        assert_eq!(titles(&sorted), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_title_compare_ignores_case() {
        let items = vec![
            create_item(1, "alpha two", 2020, 7.0),
            create_item(2, "Alpha one", 2022, 9.0),
        ];
        let sorted = apply_sorting(&items, SortDirective::TitleAsc);
        assert_eq!(titles(&sorted), vec!["Alpha one", "alpha two"]);
    }

    #[test]
    fn test_personal_rating_treats_unrated_as_zero() {
        let mut rated = create_item(1, "Rated", 2020, 7.0);
        rated.personal_rating = Some(3);
        let unrated = create_item(2, "Unrated", 2022, 9.0);

        let sorted = apply_sorting(&[unrated, rated], SortDirective::PersonalRatingDesc);
        assert_eq!(titles(&sorted), vec!["Rated", "Unrated"]);
    }

    #[test]
    fn test_recently_added_is_descending_by_id() {
        let items = vec![
            create_item(1, "First", 2020, 7.0),
            create_item(3, "Third", 2021, 8.0),
            create_item(2, "Second", 2022, 9.0),
        ];
        let sorted = apply_sorting(&items, SortDirective::RecentlyAdded);
        assert_eq!(titles(&sorted), vec!["Third", "Second", "First"]);
    }

    #[test]
    fn test_popularity_combines_rating_and_id() {
        // Equal ratings: the higher id wins the composite score
        let items = vec![
            create_item(1, "Older", 2020, 8.0),
            create_item(2, "Newer", 2021, 8.0),
            create_item(3, "Best", 2022, 9.0),
        ];
        let sorted = apply_sorting(&items, SortDirective::Popularity);
        assert_eq!(titles(&sorted), vec!["Best", "Newer", "Older"]);
    }

    #[test]
    fn test_sort_is_stable_over_tie_groups() {
        // All unrated: personal-rating-desc is one big tie group, so the
        // input order must be preserved
        let items = vec![
            create_item(5, "E", 2020, 7.0),
            create_item(1, "A", 2021, 8.0),
            create_item(3, "C", 2022, 9.0),
        ];
        let sorted = apply_sorting(&items, SortDirective::PersonalRatingDesc);
        assert_eq!(titles(&sorted), vec!["E", "A", "C"]);
    }

    #[test]
    fn test_sorting_already_sorted_is_idempotent() {
        let items = vec![
            create_item(1, "Zeta", 2020, 7.0),
            create_item(2, "Alpha", 2022, 9.0),
            create_item(3, "Midway", 2021, 8.0),
        ];
        for directive in SortDirective::ALL {
            let once = apply_sorting(&items, directive);
            let twice = apply_sorting(&once, directive);
            assert_eq!(once, twice, "{} not idempotent", directive);
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for directive in SortDirective::ALL {
            assert_eq!(directive.as_str().parse::<SortDirective>(), Ok(directive));
        }
    }

    #[test]
    fn test_parse_lenient_unknown_is_none() {
        assert_eq!(SortDirective::parse_lenient("alphabetical"), None);
        assert_eq!(
            SortDirective::parse_lenient("Recently-Added"),
            Some(SortDirective::RecentlyAdded)
        );
    }
}
