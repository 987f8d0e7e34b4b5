use super::*;
use catalog_models::{ContentKind, WatchStatus};

fn create_item(id: u32, title: &str, year: u32, rating: f32, language: &str) -> ContentItem {
    ContentItem {
        id,
        title: title.to_string(),
        year,
        rating,
        genre: vec!["Action".to_string()],
        language: language.to_string(),
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

fn sample() -> Vec<ContentItem> {
    vec![
        create_item(1, "Zeta", 2020, 7.0, "Telugu"),
        create_item(2, "Alpha", 2022, 9.0, "Hindi"),
    ]
}

#[test]
fn test_filter_then_sort() {
    let items = vec![
        create_item(1, "Zeta", 2020, 8.2, "Telugu"),
        create_item(2, "Alpha", 2022, 9.0, "Hindi"),
        create_item(3, "Midway", 2021, 7.1, "Telugu"),
    ];
    let criteria = FilterCriteria {
        min_rating: Some(8.0),
        ..Default::default()
    };
    let visible = run_query(&items, &criteria, Some(SortDirective::TitleAsc));
    let titles: Vec<&str> = visible.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Zeta"]);
}

#[test]
fn test_min_rating_scenario() {
    let visible = run_query(
        &sample(),
        &FilterCriteria {
            min_rating: Some(8.0),
            ..Default::default()
        },
        None,
    );
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Alpha");
}

#[test]
fn test_no_directive_preserves_filtered_order() {
    let items = vec![
        create_item(3, "C", 2021, 8.0, "Hindi"),
        create_item(1, "A", 2022, 9.0, "Hindi"),
        create_item(2, "B", 2020, 7.0, "Hindi"),
    ];
    let visible = run_query(&items, &FilterCriteria::default(), None);
    assert_eq!(visible, items);
}

#[test]
fn test_unrecognized_directive_string_degrades_to_identity() {
    let items = sample();
    let directive = SortDirective::parse_lenient("not-a-directive");
    let visible = run_query(&items, &FilterCriteria::default(), directive);
    assert_eq!(visible, items);
}

#[test]
fn test_query_does_not_mutate_input() {
    let items = sample();
    let snapshot = items.clone();
    let _ = run_query(
        &items,
        &FilterCriteria {
            language: Some("Hindi".to_string()),
            ..Default::default()
        },
        Some(SortDirective::RatingDesc),
    );
    assert_eq!(items, snapshot);
}

#[test]
fn test_rerunning_query_on_result_is_idempotent() {
    let items = vec![
        create_item(1, "Zeta", 2020, 8.2, "Telugu"),
        create_item(2, "Alpha", 2022, 9.0, "Hindi"),
        create_item(3, "Midway", 2021, 8.7, "Telugu"),
    ];
    let criteria = FilterCriteria {
        min_rating: Some(8.0),
        ..Default::default()
    };
    let once = run_query(&items, &criteria, Some(SortDirective::YearDesc));
    let twice = run_query(&once, &criteria, Some(SortDirective::YearDesc));
    assert_eq!(once, twice);
}
