use super::*;
use catalog_models::ContentKind;

fn create_item(id: u32, title: &str) -> ContentItem {
    ContentItem {
        id,
        title: title.to_string(),
        year: 2024,
        rating: 8.0,
        genre: vec!["Action".to_string()],
        language: "Hindi".to_string(),
        kind: ContentKind::Movie,
        duration: Some("2h 10m".to_string()),
        description: "Test item".to_string(),
        watch_status: WatchStatus::Unwatched,
        is_favorite: false,
        personal_rating: None,
        personal_notes: None,
        kids: None,
        news: None,
    }
}

fn sample_store() -> CatalogStore {
    CatalogStore::new(vec![
        create_item(1, "Movie 1"),
        create_item(2, "Movie 2"),
        create_item(3, "Movie 3"),
    ])
}

#[test]
fn test_set_favorite() {
    let mut store = sample_store();
    store.set_favorite(2, true);
    assert!(store.get(2).unwrap().is_favorite);
    assert!(!store.get(1).unwrap().is_favorite);
    assert!(!store.get(3).unwrap().is_favorite);
}

#[test]
fn test_set_favorite_absent_id_is_noop() {
    let mut store = sample_store();
    let before = store.clone();
    store.set_favorite(99, true);
    assert_eq!(store, before);
}

#[test]
fn test_mutation_leaves_other_items_untouched() {
    let mut store = sample_store();
    let one_before = store.get(1).unwrap().clone();
    let three_before = store.get(3).unwrap().clone();
    store.set_watch_status(2, WatchStatus::Watching);
    assert_eq!(store.get(1).unwrap(), &one_before);
    assert_eq!(store.get(3).unwrap(), &three_before);
}

#[test]
fn test_cycle_watch_status() {
    let mut store = sample_store();
    store.cycle_watch_status(1);
    assert_eq!(store.get(1).unwrap().watch_status, WatchStatus::Watching);
    store.cycle_watch_status(1);
    assert_eq!(store.get(1).unwrap().watch_status, WatchStatus::Watched);
    store.cycle_watch_status(1);
    assert_eq!(store.get(1).unwrap().watch_status, WatchStatus::Unwatched);
}

#[test]
fn test_cycle_three_times_is_identity() {
    let mut store = sample_store();
    store.set_watch_status(2, WatchStatus::Watching);
    let before = store.get(2).unwrap().watch_status;
    for _ in 0..3 {
        store.cycle_watch_status(2);
    }
    assert_eq!(store.get(2).unwrap().watch_status, before);
}

#[test]
fn test_cycle_from_watched_wraps_to_unwatched() {
    let mut store = sample_store();
    store.set_watch_status(1, WatchStatus::Watched);
    store.cycle_watch_status(1);
    assert_eq!(store.get(1).unwrap().watch_status, WatchStatus::Unwatched);
}

#[test]
fn test_set_personal_review_round_trip() {
    let mut store = sample_store();
    store.set_personal_review(2, 4, "Great action sequences");
    let item = store.get(2).unwrap();
    assert_eq!(item.personal_rating, Some(4));
    assert_eq!(item.personal_notes.as_deref(), Some("Great action sequences"));
}

#[test]
fn test_set_personal_review_zero_rating_stored_as_unrated() {
    let mut store = sample_store();
    store.set_personal_review(1, 0, "notes only");
    let item = store.get(1).unwrap();
    assert_eq!(item.personal_rating, None);
    assert_eq!(item.personal_notes.as_deref(), Some("notes only"));
}

#[test]
fn test_set_personal_review_clamps_out_of_range_rating() {
    let mut store = sample_store();
    store.set_personal_review(1, 9, "over the top");
    assert_eq!(store.get(1).unwrap().personal_rating, Some(5));
}

#[test]
fn test_set_personal_review_overwrites_both_fields() {
    let mut store = sample_store();
    store.set_personal_review(3, 5, "first impression");
    store.set_personal_review(3, 2, "");
    let item = store.get(3).unwrap();
    assert_eq!(item.personal_rating, Some(2));
    assert_eq!(item.personal_notes, None);
}

#[test]
fn test_remove_then_ops_are_noops() {
    let mut store = sample_store();
    store.set_personal_review(2, 3, "will be removed");
    store.remove(2);
    assert_eq!(store.len(), 2);
    assert!(store.get(2).is_none());

    let before = store.clone();
    store.set_favorite(2, true);
    store.set_watch_status(2, WatchStatus::Watched);
    store.cycle_watch_status(2);
    store.set_personal_review(2, 5, "ghost");
    store.remove(2);
    assert_eq!(store, before);
}

#[test]
fn test_remove_absent_id_is_noop() {
    let mut store = sample_store();
    store.remove(42);
    assert_eq!(store.len(), 3);
}

#[test]
fn test_status_count() {
    let mut store = sample_store();
    store.set_watch_status(1, WatchStatus::Watched);
    store.set_watch_status(2, WatchStatus::Watching);
    assert_eq!(store.status_count(WatchStatus::Unwatched), 1);
    assert_eq!(store.status_count(WatchStatus::Watching), 1);
    assert_eq!(store.status_count(WatchStatus::Watched), 1);
}

#[test]
fn test_favorites() {
    let mut store = sample_store();
    store.set_favorite(1, true);
    store.set_favorite(3, true);
    let favorites: Vec<u32> = store.favorites().map(|item| item.id).collect();
    assert_eq!(favorites, vec![1, 3]);
}
