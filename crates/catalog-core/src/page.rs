use catalog_models::{ContentItem, ContentKind, WatchStatus};

use crate::filter::FilterCriteria;
use crate::query::run_query;
use crate::review::ReviewEditor;
use crate::sort::SortDirective;
use crate::store::CatalogStore;

/// Per-page browsing state: a store, the active filter predicates, and the
/// selected sort directive. The visible view is always re-derived from these
/// three; nothing here caches derived state.
#[derive(Debug, Clone)]
pub struct BrowsePage {
    store: CatalogStore,
    criteria: FilterCriteria,
    sort: Option<SortDirective>,
    default_sort: Option<SortDirective>,
}

impl BrowsePage {
    /// Build a page over a conforming seed collection. The category
    /// predicate is pinned to the page's kind.
    pub fn new(kind: ContentKind, items: Vec<ContentItem>, default_sort: Option<SortDirective>) -> Self {
        let criteria = FilterCriteria {
            kind: Some(kind),
            ..Default::default()
        };
        Self {
            store: CatalogStore::new(items),
            criteria,
            sort: default_sort,
            default_sort,
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CatalogStore {
        &mut self.store
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> Option<SortDirective> {
        self.sort
    }

    /// The filtered, sorted view in display order
    pub fn visible(&self) -> Vec<ContentItem> {
        run_query(self.store.items(), &self.criteria, self.sort)
    }

    pub fn set_search(&mut self, query: Option<String>) {
        self.criteria.search = query.filter(|q| !q.is_empty());
    }

    pub fn set_language(&mut self, language: Option<String>) {
        self.criteria.language = language;
    }

    pub fn set_genre(&mut self, genre: Option<String>) {
        self.criteria.genre = genre;
    }

    pub fn set_min_rating(&mut self, min_rating: Option<f32>) {
        self.criteria.min_rating = min_rating;
    }

    pub fn set_age_group(&mut self, age_group: Option<String>) {
        self.criteria.age_group = age_group;
    }

    pub fn set_kids_type(&mut self, kids_type: Option<String>) {
        self.criteria.kids_type = kids_type;
    }

    pub fn set_news_category(&mut self, category: Option<String>) {
        self.criteria.news_category = category;
    }

    pub fn set_sort(&mut self, sort: Option<SortDirective>) {
        self.sort = sort;
    }

    /// Reset every predicate except the pinned page category, and restore
    /// the page's initial sort ("Clear Filters")
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria {
            kind: self.criteria.kind,
            ..Default::default()
        };
        self.sort = self.default_sort;
    }

    /// News rail: live items from the current view
    pub fn live(&self) -> Vec<ContentItem> {
        self.visible()
            .into_iter()
            .filter(|item| item.news.as_ref().map(|n| n.is_live).unwrap_or(false))
            .collect()
    }

    /// News rail: trending items from the current view, live ones excluded
    pub fn trending(&self) -> Vec<ContentItem> {
        self.visible()
            .into_iter()
            .filter(|item| {
                item.news
                    .as_ref()
                    .map(|n| n.is_trending && !n.is_live)
                    .unwrap_or(false)
            })
            .collect()
    }
}

/// Watchlist status tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatchlistTab {
    #[default]
    All,
    Unwatched,
    Watching,
    Watched,
}

impl WatchlistTab {
    pub fn status(self) -> Option<WatchStatus> {
        match self {
            WatchlistTab::All => None,
            WatchlistTab::Unwatched => Some(WatchStatus::Unwatched),
            WatchlistTab::Watching => Some(WatchStatus::Watching),
            WatchlistTab::Watched => Some(WatchStatus::Watched),
        }
    }
}

/// The personal watchlist page: status tabs with counts, a sort control
/// defaulting to recently-added, removal, and the review-capture flow.
#[derive(Debug, Clone)]
pub struct WatchlistPage {
    store: CatalogStore,
    tab: WatchlistTab,
    sort: Option<SortDirective>,
    editor: ReviewEditor,
}

impl WatchlistPage {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self {
            store: CatalogStore::new(items),
            tab: WatchlistTab::All,
            sort: Some(SortDirective::RecentlyAdded),
            editor: ReviewEditor::Closed,
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CatalogStore {
        &mut self.store
    }

    pub fn tab(&self) -> WatchlistTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: WatchlistTab) {
        self.tab = tab;
    }

    pub fn set_sort(&mut self, sort: Option<SortDirective>) {
        self.sort = sort;
    }

    /// Items for the current tab, sorted
    pub fn visible(&self) -> Vec<ContentItem> {
        let criteria = FilterCriteria {
            status: self.tab.status(),
            ..Default::default()
        };
        run_query(self.store.items(), &criteria, self.sort)
    }

    /// Badge count for a tab
    pub fn count(&self, tab: WatchlistTab) -> usize {
        match tab.status() {
            Some(status) => self.store.status_count(status),
            None => self.store.len(),
        }
    }

    pub fn remove(&mut self, id: u32) {
        self.store.remove(id);
    }

    pub fn editor(&self) -> &ReviewEditor {
        &self.editor
    }

    /// Open the review editor for an item; no-op if the id is absent
    pub fn open_review(&mut self, id: u32) {
        if let Some(item) = self.store.get(id) {
            let item = item.clone();
            self.editor.open(&item);
        }
    }

    pub fn set_review_rating(&mut self, rating: u8) {
        self.editor.set_rating(rating);
    }

    pub fn set_review_notes(&mut self, notes: &str) {
        self.editor.set_notes(notes);
    }

    pub fn save_review(&mut self) -> bool {
        let mut editor = std::mem::take(&mut self.editor);
        let saved = editor.save(&mut self.store);
        self.editor = editor;
        saved
    }

    pub fn cancel_review(&mut self) {
        self.editor.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_item(id: u32, title: &str, status: WatchStatus) -> ContentItem {
        ContentItem {
            id,
            title: title.to_string(),
            year: 2024,
            rating: 8.0,
            genre: vec!["Action".to_string()],
            language: "Hindi".to_string(),
            kind: ContentKind::Movie,
            duration: None,
            description: String::new(),
            watch_status: status,
            is_favorite: true,
            personal_rating: None,
            personal_notes: None,
            kids: None,
            news: None,
        }
    }

    fn sample_watchlist() -> Vec<ContentItem> {
        vec![
            create_item(1, "Pushpa", WatchStatus::Unwatched),
            create_item(2, "War 2", WatchStatus::Watching),
            create_item(3, "Tiger 3", WatchStatus::Watched),
            create_item(4, "2018", WatchStatus::Watched),
        ]
    }

    #[test]
    fn test_browse_page_pins_kind() {
        let mut movie = create_item(1, "Pushpa", WatchStatus::Unwatched);
        movie.kind = ContentKind::Movie;
        let mut show = create_item(2, "Scam 1992", WatchStatus::Unwatched);
        show.kind = ContentKind::Show;

        let page = BrowsePage::new(ContentKind::Movie, vec![movie.clone(), show], None);
        assert_eq!(page.visible(), vec![movie]);
    }

    #[test]
    fn test_browse_clear_filters_restores_defaults() {
        let items = vec![
            create_item(1, "Pushpa", WatchStatus::Unwatched),
            create_item(2, "War 2", WatchStatus::Unwatched),
        ];
        let mut page = BrowsePage::new(
            ContentKind::Movie,
            items.clone(),
            Some(SortDirective::YearDesc),
        );
        page.set_search(Some("pushpa".to_string()));
        page.set_sort(Some(SortDirective::TitleAsc));
        assert_eq!(page.visible().len(), 1);

        page.clear_filters();
        assert_eq!(page.visible().len(), 2);
        assert_eq!(page.sort(), Some(SortDirective::YearDesc));
        assert_eq!(page.criteria().kind, Some(ContentKind::Movie));
    }

    #[test]
    fn test_watchlist_tabs_and_counts() {
        let page = WatchlistPage::new(sample_watchlist());
        assert_eq!(page.count(WatchlistTab::All), 4);
        assert_eq!(page.count(WatchlistTab::Unwatched), 1);
        assert_eq!(page.count(WatchlistTab::Watching), 1);
        assert_eq!(page.count(WatchlistTab::Watched), 2);

        let mut page = page;
        page.select_tab(WatchlistTab::Watched);
        let visible = page.visible();
        assert_eq!(visible.len(), 2);
        // default sort is recently-added: higher id first
        assert_eq!(visible[0].id, 4);
        assert_eq!(visible[1].id, 3);
    }

    #[test]
    fn test_watchlist_remove_updates_counts() {
        let mut page = WatchlistPage::new(sample_watchlist());
        page.remove(3);
        assert_eq!(page.count(WatchlistTab::All), 3);
        assert_eq!(page.count(WatchlistTab::Watched), 1);
    }

    #[test]
    fn test_watchlist_review_flow() {
        let mut page = WatchlistPage::new(sample_watchlist());
        page.open_review(3);
        assert!(page.editor().is_open());
        page.set_review_rating(4);
        page.set_review_notes("excellent spy thriller");
        assert!(page.save_review());

        let item = page.store().get(3).unwrap();
        assert_eq!(item.personal_rating, Some(4));
        assert_eq!(
            item.personal_notes.as_deref(),
            Some("excellent spy thriller")
        );
    }

    #[test]
    fn test_open_review_absent_id_stays_closed() {
        let mut page = WatchlistPage::new(sample_watchlist());
        page.open_review(99);
        assert!(!page.editor().is_open());
    }
}
