pub mod filter;
pub mod hero;
pub mod page;
pub mod query;
pub mod review;
pub mod sort;
pub mod store;

pub use filter::FilterCriteria;
pub use hero::HeroRotation;
pub use page::{BrowsePage, WatchlistPage, WatchlistTab};
pub use query::run_query;
pub use review::ReviewEditor;
pub use sort::{apply_sorting, SortDirective};
pub use store::{CatalogStore, MAX_NOTES_LEN};
