pub mod item;
pub mod kind;
pub mod status;

pub use item::{ContentItem, KidsMeta, NewsMeta};
pub use kind::ContentKind;
pub use status::WatchStatus;
