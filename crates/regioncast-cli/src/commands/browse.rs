use catalog_config::Preferences;
use catalog_core::{BrowsePage, SortDirective};
use catalog_models::ContentKind;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing::debug;

use crate::data;
use crate::output::Output;

pub struct BrowseArgs {
    pub category: String,
    pub search: Option<String>,
    pub language: Option<String>,
    pub genre: Option<String>,
    pub min_rating: Option<f32>,
    pub age_group: Option<String>,
    pub content_type: Option<String>,
    pub news_category: Option<String>,
    pub sort: Option<String>,
    pub live: bool,
    pub trending: bool,
}

pub fn run(out: &Output, prefs: &Preferences, args: BrowseArgs) -> Result<()> {
    let kind: ContentKind = args.category.parse().map_err(|e: String| eyre!(e))?;
    debug!(category = %kind, "browsing");

    let mut page = BrowsePage::new(kind, data::for_kind(kind), prefs.sort_for(kind));

    page.set_search(args.search);
    if let Some(language) = args.language.or_else(|| prefs.default_language.clone()) {
        // "all" clears the preselected language preference
        page.set_language((!language.eq_ignore_ascii_case("all")).then_some(language));
    }
    page.set_genre(args.genre);
    page.set_min_rating(args.min_rating);
    page.set_age_group(args.age_group);
    page.set_kids_type(args.content_type);
    page.set_news_category(args.news_category);

    if let Some(raw) = args.sort {
        match SortDirective::parse_lenient(&raw) {
            Some(directive) => page.set_sort(Some(directive)),
            None => {
                out.warn(format!(
                    "Unknown sort '{}'; showing results unsorted",
                    raw
                ));
                page.set_sort(None);
            }
        }
    }

    let items = if args.live {
        page.live()
    } else if args.trending {
        page.trending()
    } else {
        page.visible()
    };

    out.print_items(&items);
    if out.is_human() {
        out.info(format!(
            "{} of {} items{}",
            items.len(),
            page.store().len(),
            page.sort()
                .map(|s| format!(", sorted by {}", s.label()))
                .unwrap_or_default()
        ));
    }
    Ok(())
}
