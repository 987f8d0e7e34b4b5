use catalog_config::Preferences;
use catalog_core::{SortDirective, WatchlistPage, WatchlistTab};
use catalog_models::WatchStatus;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::data;
use crate::output::Output;

pub struct WatchlistArgs {
    pub tab: String,
    pub sort: Option<String>,
    pub remove: Vec<u32>,
    pub favorite: Vec<u32>,
    pub cycle: Vec<u32>,
    pub set_status: Vec<String>,
    pub review: Option<u32>,
    pub rating: Option<u8>,
    pub notes: Option<String>,
}

fn parse_tab(raw: &str) -> Result<WatchlistTab> {
    match raw.to_lowercase().as_str() {
        "all" => Ok(WatchlistTab::All),
        "unwatched" => Ok(WatchlistTab::Unwatched),
        "watching" => Ok(WatchlistTab::Watching),
        "watched" => Ok(WatchlistTab::Watched),
        _ => Err(eyre!(
            "Invalid tab: {}. Use 'all', 'unwatched', 'watching', or 'watched'",
            raw
        )),
    }
}

/// Parse an `ID:STATUS` pair, e.g. `3:watched`
fn parse_status_change(raw: &str) -> Result<(u32, WatchStatus)> {
    let (id, status) = raw
        .split_once(':')
        .ok_or_else(|| eyre!("Expected ID:STATUS, got '{}'", raw))?;
    let id: u32 = id.trim().parse().map_err(|_| eyre!("Invalid id in '{}'", raw))?;
    let status: WatchStatus = status.trim().parse().map_err(|e: String| eyre!(e))?;
    Ok((id, status))
}

pub fn run(out: &Output, prefs: &Preferences, args: WatchlistArgs) -> Result<()> {
    let mut page = WatchlistPage::new(data::watchlist());
    page.select_tab(parse_tab(&args.tab)?);
    page.set_sort(Some(prefs.watchlist_sort()));

    if let Some(raw) = args.sort {
        match SortDirective::parse_lenient(&raw) {
            Some(directive) => page.set_sort(Some(directive)),
            None => {
                out.warn(format!("Unknown sort '{}'; showing items unsorted", raw));
                page.set_sort(None);
            }
        }
    }

    // Mutations apply in flag order; absent ids are silent no-ops
    for id in args.favorite {
        page.store_mut().toggle_favorite(id);
    }
    for raw in args.set_status {
        let (id, status) = parse_status_change(&raw)?;
        page.store_mut().set_watch_status(id, status);
    }
    for id in args.cycle {
        page.store_mut().cycle_watch_status(id);
    }
    for id in args.remove {
        page.remove(id);
    }

    if let Some(id) = args.review {
        capture_review(out, &mut page, id, args.rating, args.notes)?;
    }

    if out.is_human() {
        print_tabs(&page);
    }
    out.print_items(&page.visible());
    Ok(())
}

fn capture_review(
    out: &Output,
    page: &mut WatchlistPage,
    id: u32,
    rating: Option<u8>,
    notes: Option<String>,
) -> Result<()> {
    page.open_review(id);
    if !page.editor().is_open() {
        out.warn(format!("No watchlist item with id {}", id));
        return Ok(());
    }

    let interactive = rating.is_none() && notes.is_none() && out.is_human();
    if interactive {
        let rating: u8 = Input::new()
            .with_prompt("My rating (0-5, 0 = no rating)")
            .default(page.editor().pending_rating())
            .interact_text()?;
        page.set_review_rating(rating);

        let notes: String = Input::new()
            .with_prompt("My review & notes (max 500 chars)")
            .with_initial_text(page.editor().pending_notes().to_string())
            .allow_empty(true)
            .interact_text()?;
        page.set_review_notes(&notes);
    } else {
        if let Some(rating) = rating {
            page.set_review_rating(rating);
        }
        if let Some(notes) = &notes {
            page.set_review_notes(notes);
        }
    }

    if page.save_review() {
        out.success(format!("Review saved for item {}", id));
    } else {
        page.cancel_review();
        out.warn("Nothing to save: give a rating or some notes");
    }
    Ok(())
}

fn print_tabs(page: &WatchlistPage) {
    let tabs = [
        (WatchlistTab::All, "All"),
        (WatchlistTab::Unwatched, "Want to Watch"),
        (WatchlistTab::Watching, "Watching"),
        (WatchlistTab::Watched, "Watched"),
    ];
    let rendered: Vec<String> = tabs
        .iter()
        .map(|(tab, label)| {
            let text = format!("{} ({})", label, page.count(*tab));
            if *tab == page.tab() {
                text.bold().to_string()
            } else {
                text.dimmed().to_string()
            }
        })
        .collect();
    println!("{}", rendered.join("  |  "));
}
