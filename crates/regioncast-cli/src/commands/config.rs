use catalog_config::Preferences;
use catalog_core::SortDirective;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde_json::json;

use crate::output::{Output, OutputFormat};

pub fn show(out: &Output, prefs: &Preferences) -> Result<()> {
    match out.format() {
        OutputFormat::Human => {
            out.info(format!(
                "default language: {}",
                prefs.default_language.as_deref().unwrap_or("(none)")
            ));
            let sorts = [
                ("movies", &prefs.sort.movies),
                ("shows", &prefs.sort.shows),
                ("kids", &prefs.sort.kids),
                ("news", &prefs.sort.news),
                ("watchlist", &prefs.sort.watchlist),
            ];
            for (page, value) in sorts {
                out.info(format!(
                    "sort.{}: {}",
                    page,
                    value.as_deref().unwrap_or("(default)")
                ));
            }
        }
        _ => out.print_json(&json!(prefs)),
    }
    Ok(())
}

pub fn set_sort(out: &Output, prefs: &mut Preferences, page: &str, directive: &str) -> Result<()> {
    // Reject junk here rather than writing it: a bad value in the file would
    // silently degrade every later session to the built-in default
    let directive: SortDirective = directive.parse().map_err(|e: String| {
        let valid: Vec<&str> = SortDirective::ALL.iter().map(|d| d.as_str()).collect();
        eyre!("{}. Valid values: {}", e, valid.join(", "))
    })?;

    let slot = match page.to_lowercase().as_str() {
        "movies" => &mut prefs.sort.movies,
        "shows" => &mut prefs.sort.shows,
        "kids" => &mut prefs.sort.kids,
        "news" => &mut prefs.sort.news,
        "watchlist" => &mut prefs.sort.watchlist,
        _ => {
            return Err(eyre!(
                "Invalid page: {}. Use 'movies', 'shows', 'kids', 'news', or 'watchlist'",
                page
            ))
        }
    };
    *slot = Some(directive.as_str().to_string());

    prefs.save()?;
    out.success(format!("Default sort for {} set to {}", page, directive));
    Ok(())
}

pub fn set_language(out: &Output, prefs: &mut Preferences, language: Option<String>) -> Result<()> {
    prefs.default_language = language.filter(|l| !l.eq_ignore_ascii_case("all"));
    prefs.save()?;
    match &prefs.default_language {
        Some(language) => out.success(format!("Default language set to {}", language)),
        None => out.success("Default language cleared"),
    }
    Ok(())
}
