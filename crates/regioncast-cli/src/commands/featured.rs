use catalog_core::HeroRotation;
use color_eyre::Result;
use owo_colors::OwoColorize;
use serde_json::json;
use std::time::Duration;

use crate::data;
use crate::output::{Output, OutputFormat};

/// Show the hero carousel seed, optionally animating the rotation for a
/// bounded number of seconds before tearing the timers down.
pub async fn run(out: &Output, watch_secs: Option<u64>) -> Result<()> {
    let featured = data::featured();
    let mut rotation = HeroRotation::new(featured.len());

    if let Some(secs) = watch_secs {
        if out.is_human() {
            rotation.start();
            let deadline = tokio::time::Instant::now() + Duration::from_secs(secs);
            let mut last = usize::MAX;
            while tokio::time::Instant::now() < deadline {
                let index = rotation.current_index();
                if index != last {
                    let item = &featured[index];
                    println!(
                        "{} {} ({}, ★ {:.1}) {}",
                        "▶".cyan(),
                        item.title.bold(),
                        item.language,
                        item.rating,
                        item.genre.join(" / ")
                    );
                    last = index;
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
            rotation.stop();
        } else {
            out.warn("--watch is only available with human output");
        }
    }

    match out.format() {
        OutputFormat::Human => {
            let current = rotation.current_index();
            for (index, item) in featured.iter().enumerate() {
                let marker = if index == current { "●" } else { " " };
                println!(
                    "{} {:>2}. {} ({}, {}, ★ {:.1})",
                    marker, index + 1, item.title, item.year, item.language, item.rating
                );
            }
        }
        _ => out.print_json(&json!({
            "featured": featured,
            "current_index": rotation.current_index(),
            "scroll_offset": rotation.scroll_offset(),
        })),
    }
    Ok(())
}
