use catalog_models::{ContentItem, ContentKind, WatchStatus};
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => println!("{} {}", "✓".green(), msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "success", "message": msg.as_ref() }));
            }
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => eprintln!("{} {}", "!".yellow(), msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "warning", "message": msg.as_ref() }));
            }
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => println!("{}", msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "info", "message": msg.as_ref() }));
            }
        }
    }

    pub fn print_json(&self, value: &serde_json::Value) {
        let rendered = match self.format {
            OutputFormat::JsonPretty => serde_json::to_string_pretty(value),
            _ => serde_json::to_string(value),
        };
        match rendered {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to serialize output: {}", e),
        }
    }

    /// Render the derived view: a table for humans, the serialized items
    /// otherwise
    pub fn print_items(&self, items: &[ContentItem]) {
        match self.format {
            OutputFormat::Human => {
                if items.is_empty() {
                    println!("{}", "No items found matching your criteria.".dimmed());
                    return;
                }
                println!("{}", render_table(items));
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                match serde_json::to_value(items) {
                    Ok(value) => self.print_json(&value),
                    Err(e) => eprintln!("Failed to serialize output: {}", e),
                }
            }
        }
    }
}

fn status_cell(status: WatchStatus) -> Cell {
    match status {
        WatchStatus::Unwatched => Cell::new("unwatched"),
        WatchStatus::Watching => Cell::new("watching"),
        WatchStatus::Watched => Cell::new("watched"),
    }
}

fn render_table(items: &[ContentItem]) -> Table {
    let has_kids = items.iter().any(|item| item.kind == ContentKind::Kids);
    let has_news = items.iter().any(|item| item.kind == ContentKind::News);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["ID", "Title", "Year", "Rating", "Genre", "Language", "Status", "Fav", "Mine"];
    if has_kids {
        header.push("Ages");
    }
    if has_news {
        header.push("Category");
    }
    table.set_header(header);

    for item in items {
        let mut row = vec![
            Cell::new(item.id),
            Cell::new(&item.title),
            Cell::new(item.year),
            Cell::new(format!("{:.1}", item.rating)),
            Cell::new(item.genre.join(", ")),
            Cell::new(&item.language),
            status_cell(item.watch_status),
            Cell::new(if item.is_favorite { "♥" } else { "" }),
            Cell::new(match item.personal_rating {
                Some(stars) => format!("{}/5", stars),
                // notes without a star rating still count as a review
                None if item.has_review() => "✎".to_string(),
                None => String::new(),
            }),
        ];
        if has_kids {
            row.push(Cell::new(
                item.kids
                    .as_ref()
                    .map(|meta| meta.age_group.clone())
                    .unwrap_or_default(),
            ));
        }
        if has_news {
            row.push(Cell::new(
                item.news
                    .as_ref()
                    .map(|meta| meta.category.clone())
                    .unwrap_or_default(),
            ));
        }
        table.add_row(row);
    }

    table
}
