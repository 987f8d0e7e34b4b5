//! Bundled sample catalog, the in-memory seed for a browsing session.
//! The core accepts any conforming collection; these are demo records only.

use catalog_models::{ContentItem, ContentKind, KidsMeta, NewsMeta, WatchStatus};
use chrono::{Duration, Utc};

#[allow(clippy::too_many_arguments)]
fn item(
    id: u32,
    title: &str,
    year: u32,
    rating: f32,
    genre: &[&str],
    language: &str,
    kind: ContentKind,
    duration: &str,
    description: &str,
) -> ContentItem {
    ContentItem {
        id,
        title: title.to_string(),
        year,
        rating,
        genre: genre.iter().map(|g| g.to_string()).collect(),
        language: language.to_string(),
        kind,
        duration: Some(duration.to_string()),
        description: description.to_string(),
        watch_status: WatchStatus::Unwatched,
        is_favorite: false,
        personal_rating: None,
        personal_notes: None,
        kids: None,
        news: None,
    }
}

pub fn movies() -> Vec<ContentItem> {
    let mut items = vec![
        item(
            1,
            "Pushpa: The Rule",
            2024,
            8.9,
            &["Action", "Drama", "Thriller"],
            "Telugu",
            ContentKind::Movie,
            "2h 45m",
            "Pushpa Raj returns with more power and intensity in this highly anticipated sequel.",
        ),
        item(
            2,
            "War 2",
            2024,
            8.5,
            &["Action", "Thriller", "Spy"],
            "Hindi",
            ContentKind::Movie,
            "2h 30m",
            "The ultimate spy thriller continues with high-octane action and stunning visuals.",
        ),
        item(
            3,
            "Coolie",
            2024,
            8.2,
            &["Action", "Comedy", "Drama"],
            "Telugu",
            ContentKind::Movie,
            "2h 20m",
            "A stylish action entertainer that promises to deliver edge-of-seat thrills.",
        ),
        item(
            4,
            "Tiger 3",
            2024,
            8.1,
            &["Action", "Thriller", "Spy"],
            "Hindi",
            ContentKind::Movie,
            "2h 35m",
            "Agent Tiger is back for his most dangerous mission yet in this action spectacle.",
        ),
        item(
            5,
            "2018: Everyone is a Hero",
            2023,
            8.8,
            &["Drama", "Thriller", "Biography"],
            "Malayalam",
            ContentKind::Movie,
            "2h 25m",
            "The inspiring true story of Kerala's devastating floods and heroic rescue operations.",
        ),
        item(
            6,
            "KGF Chapter 3",
            2024,
            9.1,
            &["Action", "Drama", "Period"],
            "Kannada",
            ContentKind::Movie,
            "2h 50m",
            "The gold mining saga reaches its epic conclusion with Rocky's final chapter.",
        ),
    ];
    items[1].watch_status = WatchStatus::Watching;
    items[1].is_favorite = true;
    items[3].watch_status = WatchStatus::Watched;
    items[3].is_favorite = true;
    items[4].watch_status = WatchStatus::Watched;
    items[4].is_favorite = true;
    items
}

pub fn shows() -> Vec<ContentItem> {
    vec![
        item(
            1,
            "Scam 1992",
            2020,
            9.5,
            &["Drama", "Biography", "Thriller"],
            "Hindi",
            ContentKind::Show,
            "10 episodes",
            "The meteoric rise and dramatic fall of stockbroker Harshad Mehta.",
        ),
        item(
            2,
            "The Family Man",
            2021,
            8.7,
            &["Action", "Drama", "Thriller"],
            "Hindi",
            ContentKind::Show,
            "2 seasons",
            "A middle-class man secretly works as an intelligence officer.",
        ),
        item(
            3,
            "Arya",
            2023,
            8.4,
            &["Crime", "Drama", "Thriller"],
            "Tamil",
            ContentKind::Show,
            "8 episodes",
            "A gripping crime saga set in the underbelly of Chennai.",
        ),
        item(
            4,
            "Delhi Crime",
            2022,
            8.5,
            &["Crime", "Drama", "Thriller"],
            "Hindi",
            ContentKind::Show,
            "2 seasons",
            "The Delhi police investigate the capital's most harrowing cases.",
        ),
        item(
            5,
            "Rocket Boys",
            2022,
            8.9,
            &["Biography", "Drama", "History"],
            "Hindi",
            ContentKind::Show,
            "8 episodes",
            "The story of the scientists who built India's space and atomic programmes.",
        ),
        item(
            6,
            "Mumbai Diaries 26/11",
            2021,
            8.2,
            &["Drama", "Thriller", "Medical"],
            "Hindi",
            ContentKind::Show,
            "8 episodes",
            "Doctors at a government hospital during the night of the Mumbai attacks.",
        ),
    ]
}

pub fn kids() -> Vec<ContentItem> {
    let meta = |age: &str, content_type: &str| {
        Some(KidsMeta {
            age_group: age.to_string(),
            content_type: content_type.to_string(),
        })
    };
    let mut items = vec![
        item(
            1,
            "Chhota Bheem",
            2008,
            8.2,
            &["Adventure", "Comedy"],
            "Hindi",
            ContentKind::Kids,
            "22m",
            "The brave boy from Dholakpur and his friends on endless adventures.",
        ),
        item(
            2,
            "Motu Patlu",
            2012,
            7.9,
            &["Comedy", "Adventure"],
            "Hindi",
            ContentKind::Kids,
            "11m",
            "Two best friends stumble from one comic misadventure to the next.",
        ),
        item(
            3,
            "Super Bheem",
            2024,
            8.5,
            &["Adventure", "Fantasy"],
            "Hindi",
            ContentKind::Kids,
            "22m",
            "Bheem gains cosmic powers and defends the galaxy.",
        ),
        item(
            4,
            "Bal Hanuman",
            2007,
            8.7,
            &["Mythology", "Adventure"],
            "Hindi",
            ContentKind::Kids,
            "1h 30m",
            "The childhood tales of Hanuman retold for young viewers.",
        ),
        item(
            5,
            "Arjun: The Warrior Prince",
            2012,
            8.3,
            &["Mythology", "Action"],
            "Hindi",
            ContentKind::Kids,
            "1h 36m",
            "The coming of age of Arjun, the greatest archer of his time.",
        ),
        item(
            6,
            "Shiva",
            2015,
            8.1,
            &["Action", "Adventure"],
            "Hindi",
            ContentKind::Kids,
            "22m",
            "A fearless boy with a super bike keeps his city safe.",
        ),
    ];
    items[0].kids = meta("3-8", "Cartoon");
    items[1].kids = meta("4-10", "Cartoon");
    items[2].kids = meta("5-12", "Cartoon");
    items[3].kids = meta("4-10", "Movie");
    items[4].kids = meta("6-14", "Movie");
    items[5].kids = meta("6-12", "Cartoon");
    items
}

pub fn news() -> Vec<ContentItem> {
    let meta = |category: &str, hours_ago: i64, is_live: bool, is_trending: bool| {
        Some(NewsMeta {
            category: category.to_string(),
            published_at: Utc::now() - Duration::hours(hours_ago),
            is_live,
            is_trending,
        })
    };
    let mut items = vec![
        item(
            1,
            "Breaking: Major Film Festival Announces Winners",
            2025,
            7.8,
            &["Entertainment"],
            "English",
            ContentKind::News,
            "5m read",
            "The jury reveals this year's winning films across all categories.",
        ),
        item(
            2,
            "LIVE: Cricket World Cup Final Match Updates",
            2025,
            9.2,
            &["Sports"],
            "Hindi",
            ContentKind::News,
            "Live",
            "Ball-by-ball coverage of the final as it happens.",
        ),
        item(
            3,
            "Technology Breakthrough in Indian Space Mission",
            2025,
            8.4,
            &["Technology"],
            "English",
            ContentKind::News,
            "7m read",
            "The space agency confirms a successful engine test for the next mission.",
        ),
        item(
            4,
            "Regional Elections: Exit Poll Results and Analysis",
            2025,
            7.5,
            &["Politics"],
            "Hindi",
            ContentKind::News,
            "10m read",
            "What the exit polls say about the incoming state assemblies.",
        ),
        item(
            5,
            "Bollywood Star Announces New Production House",
            2025,
            7.2,
            &["Entertainment"],
            "Hindi",
            ContentKind::News,
            "4m read",
            "The actor moves behind the camera with a slate of regional films.",
        ),
        item(
            6,
            "Economic Reform: New Policy Announcements",
            2025,
            7.0,
            &["Business"],
            "English",
            ContentKind::News,
            "8m read",
            "A breakdown of the measures announced in today's policy briefing.",
        ),
    ];
    items[0].news = meta("Entertainment", 2, false, true);
    items[1].news = meta("Sports", 0, true, true);
    items[2].news = meta("Technology", 5, false, true);
    items[3].news = meta("Politics", 8, true, false);
    items[4].news = meta("Entertainment", 12, false, false);
    items[5].news = meta("Business", 26, false, false);
    items
}

pub fn watchlist() -> Vec<ContentItem> {
    let mut items = vec![
        item(
            1,
            "Pushpa: The Rule",
            2024,
            8.9,
            &["Action", "Drama", "Thriller"],
            "Telugu",
            ContentKind::Movie,
            "2h 45m",
            "Pushpa Raj returns with more power and intensity.",
        ),
        item(
            2,
            "War 2",
            2024,
            8.5,
            &["Action", "Thriller", "Spy"],
            "Hindi",
            ContentKind::Movie,
            "2h 30m",
            "The ultimate spy thriller continues.",
        ),
        item(
            3,
            "Tiger 3",
            2024,
            8.1,
            &["Action", "Thriller", "Spy"],
            "Hindi",
            ContentKind::Movie,
            "2h 35m",
            "Agent Tiger's most dangerous mission.",
        ),
        item(
            4,
            "2018: Everyone is a Hero",
            2023,
            8.8,
            &["Drama", "Thriller", "Biography"],
            "Malayalam",
            ContentKind::Movie,
            "2h 25m",
            "Inspiring story of Kerala floods.",
        ),
    ];
    for entry in &mut items {
        entry.is_favorite = true;
    }
    items[0].personal_notes = Some("Can't wait to watch this sequel!".to_string());
    items[1].watch_status = WatchStatus::Watching;
    items[1].personal_rating = Some(4);
    items[1].personal_notes = Some("Great action sequences so far. Halfway through.".to_string());
    items[2].watch_status = WatchStatus::Watched;
    items[2].personal_rating = Some(5);
    items[2].personal_notes = Some(
        "Excellent spy thriller! The action was incredible and the story kept me hooked till the end."
            .to_string(),
    );
    items[3].watch_status = WatchStatus::Watched;
    items[3].personal_rating = Some(5);
    items[3].personal_notes =
        Some("Emotional and powerful. A must-watch film about human resilience.".to_string());
    items
}

/// Hero carousel seed; the rotation wraps over this collection
pub fn featured() -> Vec<ContentItem> {
    movies()
}

pub fn for_kind(kind: ContentKind) -> Vec<ContentItem> {
    match kind {
        ContentKind::Movie => movies(),
        ContentKind::Show => shows(),
        ContentKind::Kids => kids(),
        ContentKind::News => news(),
    }
}
