use catalog_config::Preferences;
use clap::{ArgAction, Parser, Subcommand};
use color_eyre::Result;

mod commands;
mod data;
mod logging;
mod output;

use commands::{browse, config, featured, watchlist};

#[derive(Parser)]
#[command(name = "regioncast")]
#[command(about = "RegionCast - Browse a regional-content streaming catalog from your terminal")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse a catalog page (movies, shows, kids, or news)
    #[command(long_about = "Browse one of the catalog pages with the page's filters: free-text search, language, genre, minimum rating, plus age group and content type on the kids page and category on the news page. Results are sorted by the page's default directive unless --sort overrides it.")]
    Browse {
        /// Page to browse: movies, shows, kids, or news
        category: String,

        /// Case-insensitive search over titles and genre tags
        #[arg(short, long)]
        search: Option<String>,

        /// Language filter ('all' clears the configured default)
        #[arg(short, long)]
        language: Option<String>,

        /// Genre membership filter
        #[arg(short, long)]
        genre: Option<String>,

        /// Minimum public rating, e.g. 8
        #[arg(long, value_name = "RATING")]
        min_rating: Option<f32>,

        /// Kids page: age bracket, e.g. 3-8
        #[arg(long, value_name = "AGES")]
        age_group: Option<String>,

        /// Kids page: content type (cartoon, movie, educational)
        #[arg(long = "type", value_name = "TYPE")]
        content_type: Option<String>,

        /// News page: category (entertainment, sports, ...)
        #[arg(long, value_name = "CATEGORY")]
        news_category: Option<String>,

        /// Sort directive (title-asc, year-desc, rating-desc, recently-added,
        /// popularity, ...). Unknown values fall back to unsorted.
        #[arg(long)]
        sort: Option<String>,

        /// News page: only live items
        #[arg(long, action = ArgAction::SetTrue, conflicts_with = "trending")]
        live: bool,

        /// News page: only trending items (live excluded)
        #[arg(long, action = ArgAction::SetTrue)]
        trending: bool,
    },
    /// View and edit the personal watchlist
    #[command(long_about = "Show the watchlist with its status tabs and counts. Mutation flags apply in-memory for this session before rendering: toggle favorites, set or cycle watch status, remove items, and capture a star rating with review notes (interactive when --rating/--notes are omitted).")]
    Watchlist {
        /// Status tab: all, unwatched, watching, or watched
        #[arg(long, default_value = "all")]
        tab: String,

        /// Sort directive (defaults to recently-added)
        #[arg(long)]
        sort: Option<String>,

        /// Remove an item by id (repeatable)
        #[arg(long, value_name = "ID")]
        remove: Vec<u32>,

        /// Toggle favorite on an item by id (repeatable)
        #[arg(long, value_name = "ID")]
        favorite: Vec<u32>,

        /// Cycle an item's watch status by id (repeatable)
        #[arg(long, value_name = "ID")]
        cycle: Vec<u32>,

        /// Set an item's watch status, e.g. 3:watched (repeatable)
        #[arg(long = "set-status", value_name = "ID:STATUS")]
        set_status: Vec<String>,

        /// Open the review editor for an item by id
        #[arg(long, value_name = "ID")]
        review: Option<u32>,

        /// Star rating 0-5 for --review (0 clears the rating)
        #[arg(long, requires = "review")]
        rating: Option<u8>,

        /// Review notes for --review (truncated to 500 characters)
        #[arg(long, requires = "review")]
        notes: Option<String>,
    },
    /// Show the hero carousel, optionally animating the rotation
    Featured {
        /// Animate the 5-second rotation for this many seconds
        #[arg(long, value_name = "SECS")]
        watch: Option<u64>,
    },
    /// View or change saved preferences
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current preferences
    Show,
    /// Set the default sort directive for a page
    SetSort {
        /// movies, shows, kids, news, or watchlist
        page: String,
        /// Directive, e.g. rating-desc
        directive: String,
    },
    /// Set the default language filter ('all' clears it)
    SetLanguage {
        language: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let out = output::Output::new(cli.output, cli.quiet);
    let mut prefs = match Preferences::load() {
        Ok(prefs) => prefs,
        Err(e) => {
            out.warn(format!("Could not load preferences ({}); using defaults", e));
            Preferences::default()
        }
    };

    match cli.command {
        Commands::Browse {
            category,
            search,
            language,
            genre,
            min_rating,
            age_group,
            content_type,
            news_category,
            sort,
            live,
            trending,
        } => browse::run(
            &out,
            &prefs,
            browse::BrowseArgs {
                category,
                search,
                language,
                genre,
                min_rating,
                age_group,
                content_type,
                news_category,
                sort,
                live,
                trending,
            },
        ),
        Commands::Watchlist {
            tab,
            sort,
            remove,
            favorite,
            cycle,
            set_status,
            review,
            rating,
            notes,
        } => watchlist::run(
            &out,
            &prefs,
            watchlist::WatchlistArgs {
                tab,
                sort,
                remove,
                favorite,
                cycle,
                set_status,
                review,
                rating,
                notes,
            },
        ),
        Commands::Featured { watch } => featured::run(&out, watch).await,
        Commands::Config { cmd } => match cmd {
            None | Some(ConfigCommands::Show) => config::show(&out, &prefs),
            Some(ConfigCommands::SetSort { page, directive }) => {
                config::set_sort(&out, &mut prefs, &page, &directive)
            }
            Some(ConfigCommands::SetLanguage { language }) => {
                config::set_language(&out, &mut prefs, language)
            }
        },
    }
}
