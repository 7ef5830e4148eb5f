use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use nasihun::config::{find_config_file, get_config, load_config, Config};
use nasihun::models::{CitationRequest, Collection, HadithRecord, Language, SearchRequest};
use nasihun::poster::{render_poster, share_text, PosterPrefs};
use nasihun::resolve::{LookupResolver, SearchLimits, SearchResolver};
use nasihun::source::HadithApiSource;
use nasihun::utils::{is_terminal, terminal_width, truncate_with_ellipsis};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Nasihun - fetch, search, and render hadith citations as poster cards
#[derive(Parser, Debug)]
#[command(name = "nasihun")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fetch, search, and render hadith citations as shareable poster cards", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (card if TTY, JSON otherwise)
    Auto,
    /// Bordered poster card
    Card,
    /// JSON format (machine-readable)
    Json,
    /// Plain text format
    Plain,
}

/// Hadith collections accepted on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum CollectionArg {
    #[value(name = "sahih-bukhari")]
    SahihBukhari,
    #[value(name = "sahih-muslim")]
    SahihMuslim,
    #[value(name = "al-tirmidhi")]
    AlTirmidhi,
    #[value(name = "abu-dawood")]
    AbuDawood,
    #[value(name = "ibn-e-majah")]
    IbnEMajah,
    #[value(name = "sunan-nasai")]
    SunanNasai,
    #[value(name = "mishkat")]
    Mishkat,
}

impl From<CollectionArg> for Collection {
    fn from(arg: CollectionArg) -> Self {
        match arg {
            CollectionArg::SahihBukhari => Collection::SahihBukhari,
            CollectionArg::SahihMuslim => Collection::SahihMuslim,
            CollectionArg::AlTirmidhi => Collection::AlTirmidhi,
            CollectionArg::AbuDawood => Collection::AbuDawood,
            CollectionArg::IbnEMajah => Collection::IbnEMajah,
            CollectionArg::SunanNasai => Collection::SunanNasai,
            CollectionArg::Mishkat => Collection::Mishkat,
        }
    }
}

/// Languages accepted on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LanguageArg {
    English,
    Arabic,
    Urdu,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::English => Language::English,
            LanguageArg::Arabic => Language::Arabic,
            LanguageArg::Urdu => Language::Urdu,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch one hadith by number and render it
    #[command(alias = "f")]
    Fetch {
        /// Hadith number within the collection
        number: u32,

        /// Collection to fetch from
        #[arg(long, short, value_enum, default_value_t = CollectionArg::SahihBukhari)]
        collection: CollectionArg,

        /// Language preference
        #[arg(long, short, value_enum, default_value_t = LanguageArg::English)]
        language: LanguageArg,

        /// Also print a share-ready text block
        #[arg(long)]
        share: bool,
    },

    /// Search hadiths in a collection by substring
    #[command(alias = "s")]
    Search {
        /// Search query string
        query: String,

        /// Collection to search within
        #[arg(long, short, value_enum, default_value_t = CollectionArg::SahihBukhari)]
        collection: CollectionArg,

        /// Language preference
        #[arg(long, short, value_enum, default_value_t = LanguageArg::English)]
        language: LanguageArg,

        /// Render result N (1-based) as a card instead of listing
        #[arg(long)]
        select: Option<usize>,
    },

    /// Fetch a random hadith from a random collection
    #[command(alias = "r")]
    Random {
        /// Language preference
        #[arg(long, short, value_enum, default_value_t = LanguageArg::English)]
        language: LanguageArg,
    },

    /// List available collections and their entry ranges
    #[command(alias = "ls")]
    Collections,

    /// Show or change saved poster display preferences
    Style {
        /// Font family hint
        #[arg(long)]
        font_family: Option<String>,

        /// Font size hint in points
        #[arg(long)]
        font_size: Option<u8>,

        /// Body text color, e.g. "#1f2937"
        #[arg(long)]
        text_color: Option<String>,

        /// Background color, e.g. "#ffffff"
        #[arg(long)]
        background_color: Option<String>,

        /// Line spacing multiplier
        #[arg(long)]
        line_spacing: Option<f32>,

        /// Show or hide the narrator chain
        #[arg(long)]
        show_narrator: Option<bool>,

        /// Reset all preferences to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("nasihun={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from file if specified or found in default locations
    let config = if let Some(config_path) = &cli.config {
        load_config(config_path)?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("Using config file: {}", config_path.display());
        load_config(&config_path)?
    } else {
        get_config()
    };

    run(cli, config).await
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    let prefs = PosterPrefs::load();

    match cli.command {
        Commands::Fetch {
            number,
            collection,
            language,
            share,
        } => {
            let request = CitationRequest::new(collection.into(), number, language.into());
            let resolver = LookupResolver::new(Arc::new(HadithApiSource::new(&config.api)));
            let record = resolver.resolve(&request).await;

            print_record(&record, &prefs, cli.output)?;
            if share {
                println!("\n{}", share_text(&record));
            }
        }

        Commands::Search {
            query,
            collection,
            language,
            select,
        } => {
            let collection: Collection = collection.into();
            let request = SearchRequest::new(collection, query, language.into());
            let resolver = SearchResolver::with_limits(
                Arc::new(HadithApiSource::new(&config.api)),
                SearchLimits {
                    max_pages: config.search.max_pages,
                    max_results: config.search.max_results,
                },
            );

            let spinner = search_spinner(cli.quiet, collection);
            let records = resolver.resolve(&request).await;
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }

            match select {
                Some(index) => {
                    let record = records.get(index.saturating_sub(1)).ok_or_else(|| {
                        anyhow::anyhow!("no result #{} ({} results)", index, records.len())
                    })?;
                    print_record(record, &prefs, cli.output)?;
                }
                None => print_results(&records, &request.query, cli.output)?,
            }
        }

        Commands::Random { language } => {
            let (collection, number) = random_citation();
            tracing::debug!(collection = collection.slug(), number, "picked random citation");

            let request = CitationRequest::new(collection, number, language.into());
            let resolver = LookupResolver::new(Arc::new(HadithApiSource::new(&config.api)));
            let record = resolver.resolve(&request).await;

            print_record(&record, &prefs, cli.output)?;
        }

        Commands::Collections => print_collections(cli.output)?,

        Commands::Style {
            font_family,
            font_size,
            text_color,
            background_color,
            line_spacing,
            show_narrator,
            reset,
        } => {
            let mut prefs = if reset { PosterPrefs::default() } else { prefs };

            if let Some(font_family) = font_family {
                prefs.font_family = font_family;
            }
            if let Some(font_size) = font_size {
                prefs.font_size = font_size;
            }
            if let Some(text_color) = text_color {
                prefs.text_color = text_color;
            }
            if let Some(background_color) = background_color {
                prefs.background_color = background_color;
            }
            if let Some(line_spacing) = line_spacing {
                prefs.line_spacing = line_spacing;
            }
            if let Some(show_narrator) = show_narrator {
                prefs.show_narrator = show_narrator;
            }

            let path = prefs.save()?;
            println!("Saved preferences to {}", path.display());
            println!("{}", toml::to_string_pretty(&prefs)?);
        }
    }

    Ok(())
}

fn search_spinner(quiet: bool, collection: Collection) -> Option<ProgressBar> {
    if quiet || !is_terminal() {
        return None;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("valid spinner template"),
    );
    spinner.set_message(format!("Searching {}...", collection.name()));
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

fn print_record(record: &HadithRecord, prefs: &PosterPrefs, output: OutputFormat) -> Result<()> {
    match resolve_format(output) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
        OutputFormat::Plain => {
            println!("{}", record.text);
            println!();
            println!("Source: {}", record.source_label);
            println!("Translator: {}", record.translator);
            println!("Grading: {}", record.authenticity.label());
        }
        _ => print!(
            "{}",
            render_poster(record, prefs, terminal_width(), is_terminal())
        ),
    }
    Ok(())
}

fn print_results(records: &[HadithRecord], query: &str, output: OutputFormat) -> Result<()> {
    if let OutputFormat::Json = resolve_format(output) {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No results found for \"{}\". Try different keywords.", query);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(terminal_width() as u16)
        .set_header(vec!["#", "Grading", "Source", "Text"]);

    for (i, record) in records.iter().enumerate() {
        let grading = if record.authenticity.is_authentic() {
            Cell::new(record.authenticity.label()).fg(Color::Green)
        } else {
            Cell::new(record.authenticity.label()).fg(Color::Red)
        };

        table.add_row(vec![
            Cell::new(i + 1),
            grading,
            Cell::new(&record.source_label),
            Cell::new(truncate_with_ellipsis(&record.text, 120)),
        ]);
    }

    println!("{} results for \"{}\"", records.len(), query);
    println!("{table}");
    Ok(())
}

fn print_collections(output: OutputFormat) -> Result<()> {
    if let OutputFormat::Json = resolve_format(output) {
        let rows: Vec<serde_json::Value> = Collection::ALL
            .iter()
            .map(|c| {
                serde_json::json!({
                    "slug": c.slug(),
                    "name": c.name(),
                    "max_number": c.max_number(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Collection", "Slug", "Entries"]);

    for collection in Collection::ALL {
        table.add_row(vec![
            Cell::new(collection.name()),
            Cell::new(collection.slug()),
            Cell::new(format!("1-{}", collection.max_number())),
        ]);
    }

    println!("{table}");
    Ok(())
}

fn resolve_format(output: OutputFormat) -> OutputFormat {
    match output {
        OutputFormat::Auto if is_terminal() => OutputFormat::Card,
        OutputFormat::Auto => OutputFormat::Json,
        other => other,
    }
}

/// Pick a random collection and an in-range entry number.
///
/// Clock-derived; this feeds a content lookup, not anything security-relevant.
fn random_citation() -> (Collection, u32) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);

    let collection = Collection::ALL[nanos as usize % Collection::ALL.len()];
    let number = nanos % collection.max_number() + 1;
    (collection, number)
}
