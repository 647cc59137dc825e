use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::OriginFilter;
use pipeline::GENRES;
use server::{load_catalog, Config, MovieBrowser, MovieCard};

/// MojFlix - Hollywood and Bollywood movie browser
#[derive(Parser)]
#[command(name = "mojflix")]
#[command(about = "Content-based movie recommendations and genre browsing", long_about = None)]
struct Cli {
    /// Directory holding movie_list.json and similarity.txt
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Path to the movie list, overriding the data directory
    #[arg(long)]
    movies: Option<PathBuf>,

    /// Path to the similarity matrix, overriding the data directory
    #[arg(long)]
    similarity: Option<PathBuf>,

    /// Skip TMDB lookups and print placeholder posters
    #[arg(long, global = true)]
    no_posters: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies similar to a title
    Recommend {
        /// Exact title of a movie in the catalog
        #[arg(long)]
        title: String,

        /// Origin filter: All, Hollywood or Bollywood
        #[arg(long, default_value = "All")]
        origin: OriginFilter,

        /// Show description, cast and director for each result
        #[arg(long)]
        details: bool,
    },

    /// Browse movies by genre
    Browse {
        /// Genre to browse, e.g. Action
        #[arg(long)]
        genre: String,

        /// Origin filter: All, Hollywood or Bollywood
        #[arg(long, default_value = "All")]
        origin: OriginFilter,

        /// Show description, cast and director for each result
        #[arg(long)]
        details: bool,
    },

    /// Search for movies by title
    Search {
        /// Text to look for (case-insensitive substring match)
        #[arg(long)]
        title: String,

        /// Maximum number of titles to print
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// List the browsable genres
    Genres,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Commands::Genres = cli.command {
        handle_genres();
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = Config::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(path) = cli.movies {
        config.movies_file = Some(path);
    }
    if let Some(path) = cli.similarity {
        config.similarity_file = Some(path);
    }

    println!("Loading catalog from {}...", config.data_dir.display());
    let start = Instant::now();
    let Some(catalog) = load_catalog(&config.movies_path(), &config.similarity_path())
        .context("Failed to load catalog")?
    else {
        return Ok(ExitCode::FAILURE);
    };
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    let posters = config.poster_resolver(cli.no_posters)?;
    let browser = MovieBrowser::new(catalog, posters);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            title,
            origin,
            details,
        } => handle_recommend(&browser, &title, &origin, details).await?,
        Commands::Browse {
            genre,
            origin,
            details,
        } => handle_browse(&browser, &genre, &origin, details).await?,
        Commands::Search { title, limit } => handle_search(&browser, &title, limit),
        Commands::Genres => handle_genres(),
    }

    Ok(ExitCode::SUCCESS)
}

/// Handle the 'recommend' command
async fn handle_recommend(
    browser: &MovieBrowser,
    title: &str,
    origin: &OriginFilter,
    details: bool,
) -> Result<()> {
    let cards = browser.recommend(title, origin).await?;

    if cards.is_empty() {
        println!("No recommendations found.");
        return Ok(());
    }

    println!("{}", format!("Because you watched {}:", title).bold().red());
    print_cards(&cards, details);
    Ok(())
}

/// Handle the 'browse' command
async fn handle_browse(
    browser: &MovieBrowser,
    genre: &str,
    origin: &OriginFilter,
    details: bool,
) -> Result<()> {
    let cards = browser.browse(genre, origin).await?;

    if cards.is_empty() {
        println!("No {} movies found.", genre);
        return Ok(());
    }

    println!(
        "{}",
        format!("Top {} Movies ({})", genre, origin.label()).bold().red()
    );
    print_cards(&cards, details);
    Ok(())
}

/// Handle the 'search' command
fn handle_search(browser: &MovieBrowser, title: &str, limit: usize) {
    let matches = browser.search_titles(title, limit);

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    if matches.is_empty() {
        println!("  (no matching titles)");
    }
    for found in matches {
        println!("  {} {}", "•".green(), found);
    }
}

/// Handle the 'genres' command
fn handle_genres() {
    println!("{}", "Genres:".bold().blue());
    for genre in GENRES {
        println!("  {} {}", "•".green(), genre);
    }
}

/// Print one block per card, in rank order
fn print_cards(cards: &[MovieCard], details: bool) {
    for (i, card) in cards.iter().enumerate() {
        println!(
            "{}. {}",
            (i + 1).to_string().green(),
            card.caption().bold()
        );
        println!("   Poster: {}", card.poster_url.dimmed());
        if details {
            println!("   Description: {}", card.description);
            println!("   Cast: {}", card.cast);
            println!("   Director: {}", card.director);
        }
    }
}
