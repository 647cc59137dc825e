//! Example: Print the nearest neighbours of a movie
//!
//! Run with: cargo run --package sources --example show_neighbors -- "Avatar"
//!
//! Expects `data/movie_list.json` and `data/similarity.txt`.

use data_loader::{Catalog, OriginFilter};
use sources::{QueryContext, SimilaritySource};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let title = std::env::args().nth(1).unwrap_or_else(|| "Avatar".to_string());

    println!("Loading catalog...");
    let start = Instant::now();
    let catalog = Arc::new(Catalog::load_from_dir(Path::new("data"))?);
    println!("Loaded {} movies in {:?}\n", catalog.len(), start.elapsed());

    let Some(row) = catalog.row_of(&title) else {
        println!("'{}' is not in the catalog", title);
        return Ok(());
    };

    let source = SimilaritySource::new(catalog.clone());
    let start = Instant::now();
    let candidates = source.get_candidates(&QueryContext::for_movie(row, OriginFilter::All), 10);
    println!("Ranked neighbours of '{}' in {:?}:", title, start.elapsed());

    for (rank, candidate) in candidates.iter().enumerate() {
        if let Some(movie) = catalog.get_movie(candidate.row) {
            println!("  {:>2}. {} ({}) - {:.3}", rank + 1, movie.title, movie.origin, candidate.score);
        }
    }
    Ok(())
}
