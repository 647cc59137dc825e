use data_loader::Catalog;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data");

    println!("Loading catalog snapshots from {}...\n", data_dir.display());

    let start = Instant::now();
    let catalog = Catalog::load_from_dir(data_dir)
        .expect("Failed to load catalog");
    let elapsed = start.elapsed();

    let (movies, rows) = catalog.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", movies);
    println!("Matrix: {}x{}", rows, rows);
    println!("\nPerformance: {:.0} scores/second",
             (rows * rows) as f64 / elapsed.as_secs_f64());
}
