//! Catalog building and validation.
//!
//! This module turns the two parsed snapshots into a `Catalog`:
//! - Load both files in parallel
//! - Build the title lookup
//! - Check the invariants the lookups rely on

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Default file name of the movie list inside a data directory
pub const MOVIES_FILE: &str = "movie_list.json";

/// Default file name of the similarity matrix inside a data directory
pub const SIMILARITY_FILE: &str = "similarity.txt";

/// Scores may overshoot the [-1, 1] range by float error
const SCORE_TOLERANCE: f32 = 1e-3;

impl Catalog {
    /// Load both snapshots from a directory using the default file names
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        Self::load_from_files(&data_dir.join(MOVIES_FILE), &data_dir.join(SIMILARITY_FILE))
    }

    /// Load the movie list and the similarity matrix
    ///
    /// Steps:
    /// 1. Parse both files in parallel
    /// 2. Build the title index
    /// 3. Validate dimensions and score range
    pub fn load_from_files(movies_path: &Path, similarity_path: &Path) -> Result<Self> {
        info!(
            movies = %movies_path.display(),
            similarity = %similarity_path.display(),
            "Loading catalog snapshots"
        );

        // Rayon's `join` runs the two parsers on separate threads
        let (movies, similarity) = rayon::join(
            || parser::parse_movies(movies_path),
            || parser::parse_similarity(similarity_path),
        );
        let movies = movies?;
        let similarity = similarity?;

        info!(
            "Loaded {} movies and a {}x{} similarity matrix",
            movies.len(),
            similarity.dim(),
            similarity.dim()
        );

        let catalog = Self::from_parts(movies, similarity)?;
        info!("Catalog successfully built and validated!");
        Ok(catalog)
    }

    /// Assemble a catalog from already parsed data
    pub fn from_parts(movies: Vec<MovieRecord>, similarity: SimilarityMatrix) -> Result<Self> {
        let mut catalog = Catalog {
            movies,
            similarity,
            title_index: HashMap::new(),
        };
        catalog.validate()?;
        catalog.build_title_index();
        Ok(catalog)
    }

    /// Map each title to the first row that carries it
    fn build_title_index(&mut self) {
        let mut index = HashMap::with_capacity(self.movies.len());
        for (row, movie) in self.movies.iter().enumerate() {
            if let Some(&first) = index.get(movie.title.as_str()) {
                warn!(
                    title = %movie.title,
                    first_row = first,
                    duplicate_row = row,
                    "Duplicate title; lookups resolve to the first row"
                );
                continue;
            }
            index.insert(movie.title.clone(), row);
        }
        self.title_index = index;
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - The matrix has one row per movie
    /// - Every score is finite and within [-1, 1]
    pub fn validate(&self) -> Result<()> {
        let (movies, rows) = self.counts();
        if movies != rows {
            return Err(DataLoadError::DimensionMismatch { movies, rows });
        }

        let limit = 1.0 + SCORE_TOLERANCE;
        if let Some(bad) = self
            .similarity
            .values()
            .iter()
            .find(|score| !score.is_finite() || score.abs() > limit)
        {
            return Err(DataLoadError::InvalidValue {
                field: "similarity".to_string(),
                value: bad.to_string(),
            });
        }
        Ok(())
    }
}
