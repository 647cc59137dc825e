//! Core domain types for the movie catalog.
//!
//! This module defines the fundamental data structures used throughout the system.
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (MovieId, RowIndex)
//! - Enums with a catch-all variant for open value sets
//! - serde attributes for tolerant decoding (`default`, `untagged`, `from`)
//! - A flat `Vec<f32>` standing in for a square matrix

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// External identifier of a movie (the TMDB id)
pub type MovieId = u32;

/// Position of a movie in storage order.
///
/// The same index addresses the movie table and the similarity matrix.
pub type RowIndex = usize;

// =============================================================================
// Origin
// =============================================================================

/// Production origin of a movie.
///
/// The dataset mixes two groups; anything else is kept verbatim in `Other`
/// so unusual snapshots still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Origin {
    Hollywood,
    Bollywood,
    Other(String),
}

impl Origin {
    pub fn as_str(&self) -> &str {
        match self {
            Origin::Hollywood => "Hollywood",
            Origin::Bollywood => "Bollywood",
            Origin::Other(name) => name,
        }
    }

    /// Case-insensitive comparison of two origins
    pub fn matches(&self, other: &Origin) -> bool {
        self.as_str().to_lowercase() == other.as_str().to_lowercase()
    }

    /// Records of this origin ship their poster URL inside the snapshot
    pub fn has_embedded_posters(&self) -> bool {
        matches!(self, Origin::Bollywood)
    }
}

impl Default for Origin {
    fn default() -> Self {
        Origin::Other(String::new())
    }
}

impl From<&str> for Origin {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("hollywood") {
            Origin::Hollywood
        } else if trimmed.eq_ignore_ascii_case("bollywood") {
            Origin::Bollywood
        } else {
            Origin::Other(trimmed.to_string())
        }
    }
}

impl From<String> for Origin {
    fn from(s: String) -> Self {
        Origin::from(s.as_str())
    }
}

impl From<Origin> for String {
    fn from(origin: Origin) -> Self {
        origin.as_str().to_string()
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category filter applied to result sets.
///
/// `All` is the wildcard; `Only` keeps records whose origin matches
/// case-insensitively. Parsing never fails: an unknown name simply
/// selects nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OriginFilter {
    #[default]
    All,
    Only(Origin),
}

impl OriginFilter {
    pub fn accepts(&self, origin: &Origin) -> bool {
        match self {
            OriginFilter::All => true,
            OriginFilter::Only(wanted) => wanted.matches(origin),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, OriginFilter::All)
    }

    /// Label used by the front-ends ("All", "Hollywood", ...)
    pub fn label(&self) -> &str {
        match self {
            OriginFilter::All => "All",
            OriginFilter::Only(origin) => origin.as_str(),
        }
    }
}

impl From<&str> for OriginFilter {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            OriginFilter::All
        } else {
            OriginFilter::Only(Origin::from(trimmed))
        }
    }
}

impl From<String> for OriginFilter {
    fn from(s: String) -> Self {
        OriginFilter::from(s.as_str())
    }
}

impl From<OriginFilter> for String {
    fn from(filter: OriginFilter) -> Self {
        filter.label().to_string()
    }
}

impl FromStr for OriginFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(OriginFilter::from(s))
    }
}

impl fmt::Display for OriginFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Movie Record
// =============================================================================

/// Overview as stored in the snapshot: either prose or a token list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Overview {
    Text(String),
    Words(Vec<String>),
}

impl Overview {
    /// Renders the overview as a single line, `None` when it holds no text
    pub fn to_text(&self) -> Option<String> {
        let text = match self {
            Overview::Text(text) => text.trim().to_string(),
            Overview::Words(words) => words
                .iter()
                .map(|w| w.trim())
                .filter(|w| !w.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        };
        if text.is_empty() { None } else { Some(text) }
    }
}

/// One row of the movie table.
///
/// Only `movie_id` and `title` are required; every descriptive field is
/// optional so a sparse snapshot still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub movie_id: MovieId,
    pub title: String,
    #[serde(default)]
    pub origin: Origin,
    #[serde(default)]
    pub overview: Option<Overview>,
    #[serde(default)]
    pub cast: Option<Vec<String>>,
    #[serde(default)]
    pub crew: Option<Vec<String>>,
    /// Normalised bag of words used for genre matching
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

impl MovieRecord {
    /// Minimal record, mostly useful for fixtures
    pub fn new(movie_id: MovieId, title: impl Into<String>, origin: Origin) -> Self {
        Self {
            movie_id,
            title: title.into(),
            origin,
            overview: None,
            cast: None,
            crew: None,
            tags: None,
            poster_url: None,
        }
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    pub fn with_poster_url(mut self, url: impl Into<String>) -> Self {
        self.poster_url = Some(url.into());
        self
    }

    pub fn tags(&self) -> &str {
        self.tags.as_deref().unwrap_or("")
    }

    /// Embedded poster URL, ignoring blank values
    pub fn poster_url(&self) -> Option<&str> {
        self.poster_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

// =============================================================================
// Similarity Matrix
// =============================================================================

/// Square matrix of precomputed pairwise similarity scores.
///
/// Stored row-major in one allocation; row `i` is the slice
/// `scores[i * dim..(i + 1) * dim]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimilarityMatrix {
    dim: usize,
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    /// Builds a matrix from parsed rows.
    ///
    /// Returns `None` unless every row is exactly `rows.len()` wide.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Option<Self> {
        let dim = rows.len();
        if rows.iter().any(|row| row.len() != dim) {
            return None;
        }
        let scores = rows.into_iter().flatten().collect();
        Some(Self { dim, scores })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// All scores for one movie against every other movie
    pub fn row(&self, index: RowIndex) -> Option<&[f32]> {
        if index >= self.dim {
            return None;
        }
        let start = index * self.dim;
        Some(&self.scores[start..start + self.dim])
    }

    pub fn score(&self, i: RowIndex, j: RowIndex) -> Option<f32> {
        self.row(i).and_then(|row| row.get(j).copied())
    }

    pub(crate) fn values(&self) -> &[f32] {
        &self.scores
    }
}

// =============================================================================
// Catalog - The Read-Only In-Memory Store
// =============================================================================

/// Movie table, similarity matrix, and the title lookup built over them.
///
/// A catalog is built once at startup and shared behind an `Arc`; nothing
/// mutates it afterwards, so no lock is needed.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) movies: Vec<MovieRecord>,
    pub(crate) similarity: SimilarityMatrix,
    /// Title to the first row carrying it
    pub(crate) title_index: HashMap<String, RowIndex>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a movie by its row
    pub fn get_movie(&self, row: RowIndex) -> Option<&MovieRecord> {
        self.movies.get(row)
    }

    /// Row of the first movie whose title matches exactly
    pub fn row_of(&self, title: &str) -> Option<RowIndex> {
        self.title_index.get(title).copied()
    }

    pub fn find_by_title(&self, title: &str) -> Option<&MovieRecord> {
        self.row_of(title).and_then(|row| self.get_movie(row))
    }

    /// All movies in storage order
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Similarity scores of one movie against all others
    pub fn similarity_row(&self, row: RowIndex) -> Option<&[f32]> {
        self.similarity.row(row)
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Get counts for debugging/validation: (movies, matrix dimension)
    pub fn counts(&self) -> (usize, usize) {
        (self.movies.len(), self.similarity.dim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_parsing_is_case_insensitive() {
        assert_eq!(Origin::from("HOLLYWOOD"), Origin::Hollywood);
        assert_eq!(Origin::from(" bollywood "), Origin::Bollywood);
        assert_eq!(Origin::from("Tollywood"), Origin::Other("Tollywood".to_string()));
        assert!(Origin::from("Tollywood").matches(&Origin::from("TOLLYWOOD")));
    }

    #[test]
    fn test_origin_filter_wildcard() {
        let filter: OriginFilter = "All".parse().unwrap();
        assert!(filter.is_wildcard());
        assert!(filter.accepts(&Origin::Bollywood));
        assert!(filter.accepts(&Origin::default()));
        assert!(OriginFilter::from("").is_wildcard());
    }

    #[test]
    fn test_origin_filter_only() {
        let filter = OriginFilter::from("bollywood");
        assert!(filter.accepts(&Origin::Bollywood));
        assert!(!filter.accepts(&Origin::Hollywood));
        assert_eq!(filter.label(), "Bollywood");
    }

    #[test]
    fn test_overview_text_forms() {
        let words = Overview::Words(vec!["A".into(), " man".into(), "".into(), "falls".into()]);
        assert_eq!(words.to_text().as_deref(), Some("A man falls"));

        let text = Overview::Text("  Plain prose. ".into());
        assert_eq!(text.to_text().as_deref(), Some("Plain prose."));

        assert_eq!(Overview::Words(vec![]).to_text(), None);
    }

    #[test]
    fn test_record_decodes_sparse_json() {
        let json = r#"{"movie_id": 7, "title": "Sparse", "origin": "bollywood", "poster_url": "  "}"#;
        let record: MovieRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.origin, Origin::Bollywood);
        assert_eq!(record.poster_url(), None);
        assert_eq!(record.tags(), "");
        assert!(record.cast.is_none());
    }

    #[test]
    fn test_record_decodes_both_overview_shapes() {
        let listed: MovieRecord =
            serde_json::from_str(r#"{"movie_id": 1, "title": "A", "overview": ["x", "y"]}"#).unwrap();
        let prose: MovieRecord =
            serde_json::from_str(r#"{"movie_id": 2, "title": "B", "overview": "x y"}"#).unwrap();

        assert_eq!(listed.overview, Some(Overview::Words(vec!["x".into(), "y".into()])));
        assert_eq!(prose.overview, Some(Overview::Text("x y".into())));
    }

    #[test]
    fn test_similarity_matrix_rows() {
        let matrix = SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.5],
            vec![0.5, 1.0],
        ])
        .unwrap();

        assert_eq!(matrix.dim(), 2);
        assert_eq!(matrix.row(1), Some(&[0.5, 1.0][..]));
        assert_eq!(matrix.score(0, 1), Some(0.5));
        assert!(matrix.row(2).is_none());
    }

    #[test]
    fn test_similarity_matrix_rejects_ragged_rows() {
        assert!(SimilarityMatrix::from_rows(vec![vec![1.0], vec![0.5, 1.0]]).is_none());
        assert!(SimilarityMatrix::from_rows(vec![vec![1.0, 0.5]]).is_none());
    }
}
