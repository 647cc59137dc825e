//! Candidate and query types shared by the sources and the pipeline.

use data_loader::{OriginFilter, RowIndex};

/// Which source produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateSource {
    /// Ranked neighbour from the similarity matrix
    Similarity,
    /// Plain scan over the movie table in storage order
    CatalogScan,
}

/// A movie under consideration for a result list.
///
/// Candidates refer to movies by row so they stay cheap to move through
/// the filter pipeline; the record itself lives in the `Catalog`.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub row: RowIndex,
    pub source: CandidateSource,
    /// Similarity to the query movie; 0.0 for catalog scans
    pub score: f32,
}

impl Candidate {
    pub fn new(row: RowIndex, source: CandidateSource, score: f32) -> Self {
        Self { row, source, score }
    }
}

/// Everything a single user interaction asks for.
///
/// Built once per request and handed to every source and filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryContext {
    /// Row of the movie the user picked, if any
    pub query_row: Option<RowIndex>,
    /// Normalised genre token, if browsing by genre
    pub genre_token: Option<String>,
    pub origin: OriginFilter,
}

impl QueryContext {
    /// Context for "movies like this one"
    pub fn for_movie(query_row: RowIndex, origin: OriginFilter) -> Self {
        Self {
            query_row: Some(query_row),
            genre_token: None,
            origin,
        }
    }

    /// Context for "movies in this genre"
    pub fn for_genre(genre: &str, origin: OriginFilter) -> Self {
        Self {
            query_row: None,
            genre_token: Some(genre_token(genre)),
            origin,
        }
    }
}

/// Normalises a genre name the way the tag field is normalised:
/// lowercase with spaces removed ("Science Fiction" -> "sciencefiction").
pub fn genre_token(genre: &str) -> String {
    genre.to_lowercase().replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_token() {
        assert_eq!(genre_token("Action"), "action");
        assert_eq!(genre_token("Science Fiction"), "sciencefiction");
        assert_eq!(genre_token(""), "");
    }

    #[test]
    fn test_contexts() {
        let movie = QueryContext::for_movie(4, OriginFilter::All);
        assert_eq!(movie.query_row, Some(4));
        assert!(movie.genre_token.is_none());

        let genre = QueryContext::for_genre("Crime", OriginFilter::from("Bollywood"));
        assert_eq!(genre.genre_token.as_deref(), Some("crime"));
        assert_eq!(genre.origin.label(), "Bollywood");
    }
}
