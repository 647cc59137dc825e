//! Parsers for the two snapshot files.
//!
//! - `movie_list.json`: JSON array of movie records in storage order
//! - `similarity.txt`: one matrix row per line, values separated by
//!   commas and/or whitespace; blank lines and `#` comments are skipped
//!
//! Rust concepts you'll learn here:
//! - Mapping `io::ErrorKind::NotFound` onto a domain error
//! - Error handling with `?` operator
//! - Collecting a parallel iterator of `Result`s into one `Result`

use crate::error::{DataLoadError, Result};
use crate::types::*;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// Opens a snapshot, turning "no such file" into `FileNotFound`
fn open_snapshot(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse the movie list snapshot
pub fn parse_movies(path: &Path) -> Result<Vec<MovieRecord>> {
    let file = open_snapshot(path)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| DataLoadError::JsonError {
        file: file_label(path),
        source,
    })
}

/// Parse the similarity matrix snapshot
pub fn parse_similarity(path: &Path) -> Result<SimilarityMatrix> {
    let mut file = open_snapshot(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;

    parse_similarity_str(&content, &file_label(path))
}

/// Parse matrix text that is already in memory.
///
/// `file` is only used to label errors.
pub fn parse_similarity_str(content: &str, file: &str) -> Result<SimilarityMatrix> {
    // Keep original line numbers for error messages
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect();

    // Rows are independent, so parse them in parallel.
    // `collect` into `Result<Vec<_>>` stops at the first bad row.
    let rows: Vec<Vec<f32>> = lines
        .par_iter()
        .map(|&(line_no, line)| parse_row(line, line_no, file))
        .collect::<Result<Vec<_>>>()?;

    // Every row must be as wide as the matrix is tall
    let dim = rows.len();
    for (row, &(line_no, _)) in rows.iter().zip(&lines) {
        if row.len() != dim {
            return Err(DataLoadError::FieldCountMismatch {
                expected: dim,
                found: row.len(),
                line: line_no,
            });
        }
    }

    SimilarityMatrix::from_rows(rows).ok_or_else(|| {
        DataLoadError::ValidationError(format!("{} is not a square matrix", file))
    })
}

/// Parse one row of scores
///
/// Example: "1.0, 0.25 0.1" -> vec![1.0, 0.25, 0.1]
fn parse_row(line: &str, line_no: usize, file: &str) -> Result<Vec<f32>> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .enumerate()
        .map(|(column, field)| {
            field.parse::<f32>().map_err(|e| DataLoadError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: format!("Invalid score {:?} in column {}: {}", field, column + 1, e),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_row_mixed_separators() {
        let row = parse_row("1.0, 0.25 0.1\t0", 1, "similarity.txt").unwrap();
        assert_eq!(row, vec![1.0, 0.25, 0.1, 0.0]);
    }

    #[test]
    fn test_parse_row_reports_line_and_column() {
        let err = parse_row("1.0,abc", 7, "similarity.txt").unwrap_err();
        match err {
            DataLoadError::ParseError { file, line, reason } => {
                assert_eq!(file, "similarity.txt");
                assert_eq!(line, 7);
                assert!(reason.contains("column 2"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_similarity_skips_comments_and_blanks() {
        let content = "# 2x2 matrix\n1.0,0.3\n\n0.3,1.0\n";
        let matrix = parse_similarity_str(content, "similarity.txt").unwrap();

        assert_eq!(matrix.dim(), 2);
        assert_eq!(matrix.score(1, 0), Some(0.3));
    }

    #[test]
    fn test_parse_similarity_rejects_ragged_row() {
        let content = "1.0,0.3\n0.3\n";
        let err = parse_similarity_str(content, "similarity.txt").unwrap_err();

        assert!(matches!(
            err,
            DataLoadError::FieldCountMismatch { expected: 2, found: 1, line: 2 }
        ));
    }

    #[test]
    fn test_missing_file_is_reported_as_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_movies(&dir.path().join("movie_list.json")).unwrap_err();

        assert!(err.is_missing_file());
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_parse_movies_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"movie_id": 19995, "title": "Avatar", "origin": "Hollywood", "tags": "action scifi"}}]"#
        )
        .unwrap();

        let movies = parse_movies(file.path()).unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Avatar");
        assert_eq!(movies[0].origin, Origin::Hollywood);
    }

    #[test]
    fn test_parse_movies_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title": "No id"}}]"#).unwrap();

        let err = parse_movies(file.path()).unwrap_err();
        assert!(matches!(err, DataLoadError::JsonError { .. }));
        assert!(!err.is_missing_file());
    }
}
