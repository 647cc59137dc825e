//! Display form of a movie record.

use serde::Serialize;

use data_loader::MovieRecord;

pub const NO_DESCRIPTION: &str = "No description available.";
pub const NOT_AVAILABLE: &str = "Not available";

/// Everything a front-end needs to draw one poster tile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieCard {
    pub movie_id: u32,
    pub title: String,
    pub origin: String,
    pub poster_url: String,
    pub description: String,
    pub cast: String,
    pub director: String,
}

impl MovieCard {
    pub fn from_record(record: &MovieRecord, poster_url: String) -> Self {
        Self {
            movie_id: record.movie_id,
            title: record.title.clone(),
            origin: record.origin.to_string(),
            poster_url,
            description: describe(record),
            cast: name_list(record.cast.as_deref()),
            director: name_list(record.crew.as_deref()),
        }
    }

    /// `{title} ({origin})`
    pub fn caption(&self) -> String {
        format!("{} ({})", self.title, self.origin)
    }
}

fn describe(record: &MovieRecord) -> String {
    record
        .overview
        .as_ref()
        .and_then(|overview| overview.to_text())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string())
}

fn name_list(names: Option<&[String]>) -> String {
    let names: Vec<String> = names
        .unwrap_or_default()
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(title_case)
        .collect();

    if names.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        names.join(", ")
    }
}

/// Upper-cases the first letter of every alphabetic run and lower-cases
/// the rest, so `"o'neil"` becomes `"O'Neil"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
