use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use data_loader::OriginFilter;
use pipeline::GENRES;

use crate::card::MovieCard;

use super::page::{self, PageView, Tab};
use super::{AppState, WebError, WebResult};

/// Default and maximum sizes for `/api/titles`
const DEFAULT_TITLE_LIMIT: usize = 20;
const MAX_TITLE_LIMIT: usize = 100;

// Request/Response types

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub tab: Option<String>,
    pub title: Option<String>,
    pub genre: Option<String>,
    #[serde(default)]
    pub origin: OriginFilter,
}

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub title: Option<String>,
    #[serde(default)]
    pub origin: OriginFilter,
}

#[derive(Debug, Deserialize)]
pub struct BrowseQuery {
    pub genre: Option<String>,
    #[serde(default)]
    pub origin: OriginFilter,
}

#[derive(Debug, Deserialize)]
pub struct TitlesQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CardsResponse {
    pub query: String,
    pub origin: String,
    pub count: usize,
    pub results: Vec<MovieCard>,
}

impl CardsResponse {
    fn new(query: String, origin: &OriginFilter, results: Vec<MovieCard>) -> Self {
        Self {
            query,
            origin: origin.label().to_string(),
            count: results.len(),
            results,
        }
    }
}

/// Rejects missing or blank values. The value itself is returned as sent,
/// since titles are matched exactly.
fn required(value: Option<String>, name: &str) -> WebResult<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| WebError::InvalidInput(format!("'{}' is required", name)))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// Handlers

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let (movies, dim) = state.browser.catalog().counts();
    Json(json!({
        "status": "ok",
        "movies": movies,
        "similarity_dim": dim,
    }))
}

/// The browser page. A submitted form re-renders the page with results.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> WebResult<Html<String>> {
    let browser = &state.browser;
    let tab = Tab::from_param(query.tab.as_deref());

    let mut view = PageView {
        tab,
        title: non_blank(query.title),
        genre: non_blank(query.genre).map(|g| g.trim().to_string()),
        origin: query.origin.clone(),
        titles: browser.titles().collect(),
        results: None,
    };

    match tab {
        Tab::Movie => {
            if let Some(title) = view.title.as_deref() {
                view.results = Some(browser.recommend(title, &view.origin).await?);
            }
        }
        Tab::Genre => {
            if let Some(genre) = view.genre.as_deref() {
                view.results = Some(browser.browse(genre, &view.origin).await?);
            }
        }
    }

    Ok(Html(page::render(&view)))
}

pub async fn recommend(
    State(state): State<AppState>,
    Query(query): Query<RecommendQuery>,
) -> WebResult<Json<CardsResponse>> {
    let title = required(query.title, "title")?;
    let results = state.browser.recommend(&title, &query.origin).await?;
    Ok(Json(CardsResponse::new(title, &query.origin, results)))
}

pub async fn browse(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> WebResult<Json<CardsResponse>> {
    let genre = required(query.genre, "genre")?.trim().to_string();
    let results = state.browser.browse(&genre, &query.origin).await?;
    Ok(Json(CardsResponse::new(genre, &query.origin, results)))
}

pub async fn titles(
    State(state): State<AppState>,
    Query(query): Query<TitlesQuery>,
) -> Json<Vec<String>> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_TITLE_LIMIT)
        .min(MAX_TITLE_LIMIT);
    Json(state.browser.search_titles(&query.q, limit))
}

pub async fn genres() -> Json<Vec<&'static str>> {
    Json(GENRES.to_vec())
}
