//! End-to-end tests for the web front-end.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`; no
//! socket is opened and posters fall back to placeholders.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use data_loader::{Catalog, MovieRecord, Origin, SimilarityMatrix};
use poster_client::{DisabledLookup, PosterResolver, PosterSettings};
use server::web::{create_router, AppState};
use server::MovieBrowser;

fn create_test_app() -> Router {
    let movies = vec![
        MovieRecord::new(19995, "Avatar", Origin::Hollywood).with_tags("action adventure scifi"),
        MovieRecord::new(1, "Dilwale Dulhania Le Jayenge", Origin::Bollywood)
            .with_tags("romance drama family")
            .with_poster_url("https://posters.example/ddlj.jpg"),
        MovieRecord::new(285, "Pirates of the Caribbean", Origin::Hollywood)
            .with_tags("action adventure"),
        MovieRecord::new(2, "Sholay", Origin::Bollywood).with_tags("action drama"),
    ];
    let matrix = SimilarityMatrix::from_rows(vec![
        vec![1.0, 0.1, 0.8, 0.3],
        vec![0.1, 1.0, 0.2, 0.6],
        vec![0.8, 0.2, 1.0, 0.4],
        vec![0.3, 0.6, 0.4, 1.0],
    ])
    .unwrap();
    create_app(Arc::new(Catalog::from_parts(movies, matrix).unwrap()))
}

fn create_app(catalog: Arc<Catalog>) -> Router {
    let settings = PosterSettings::new(
        "https://image.tmdb.org/t/p/w500",
        "https://via.placeholder.com/500x750.png",
    )
    .unwrap();
    let posters = PosterResolver::new(Arc::new(DisabledLookup), settings);

    create_router(AppState::new(MovieBrowser::new(catalog, posters)))
}

async fn get(uri: &str) -> (StatusCode, String) {
    get_from(create_test_app(), uri).await
}

async fn get_from(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

fn result_titles(body: &Value) -> Vec<&str> {
    body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|card| card["title"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["movies"], 4);
}

#[tokio::test]
async fn test_recommend_api() {
    let (status, body) = get_json("/api/recommend?title=Avatar").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["origin"], "All");
    assert_eq!(
        result_titles(&body),
        vec!["Pirates of the Caribbean", "Sholay", "Dilwale Dulhania Le Jayenge"]
    );

    let first = &body["results"][0];
    assert_eq!(
        first["poster_url"],
        "https://via.placeholder.com/500x750.png?text=Pirates+of+the+Caribbean"
    );
    assert_eq!(first["description"], "No description available.");
    assert_eq!(first["cast"], "Not available");
}

#[tokio::test]
async fn test_recommend_api_with_origin() {
    let (_, body) = get_json("/api/recommend?title=Avatar&origin=bollywood").await;

    assert_eq!(result_titles(&body), vec!["Sholay", "Dilwale Dulhania Le Jayenge"]);
    assert_eq!(body["results"][1]["poster_url"], "https://posters.example/ddlj.jpg");
}

#[tokio::test]
async fn test_recommend_unknown_title_is_empty() {
    let (status, body) = get_json("/api/recommend?title=Nope").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_recommend_requires_title() {
    let (status, body) = get_json("/api/recommend?title=%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn test_browse_api() {
    let (status, body) = get_json("/api/browse?genre=Action&origin=Hollywood").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result_titles(&body), vec!["Avatar", "Pirates of the Caribbean"]);

    let (status, _) = get_json("/api/browse").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_titles_and_genres() {
    let (_, titles) = get_json("/api/titles?q=a&limit=2").await;
    assert_eq!(titles.as_array().unwrap().len(), 2);

    let (_, genres) = get_json("/api/genres").await;
    assert_eq!(genres.as_array().unwrap().len(), 8);
    assert_eq!(genres[0], "Action");
}

#[tokio::test]
async fn test_index_page() {
    let (status, html) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("MojFlix"));
    assert!(html.contains("<option value=\"Avatar\">"));
    assert!(!html.contains("More Info"));
}

#[tokio::test]
async fn test_index_page_with_results() {
    let (_, html) = get("/?tab=movie&title=Avatar&origin=All").await;
    assert_eq!(html.matches("<summary>More Info</summary>").count(), 3);
    assert!(html.contains("Sholay (Bollywood)"));

    let (_, html) = get("/?tab=genre&genre=Comedy").await;
    assert!(html.contains("No Comedy movies found."));

    let (_, html) = get("/?tab=movie&title=Unknown").await;
    assert!(html.contains("No recommendations found."));
}

#[tokio::test]
async fn test_recommend_keeps_title_whitespace() {
    let movies = vec![
        MovieRecord::new(7, "Dhoom ", Origin::Bollywood),
        MovieRecord::new(8, "Other", Origin::Hollywood),
    ];
    let matrix = SimilarityMatrix::from_rows(vec![vec![1.0, 0.4], vec![0.4, 1.0]]).unwrap();
    let catalog = Arc::new(Catalog::from_parts(movies, matrix).unwrap());

    let (status, body) = get_from(create_app(catalog.clone()), "/api/recommend?title=Dhoom%20").await;
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], "Dhoom ");
    assert_eq!(result_titles(&body), vec!["Other"]);

    let (_, html) = get_from(create_app(catalog), "/?tab=movie&title=Dhoom%20").await;
    assert!(html.contains("Other (Hollywood)"));
}
