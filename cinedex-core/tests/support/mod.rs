//! Local stand-in for the TMDB v3 API.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use cinedex_config::TmdbConfig;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const API_KEY: &str = "test-key";
pub const PAGE_SIZE: u64 = 20;

#[derive(Debug, Clone, Default)]
pub struct Upstream {
    /// Listing pages with content; later pages come back empty.
    pub total_pages: u64,
    pub failing_pages: Vec<u64>,
    pub rate_limited: bool,
    pub malformed: bool,
}

#[derive(Clone)]
struct MockState {
    upstream: Upstream,
    log: Arc<Mutex<Vec<RequestRecord>>>,
}

#[derive(Debug, Clone)]
pub struct RequestRecord {
    pub path: String,
    pub query: HashMap<String, String>,
}

#[derive(Debug)]
pub struct MockTmdb {
    pub base_url: String,
    log: Arc<Mutex<Vec<RequestRecord>>>,
}

impl MockTmdb {
    pub fn config(&self) -> TmdbConfig {
        TmdbConfig::with_api_key(API_KEY)
            .with_api_base(format!("{}/3", self.base_url))
            .without_system_proxy()
    }

    pub fn requests(&self) -> Vec<RequestRecord> {
        self.log.lock().expect("request log").clone()
    }

    pub fn listing_pages_requested(&self) -> Vec<u64> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == "/3/movie/top_rated")
            .filter_map(|r| r.query.get("page").and_then(|p| p.parse().ok()))
            .collect()
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub async fn spawn_tmdb(upstream: Upstream) -> Result<MockTmdb> {
    init_tracing();
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let log = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        upstream,
        log: log.clone(),
    };
    let app = Router::new()
        .route("/3/movie/top_rated", get(top_rated))
        .route("/3/movie/{id}", get(movie_detail))
        .route("/3/genre/movie/list", get(genres))
        .route("/3/discover/movie", get(discover))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(MockTmdb {
        base_url: format!("http://{addr}"),
        log,
    })
}

/// Genre ids cycle so filters have something to bite on: every movie is a
/// drama (18), every other one also a crime film (80).
pub fn genre_ids_for(id: u64) -> Vec<u64> {
    if id % 2 == 0 { vec![18, 80] } else { vec![18] }
}

fn summary_json(id: u64) -> Value {
    let poster = if id % 3 == 0 {
        Value::Null
    } else {
        json!(format!("/p{id}.jpg"))
    };
    let release_date = if id % 5 == 0 { "" } else { "1999-03-31" };
    json!({
        "id": id,
        "title": format!("Movie {id}"),
        "overview": "",
        "poster_path": poster,
        "release_date": release_date,
        "vote_average": 9.0 - (id as f64) / 100.0,
        "vote_count": 1000 + id,
        "popularity": id as f64 * 1.5,
        "genre_ids": genre_ids_for(id),
        "adult": false,
        "original_language": "en",
    })
}

fn record(state: &MockState, path: &str, query: &HashMap<String, String>) {
    state.log.lock().expect("request log").push(RequestRecord {
        path: path.to_string(),
        query: query.clone(),
    });
}

fn guard(state: &MockState, query: &HashMap<String, String>) -> Option<Response> {
    if query.get("api_key").map(String::as_str) != Some(API_KEY) {
        return Some(
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "status_code": 7,
                    "status_message": "Invalid API key: You must be granted a valid key.",
                    "success": false,
                })),
            )
                .into_response(),
        );
    }
    if state.upstream.rate_limited {
        return Some(
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({ "status_code": 25, "status_message": "Slow down" })),
            )
                .into_response(),
        );
    }
    None
}

fn listing(page: u64, results: Vec<Value>, total_pages: u64) -> Response {
    Json(json!({
        "page": page,
        "results": results,
        "total_pages": total_pages,
        "total_results": total_pages * PAGE_SIZE,
    }))
    .into_response()
}

async fn top_rated(
    State(state): State<MockState>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    record(&state, "/3/movie/top_rated", &query);
    if let Some(rejection) = guard(&state, &query) {
        return rejection;
    }
    if state.upstream.malformed {
        return (StatusCode::OK, "{\"results\": [").into_response();
    }

    let page: u64 = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    if state.upstream.failing_pages.contains(&page) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "status_message": "Internal error" })),
        )
            .into_response();
    }

    let results = if page <= state.upstream.total_pages {
        let first = (page - 1) * PAGE_SIZE + 1;
        (first..first + PAGE_SIZE).map(summary_json).collect()
    } else {
        Vec::new()
    };
    listing(page, results, state.upstream.total_pages)
}

async fn movie_detail(
    State(state): State<MockState>,
    Path(id): Path<u64>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    record(&state, &format!("/3/movie/{id}"), &query);
    if let Some(rejection) = guard(&state, &query) {
        return rejection;
    }
    if id > state.upstream.total_pages * PAGE_SIZE {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({
                "status_code": 34,
                "status_message": "The resource you requested could not be found.",
            })),
        )
            .into_response();
    }

    let mut detail = summary_json(id);
    if let Some(fields) = detail.as_object_mut() {
        fields.remove("genre_ids");
        fields.insert("runtime".into(), json!(90 + id));
        fields.insert("tagline".into(), json!("Tagline"));
        fields.insert("revenue".into(), json!(1_000_000 * id));
        fields.insert("budget".into(), json!(500_000));
        fields.insert(
            "genres".into(),
            json!(
                genre_ids_for(id)
                    .into_iter()
                    .map(|g| json!({ "id": g, "name": genre_name(g) }))
                    .collect::<Vec<_>>()
            ),
        );
    }
    Json(detail).into_response()
}

fn genre_name(id: u64) -> &'static str {
    match id {
        18 => "Drama",
        80 => "Crime",
        _ => "Other",
    }
}

async fn genres(
    State(state): State<MockState>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    record(&state, "/3/genre/movie/list", &query);
    if let Some(rejection) = guard(&state, &query) {
        return rejection;
    }
    Json(json!({
        "genres": [
            { "id": 18, "name": "Drama" },
            { "id": 80, "name": "Crime" },
            { "id": 10752, "name": "War" },
        ]
    }))
    .into_response()
}

async fn discover(
    State(state): State<MockState>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    record(&state, "/3/discover/movie", &query);
    if let Some(rejection) = guard(&state, &query) {
        return rejection;
    }
    let genre: u64 = query
        .get("with_genres")
        .and_then(|g| g.parse().ok())
        .unwrap_or_default();
    let results = (1..=PAGE_SIZE)
        .filter(|id| genre_ids_for(*id).contains(&genre))
        .map(summary_json)
        .collect();
    listing(1, results, 1)
}
