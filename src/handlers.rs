use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dictionary::PREVIEW_LEN;
use crate::index::WordMap;
use crate::rank::{DEFAULT_TOP_N, RankedWord, top_frequent};
use crate::stats::WordStats;
use crate::text::reconstruct;

#[derive(Clone)]
pub struct AppState {
    pub stats: Arc<WordStats>,
}

#[derive(Deserialize)]
pub struct DictionaryQuery {
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct WordsQuery {
    pub set: String,
}

#[derive(Deserialize)]
pub struct TopQuery {
    pub set: String,
    pub n: Option<usize>,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    dictionary_words: usize,
    known_words: usize,
    unknown_words: usize,
    tokens: usize,
}

#[derive(Serialize)]
pub struct WordRow<'a> {
    word: &'a str,
    count: usize,
    positions: &'a [usize],
}

#[derive(Serialize)]
pub struct TopResponse<'a> {
    set: &'a str,
    requested: usize,
    items: Vec<RankedWord<'a>>,
}

#[derive(Serialize)]
pub struct TextResponse<'a> {
    words: Vec<&'a str>,
    text: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/v1/summary", get(summary))
        .route("/v1/dictionary", get(dictionary))
        .route("/v1/words", get(words))
        .route("/v1/top", get(top))
        .route("/v1/text", get(text))
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    "ok"
}

async fn summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    let maps = state.stats.maps();
    Json(SummaryResponse {
        dictionary_words: state.stats.dictionary().len(),
        known_words: maps.known().len(),
        unknown_words: maps.unknown().len(),
        tokens: maps.token_count(),
    })
}

async fn dictionary(
    State(state): State<AppState>,
    Query(params): Query<DictionaryQuery>,
) -> Response {
    let limit = params.limit.unwrap_or(PREVIEW_LEN);
    Json(state.stats.dictionary().preview(limit)).into_response()
}

async fn words(
    State(state): State<AppState>,
    Query(params): Query<WordsQuery>,
) -> Result<Response, ApiError> {
    let map = select_map(&state.stats, &params.set)?;
    let rows: Vec<WordRow<'_>> = map
        .iter()
        .map(|(word, positions)| WordRow {
            word,
            count: positions.len(),
            positions,
        })
        .collect();
    Ok(Json(rows).into_response())
}

async fn top(
    State(state): State<AppState>,
    Query(params): Query<TopQuery>,
) -> Result<Response, ApiError> {
    let n = params.n.unwrap_or(DEFAULT_TOP_N);
    if n == 0 {
        return Err(ApiError::bad_request("n must be >= 1"));
    }
    let map = select_map(&state.stats, &params.set)?;
    let response = TopResponse {
        set: &params.set,
        requested: n,
        items: top_frequent(map, n),
    };
    Ok(Json(response).into_response())
}

async fn text(State(state): State<AppState>) -> Response {
    let maps = state.stats.maps();
    let words = reconstruct(maps.known(), maps.unknown());
    let text = words.join(" ");
    Json(TextResponse { words, text }).into_response()
}

fn select_map<'a>(stats: &'a WordStats, set: &str) -> Result<&'a WordMap, ApiError> {
    match set {
        "known" => Ok(stats.maps().known()),
        "unknown" => Ok(stats.maps().unknown()),
        other => Err(ApiError::bad_request(format!(
            "set must be `known` or `unknown`, got `{other}`"
        ))),
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    fn bad_request<T: Into<String>>(msg: T) -> Self {
        ApiError::BadRequest(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                let body = Json(ErrorResponse { error: msg });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}
