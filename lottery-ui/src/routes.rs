//! HTTP routes: the form page and its JSON API.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::{get, post};
use lottery::document::PreferenceDocument;
use lottery::error::LotteryError;
use lottery::select::{Selection, select_one};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

use crate::sse;
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .nest("/api", api_router())
        .route("/events", get(sse::events_handler))
        .layer(cors)
        .with_state(state)
}

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/people", get(get_people))
        .route("/preferences", get(get_preferences))
        .route("/draw", post(draw))
        .route("/refresh", post(refresh))
}

/// Error body returned as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<LotteryError> for ApiError {
    fn from(err: LotteryError) -> Self {
        let status = match err {
            LotteryError::EmptyPool { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            LotteryError::NotFound { .. }
            | LotteryError::InvalidFormat { .. }
            | LotteryError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Serialize)]
struct PeopleResponse {
    people: Vec<String>,
}

/// GET /api/people - configured names in file order.
async fn get_people(State(state): State<AppState>) -> Json<PeopleResponse> {
    let session = state.session.lock().await;
    Json(PeopleResponse {
        people: session.store.people(),
    })
}

#[derive(Serialize)]
struct PersonEntry {
    name: String,
    food_preferences: Vec<String>,
}

#[derive(Serialize)]
struct PreferencesResponse {
    people: Vec<PersonEntry>,
    all_food_options: Vec<String>,
}

impl From<&PreferenceDocument> for PreferencesResponse {
    fn from(document: &PreferenceDocument) -> Self {
        Self {
            people: document
                .people
                .iter()
                .map(|(name, record)| PersonEntry {
                    name: name.clone(),
                    food_preferences: record.food_preferences.clone(),
                })
                .collect(),
            all_food_options: document.all_food_options().into_iter().collect(),
        }
    }
}

/// GET /api/preferences - every person's list plus the combined options.
async fn get_preferences(State(state): State<AppState>) -> Json<PreferencesResponse> {
    let session = state.session.lock().await;
    Json(PreferencesResponse::from(session.store.document()))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DrawRequest {
    person: Option<String>,
}

/// POST /api/draw - draw from one person (`{"person": ".."}`) or everyone (`{}`).
async fn draw(
    State(state): State<AppState>,
    Json(request): Json<DrawRequest>,
) -> Result<Json<Selection>, ApiError> {
    let mut session = state.session.lock().await;
    let session = &mut *session;
    let selection = select_one(
        session.store.document(),
        request.person.as_deref(),
        &mut session.rng,
    )?;
    debug!(food = %selection.food, "draw served");
    Ok(Json(selection))
}

/// POST /api/refresh - reload the preferences file.
async fn refresh(State(state): State<AppState>) -> Result<Json<PreferencesResponse>, ApiError> {
    state.refresh().await?;
    let session = state.session.lock().await;
    Ok(Json(PreferencesResponse::from(session.store.document())))
}
