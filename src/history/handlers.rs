use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{instrument, warn};

use super::dto::{RecordSearchRequest, SearchRequest, SearchResponse};
use super::SearchHistoryEntry;
use super::services::{recent_cities, record_search};
use crate::{
    auth::AuthUser,
    error::ApiError,
    state::AppState,
    weather::{handlers::required_city, CityRef, CurrentWeather},
};

pub fn history_routes() -> Router<AppState> {
    Router::new()
        .route("/api/history", get(list_history).post(record_history))
        .route("/api/search", post(search))
}

#[instrument(skip(state))]
pub async fn list_history(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<SearchHistoryEntry>>, ApiError> {
    let history = recent_cities(state.history.as_ref(), user_id).await?;
    Ok(Json(history))
}

#[instrument(skip(state, body))]
pub async fn record_history(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<RecordSearchRequest>,
) -> Result<(StatusCode, Json<SearchHistoryEntry>), ApiError> {
    let city = required_city(Some(&body.city))?;
    let entry = record_search(state.history.as_ref(), user_id, city, body.city_id).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// POST /api/search { city }
/// Proxies the lookup, then bumps the city the provider resolved to.
#[instrument(skip(state, body))]
pub async fn search(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let city = required_city(Some(&body.city))?;
    let raw = state.weather.current(city).await?;

    let place = CityRef::from_payload(&raw, city);
    let summary = match CurrentWeather::from_json(&raw) {
        Ok(current) => Some(current.summary()),
        Err(e) => {
            warn!(error = %e, city = %place.name, "provider payload not summarizable");
            None
        }
    };

    record_search(state.history.as_ref(), user_id, &place.name, place.id).await?;
    let history = recent_cities(state.history.as_ref(), user_id).await?;

    Ok(Json(SearchResponse {
        weather: raw,
        summary,
        history,
    }))
}
