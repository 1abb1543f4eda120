use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use super::dto::{ToggleFavoriteRequest, ToggleFavoriteResponse};
use super::FavoriteEntry;
use super::services::FavoriteSet;
use crate::{auth::AuthUser, error::ApiError, state::AppState, weather::handlers::required_city};

pub fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route("/api/favorites", get(list_favorites))
        .route("/api/favorites/toggle", post(toggle_favorite))
}

#[instrument(skip(state))]
pub async fn list_favorites(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<FavoriteEntry>>, ApiError> {
    let set = FavoriteSet::load(state.favorites.as_ref(), user_id).await?;
    Ok(Json(set.into_entries()))
}

#[instrument(skip(state, body))]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<ToggleFavoriteRequest>,
) -> Result<Json<ToggleFavoriteResponse>, ApiError> {
    let city = required_city(Some(&body.city))?;
    let mut set = FavoriteSet::load(state.favorites.as_ref(), user_id).await?;
    let outcome = set
        .toggle(state.favorites.as_ref(), city, body.city_id)
        .await?;
    Ok(Json(ToggleFavoriteResponse {
        favorited: outcome.is_favorited(),
        favorites: set.into_entries(),
    }))
}
