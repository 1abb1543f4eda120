use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::dto::CreateMemoRequest;
use super::repo_types::Memo;
use crate::{auth::AuthUser, error::ApiError, state::AppState};

pub fn memo_routes() -> Router<AppState> {
    Router::new()
        .route("/api/memos", get(list_memos).post(create_memo))
        .route("/api/memos/:id", delete(delete_memo))
}

#[instrument(skip(state))]
pub async fn list_memos(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Memo>>, ApiError> {
    Ok(Json(Memo::list_by_user(&state.db, user_id).await?))
}

#[instrument(skip(state, body))]
pub async fn create_memo(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<CreateMemoRequest>,
) -> Result<(StatusCode, Json<Memo>), ApiError> {
    let content = body
        .content()
        .ok_or_else(|| ApiError::BadRequest("Memo content is required".into()))?;
    let memo = Memo::create(&state.db, user_id, content).await?;
    info!(%user_id, memo_id = memo.id, "memo created");
    Ok((StatusCode::CREATED, Json(memo)))
}

#[instrument(skip(state))]
pub async fn delete_memo(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !Memo::delete(&state.db, user_id, id).await? {
        warn!(%user_id, id, "memo not found");
        return Err(ApiError::NotFound("Memo not found".into()));
    }
    info!(%user_id, id, "memo deleted");
    Ok(StatusCode::NO_CONTENT)
}
