use axum::{extract::State, routing::get, Json, Router};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};

use super::dto::{ProfileChanges, UpdateProfileRequest};
use super::repo_types::Profile;
use crate::{
    auth::AuthUser,
    error::{conflict_or_internal, ApiError},
    state::AppState,
};

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/api/profile", get(get_profile).put(update_profile))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Profile>, ApiError> {
    let profile = Profile::find(&state.db, user_id)
        .await?
        .unwrap_or_else(|| Profile::empty(user_id));
    Ok(Json(profile))
}

#[instrument(skip(state, body))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<Profile>, ApiError> {
    let changes = ProfileChanges::try_from(body).map_err(|msg| {
        warn!(%user_id, %msg, "profile rejected");
        ApiError::BadRequest(msg)
    })?;

    let profile = Profile::upsert(&state.db, user_id, &changes, OffsetDateTime::now_utc())
        .await
        .map_err(|e| conflict_or_internal(e, "Username already taken"))?;

    info!(%user_id, "profile updated");
    Ok(Json(profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{json_request, read_json, TestState};
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;
    use uuid::Uuid;

    #[tokio::test]
    async fn short_username_is_rejected_before_write() {
        let test = TestState::with_weather_at("http://127.0.0.1:9");
        let token = test.token(Uuid::new_v4());
        let res = profile_routes()
            .with_state(test.state())
            .oneshot(json_request(
                "PUT",
                "/api/profile",
                &token,
                json!({"username": "ab", "full_name": "A B"}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(read_json(res).await["error"]
            .as_str()
            .unwrap()
            .contains("at least 3"));
    }

    #[test]
    fn empty_profile_serializes_nulls() {
        let id = Uuid::new_v4();
        let v = serde_json::to_value(Profile::empty(id)).unwrap();
        assert_eq!(v["id"], id.to_string());
        assert!(v["username"].is_null());
        assert!(v["updated_at"].is_null());
    }
}
