use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tracing::{instrument, warn};

use crate::{
    auth::{dto::PublicUser, repo_types::User, AuthUser},
    error::ApiError,
    memos::repo_types::Memo,
    profiles::repo_types::Profile,
    state::AppState,
};

/// Everything the account dashboard renders in one payload.
#[derive(Debug, Serialize)]
pub struct AccountOverview {
    pub user: PublicUser,
    pub profile: Profile,
    pub memos: Vec<Memo>,
}

pub fn account_routes() -> Router<AppState> {
    Router::new().route("/api/account", get(get_account))
}

#[instrument(skip(state))]
pub async fn get_account(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<AccountOverview>, ApiError> {
    let user = User::find_by_id(&state.db, user_id).await?.ok_or_else(|| {
        warn!(%user_id, "account for unknown user");
        ApiError::Unauthorized("User not found".into())
    })?;
    let profile = Profile::find(&state.db, user_id)
        .await?
        .unwrap_or_else(|| Profile::empty(user_id));
    let memos = Memo::list_by_user(&state.db, user_id).await?;

    Ok(Json(AccountOverview {
        user: PublicUser {
            id: user.id,
            email: user.email,
        },
        profile,
        memos,
    }))
}
