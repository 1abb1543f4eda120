use anyhow::Context;
use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        credentials::{hash_password, normalize_email, password_long_enough, verify_password},
        dto::{
            AuthResponse, LoginRequest, PublicUser, RefreshRequest, RegisterRequest,
            SignoutResponse, DASHBOARD_PATH, LOGIN_PATH,
        },
        AuthUser, JwtKeys,
        repo_types::User,
    },
    error::{conflict_or_internal, ApiError},
    profiles::repo_types::Profile,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
        .route("/auth/signout", post(signout))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

fn issue_tokens(state: &AppState, user: User) -> Result<AuthResponse, ApiError> {
    let keys = JwtKeys::from_ref(state);
    Ok(AuthResponse {
        access_token: keys.sign_access(user.id)?,
        refresh_token: keys.sign_refresh(user.id)?,
        user: PublicUser {
            id: user.id,
            email: user.email,
        },
        redirect_to: DASHBOARD_PATH,
    })
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let Some(email) = normalize_email(&payload.email) else {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::BadRequest("Invalid email".into()));
    };

    if !password_long_enough(&payload.password) {
        warn!("password too short");
        return Err(ApiError::BadRequest("Password too short".into()));
    }

    if User::find_by_email(&state.db, &email).await?.is_some() {
        warn!(%email, "email already registered");
        return Err(ApiError::Conflict("Email already registered".into()));
    }

    let hash = hash_password(&payload.password)?;

    // The user row and its empty profile land together or not at all.
    let mut tx = state.db.begin().await.context("begin signup tx")?;
    let user = User::create_tx(&mut tx, &email, &hash)
        .await
        .map_err(|e| conflict_or_internal(e, "Email already registered"))?;
    Profile::create_empty_tx(&mut tx, user.id).await?;
    tx.commit().await.context("commit signup tx")?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((StatusCode::CREATED, Json(issue_tokens(&state, user)?)))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Some(email) = normalize_email(&payload.email) else {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::BadRequest("Invalid email".into()));
    };

    let Some(user) = User::find_by_email(&state.db, &email).await? else {
        warn!(%email, "login unknown email");
        return Err(ApiError::Unauthorized("Invalid credentials".into()));
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(%email, user_id = %user.id, "login invalid password");
        return Err(ApiError::Unauthorized("Invalid credentials".into()));
    }

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(issue_tokens(&state, user)?))
}

#[instrument(skip(state, payload))]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let keys = JwtKeys::from_ref(&state);
    let claims = keys
        .verify_refresh(&payload.refresh_token)
        .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

    let user = User::find_by_id(&state.db, claims.sub)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("User not found".into()))?;

    Ok(Json(issue_tokens(&state, user)?))
}

/// Tokens are stateless; signing out is the client dropping them.
#[instrument]
pub async fn signout(AuthUser(user_id): AuthUser) -> Json<SignoutResponse> {
    info!(%user_id, "user signed out");
    Json(SignoutResponse {
        redirect_to: LOGIN_PATH,
    })
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<PublicUser>, ApiError> {
    let user = User::find_by_id(&state.db, user_id).await?.ok_or_else(|| {
        warn!(%user_id, "user not found");
        ApiError::Unauthorized("User not found".into())
    })?;

    Ok(Json(PublicUser {
        id: user.id,
        email: user.email,
    }))
}
