use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DASHBOARD_PATH: &str = "/account";
pub const LOGIN_PATH: &str = "/login";

/// Request body for signup.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Tokens plus where the client should go next.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: PublicUser,
    pub redirect_to: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SignoutResponse {
    pub redirect_to: &'static str,
}

/// Public part of the user returned to the client.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
}
