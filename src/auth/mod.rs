use crate::state::AppState;
use axum::Router;

mod claims;
pub mod credentials;
pub mod dto;
pub mod handlers;
pub mod jwt;
pub mod repo;
pub mod repo_types;

pub use jwt::{AuthUser, JwtKeys};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::auth_routes())
        .merge(handlers::me_routes())
}
