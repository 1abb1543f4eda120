mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub use repo::FavoriteRepo;
pub use repo_types::FavoriteEntry;

pub fn router() -> Router<AppState> {
    handlers::favorite_routes()
}
