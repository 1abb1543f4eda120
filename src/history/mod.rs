mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub use repo::HistoryRepo;
pub use repo_types::SearchHistoryEntry;

pub fn router() -> Router<AppState> {
    handlers::history_routes()
}
