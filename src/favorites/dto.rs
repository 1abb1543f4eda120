use serde::{Deserialize, Serialize};

use super::repo_types::FavoriteEntry;

#[derive(Debug, Deserialize)]
pub struct ToggleFavoriteRequest {
    pub city: String,
    #[serde(default)]
    pub city_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ToggleFavoriteResponse {
    pub favorited: bool,
    pub favorites: Vec<FavoriteEntry>,
}
