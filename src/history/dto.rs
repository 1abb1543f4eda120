use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::repo_types::SearchHistoryEntry;
use crate::weather::WeatherSummary;

#[derive(Debug, Deserialize)]
pub struct RecordSearchRequest {
    pub city: String,
    #[serde(default)]
    pub city_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub city: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub weather: Value,
    pub summary: Option<WeatherSummary>,
    pub history: Vec<SearchHistoryEntry>,
}
