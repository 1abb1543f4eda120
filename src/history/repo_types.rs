use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Row of `search_history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SearchHistoryEntry {
    pub id: i64,
    pub user_id: Uuid,
    pub city: String,
    pub city_id: Option<i64>, // absent on rows recorded before ids were kept
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
