use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Row of `profiles`; `id` is the owning user's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Profile {
    /// What a user without a stored row sees.
    pub fn empty(id: Uuid) -> Self {
        Self {
            id,
            username: None,
            full_name: None,
            avatar_url: None,
            updated_at: None,
        }
    }
}
