use anyhow::Context;
use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use super::repo_types::SearchHistoryEntry;

#[async_trait]
pub trait HistoryRepo: Send + Sync {
    /// Newest rows first, at most `limit`.
    async fn list_recent(&self, user_id: Uuid, limit: i64)
        -> anyhow::Result<Vec<SearchHistoryEntry>>;

    /// Deletes the user's rows for a city (by `city_id` when given, else by
    /// name) and inserts a fresh one. Both land or neither does.
    ///
    /// Returns the number of rows removed and the new row.
    async fn bump(
        &self,
        user_id: Uuid,
        city: &str,
        city_id: Option<i64>,
    ) -> anyhow::Result<(u64, SearchHistoryEntry)>;
}

async fn delete_city(
    conn: &mut PgConnection,
    user_id: Uuid,
    city: &str,
    city_id: Option<i64>,
) -> anyhow::Result<u64> {
    let res = match city_id {
        Some(id) => {
            sqlx::query("DELETE FROM search_history WHERE user_id = $1 AND city_id = $2")
                .bind(user_id)
                .bind(id)
                .execute(conn)
                .await
        }
        None => {
            sqlx::query("DELETE FROM search_history WHERE user_id = $1 AND city = $2")
                .bind(user_id)
                .bind(city)
                .execute(conn)
                .await
        }
    }
    .context("delete search history city")?;
    Ok(res.rows_affected())
}

async fn insert(
    conn: &mut PgConnection,
    user_id: Uuid,
    city: &str,
    city_id: Option<i64>,
) -> anyhow::Result<SearchHistoryEntry> {
    let row = sqlx::query_as::<_, SearchHistoryEntry>(
        r#"
        INSERT INTO search_history (user_id, city, city_id)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, city, city_id, created_at
        "#,
    )
    .bind(user_id)
    .bind(city)
    .bind(city_id) // Option<i64> → NULL allowed
    .fetch_one(conn)
    .await
    .context("insert search history")?;
    Ok(row)
}

#[async_trait]
impl HistoryRepo for PgPool {
    async fn list_recent(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> anyhow::Result<Vec<SearchHistoryEntry>> {
        let rows = sqlx::query_as::<_, SearchHistoryEntry>(
            r#"
            SELECT id, user_id, city, city_id, created_at
              FROM search_history
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(self)
        .await
        .context("list search history")?;
        Ok(rows)
    }

    async fn bump(
        &self,
        user_id: Uuid,
        city: &str,
        city_id: Option<i64>,
    ) -> anyhow::Result<(u64, SearchHistoryEntry)> {
        let mut tx = self.begin().await.context("begin history bump tx")?;
        let removed = delete_city(&mut tx, user_id, city, city_id).await?;
        let entry = insert(&mut tx, user_id, city, city_id).await?;
        tx.commit().await.context("commit history bump tx")?;
        Ok((removed, entry))
    }
}
