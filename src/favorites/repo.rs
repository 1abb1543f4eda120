use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::FavoriteEntry;

#[async_trait]
pub trait FavoriteRepo: Send + Sync {
    async fn list(&self, user_id: Uuid) -> anyhow::Result<Vec<FavoriteEntry>>;

    async fn insert(
        &self,
        user_id: Uuid,
        city: &str,
        city_id: Option<i64>,
    ) -> anyhow::Result<FavoriteEntry>;

    async fn delete(&self, user_id: Uuid, id: i64) -> anyhow::Result<u64>;
}

#[async_trait]
impl FavoriteRepo for PgPool {
    async fn list(&self, user_id: Uuid) -> anyhow::Result<Vec<FavoriteEntry>> {
        let rows = sqlx::query_as::<_, FavoriteEntry>(
            r#"
            SELECT id, user_id, city, city_id, created_at
              FROM favorites
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self)
        .await
        .context("list favorites")?;
        Ok(rows)
    }

    async fn insert(
        &self,
        user_id: Uuid,
        city: &str,
        city_id: Option<i64>,
    ) -> anyhow::Result<FavoriteEntry> {
        let row = sqlx::query_as::<_, FavoriteEntry>(
            r#"
            INSERT INTO favorites (user_id, city, city_id)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, city, city_id, created_at
            "#,
        )
        .bind(user_id)
        .bind(city)
        .bind(city_id)
        .fetch_one(self)
        .await
        .context("insert favorite")?;
        Ok(row)
    }

    async fn delete(&self, user_id: Uuid, id: i64) -> anyhow::Result<u64> {
        let res = sqlx::query("DELETE FROM favorites WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(self)
            .await
            .context("delete favorite")?;
        Ok(res.rows_affected())
    }
}
