use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::Memo;

impl Memo {
    /// The user's memos, newest first.
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Memo>> {
        let rows = sqlx::query_as::<_, Memo>(
            r#"
            SELECT id, user_id, content, created_at
              FROM memos
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
        .context("list memos")?;
        Ok(rows)
    }

    pub async fn create(db: &PgPool, user_id: Uuid, content: &str) -> anyhow::Result<Memo> {
        let row = sqlx::query_as::<_, Memo>(
            r#"
            INSERT INTO memos (user_id, content)
            VALUES ($1, $2)
            RETURNING id, user_id, content, created_at
            "#,
        )
        .bind(user_id)
        .bind(content)
        .fetch_one(db)
        .await
        .context("insert memo")?;
        Ok(row)
    }

    /// Returns false when the user owns no memo with this id.
    pub async fn delete(db: &PgPool, user_id: Uuid, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM memos WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await
            .context("delete memo")?;
        Ok(res.rows_affected() > 0)
    }
}
