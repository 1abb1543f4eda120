use anyhow::Context;
use sqlx::{PgPool, Postgres, Transaction};
use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::ProfileChanges;
use super::repo_types::Profile;

impl Profile {
    pub async fn find(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<Profile>> {
        let row = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, username, full_name, avatar_url, updated_at
              FROM profiles
             WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await
        .context("find profile")?;
        Ok(row)
    }

    /// Inserts the blank row every new account starts with.
    pub async fn create_empty_tx(
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
    ) -> anyhow::Result<()> {
        sqlx::query("INSERT INTO profiles (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
            .bind(user_id)
            .execute(&mut **tx)
            .await
            .context("insert empty profile")?;
        Ok(())
    }

    /// Writes the touched columns; columns the update keeps are left as stored.
    pub async fn upsert(
        db: &PgPool,
        user_id: Uuid,
        changes: &ProfileChanges,
        now: OffsetDateTime,
    ) -> anyhow::Result<Profile> {
        let row = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (id, username, full_name, avatar_url, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
               SET username   = CASE WHEN $6 THEN EXCLUDED.username ELSE profiles.username END,
                   full_name  = CASE WHEN $7 THEN EXCLUDED.full_name ELSE profiles.full_name END,
                   avatar_url = CASE WHEN $8 THEN EXCLUDED.avatar_url ELSE profiles.avatar_url END,
                   updated_at = EXCLUDED.updated_at
            RETURNING id, username, full_name, avatar_url, updated_at
            "#,
        )
        .bind(user_id)
        .bind(changes.username.value())
        .bind(changes.full_name.value())
        .bind(changes.avatar_url.value())
        .bind(now)
        .bind(changes.username.touches())
        .bind(changes.full_name.touches())
        .bind(changes.avatar_url.touches())
        .fetch_one(db)
        .await
        .context("upsert profile")?;
        Ok(row)
    }
}
