use tracing::info;
use uuid::Uuid;

use super::repo::FavoriteRepo;
use super::repo_types::FavoriteEntry;

#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    Added(FavoriteEntry),
    Removed(FavoriteEntry),
}

impl ToggleOutcome {
    pub fn is_favorited(&self) -> bool {
        matches!(self, Self::Added(_))
    }
}

/// Local copy of one user's favorites, newest first.
///
/// Loaded fresh for each request and changed only after the matching write
/// has succeeded, so it never runs ahead of the store.
#[derive(Debug, Clone, Default)]
pub struct FavoriteSet {
    user_id: Uuid,
    entries: Vec<FavoriteEntry>,
}

impl FavoriteSet {
    pub async fn load<R: FavoriteRepo + ?Sized>(repo: &R, user_id: Uuid) -> anyhow::Result<Self> {
        Ok(Self {
            user_id,
            entries: repo.list(user_id).await?,
        })
    }

    /// Favorites are matched on city name alone.
    fn position(&self, city: &str) -> Option<usize> {
        self.entries.iter().position(|f| f.city == city)
    }

    #[cfg(test)]
    pub fn contains(&self, city: &str) -> bool {
        self.position(city).is_some()
    }

    pub fn into_entries(self) -> Vec<FavoriteEntry> {
        self.entries
    }

    /// Deletes the city's row if present, inserts one otherwise.
    pub async fn toggle<R: FavoriteRepo + ?Sized>(
        &mut self,
        repo: &R,
        city: &str,
        city_id: Option<i64>,
    ) -> anyhow::Result<ToggleOutcome> {
        if let Some(pos) = self.position(city) {
            let id = self.entries[pos].id;
            repo.delete(self.user_id, id).await?;
            let removed = self.entries.remove(pos);
            info!(user_id = %self.user_id, city, id, "favorite removed");
            return Ok(ToggleOutcome::Removed(removed));
        }

        let added = repo.insert(self.user_id, city, city_id).await?;
        self.entries.insert(0, added.clone());
        info!(user_id = %self.user_id, city, id = added.id, "favorite added");
        Ok(ToggleOutcome::Added(added))
    }
}
