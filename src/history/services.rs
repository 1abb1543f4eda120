use tracing::{debug, info};
use uuid::Uuid;

use super::repo::HistoryRepo;
use super::repo_types::SearchHistoryEntry;

/// Rows fetched from storage before dedup. Every call site uses this window.
pub const HISTORY_FETCH_WINDOW: i64 = 20;
/// Entries returned after dedup.
pub const HISTORY_DISPLAY_CAP: usize = 10;

/// Ids win when both rows carry one; otherwise names are compared exactly.
pub fn same_city(a: &SearchHistoryEntry, b: &SearchHistoryEntry) -> bool {
    match (a.city_id, b.city_id) {
        (Some(x), Some(y)) => x == y,
        _ => a.city == b.city,
    }
}

/// Keeps the first (most recent) row per city, in input order, capped to `cap`.
pub fn dedupe_recent(rows: Vec<SearchHistoryEntry>, cap: usize) -> Vec<SearchHistoryEntry> {
    let mut out: Vec<SearchHistoryEntry> = Vec::with_capacity(cap.min(rows.len()));
    for row in rows {
        if !out.iter().any(|kept| same_city(kept, &row)) {
            out.push(row);
        }
    }
    out.truncate(cap);
    out
}

pub async fn recent_cities<R: HistoryRepo + ?Sized>(
    repo: &R,
    user_id: Uuid,
) -> anyhow::Result<Vec<SearchHistoryEntry>> {
    let rows = repo.list_recent(user_id, HISTORY_FETCH_WINDOW).await?;
    let fetched = rows.len();
    let out = dedupe_recent(rows, HISTORY_DISPLAY_CAP);
    debug!(%user_id, fetched, kept = out.len(), "history deduplicated");
    Ok(out)
}

/// Moves `city` to the top of the user's history: delete, then insert fresh.
pub async fn record_search<R: HistoryRepo + ?Sized>(
    repo: &R,
    user_id: Uuid,
    city: &str,
    city_id: Option<i64>,
) -> anyhow::Result<SearchHistoryEntry> {
    let (removed, entry) = repo.bump(user_id, city, city_id).await?;
    info!(%user_id, city, ?city_id, removed, "search recorded");
    Ok(entry)
}
