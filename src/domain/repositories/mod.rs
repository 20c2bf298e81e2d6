use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::models::{MatchRecord, MessageDraft};

#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// The next match on or after `today`, ascending by date, at most one.
    async fn next_upcoming(&self, today: NaiveDate) -> anyhow::Result<Option<MatchRecord>>;
}

#[async_trait]
pub trait DraftRepository: Send + Sync {
    /// Insert a draft, merging into the existing row on a
    /// (match_id, audience) conflict instead of erroring.
    async fn upsert(&self, draft: MessageDraft) -> anyhow::Result<()>;
}
