use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    models::{Audience, MatchRecord, MessageDraft},
    repositories::{DraftRepository, MatchRepository},
};

#[derive(Default)]
pub struct InMemoryMatchRepository {
    matches: Arc<RwLock<Vec<MatchRecord>>>,
}

impl InMemoryMatchRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: MatchRecord) {
        let mut matches = self.matches.write().await;
        matches.push(record);
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    async fn next_upcoming(&self, today: NaiveDate) -> anyhow::Result<Option<MatchRecord>> {
        let matches = self.matches.read().await;
        let mut upcoming: Vec<_> = matches
            .iter()
            .filter(|m| m.match_date >= today)
            .cloned()
            .collect();
        upcoming.sort_by_key(|m| m.match_date);
        Ok(upcoming.into_iter().next())
    }
}

#[derive(Default)]
pub struct InMemoryDraftRepository {
    drafts: Arc<RwLock<HashMap<(Uuid, Audience), MessageDraft>>>,
}

impl InMemoryDraftRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn all(&self) -> Vec<MessageDraft> {
        let drafts = self.drafts.read().await;
        drafts.values().cloned().collect()
    }

    pub async fn get(&self, match_id: Uuid, audience: Audience) -> Option<MessageDraft> {
        let drafts = self.drafts.read().await;
        drafts.get(&(match_id, audience)).cloned()
    }
}

#[async_trait]
impl DraftRepository for InMemoryDraftRepository {
    async fn upsert(&self, draft: MessageDraft) -> anyhow::Result<()> {
        let mut drafts = self.drafts.write().await;
        drafts.insert((draft.match_id, draft.audience), draft);
        Ok(())
    }
}
