use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder, Response};
use thiserror::Error;

use crate::domain::{
    models::{MatchRecord, MessageDraft},
    repositories::{DraftRepository, MatchRepository},
};

/// Client for the Supabase REST data API holding both the match and the
/// draft tables. One instance is shared by every run.
pub struct SupabaseStore {
    http: Client,
    base_url: String,
    service_key: String,
}

impl SupabaseStore {
    pub fn new(base_url: String, service_key: String) -> Self {
        Self {
            http: Client::builder()
                .user_agent("matchday-service/store")
                .timeout(Duration::from_secs(20))
                .build()
                .expect("failed to build store client"),
            base_url,
            service_key,
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    async fn ensure_success(response: Response) -> anyhow::Result<Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError {
                status: status.as_u16(),
                body,
            }
            .into());
        }
        Ok(response)
    }
}

#[async_trait]
impl MatchRepository for SupabaseStore {
    async fn next_upcoming(&self, today: NaiveDate) -> anyhow::Result<Option<MatchRecord>> {
        let date_filter = format!("gte.{}", today);
        let response = self
            .authed(self.http.get(self.table_url("matches")))
            .query(&[
                ("select", "*"),
                ("order", "match_date.asc"),
                ("limit", "1"),
                ("match_date", date_filter.as_str()),
            ])
            .send()
            .await?;

        let rows: Vec<MatchRecord> = Self::ensure_success(response).await?.json().await?;
        Ok(rows.into_iter().next())
    }
}

#[async_trait]
impl DraftRepository for SupabaseStore {
    async fn upsert(&self, draft: MessageDraft) -> anyhow::Result<()> {
        let response = self
            .authed(self.http.post(self.table_url("message_drafts")))
            // unique (match_id, audience) constraint turns the insert into a merge
            .header("Prefer", "resolution=merge-duplicates")
            .json(&draft)
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("store returned {status}: {body}")]
pub struct StoreError {
    pub status: u16,
    pub body: String,
}
