use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::{
    application::services::{announcement::AnnouncementComposer, clock::Clock},
    domain::{
        models::{Audience, MessageDraft},
        repositories::{DraftRepository, MatchRepository},
    },
};

pub struct GenerateDraftsUseCase {
    match_repo: Arc<dyn MatchRepository>,
    draft_repo: Arc<dyn DraftRepository>,
    clock: Arc<dyn Clock>,
    composer: AnnouncementComposer,
}

#[derive(Debug)]
pub enum GenerateDraftsOutcome {
    NoUpcomingMatch,
    Processed {
        match_id: Uuid,
        created: Vec<Audience>,
    },
}

impl GenerateDraftsUseCase {
    pub fn new(
        match_repo: Arc<dyn MatchRepository>,
        draft_repo: Arc<dyn DraftRepository>,
        clock: Arc<dyn Clock>,
        composer: AnnouncementComposer,
    ) -> Self {
        Self {
            match_repo,
            draft_repo,
            clock,
            composer,
        }
    }

    pub async fn execute(&self) -> anyhow::Result<GenerateDraftsOutcome> {
        // One instant for the whole run so both window checks agree.
        let now = self.clock.now();

        let record = match self.match_repo.next_upcoming(now.date_naive()).await? {
            Some(record) => record,
            None => {
                info!("no upcoming match found");
                return Ok(GenerateDraftsOutcome::NoUpcomingMatch);
            }
        };

        let mut created = Vec::new();
        for audience in record.newly_opened_windows(now) {
            let message_text = self.composer.compose(&record, audience);
            self.draft_repo
                .upsert(MessageDraft::ready(record.id, audience, message_text))
                .await?;
            created.push(audience);
        }

        info!(match_id = %record.id, created = ?created, "draft generation run finished");

        Ok(GenerateDraftsOutcome::Processed {
            match_id: record.id,
            created,
        })
    }
}
