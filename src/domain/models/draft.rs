use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::audience::Audience;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DraftStatus {
    Ready,
}

/// An announcement waiting for manual distribution, keyed by
/// (match_id, audience) in the external store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDraft {
    pub match_id: Uuid,
    pub audience: Audience,
    pub message_text: String,
    pub status: DraftStatus,
}

impl MessageDraft {
    pub fn ready(match_id: Uuid, audience: Audience, message_text: String) -> Self {
        Self {
            match_id,
            audience,
            message_text,
            status: DraftStatus::Ready,
        }
    }
}
