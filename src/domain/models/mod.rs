pub mod audience;
pub mod draft;
pub mod match_record;

pub use audience::Audience;
pub use draft::{DraftStatus, MessageDraft};
pub use match_record::{DRAFT_WINDOW_MINUTES, MatchRecord};
