use crate::{
    application::usecases::generate_drafts::GenerateDraftsOutcome,
    presentation::http::responses::GenerateDraftResponseDto,
};

pub fn map_outcome(outcome: &GenerateDraftsOutcome) -> GenerateDraftResponseDto {
    match outcome {
        GenerateDraftsOutcome::NoUpcomingMatch => GenerateDraftResponseDto {
            ok: true,
            match_id: None,
            created: Vec::new(),
            message: Some("No upcoming match found".to_string()),
        },
        GenerateDraftsOutcome::Processed { match_id, created } => GenerateDraftResponseDto {
            ok: true,
            match_id: Some(*match_id),
            created: created.iter().map(|a| (*a).into()).collect(),
            message: None,
        },
    }
}
