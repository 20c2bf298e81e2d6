use std::sync::Arc;

use poem_openapi::Tags;

use crate::application::usecases::generate_drafts::GenerateDraftsUseCase;

#[derive(Clone)]
pub struct ApiState {
    pub generate_drafts_usecase: Arc<GenerateDraftsUseCase>,
    pub job_secret: String,
}

pub struct Endpoints;

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Jobs,
}
