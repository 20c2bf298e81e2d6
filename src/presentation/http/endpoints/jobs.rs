use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{OpenApi, payload::Json};

use crate::presentation::http::{
    endpoints::root::{ApiState, EndpointsTags},
    mappers::map_outcome,
    responses::GenerateDraftResponseDto,
    security::JobAuth,
};

#[derive(Clone)]
pub struct JobsEndpoints {
    state: Arc<ApiState>,
}

impl JobsEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl JobsEndpoints {
    /// Invoked by the external cron scheduler; idempotent within a window.
    #[oai(
        path = "/admin/jobs/generate_draft",
        method = "post",
        tag = EndpointsTags::Jobs,
    )]
    pub async fn generate_draft(
        &self,
        auth: JobAuth,
    ) -> PoemResult<Json<GenerateDraftResponseDto>> {
        auth.ensure_job_secret(&self.state.job_secret)?;

        let outcome = self
            .state
            .generate_drafts_usecase
            .execute()
            .await
            .map_err(internal_error)?;

        Ok(Json(map_outcome(&outcome)))
    }
}

fn internal_error(err: anyhow::Error) -> poem::Error {
    poem::Error::from_string(
        err.to_string(),
        poem::http::StatusCode::INTERNAL_SERVER_ERROR,
    )
}
