use poem_openapi::Object;
use uuid::Uuid;

use crate::presentation::models::AudienceKind;

#[derive(Object)]
pub struct GenerateDraftResponseDto {
    pub ok: bool,
    pub match_id: Option<Uuid>,
    pub created: Vec<AudienceKind>,
    pub message: Option<String>,
}
