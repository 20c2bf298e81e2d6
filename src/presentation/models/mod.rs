use poem_openapi::Enum;

use crate::domain::models::Audience;

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum AudienceKind {
    #[oai(rename = "earlybird")]
    Earlybird,
    #[oai(rename = "general")]
    General,
}

impl From<AudienceKind> for Audience {
    fn from(value: AudienceKind) -> Self {
        match value {
            AudienceKind::Earlybird => Audience::Earlybird,
            AudienceKind::General => Audience::General,
        }
    }
}

impl From<Audience> for AudienceKind {
    fn from(value: Audience) -> Self {
        match value {
            Audience::Earlybird => AudienceKind::Earlybird,
            Audience::General => AudienceKind::General,
        }
    }
}
