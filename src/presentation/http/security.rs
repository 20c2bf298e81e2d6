use poem::{Error as PoemError, Result as PoemResult, http::StatusCode};
use poem_openapi::SecurityScheme;
use poem_openapi::auth::Bearer;

/// Bearer credential presented by the external cron scheduler.
#[derive(SecurityScheme)]
#[oai(ty = "bearer")]
pub struct JobAuth(pub Bearer);

impl JobAuth {
    /// Constant-compare against the configured secret; nothing else runs on
    /// a mismatch.
    pub fn ensure_job_secret(&self, expected: &str) -> PoemResult<()> {
        if self.0.token == expected {
            Ok(())
        } else {
            Err(PoemError::from_string(
                "Unauthorized",
                StatusCode::UNAUTHORIZED,
            ))
        }
    }
}
