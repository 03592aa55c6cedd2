use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::movie::application::domain::entities::Movie;
use crate::modules::movie::application::domain::validation::MovieDraft;
use crate::shared::validation::ValidationErrors;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateMovieError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateMovieUseCase: Send + Sync {
    async fn execute(&self, actor: UserId, draft: MovieDraft) -> Result<Movie, CreateMovieError>;
}
