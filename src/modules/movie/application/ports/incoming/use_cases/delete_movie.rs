use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::movie::application::ports::outgoing::MovieRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteMovieError {
    #[error("Movie not found")]
    MovieNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<MovieRepositoryError> for DeleteMovieError {
    fn from(err: MovieRepositoryError) -> Self {
        match err {
            MovieRepositoryError::NotFound => DeleteMovieError::MovieNotFound,
            MovieRepositoryError::DatabaseError(msg)
            | MovieRepositoryError::SerializationError(msg) => {
                DeleteMovieError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
pub trait DeleteMovieUseCase: Send + Sync {
    async fn execute(&self, actor: UserId, movie_id: i64) -> Result<(), DeleteMovieError>;
}
