use async_trait::async_trait;

use crate::modules::movie::application::domain::entities::Movie;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMovieError {
    #[error("Movie not found")]
    MovieNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetMovieUseCase: Send + Sync {
    async fn execute(&self, movie_id: i64) -> Result<Movie, GetMovieError>;
}
