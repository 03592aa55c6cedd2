use async_trait::async_trait;
use serde::Serialize;

use crate::modules::movie::application::domain::entities::Movie;
use crate::modules::movie::application::domain::filters::PageMetadata;
use crate::modules::movie::application::domain::validation::ListParams;
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, Default)]
pub struct ListMoviesCommand {
    pub title: Option<String>,
    pub params: ListParams,
}

#[derive(Debug, Clone, Serialize)]
pub struct MovieListResult {
    pub movies: Vec<Movie>,
    pub metadata: PageMetadata,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListMoviesError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListMoviesUseCase: Send + Sync {
    async fn execute(&self, command: ListMoviesCommand) -> Result<MovieListResult, ListMoviesError>;
}
