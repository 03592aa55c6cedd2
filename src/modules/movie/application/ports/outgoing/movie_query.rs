// src/modules/movie/application/ports/outgoing/movie_query.rs

use async_trait::async_trait;

use crate::modules::movie::application::domain::entities::Movie;
use crate::modules::movie::application::domain::filters::Filters;

#[derive(Debug, Clone, Default)]
pub struct MovieListFilter {
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MoviePage {
    pub items: Vec<Movie>,
    pub total: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MovieQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait MovieQuery: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Option<Movie>, MovieQueryError>;

    async fn list(
        &self,
        filter: MovieListFilter,
        filters: Filters,
    ) -> Result<MoviePage, MovieQueryError>;
}
