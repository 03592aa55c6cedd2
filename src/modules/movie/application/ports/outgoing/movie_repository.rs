// src/modules/movie/application/ports/outgoing/movie_repository.rs

use async_trait::async_trait;

use crate::modules::movie::application::domain::entities::{Movie, NewMovie};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum MovieRepositoryError {
    #[error("Movie not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Write-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Stores the movie and returns it with its assigned id.
    async fn insert(&self, movie: NewMovie) -> Result<Movie, MovieRepositoryError>;

    /// Removes the movie; `NotFound` when no row had that id.
    async fn delete(&self, id: i64) -> Result<(), MovieRepositoryError>;
}
