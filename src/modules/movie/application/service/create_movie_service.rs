use async_trait::async_trait;
use chrono::{Datelike, Utc};
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::modules::movie::application::domain::entities::Movie;
use crate::modules::movie::application::domain::validation::{validate_movie, MovieDraft};
use crate::modules::movie::application::ports::incoming::use_cases::{
    CreateMovieError, CreateMovieUseCase,
};
use crate::modules::movie::application::ports::outgoing::MovieRepository;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateMovieService<R>
where
    R: MovieRepository,
{
    movie_repository: R,
    fixed_year: Option<i32>,
}

impl<R> CreateMovieService<R>
where
    R: MovieRepository,
{
    pub fn new(movie_repository: R) -> Self {
        Self {
            movie_repository,
            fixed_year: None,
        }
    }

    /// Pins the "current year" used by the release-year check.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.fixed_year = Some(year);
        self
    }

    fn current_year(&self) -> i32 {
        self.fixed_year.unwrap_or_else(|| Utc::now().year())
    }
}

#[async_trait]
impl<R> CreateMovieUseCase for CreateMovieService<R>
where
    R: MovieRepository + Send + Sync,
{
    async fn execute(&self, actor: UserId, draft: MovieDraft) -> Result<Movie, CreateMovieError> {
        let new_movie = validate_movie(draft, self.current_year()).map_err(|errors| {
            warn!(user_id = %actor, error = %errors, "Rejected movie payload");
            CreateMovieError::Validation(errors)
        })?;

        let movie = self
            .movie_repository
            .insert(new_movie)
            .await
            .map_err(|e| CreateMovieError::RepositoryError(e.to_string()))?;

        info!(user_id = %actor, movie_id = movie.id, title = %movie.title, "Movie created");

        Ok(movie)
    }
}
