use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::movie::application::ports::incoming::use_cases::{
    DeleteMovieError, DeleteMovieUseCase,
};
use crate::modules::movie::application::ports::outgoing::MovieRepository;

pub struct DeleteMovieService<R>
where
    R: MovieRepository,
{
    movie_repository: R,
}

impl<R> DeleteMovieService<R>
where
    R: MovieRepository,
{
    pub fn new(movie_repository: R) -> Self {
        Self { movie_repository }
    }
}

#[async_trait]
impl<R> DeleteMovieUseCase for DeleteMovieService<R>
where
    R: MovieRepository + Send + Sync,
{
    async fn execute(&self, actor: UserId, movie_id: i64) -> Result<(), DeleteMovieError> {
        self.movie_repository
            .delete(movie_id)
            .await
            .map_err(DeleteMovieError::from)?;

        info!(user_id = %actor, movie_id, "Movie deleted");
        Ok(())
    }
}
