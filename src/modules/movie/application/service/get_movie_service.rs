use async_trait::async_trait;

use crate::modules::movie::application::domain::entities::Movie;
use crate::modules::movie::application::ports::incoming::use_cases::{
    GetMovieError, GetMovieUseCase,
};
use crate::modules::movie::application::ports::outgoing::MovieQuery;

pub struct GetMovieService<Q>
where
    Q: MovieQuery,
{
    movie_query: Q,
}

impl<Q> GetMovieService<Q>
where
    Q: MovieQuery,
{
    pub fn new(movie_query: Q) -> Self {
        Self { movie_query }
    }
}

#[async_trait]
impl<Q> GetMovieUseCase for GetMovieService<Q>
where
    Q: MovieQuery + Send + Sync,
{
    async fn execute(&self, movie_id: i64) -> Result<Movie, GetMovieError> {
        self.movie_query
            .get_by_id(movie_id)
            .await
            .map_err(|e| GetMovieError::QueryFailed(e.to_string()))?
            .ok_or(GetMovieError::MovieNotFound)
    }
}
