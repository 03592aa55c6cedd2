use async_trait::async_trait;

use crate::modules::movie::application::domain::filters::PageMetadata;
use crate::modules::movie::application::domain::validation::validate_filters;
use crate::modules::movie::application::ports::incoming::use_cases::{
    ListMoviesCommand, ListMoviesError, ListMoviesUseCase, MovieListResult,
};
use crate::modules::movie::application::ports::outgoing::{MovieListFilter, MovieQuery};

pub struct ListMoviesService<Q>
where
    Q: MovieQuery,
{
    movie_query: Q,
}

impl<Q> ListMoviesService<Q>
where
    Q: MovieQuery,
{
    pub fn new(movie_query: Q) -> Self {
        Self { movie_query }
    }
}

#[async_trait]
impl<Q> ListMoviesUseCase for ListMoviesService<Q>
where
    Q: MovieQuery + Send + Sync,
{
    async fn execute(&self, command: ListMoviesCommand) -> Result<MovieListResult, ListMoviesError> {
        let filters = validate_filters(&command.params).map_err(ListMoviesError::Validation)?;

        let filter = MovieListFilter {
            title: command
                .title
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
        };

        let page = self
            .movie_query
            .list(filter, filters.clone())
            .await
            .map_err(|e| ListMoviesError::QueryFailed(e.to_string()))?;

        Ok(MovieListResult {
            movies: page.items,
            metadata: PageMetadata::calculate(page.total, filters.page, filters.page_size),
        })
    }
}
