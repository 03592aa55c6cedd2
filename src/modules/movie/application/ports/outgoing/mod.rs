pub mod movie_query;
pub mod movie_repository;

pub use movie_query::{MovieListFilter, MovieQuery, MovieQueryError, MoviePage};
pub use movie_repository::{MovieRepository, MovieRepositoryError};
