pub mod create_movie;
pub mod delete_movie;
pub mod get_movie;
pub mod list_movies;
pub mod movie_view;

pub use create_movie::{create_movie_handler, CreateMovieRequest, MovieResponse};
pub use delete_movie::{delete_movie_handler, DeleteMovieResponse};
pub use get_movie::get_movie_handler;
pub use list_movies::{list_movies_handler, ListMoviesQuery, MovieListResponse};
pub use movie_view::MovieView;

/// Path ids that are not positive integers can never match a row.
pub(crate) fn parse_movie_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}
