mod create_movie;
mod delete_movie;
mod get_movie;
mod list_movies;

pub use create_movie::{CreateMovieError, CreateMovieUseCase};
pub use delete_movie::{DeleteMovieError, DeleteMovieUseCase};
pub use get_movie::{GetMovieError, GetMovieUseCase};
pub use list_movies::{ListMoviesCommand, ListMoviesError, ListMoviesUseCase, MovieListResult};
