mod create_movie_service;
mod delete_movie_service;
mod get_movie_service;
mod list_movies_service;

pub use create_movie_service::CreateMovieService;
pub use delete_movie_service::DeleteMovieService;
pub use get_movie_service::GetMovieService;
pub use list_movies_service::ListMoviesService;
