use std::sync::Arc;

use crate::modules::movie::application::ports::incoming::use_cases::{
    CreateMovieUseCase, DeleteMovieUseCase, GetMovieUseCase, ListMoviesUseCase,
};

#[derive(Clone)]
pub struct MovieUseCases {
    pub create: Arc<dyn CreateMovieUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteMovieUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetMovieUseCase + Send + Sync>,
    pub get_list: Arc<dyn ListMoviesUseCase + Send + Sync>,
}
