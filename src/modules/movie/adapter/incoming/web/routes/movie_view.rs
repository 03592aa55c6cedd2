use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::movie::application::domain::entities::Movie;

#[derive(Debug, Serialize, ToSchema)]
pub struct MovieView {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Moana")]
    pub title: String,
    #[schema(example = 2016)]
    pub year: i32,
    #[schema(example = "107 mins")]
    pub runtime: String,
    #[schema(example = json!(["animation", "adventure"]))]
    pub genres: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// Starts at 1
    #[schema(example = 1)]
    pub version: i32,
}

impl From<Movie> for MovieView {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            year: movie.year,
            runtime: movie.runtime.to_string(),
            genres: movie.genres,
            created_at: movie.created_at,
            version: movie.version,
        }
    }
}
