use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use super::movie_view::MovieView;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::ActivatedUser;
use crate::modules::movie::application::domain::entities::Movie;
use crate::modules::movie::application::domain::validation::MovieDraft;
use crate::modules::movie::application::ports::incoming::use_cases::CreateMovieError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMovieRequest {
    #[serde(default)]
    #[schema(example = "Moana")]
    pub title: String,

    #[schema(example = 2016)]
    pub year: Option<i32>,

    /// `"<minutes> mins"`
    #[schema(value_type = String, example = "107 mins")]
    pub runtime: Option<serde_json::Value>,

    #[serde(default)]
    #[schema(example = json!(["animation", "adventure"]))]
    pub genres: Vec<String>,
}

impl CreateMovieRequest {
    fn into_draft(self) -> MovieDraft {
        // A bare number such as 107 is kept as text and then fails the format check.
        let runtime = match self.runtime {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) => Some(s),
            Some(other) => Some(other.to_string()),
        };

        MovieDraft {
            title: self.title,
            year: self.year,
            runtime,
            genres: self.genres,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct MovieResponse {
    movie: MovieView,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            movie: movie.into(),
        }
    }
}

/// Add a movie
#[utoipa::path(
    post,
    path = "/v1/movies",
    tag = "movies",
    request_body = CreateMovieRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Movie created", body = inline(SuccessResponse<MovieResponse>),
            headers(("Location" = String, description = "URL of the new movie"))),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Account not activated", body = ErrorResponse),
        (
            status = 422,
            description = "Validation error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_FAILED",
                    "message": "The request contains invalid fields",
                    "fields": {
                        "runtime": { "code": "INVALID_RUNTIME_FORMAT", "message": "must be in the form \"<minutes> mins\"" }
                    }
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/v1/movies")]
pub async fn create_movie_handler(
    user: ActivatedUser,
    req: web::Json<CreateMovieRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = req.into_inner().into_draft();

    match data.movie.create.execute(user.user_id, draft).await {
        Ok(movie) => {
            let location = format!("/v1/movies/{}", movie.id);
            ApiResponse::created_at(&location, MovieResponse::from(movie))
        }
        Err(CreateMovieError::Validation(errors)) => {
            warn!(user_id = %user.user_id, error = %errors, "Invalid movie input");
            ApiResponse::validation_failed(&errors)
        }
        Err(e @ CreateMovieError::RepositoryError(_)) => {
            error!(user_id = %user.user_id, error = %e, "Movie creation failed");
            ApiResponse::internal_error()
        }
    }
}
