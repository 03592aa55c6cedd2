use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use super::get_movie::movie_not_found;
use super::parse_movie_id;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::ActivatedUser;
use crate::modules::movie::application::ports::incoming::use_cases::DeleteMovieError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct DeleteMovieResponse {
    #[schema(example = "movie successfully deleted")]
    message: String,
}

/// Delete a movie
#[utoipa::path(
    delete,
    path = "/v1/movies/{id}",
    tag = "movies",
    params(("id" = i64, Path, description = "Movie id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Movie deleted", body = inline(SuccessResponse<DeleteMovieResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Account not activated", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/v1/movies/{id}")]
pub async fn delete_movie_handler(
    user: ActivatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(movie_id) = parse_movie_id(&path) else {
        return movie_not_found();
    };

    match data.movie.delete.execute(user.user_id, movie_id).await {
        Ok(()) => ApiResponse::success(DeleteMovieResponse {
            message: "movie successfully deleted".to_string(),
        }),
        Err(DeleteMovieError::MovieNotFound) => {
            warn!(user_id = %user.user_id, movie_id, "Delete of unknown movie");
            movie_not_found()
        }
        Err(e @ DeleteMovieError::RepositoryError(_)) => {
            error!(user_id = %user.user_id, movie_id, error = %e, "Movie deletion failed");
            ApiResponse::internal_error()
        }
    }
}
