use actix_web::{get, web, Responder};
use tracing::{error, warn};

use super::create_movie::MovieResponse;
use super::parse_movie_id;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::ActivatedUser;
use crate::modules::movie::application::ports::incoming::use_cases::GetMovieError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Show a movie
#[utoipa::path(
    get,
    path = "/v1/movies/{id}",
    tag = "movies",
    params(("id" = i64, Path, description = "Movie id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Movie found", body = inline(SuccessResponse<MovieResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Account not activated", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/v1/movies/{id}")]
pub async fn get_movie_handler(
    user: ActivatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(movie_id) = parse_movie_id(&path) else {
        return movie_not_found();
    };

    match data.movie.get_single.execute(movie_id).await {
        Ok(movie) => ApiResponse::success(MovieResponse::from(movie)),
        Err(GetMovieError::MovieNotFound) => {
            warn!(user_id = %user.user_id, movie_id, "Movie not found");
            movie_not_found()
        }
        Err(e @ GetMovieError::QueryFailed(_)) => {
            error!(movie_id, error = %e, "Movie lookup failed");
            ApiResponse::internal_error()
        }
    }
}

pub(super) fn movie_not_found() -> actix_web::HttpResponse {
    ApiResponse::not_found(
        "MOVIE_NOT_FOUND",
        "The requested movie could not be found",
    )
}
