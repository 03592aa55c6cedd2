use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::{IntoParams, ToSchema};

use super::movie_view::MovieView;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::ActivatedUser;
use crate::modules::movie::application::domain::filters::PageMetadata;
use crate::modules::movie::application::domain::validation::ListParams;
use crate::modules::movie::application::ports::incoming::use_cases::{
    ListMoviesCommand, ListMoviesError, MovieListResult,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMoviesQuery {
    /// Case-insensitive part of the title
    pub title: Option<String>,
    /// 1 to 10000000, default 1
    pub page: Option<i64>,
    /// 1 to 100, default 20
    pub page_size: Option<i64>,
    /// `id`, `title`, `year` or `runtime`, prefix with `-` for descending
    pub sort: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct MovieListResponse {
    movies: Vec<MovieView>,
    metadata: PageMetadata,
}

impl From<MovieListResult> for MovieListResponse {
    fn from(result: MovieListResult) -> Self {
        Self {
            movies: result.movies.into_iter().map(MovieView::from).collect(),
            metadata: result.metadata,
        }
    }
}

/// List movies
#[utoipa::path(
    get,
    path = "/v1/movies",
    tag = "movies",
    params(ListMoviesQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "One page of movies", body = inline(SuccessResponse<MovieListResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Account not activated", body = ErrorResponse),
        (status = 422, description = "Invalid paging or sort parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/v1/movies")]
pub async fn list_movies_handler(
    user: ActivatedUser,
    query: web::Query<ListMoviesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let command = ListMoviesCommand {
        title: query.title,
        params: ListParams {
            page: query.page,
            page_size: query.page_size,
            sort: query.sort,
        },
    };

    match data.movie.get_list.execute(command).await {
        Ok(result) => ApiResponse::success(MovieListResponse::from(result)),
        Err(ListMoviesError::Validation(errors)) => {
            warn!(user_id = %user.user_id, error = %errors, "Invalid movie list parameters");
            ApiResponse::validation_failed(&errors)
        }
        Err(e @ ListMoviesError::QueryFailed(_)) => {
            error!(error = %e, "Movie listing failed");
            ApiResponse::internal_error()
        }
    }
}
