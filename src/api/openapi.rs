use crate::api::schemas::{ErrorDetail, ErrorResponse, FieldErrorDetail, SuccessResponse};
use actix_web::{get, HttpResponse, Responder};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Users and tokens
use crate::auth::adapter::incoming::web::routes::{
    ActivateUserRequest, ActivateUserResponse, AuthenticateUserRequest, AuthenticationToken,
    AuthenticationTokenResponse, RegisterUserRequest, RegisterUserResponse, UserView,
};
use crate::health::{HealthResponse, ReadinessResponse};
// Movies
use crate::movie::adapter::incoming::web::routes::{
    CreateMovieRequest, DeleteMovieResponse, MovieListResponse, MovieResponse, MovieView,
};
use crate::movie::application::domain::filters::PageMetadata;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Greenlight API",
        version = "1.0.0",
        description = "Accounts, activation, bearer authentication and a movie catalogue",
    ),
    paths(
        crate::health::healthcheck,
        crate::health::readiness,

        // User endpoints
        crate::auth::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::auth::adapter::incoming::web::routes::activate_user::activate_user_handler,

        // Token endpoints
        crate::auth::adapter::incoming::web::routes::authenticate_user::authenticate_user_handler,

        // Movie endpoints
        crate::movie::adapter::incoming::web::routes::create_movie::create_movie_handler,
        crate::movie::adapter::incoming::web::routes::list_movies::list_movies_handler,
        crate::movie::adapter::incoming::web::routes::get_movie::get_movie_handler,
        crate::movie::adapter::incoming::web::routes::delete_movie::delete_movie_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<MovieResponse>,
            ErrorResponse,
            ErrorDetail,
            FieldErrorDetail,

            HealthResponse,
            ReadinessResponse,

            RegisterUserRequest,
            RegisterUserResponse,
            ActivateUserRequest,
            ActivateUserResponse,
            AuthenticateUserRequest,
            AuthenticationToken,
            AuthenticationTokenResponse,
            UserView,

            CreateMovieRequest,
            MovieResponse,
            MovieView,
            MovieListResponse,
            DeleteMovieResponse,
            PageMetadata,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "users", description = "Registration and activation"),
        (name = "tokens", description = "Authentication token issuance"),
        (name = "movies", description = "Movie catalogue, requires an activated account"),
        (name = "health", description = "Liveness and readiness checks"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some(
                            "Opaque 26-character token from POST /v1/tokens/authentication",
                        ))
                        .build(),
                ),
            )
        }
    }
}

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
