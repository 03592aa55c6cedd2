use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::routes::user_view::UserView;
use crate::auth::application::orchestrator::user_registration::UserRegistrationError;
use crate::auth::application::use_cases::create_user::{CreateUserError, CreateUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// Display name
    #[serde(alias = "Name", default)]
    #[schema(example = "Alice Smith")]
    pub name: String,

    /// Email address, unique per account (case-insensitive)
    #[serde(alias = "Email", default)]
    #[schema(example = "alice@example.com")]
    pub email: String,

    /// Password (8 to 72 bytes)
    #[serde(alias = "Password", default)]
    #[schema(example = "pa55word")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterUserResponse {
    #[schema(
        example = "User created successfully. Please check your email to activate your account."
    )]
    message: String,

    /// Created account, not yet activated
    user: UserView,
}

fn map_create_user_error(err: CreateUserError, req: &RegisterUserRequest) -> HttpResponse {
    match err {
        CreateUserError::Validation(errors) => {
            warn!(email = %req.email, error = %errors, "Invalid registration input");
            ApiResponse::validation_failed(&errors)
        }

        CreateUserError::DuplicateEmail => {
            warn!(email = %req.email, "Registration with an email that is already in use");
            ApiResponse::conflict(
                "DUPLICATE_EMAIL",
                "A user with this email address already exists",
            )
        }

        other => {
            error!(email = %req.email, error = %other, "User registration failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// Creates an un-activated account and emails a one-time activation token.
#[utoipa::path(
    post,
    path = "/v1/users",
    tag = "users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User created", body = inline(SuccessResponse<RegisterUserResponse>)),
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
                        "email": { "code": "INVALID_EMAIL", "message": "must be a valid email address" },
                        "password": { "code": "PASSWORD_REQUIRED", "message": "must be provided" }
                    }
                }
            })
        ),
        (
            status = 409,
            description = "Email already registered",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "DUPLICATE_EMAIL",
                    "message": "A user with this email address already exists"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/v1/users")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(email = %req.email, "User registration attempt");

    let input = CreateUserInput {
        name: req.name.clone(),
        email: req.email.clone(),
        password: req.password.clone(),
    };

    match data.register_user_orchestrator.register_user(input).await {
        Ok(output) => ApiResponse::created(RegisterUserResponse {
            message: output.message,
            user: output.user.into(),
        }),
        Err(UserRegistrationError::CreateUserFailed(e)) => map_create_user_error(e, &req),
    }
}
