use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::authenticate_user::{
    AuthenticateUserError, AuthenticateUserInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AuthenticateUserRequest {
    #[serde(alias = "Email", default)]
    #[schema(example = "alice@example.com")]
    pub email: String,

    #[serde(alias = "Password", default)]
    #[schema(example = "pa55word")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct AuthenticationToken {
    /// Send as `Authorization: Bearer <token>`
    #[schema(example = "IEYZQUBEMPPAKPOAWTPV6YJ6RM")]
    pub token: String,
    pub expiry: DateTime<Utc>,
}

#[derive(Serialize, ToSchema)]
pub struct AuthenticationTokenResponse {
    pub authentication_token: AuthenticationToken,
}

/// Create an authentication token
///
/// Exchanges the credentials of an activated account for a bearer token.
#[utoipa::path(
    post,
    path = "/v1/tokens/authentication",
    tag = "tokens",
    request_body = AuthenticateUserRequest,
    responses(
        (status = 200, description = "Token issued", body = inline(SuccessResponse<AuthenticationTokenResponse>)),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (
            status = 401,
            description = "Unknown email, wrong password or inactive account",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid authentication credentials"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/v1/tokens/authentication")]
pub async fn authenticate_user_handler(
    req: web::Json<AuthenticateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input = AuthenticateUserInput {
        email: req.email.clone(),
        password: req.password.clone(),
    };

    match data.authenticate_user_use_case.execute(input).await {
        Ok(issued) => ApiResponse::success(AuthenticationTokenResponse {
            authentication_token: AuthenticationToken {
                token: issued.plaintext.as_str().to_string(),
                expiry: issued.expiry,
            },
        }),
        Err(AuthenticateUserError::Validation(errors)) => {
            warn!(error = %errors, "Invalid authentication input");
            ApiResponse::validation_failed(&errors)
        }
        Err(AuthenticateUserError::InvalidCredentials) => ApiResponse::unauthorized(
            "INVALID_CREDENTIALS",
            "Invalid authentication credentials",
        ),
        Err(e) => {
            error!(email = %req.email, error = %e, "Authentication failed");
            ApiResponse::internal_error()
        }
    }
}
