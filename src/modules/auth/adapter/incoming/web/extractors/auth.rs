use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use tracing::error;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::ResolveBearerError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Represents an authenticated user (activated or not)
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub activated: bool,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let authenticator = req
            .app_data::<web::Data<AppState>>()
            .map(|data| data.bearer_authenticator.clone());
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let Some(authenticator) = authenticator else {
                error!("AppState is not registered; cannot authenticate request");
                return Err(create_api_error(ApiResponse::internal_error()));
            };

            let Some(token) = token else {
                return Err(create_api_error(ApiResponse::unauthorized_bearer(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                )));
            };

            match authenticator.authenticate(&token).await {
                Ok(user) => Ok(AuthenticatedUser {
                    user_id: user.id,
                    activated: user.activated,
                }),
                Err(ResolveBearerError::InvalidToken) => {
                    Err(create_api_error(ApiResponse::unauthorized_bearer(
                        "INVALID_TOKEN",
                        "Invalid or expired authentication token",
                    )))
                }
                Err(ResolveBearerError::RepositoryError(msg)) => {
                    error!(error = %msg, "Bearer token lookup failed");
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}

/// Represents an authenticated user whose account is activated
#[derive(Debug, Clone)]
pub struct ActivatedUser {
    pub user_id: UserId,
}

impl FromRequest for ActivatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let authenticated = AuthenticatedUser::from_request(req, payload);

        Box::pin(async move {
            let user = authenticated.await?;
            if !user.activated {
                return Err(create_api_error(ApiResponse::forbidden(
                    "ACCOUNT_NOT_ACTIVATED",
                    "Your user account must be activated to access this resource",
                )));
            }

            Ok(ActivatedUser {
                user_id: user.user_id,
            })
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
