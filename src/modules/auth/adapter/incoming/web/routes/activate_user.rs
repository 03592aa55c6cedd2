use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::routes::user_view::UserView;
use crate::auth::application::use_cases::activate_user::ActivateUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{route, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ActivateUserRequest {
    /// Plaintext activation token from the welcome email
    #[serde(alias = "Token", default)]
    #[schema(example = "Y3QMGX3PJ3WLRL2YRTQGQ6KRHU")]
    pub token: String,
}

#[derive(Serialize, ToSchema)]
pub struct ActivateUserResponse {
    user: UserView,
}

/// Activate an account
///
/// Redeems a single-use activation token. Also accepted as `POST`.
#[utoipa::path(
    put,
    path = "/v1/users/activated",
    tag = "users",
    request_body = ActivateUserRequest,
    responses(
        (status = 200, description = "Account activated", body = inline(SuccessResponse<ActivateUserResponse>)),
        (
            status = 422,
            description = "Malformed, unknown, used or expired token",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_OR_EXPIRED_TOKEN",
                    "message": "Invalid or expired activation token"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[route("/v1/users/activated", method = "PUT", method = "POST")]
pub async fn activate_user_handler(
    req: web::Json<ActivateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.activate_user_use_case.execute(&req.token).await {
        Ok(user) => {
            info!(user_id = %user.id, "Account activated");
            ApiResponse::success(ActivateUserResponse { user: user.into() })
        }
        Err(ActivateUserError::Validation(errors)) => {
            warn!(error = %errors, "Malformed activation token");
            ApiResponse::validation_failed(&errors)
        }
        Err(ActivateUserError::InvalidOrExpiredToken) => {
            warn!("Activation attempted with an invalid or expired token");
            ApiResponse::unprocessable(
                "INVALID_OR_EXPIRED_TOKEN",
                "Invalid or expired activation token",
            )
        }
        Err(e @ ActivateUserError::RepositoryError(_)) => {
            error!(error = %e, "Account activation failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::User;
    use crate::auth::application::use_cases::activate_user::IActivateUserUseCase;
    use crate::shared::validation::ValidationErrors;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::sample_user;
    use actix_web::{test, App};
    use async_trait::async_trait;

    // ========================================================================
    // Mock Use Cases for Different Scenarios
    // ========================================================================

    #[derive(Clone)]
    struct MockActivateUser {
        result: Result<(), ActivateUserError>,
    }

    #[async_trait]
    impl IActivateUserUseCase for MockActivateUser {
        async fn execute(&self, _token: &str) -> Result<User, ActivateUserError> {
            self.result.clone()?;
            let mut user = sample_user();
            user.activated = true;
            user.version = 2;
            Ok(user)
        }
    }

    async fn call(
        result: Result<(), ActivateUserError>,
        req: test::TestRequest,
    ) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_activate_user(MockActivateUser { result })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(activate_user_handler),
        )
        .await;

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status().as_u16();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    // ========================================================================
    // Tests
    // ========================================================================

    #[actix_web::test]
    async fn test_activate_user_success_via_put() {
        let (status, body) = call(
            Ok(()),
            test::TestRequest::put()
                .uri("/v1/users/activated")
                .set_json(serde_json::json!({ "token": "Y3QMGX3PJ3WLRL2YRTQGQ6KRHU" })),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["user"]["activated"], true);
    }

    #[actix_web::test]
    async fn test_activate_user_success_via_post_with_capitalised_key() {
        let (status, body) = call(
            Ok(()),
            test::TestRequest::post()
                .uri("/v1/users/activated")
                .set_json(serde_json::json!({ "Token": "Y3QMGX3PJ3WLRL2YRTQGQ6KRHU" })),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["user"]["activated"], true);
    }

    #[actix_web::test]
    async fn test_activate_user_malformed_token() {
        let mut errors = ValidationErrors::new();
        errors.add("token", "INVALID_TOKEN_FORMAT", "must be 26 bytes long");

        let (status, body) = call(
            Err(ActivateUserError::Validation(errors)),
            test::TestRequest::put()
                .uri("/v1/users/activated")
                .set_json(serde_json::json!({ "token": "abc" })),
        )
        .await;

        assert_eq!(status, 422);
        assert_eq!(body["error"]["code"], "VALIDATION_FAILED");
        assert_eq!(
            body["error"]["fields"]["token"]["code"],
            "INVALID_TOKEN_FORMAT"
        );
    }

    #[actix_web::test]
    async fn test_activate_user_invalid_or_expired_token() {
        let (status, body) = call(
            Err(ActivateUserError::InvalidOrExpiredToken),
            test::TestRequest::put()
                .uri("/v1/users/activated")
                .set_json(serde_json::json!({ "token": "Y3QMGX3PJ3WLRL2YRTQGQ6KRHU" })),
        )
        .await;

        assert_eq!(status, 422);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_OR_EXPIRED_TOKEN");
    }

    #[actix_web::test]
    async fn test_activate_user_repository_error() {
        let (status, body) = call(
            Err(ActivateUserError::RepositoryError("db down".to_string())),
            test::TestRequest::put()
                .uri("/v1/users/activated")
                .set_json(serde_json::json!({ "token": "Y3QMGX3PJ3WLRL2YRTQGQ6KRHU" })),
        )
        .await;

        assert_eq!(status, 500);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
