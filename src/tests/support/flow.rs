//! Request helpers for tests that drive the whole application.
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use serde_json::{json, Value};

/// Sends a request and returns its status with the decoded JSON body.
pub async fn send<S, R, B>(app: &S, req: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

pub fn register_request(name: &str, email: &str, password: &str) -> TestRequest {
    TestRequest::post()
        .uri("/v1/users")
        .set_json(json!({ "name": name, "email": email, "password": password }))
}

pub fn activate_request(token: &str) -> TestRequest {
    TestRequest::put()
        .uri("/v1/users/activated")
        .set_json(json!({ "token": token }))
}

pub fn login_request(email: &str, password: &str) -> TestRequest {
    TestRequest::post()
        .uri("/v1/tokens/authentication")
        .set_json(json!({ "email": email, "password": password }))
}
