use actix_web::http::header;

/// Well-formed (26 base32 characters) but never issued by any store.
pub const TEST_BEARER_TOKEN: &str = "Y3QMGX3PJ3WLRL2YRTQGQ6KRHU";

/// `Authorization: Bearer <token>` for `TestRequest::insert_header`.
pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {token}"))
}
