pub mod support;

/// Full application over the given database, as `start` wires it, minus the server.
macro_rules! flow_app {
    ($db:expr, $notifier:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($crate::build_app_state(
                    std::sync::Arc::clone(&$db),
                    std::sync::Arc::new($crate::tests::support::fakes::PlainPasswordHasher),
                    std::sync::Arc::new($notifier.clone()),
                    &$crate::auth::application::services::token::TokenConfig::default(),
                    "test",
                )))
                .app_data(actix_web::web::Data::new(std::sync::Arc::clone(&$db)))
                .app_data($crate::shared::api::custom_json_config())
                .app_data($crate::shared::api::custom_query_config())
                .configure($crate::init_routes),
        )
        .await
    };
}

/// Registers, activates and logs in a user, yielding the bearer token.
macro_rules! activated_bearer {
    ($app:expr, $notifier:expr, $email:expr, $password:expr) => {{
        use $crate::tests::support::flow::{activate_request, login_request, register_request, send};
        let (status, _) = send(&$app, register_request("Ais", $email, $password).to_request()).await;
        assert_eq!(status, actix_web::http::StatusCode::CREATED);
        let activation = $notifier
            .activation_token_for($email)
            .await
            .expect("activation email was not sent");
        let (status, _) = send(&$app, activate_request(&activation).to_request()).await;
        assert_eq!(status, actix_web::http::StatusCode::OK);
        let (status, body) = send(&$app, login_request($email, $password).to_request()).await;
        assert_eq!(status, actix_web::http::StatusCode::OK);
        body["data"]["authentication_token"]["token"]
            .as_str()
            .expect("token missing from response")
            .to_string()
    }};
}

mod movie_flow;
