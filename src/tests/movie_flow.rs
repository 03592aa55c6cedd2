//! Protected movie endpoints driven with real bearer tokens.
use actix_web::http::{header, StatusCode};
use actix_web::test::TestRequest;
use chrono::{Datelike, Duration, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::adapter::outgoing::TokenRepositoryPostgres;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::token::{TokenPlaintext, TokenRecord, TokenScope};
use crate::auth::application::ports::outgoing::token_repository::TokenRepository;
use crate::tests::support::auth_helper::bearer;
use crate::tests::support::fakes::CapturingNotifier;
use crate::tests::support::flow::{register_request, send};
use crate::tests::support::test_db::sqlite_memory;

fn create_movie_request(token: &str, movie: Value) -> TestRequest {
    TestRequest::post()
        .uri("/v1/movies")
        .insert_header(bearer(token))
        .set_json(movie)
}

fn get_request(token: &str, uri: &str) -> TestRequest {
    TestRequest::get().uri(uri).insert_header(bearer(token))
}

fn delete_request(token: &str, uri: &str) -> TestRequest {
    TestRequest::delete().uri(uri).insert_header(bearer(token))
}

fn movie(title: &str, year: i32, runtime: &str) -> Value {
    json!({ "title": title, "year": year, "runtime": runtime, "genres": ["thriller"] })
}

#[actix_web::test]
async fn create_fetch_and_delete_a_movie() {
    let db = sqlite_memory().await;
    let notifier = CapturingNotifier::new();
    let app = flow_app!(db, notifier);
    let token = activated_bearer!(app, notifier, "tab@tab.a", "password123");

    let resp = actix_web::test::call_service(
        &app,
        create_movie_request(&token, movie("Inception", 2010, "144 mins")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("Location header");
    let body: Value = actix_web::test::read_body_json(resp).await;
    let id = body["data"]["movie"]["id"].as_i64().unwrap();
    assert_eq!(location, format!("/v1/movies/{id}"));
    assert_eq!(body["data"]["movie"]["runtime"], "144 mins");
    assert_eq!(body["data"]["movie"]["version"], 1);

    let (status, body) = send(&app, get_request(&token, &location).to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["movie"]["title"], "Inception");
    assert_eq!(body["data"]["movie"]["genres"], json!(["thriller"]));

    let (status, body) = send(&app, delete_request(&token, &location).to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["message"], "movie successfully deleted");

    let (status, body) = send(&app, delete_request(&token, &location).to_request()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "MOVIE_NOT_FOUND");

    let (status, _) = send(&app, get_request(&token, &location).to_request()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn invalid_movies_are_rejected_field_by_field() {
    let db = sqlite_memory().await;
    let notifier = CapturingNotifier::new();
    let app = flow_app!(db, notifier);
    let token = activated_bearer!(app, notifier, "tab@tab.a", "password123");

    let next_years = Utc::now().year() + 3;
    let (status, body) = send(
        &app,
        create_movie_request(&token, movie("Inception", next_years, "144 mins")).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["fields"]["year"]["code"], "YEAR_IN_FUTURE");

    let (status, body) = send(
        &app,
        create_movie_request(&token, movie("Inception", 2010, "144")).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["error"]["fields"]["runtime"]["code"],
        "INVALID_RUNTIME_FORMAT"
    );

    // Nothing was stored by either attempt
    let (status, body) = send(&app, get_request(&token, "/v1/movies").to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["movies"], json!([]));
}

#[actix_web::test]
async fn deleting_a_missing_movie_is_not_found() {
    let db = sqlite_memory().await;
    let notifier = CapturingNotifier::new();
    let app = flow_app!(db, notifier);
    let token = activated_bearer!(app, notifier, "tab@tab.a", "password123");

    let (status, body) = send(&app, delete_request(&token, "/v1/movies/3").to_request()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "MOVIE_NOT_FOUND");

    for title in ["Moana", "Black Panther", "Deadpool"] {
        let (status, _) = send(
            &app,
            create_movie_request(&token, movie(title, 2016, "107 mins")).to_request(),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, _) = send(&app, delete_request(&token, "/v1/movies/3").to_request()).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn list_filters_sorts_and_pages() {
    let db = sqlite_memory().await;
    let notifier = CapturingNotifier::new();
    let app = flow_app!(db, notifier);
    let token = activated_bearer!(app, notifier, "tab@tab.a", "password123");

    for (title, year) in [
        ("Moana", 2016),
        ("The Breakfast Club", 1985),
        ("Black Panther", 2018),
        ("Breakfast at Tiffany's", 1961),
    ] {
        let (status, _) = send(
            &app,
            create_movie_request(&token, movie(title, year, "100 mins")).to_request(),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(
        &app,
        get_request(&token, "/v1/movies?title=BREAKFAST&sort=-year").to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body["data"]["movies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["The Breakfast Club", "Breakfast at Tiffany's"]);
    assert_eq!(body["data"]["metadata"]["total_records"], 2);

    let (status, body) = send(
        &app,
        get_request(&token, "/v1/movies?page=2&page_size=3").to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["movies"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["metadata"]["current_page"], 2);
    assert_eq!(body["data"]["metadata"]["last_page"], 2);

    let (status, body) = send(
        &app,
        get_request(&token, "/v1/movies?sort=rating").to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"]["fields"]["sort"].is_object());
}

#[actix_web::test]
async fn movies_require_a_valid_bearer_token() {
    let db = sqlite_memory().await;
    let notifier = CapturingNotifier::new();
    let app = flow_app!(db, notifier);

    let resp = actix_web::test::call_service(
        &app,
        TestRequest::get().uri("/v1/movies").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.headers().get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");

    let (status, body) = send(
        &app,
        get_request("AAAAAAAAAAAAAAAAAAAAAAAAAA", "/v1/movies").to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");
}

#[actix_web::test]
async fn expired_authentication_token_is_rejected() {
    let db = sqlite_memory().await;
    let notifier = CapturingNotifier::new();
    let app = flow_app!(db, notifier);

    let (status, body) = send(
        &app,
        register_request("Ais", "tab@tab.a", "password123").to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let user_id: Uuid = body["data"]["user"]["id"].as_str().unwrap().parse().unwrap();

    let plaintext = TokenPlaintext::new("EXPIREDEXPIREDEXPIREDEXPIR");
    TokenRepositoryPostgres::new(db.clone())
        .insert(TokenRecord {
            hash: plaintext.hash(),
            user_id: UserId::from(user_id),
            scope: TokenScope::Authentication,
            expiry: Utc::now() - Duration::minutes(1),
        })
        .await
        .unwrap();

    let (status, body) = send(
        &app,
        get_request(plaintext.as_str(), "/v1/movies").to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");
}

#[actix_web::test]
async fn inactive_account_is_forbidden_from_movies() {
    let db = sqlite_memory().await;
    let notifier = CapturingNotifier::new();
    let app = flow_app!(db, notifier);

    let (_, body) = send(
        &app,
        register_request("Ais", "tab@tab.a", "password123").to_request(),
    )
    .await;
    let user_id: Uuid = body["data"]["user"]["id"].as_str().unwrap().parse().unwrap();

    let plaintext = TokenPlaintext::new("INACTIVEINACTIVEINACTIVEIN");
    TokenRepositoryPostgres::new(db.clone())
        .insert(TokenRecord {
            hash: plaintext.hash(),
            user_id: UserId::from(user_id),
            scope: TokenScope::Authentication,
            expiry: Utc::now() + Duration::hours(1),
        })
        .await
        .unwrap();

    let (status, body) = send(
        &app,
        get_request(plaintext.as_str(), "/v1/movies").to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "ACCOUNT_NOT_ACTIVATED");
}
