pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::email;
pub use modules::movie;

use crate::auth::adapter::outgoing::security::{Argon2Hasher, BcryptHasher};
use crate::auth::adapter::outgoing::{
    TokenRepositoryPostgres, UserQueryPostgres, UserRepositoryPostgres,
};
use crate::auth::application::helpers::{BearerAuthenticator, BearerTokenResolver};
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::ports::outgoing::PasswordHasher;
use crate::auth::application::services::token::{TokenConfig, TokenService};
use crate::auth::application::use_cases::{
    activate_user::{ActivateUserUseCase, IActivateUserUseCase},
    authenticate_user::{AuthenticateUserUseCase, IAuthenticateUserUseCase},
    create_user::{CreateUserUseCase, ICreateUserUseCase},
};
use crate::config::{AppConfig, PasswordHasherKind, SmtpConfig};
use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::ports::outgoing::{EmailSender, UserEmailNotifier};
use crate::email::application::services::UserEmailService;
use crate::movie::adapter::outgoing::{MovieQueryPostgres, MovieRepositoryPostgres};
use crate::movie::application::movie_use_cases::MovieUseCases;
use crate::movie::application::service::{
    CreateMovieService, DeleteMovieService, GetMovieService, ListMoviesService,
};
use crate::shared::api::{custom_json_config, custom_query_config};

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub environment: String,
    pub register_user_orchestrator: Arc<UserRegistrationOrchestrator>,
    pub activate_user_use_case: Arc<dyn IActivateUserUseCase + Send + Sync>,
    pub authenticate_user_use_case: Arc<dyn IAuthenticateUserUseCase + Send + Sync>,
    pub bearer_authenticator: Arc<dyn BearerAuthenticator + Send + Sync>,
    pub movie: MovieUseCases,
}

/// Wires every use case onto one database connection.
pub fn build_app_state(
    db: Arc<DatabaseConnection>,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
    tokens: &TokenConfig,
    environment: &str,
) -> AppState {
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db));
    let user_query = UserQueryPostgres::new(Arc::clone(&db));
    let token_service = TokenService::new(Arc::new(TokenRepositoryPostgres::new(Arc::clone(&db))));

    // Registration
    let create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync> =
        Arc::new(CreateUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&password_hasher),
            tokens.activation_ttl,
        ));
    let register_user_orchestrator =
        UserRegistrationOrchestrator::new(create_user_use_case, email_notifier);

    // Activation and authentication
    let activate_user_use_case = ActivateUserUseCase::new(user_repo, token_service.clone());
    let authenticate_user_use_case = AuthenticateUserUseCase::new(
        user_query.clone(),
        password_hasher,
        token_service.clone(),
        tokens.authentication_ttl,
    );
    let bearer_authenticator = BearerTokenResolver::new(token_service, Arc::new(user_query));

    // Movies
    let movie_repo = MovieRepositoryPostgres::new(Arc::clone(&db));
    let movie_query = MovieQueryPostgres::new(db);
    let movie = MovieUseCases {
        create: Arc::new(CreateMovieService::new(movie_repo.clone())),
        delete: Arc::new(DeleteMovieService::new(movie_repo)),
        get_single: Arc::new(GetMovieService::new(movie_query.clone())),
        get_list: Arc::new(ListMoviesService::new(movie_query)),
    };

    AppState {
        environment: environment.to_string(),
        register_user_orchestrator: Arc::new(register_user_orchestrator),
        activate_user_use_case: Arc::new(activate_user_use_case),
        authenticate_user_use_case: Arc::new(authenticate_user_use_case),
        bearer_authenticator: Arc::new(bearer_authenticator),
        movie,
    }
}

/// Deletes expired tokens every `interval` until the runtime shuts down.
pub fn spawn_token_purge(token_service: TokenService, interval: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            match token_service.purge_expired().await {
                Ok(0) => {}
                Ok(removed) => info!(removed, "Purged expired tokens"),
                Err(e) => warn!(error = %e, "Expired token purge failed"),
            }
        }
    });
}

#[cfg(not(tarpaulin_include))]
fn build_email_sender(config: &AppConfig) -> anyhow::Result<Arc<dyn EmailSender + Send + Sync>> {
    let sender = match &config.smtp {
        SmtpConfig::Relay {
            server,
            username,
            password,
        } => SmtpEmailSender::new(server, username, password, &config.email_from)
            .context("failed to build SMTP relay transport")?,
        SmtpConfig::Local { host, port } => {
            warn!(host = %host, port, "Using unauthenticated local SMTP catcher");
            SmtpEmailSender::new_local(host, *port, &config.email_from)
        }
    };
    Ok(Arc::new(sender))
}

#[cfg(not(tarpaulin_include))]
fn build_password_hasher(
    config: &AppConfig,
) -> anyhow::Result<Arc<dyn PasswordHasher + Send + Sync>> {
    let hasher: Arc<dyn PasswordHasher + Send + Sync> = match config.password_hasher {
        PasswordHasherKind::Argon2 => Arc::new(Argon2Hasher::from_env()?),
        PasswordHasherKind::Bcrypt => Arc::new(BcryptHasher::from_env()?),
    };
    Ok(hasher)
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("invalid configuration")?;
    let token_config = TokenConfig::from_env().context("invalid token configuration")?;

    info!(environment = %config.environment, "Starting application...");

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("failed to run migrations")?;
        info!("Database migrations applied");
    }

    let db_arc = Arc::new(conn);

    let email_notifier: Arc<dyn UserEmailNotifier + Send + Sync> =
        Arc::new(UserEmailService::new(build_email_sender(&config)?));
    let password_hasher = build_password_hasher(&config)?;

    let state = build_app_state(
        Arc::clone(&db_arc),
        password_hasher,
        email_notifier,
        &token_config,
        &config.environment,
    );

    spawn_token_purge(
        TokenService::new(Arc::new(TokenRepositoryPostgres::new(Arc::clone(&db_arc)))),
        token_config.cleanup_interval,
    );

    let server_url = config.server_address();
    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {server_url}"))?
    .run()
    .await
    .context("server terminated with an error")
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::healthcheck);
    cfg.service(crate::health::readiness);
    cfg.service(crate::api::openapi::openapi_json);
    // Users and tokens
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::activate_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::authenticate_user_handler);
    // Movies
    cfg.service(crate::movie::adapter::incoming::web::routes::create_movie_handler);
    cfg.service(crate::movie::adapter::incoming::web::routes::list_movies_handler);
    cfg.service(crate::movie::adapter::incoming::web::routes::get_movie_handler);
    cfg.service(crate::movie::adapter::incoming::web::routes::delete_movie_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        error!(error = ?e, "Application failed");
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
