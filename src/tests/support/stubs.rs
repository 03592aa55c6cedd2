use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::domain::token::{IssuedToken, TokenPlaintext, TokenScope};
use crate::auth::application::helpers::{BearerAuthenticator, ResolveBearerError};
use crate::auth::application::use_cases::activate_user::{ActivateUserError, IActivateUserUseCase};
use crate::auth::application::use_cases::authenticate_user::{
    AuthenticateUserError, AuthenticateUserInput, IAuthenticateUserUseCase,
};
use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, CreateUserOutput, ICreateUserUseCase,
};
use crate::email::application::ports::outgoing::{
    ActivationRecipient, UserEmailNotificationError, UserEmailNotifier,
};
use crate::modules::movie::application::domain::entities::Movie;
use crate::modules::movie::application::domain::filters::PageMetadata;
use crate::modules::movie::application::domain::validation::MovieDraft;
use crate::modules::movie::application::ports::incoming::use_cases::{
    CreateMovieError, CreateMovieUseCase, DeleteMovieError, DeleteMovieUseCase, GetMovieError,
    GetMovieUseCase, ListMoviesCommand, ListMoviesError, ListMoviesUseCase, MovieListResult,
};

// ============================================================================
// Sample data
// ============================================================================

pub fn sample_user() -> User {
    User::register(
        "Alice Smith".to_string(),
        "alice@example.com".to_string(),
        "hashed:pa55word".to_string(),
    )
}

pub fn sample_issued_token(scope: TokenScope) -> IssuedToken {
    IssuedToken {
        plaintext: TokenPlaintext::new("MQJNOQ3BTN6MHBENQBRROMA2FY"),
        scope,
        expiry: Utc::now() + Duration::hours(24),
    }
}

// ============================================================================
// Accounts
// ============================================================================

/// Accepts every registration.
pub struct StubCreateUserUseCase;

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        Ok(CreateUserOutput {
            user: User::register(input.name, input.email, "hashed".to_string()),
            activation_token: sample_issued_token(TokenScope::Activation),
        })
    }
}

pub struct StubUserEmailNotifier;

#[async_trait]
impl UserEmailNotifier for StubUserEmailNotifier {
    async fn send_activation_email(
        &self,
        _recipient: &ActivationRecipient,
        _token: &IssuedToken,
    ) -> Result<(), UserEmailNotificationError> {
        Ok(())
    }
}

pub struct StubActivateUserUseCase;

#[async_trait]
impl IActivateUserUseCase for StubActivateUserUseCase {
    async fn execute(&self, _token: &str) -> Result<User, ActivateUserError> {
        Err(ActivateUserError::InvalidOrExpiredToken)
    }
}

pub struct StubAuthenticateUserUseCase;

#[async_trait]
impl IAuthenticateUserUseCase for StubAuthenticateUserUseCase {
    async fn execute(
        &self,
        _input: AuthenticateUserInput,
    ) -> Result<IssuedToken, AuthenticateUserError> {
        Err(AuthenticateUserError::InvalidCredentials)
    }
}

// ============================================================================
// Bearer authentication
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum BearerOutcome {
    Activated,
    Inactive,
    Rejected,
    Broken,
}

/// Resolves any token to one fixed user, or fails in a chosen way.
#[derive(Debug, Clone)]
pub struct StubBearerAuthenticator {
    outcome: BearerOutcome,
    user_id: UserId,
}

impl StubBearerAuthenticator {
    fn with(outcome: BearerOutcome) -> Self {
        Self {
            outcome,
            user_id: UserId::new(),
        }
    }

    pub fn activated() -> Self {
        Self::with(BearerOutcome::Activated)
    }

    pub fn inactive() -> Self {
        Self::with(BearerOutcome::Inactive)
    }

    pub fn rejecting() -> Self {
        Self::with(BearerOutcome::Rejected)
    }

    pub fn failing() -> Self {
        Self::with(BearerOutcome::Broken)
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}

#[async_trait]
impl BearerAuthenticator for StubBearerAuthenticator {
    async fn authenticate(&self, _token: &str) -> Result<User, ResolveBearerError> {
        let mut user = sample_user();
        user.id = self.user_id;
        match self.outcome {
            BearerOutcome::Activated => {
                user.activated = true;
                Ok(user)
            }
            BearerOutcome::Inactive => Ok(user),
            BearerOutcome::Rejected => Err(ResolveBearerError::InvalidToken),
            BearerOutcome::Broken => Err(ResolveBearerError::RepositoryError(
                "connection refused".to_string(),
            )),
        }
    }
}

// ============================================================================
// Movies
// ============================================================================

pub struct StubCreateMovieUseCase;

#[async_trait]
impl CreateMovieUseCase for StubCreateMovieUseCase {
    async fn execute(&self, _actor: UserId, _draft: MovieDraft) -> Result<Movie, CreateMovieError> {
        Err(CreateMovieError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

pub struct StubDeleteMovieUseCase;

#[async_trait]
impl DeleteMovieUseCase for StubDeleteMovieUseCase {
    async fn execute(&self, _actor: UserId, _movie_id: i64) -> Result<(), DeleteMovieError> {
        Err(DeleteMovieError::MovieNotFound)
    }
}

pub struct StubGetMovieUseCase;

#[async_trait]
impl GetMovieUseCase for StubGetMovieUseCase {
    async fn execute(&self, _movie_id: i64) -> Result<Movie, GetMovieError> {
        Err(GetMovieError::MovieNotFound)
    }
}

pub struct StubListMoviesUseCase;

#[async_trait]
impl ListMoviesUseCase for StubListMoviesUseCase {
    async fn execute(
        &self,
        _command: ListMoviesCommand,
    ) -> Result<MovieListResult, ListMoviesError> {
        Ok(MovieListResult {
            movies: vec![],
            metadata: PageMetadata::default(),
        })
    }
}
