use crate::auth::application::helpers::BearerAuthenticator;
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::use_cases::activate_user::IActivateUserUseCase;
use crate::auth::application::use_cases::authenticate_user::IAuthenticateUserUseCase;
use crate::modules::movie::application::movie_use_cases::MovieUseCases;
use crate::modules::movie::application::ports::incoming::use_cases::{
    CreateMovieUseCase, DeleteMovieUseCase, GetMovieUseCase, ListMoviesUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    register_user: Arc<UserRegistrationOrchestrator>,
    activate_user: Arc<dyn IActivateUserUseCase + Send + Sync>,
    authenticate_user: Arc<dyn IAuthenticateUserUseCase + Send + Sync>,
    bearer_authenticator: Arc<dyn BearerAuthenticator + Send + Sync>,
    movie: MovieUseCases,
}

pub fn default_test_user_registration_orchestrator() -> Arc<UserRegistrationOrchestrator> {
    let create_user = Arc::new(StubCreateUserUseCase);
    let email_notifier = Arc::new(StubUserEmailNotifier);

    Arc::new(UserRegistrationOrchestrator::new(
        create_user,
        email_notifier,
    ))
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: default_test_user_registration_orchestrator(),
            activate_user: Arc::new(StubActivateUserUseCase),
            authenticate_user: Arc::new(StubAuthenticateUserUseCase),
            bearer_authenticator: Arc::new(StubBearerAuthenticator::rejecting()),
            movie: MovieUseCases {
                create: Arc::new(StubCreateMovieUseCase),
                delete: Arc::new(StubDeleteMovieUseCase),
                get_single: Arc::new(StubGetMovieUseCase),
                get_list: Arc::new(StubListMoviesUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user_orchestrator(
        mut self,
        orchestrator: Arc<UserRegistrationOrchestrator>,
    ) -> Self {
        self.register_user = orchestrator;
        self
    }

    pub fn with_activate_user(
        mut self,
        uc: impl IActivateUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.activate_user = Arc::new(uc);
        self
    }

    pub fn with_authenticate_user(
        mut self,
        uc: impl IAuthenticateUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.authenticate_user = Arc::new(uc);
        self
    }

    pub fn with_bearer_authenticator(
        mut self,
        authenticator: impl BearerAuthenticator + Send + Sync + 'static,
    ) -> Self {
        self.bearer_authenticator = Arc::new(authenticator);
        self
    }

    pub fn with_create_movie(mut self, uc: impl CreateMovieUseCase + Send + Sync + 'static) -> Self {
        self.movie.create = Arc::new(uc);
        self
    }

    pub fn with_delete_movie(mut self, uc: impl DeleteMovieUseCase + Send + Sync + 'static) -> Self {
        self.movie.delete = Arc::new(uc);
        self
    }

    pub fn with_get_movie(mut self, uc: impl GetMovieUseCase + Send + Sync + 'static) -> Self {
        self.movie.get_single = Arc::new(uc);
        self
    }

    pub fn with_list_movies(mut self, uc: impl ListMoviesUseCase + Send + Sync + 'static) -> Self {
        self.movie.get_list = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            environment: "test".to_string(),
            register_user_orchestrator: self.register_user,
            activate_user_use_case: self.activate_user,
            authenticate_user_use_case: self.authenticate_user,
            bearer_authenticator: self.bearer_authenticator,
            movie: self.movie,
        })
    }
}
