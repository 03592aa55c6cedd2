use std::sync::Arc;
use std::time::Duration;

use crate::auth::application::domain::entities::User;
use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, ICreateUserUseCase,
};
use crate::email::application::ports::outgoing::user_email_notifier::{
    ActivationRecipient, UserEmailNotifier,
};

const MAX_EMAIL_ATTEMPTS: u32 = 3;
const DEFAULT_RETRY_BASE_DELAY: Duration = Duration::from_secs(1);

// ============================================================================
// Registration Output with Message
// ============================================================================
#[derive(Debug)]
pub struct UserRegistrationOutput {
    pub user: User,
    pub message: String,
}

impl From<User> for UserRegistrationOutput {
    fn from(user: User) -> Self {
        Self {
            user,
            message: "User created successfully. Please check your email to activate your account."
                .to_string(),
        }
    }
}

// ============================================================================
// Registration Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum UserRegistrationError {
    #[error("User creation failed: {0}")]
    CreateUserFailed(#[from] CreateUserError),
}

// ============================================================================
// User Registration Service (Orchestration Layer)
// ============================================================================

#[derive(Clone)]
pub struct UserRegistrationOrchestrator {
    create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    email_service: Arc<dyn UserEmailNotifier + Send + Sync>,
    retry_base_delay: Duration,
}

impl UserRegistrationOrchestrator {
    pub fn new(
        create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
        email_service: Arc<dyn UserEmailNotifier + Send + Sync>,
    ) -> Self {
        Self {
            create_user_use_case,
            email_service,
            retry_base_delay: DEFAULT_RETRY_BASE_DELAY,
        }
    }

    /// Delay before the second attempt; doubles for each one after.
    pub fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    /// Orchestrates complete user registration:
    /// 1. Creates the account together with its activation token
    /// 2. Sends the activation email in the background
    pub async fn register_user(
        &self,
        input: CreateUserInput,
    ) -> Result<UserRegistrationOutput, UserRegistrationError> {
        let created = self.create_user_use_case.execute(input).await?;

        let email_service = self.email_service.clone();
        let base_delay = self.retry_base_delay;
        let recipient = ActivationRecipient {
            user_id: created.user.id,
            name: created.user.name.clone(),
            email: created.user.email.clone(),
        };
        let token = created.activation_token;

        tokio::spawn(async move {
            for attempt in 1..=MAX_EMAIL_ATTEMPTS {
                match email_service
                    .send_activation_email(&recipient, &token)
                    .await
                {
                    Ok(_) => {
                        tracing::info!(user_id = %recipient.user_id, "Activation email sent");
                        return;
                    }
                    Err(e) if attempt < MAX_EMAIL_ATTEMPTS => {
                        tracing::warn!(
                            user_id = %recipient.user_id,
                            attempt,
                            max_attempts = MAX_EMAIL_ATTEMPTS,
                            error = %e,
                            "Activation email failed, retrying"
                        );
                        tokio::time::sleep(base_delay * 2_u32.pow(attempt - 1)).await;
                    }
                    Err(e) => {
                        tracing::error!(
                            user_id = %recipient.user_id,
                            attempts = MAX_EMAIL_ATTEMPTS,
                            error = %e,
                            "Giving up on activation email"
                        );
                    }
                }
            }
        });

        // Return immediately - don't wait for email
        Ok(created.user.into())
    }
}
