use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::token::IssuedToken;

#[derive(Debug, Clone)]
pub struct ActivationRecipient {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}

#[derive(Debug, thiserror::Error)]
pub enum UserEmailNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[async_trait::async_trait]
pub trait UserEmailNotifier: Send + Sync {
    async fn send_activation_email(
        &self,
        recipient: &ActivationRecipient,
        token: &IssuedToken,
    ) -> Result<(), UserEmailNotificationError>;
}
