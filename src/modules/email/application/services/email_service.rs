use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::token::IssuedToken;
use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::email::application::ports::outgoing::user_email_notifier::{
    ActivationRecipient, UserEmailNotificationError, UserEmailNotifier,
};

const ACTIVATION_SUBJECT: &str = "Welcome to Greenlight! Activate your account";

/// Renders account emails and hands them to an [`EmailSender`].
#[derive(Clone)]
pub struct UserEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl fmt::Debug for UserEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEmailService")
            .field("sender", &"<dyn EmailSender>")
            .finish()
    }
}

impl UserEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self { sender }
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_activation_email(name: &str, token: &IssuedToken) -> String {
    format!(
        r#"
        <p>Hi {name},</p>
        <p>Thanks for signing up for a Greenlight account. We're excited to have you on board!</p>
        <p>
            To activate your account, send a <code>PUT /v1/users/activated</code>
            request with the following JSON body:
        </p>
        <pre><code>{{"token": "{token}"}}</code></pre>
        <p>
            <strong>Note:</strong> this is a one-time use token and it will expire on {expiry}.
        </p>
        <p>Thanks,<br>The Greenlight Team</p>
        "#,
        name = escape_html(name),
        token = token.plaintext.as_str(),
        expiry = token.expiry.format("%Y-%m-%d %H:%M UTC"),
    )
}

#[async_trait]
impl UserEmailNotifier for UserEmailService {
    async fn send_activation_email(
        &self,
        recipient: &ActivationRecipient,
        token: &IssuedToken,
    ) -> Result<(), UserEmailNotificationError> {
        let body = render_activation_email(&recipient.name, token);

        self.sender
            .send_email(&recipient.email, ACTIVATION_SUBJECT, &body)
            .await
            .map_err(UserEmailNotificationError::EmailSendingFailed)
    }
}
