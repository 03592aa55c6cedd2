use async_trait::async_trait;

/// Delivers one rendered HTML message. The error is the transport's own description.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> Result<(), String>;
}
