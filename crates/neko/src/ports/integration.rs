//! Platform Integration Port
//!
//! Abstract interface for the messaging platform the bot talks to.
//!
//! Implementations of this trait live in separate crates
//! (e.g., neko-integration-line).

use async_trait::async_trait;

use crate::domain::entities::ReplyMessage;
use crate::domain::errors::DomainError;

/// Messaging platform interface
///
/// This trait abstracts the two platform calls the reply pipeline
/// makes: fetching a message's binary content and replying to an
/// event. Each platform should have its own implementation in a
/// separate crate.
///
/// # Example
///
/// ```rust,ignore
/// use neko::ports::MessagingIntegration;
///
/// struct LineIntegration { /* ... */ }
///
/// #[async_trait]
/// impl MessagingIntegration for LineIntegration {
///     async fn message_content(&self, message_id: &str) -> Result<Vec<u8>, DomainError> {
///         // Fetch the image bytes from the platform
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait MessagingIntegration: Send + Sync {
    /// Fetch the binary content of a message (the image bytes)
    async fn message_content(&self, message_id: &str) -> Result<Vec<u8>, DomainError>;

    /// Send a reply to the event that carried the given reply token
    ///
    /// Reply tokens are one-shot: the platform accepts a single reply
    /// per token, and only within the token's validity window.
    async fn send_reply(
        &self,
        reply_token: &str,
        messages: &[ReplyMessage],
    ) -> Result<(), DomainError>;

    /// Get the integration name (e.g., "line")
    fn name(&self) -> &str;
}
