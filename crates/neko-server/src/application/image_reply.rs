//! Image Reply Application Service (Use Case)
//!
//! Orchestrates the pipeline for one image message: fetch the image
//! through the platform, classify it, build the reply text, translate,
//! send the reply.

use std::sync::Arc;

use neko::domain::{CatVerdict, DomainError, ImageMessage, ReplyMessage};
use neko::ports::MessagingIntegration;
use neko::services::{CatDetector, Translator};
use tracing::{info, warn};

/// What happened to one image message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// A reply was sent with the given text
    Replied { text: String },
    /// Classification was unavailable, no reply was sent
    Skipped,
}

/// Application service for the image reply pipeline
pub struct ImageReplyService<I: MessagingIntegration> {
    integration: Arc<I>,
    detector: CatDetector,
    translator: Option<Translator>,
}

impl<I: MessagingIntegration> ImageReplyService<I> {
    pub fn new(
        integration: Arc<I>,
        detector: CatDetector,
        translator: Option<Translator>,
    ) -> Self {
        Self {
            integration,
            detector,
            translator,
        }
    }

    /// Run the full pipeline for one image message
    ///
    /// Classification failures degrade to [`ReplyOutcome::Skipped`];
    /// translation failures degrade to an English-only reply. Fetch and
    /// send failures propagate to the caller.
    pub async fn handle(&self, image: &ImageMessage) -> Result<ReplyOutcome, DomainError> {
        let bytes = self.integration.message_content(&image.message_id).await?;

        let verdict = match self.detector.detect(&bytes).await {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!(error = %e, message_id = %image.message_id, "Classification unavailable");
                CatVerdict::Unavailable
            }
        };

        let Some(mut text) = verdict.reply_text() else {
            return Ok(ReplyOutcome::Skipped);
        };

        if let Some(translator) = &self.translator {
            match translator.translate(&text).await {
                Ok(translated) => text = format!("{} \\ {}", text, translated),
                Err(e) => warn!(error = %e, "Translation failed, replying in English only"),
            }
        }

        self.integration
            .send_reply(&image.reply_token, &[ReplyMessage::text(text.clone())])
            .await?;

        info!(
            platform = %self.integration.name(),
            is_cat = %verdict.is_cat(),
            "Replied to image message"
        );

        Ok(ReplyOutcome::Replied { text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockIntegration {
        content: Vec<u8>,
        fail_fetch: bool,
        replies: Mutex<Vec<(String, Vec<ReplyMessage>)>>,
    }

    impl MockIntegration {
        fn with_content(content: &[u8]) -> Self {
            Self {
                content: content.to_vec(),
                ..Self::default()
            }
        }

        fn failing_fetch() -> Self {
            Self {
                fail_fetch: true,
                ..Self::default()
            }
        }

        fn replies(&self) -> Vec<(String, Vec<ReplyMessage>)> {
            self.replies.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MessagingIntegration for MockIntegration {
        async fn message_content(&self, _message_id: &str) -> Result<Vec<u8>, DomainError> {
            if self.fail_fetch {
                return Err(DomainError::ExternalService("content gone".to_string()));
            }
            Ok(self.content.clone())
        }

        async fn send_reply(
            &self,
            reply_token: &str,
            messages: &[ReplyMessage],
        ) -> Result<(), DomainError> {
            self.replies
                .lock()
                .unwrap()
                .push((reply_token.to_string(), messages.to_vec()));
            Ok(())
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    async fn vision_returning(server: &mut mockito::Server, body: serde_json::Value) {
        server
            .mock("POST", "/vision")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;
    }

    fn cat_response(score: f32) -> serde_json::Value {
        serde_json::json!({
            "responses": [{
                "labelAnnotations": [{ "description": "Cat", "score": score }]
            }]
        })
    }

    #[tokio::test]
    async fn replies_with_the_cat_verdict() {
        let mut server = mockito::Server::new_async().await;
        vision_returning(&mut server, cat_response(0.95)).await;

        let integration = Arc::new(MockIntegration::with_content(b"image"));
        let service = ImageReplyService::new(
            integration.clone(),
            CatDetector::new(format!("{}/vision", server.url())),
            None,
        );

        let outcome = service
            .handle(&ImageMessage::new("token-1", "msg-1"))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            ReplyOutcome::Replied {
                text: "Meow, Abusolutely!!".to_string(),
            }
        );
        let replies = integration.replies();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].0, "token-1");
        assert_eq!(replies[0].1, vec![ReplyMessage::text("Meow, Abusolutely!!")]);
    }

    #[tokio::test]
    async fn skips_when_the_classifier_is_down() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/vision")
            .with_status(500)
            .with_body("{}")
            .create_async()
            .await;

        let integration = Arc::new(MockIntegration::with_content(b"image"));
        let service = ImageReplyService::new(
            integration.clone(),
            CatDetector::new(format!("{}/vision", server.url())),
            None,
        );

        let outcome = service
            .handle(&ImageMessage::new("token-1", "msg-1"))
            .await
            .unwrap();

        assert_eq!(outcome, ReplyOutcome::Skipped);
        assert!(integration.replies().is_empty());
    }

    #[tokio::test]
    async fn skips_when_no_labels_come_back() {
        let mut server = mockito::Server::new_async().await;
        vision_returning(&mut server, serde_json::json!({ "responses": [{}] })).await;

        let integration = Arc::new(MockIntegration::with_content(b"image"));
        let service = ImageReplyService::new(
            integration.clone(),
            CatDetector::new(format!("{}/vision", server.url())),
            None,
        );

        let outcome = service
            .handle(&ImageMessage::new("token-1", "msg-1"))
            .await
            .unwrap();

        assert_eq!(outcome, ReplyOutcome::Skipped);
        assert!(integration.replies().is_empty());
    }

    #[tokio::test]
    async fn appends_the_translation_when_available() {
        let mut server = mockito::Server::new_async().await;
        vision_returning(&mut server, cat_response(0.85)).await;
        server
            .mock("POST", "/deepl")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({ "translations": [{ "text": "ニャー、確かに！" }] }).to_string(),
            )
            .create_async()
            .await;

        let integration = Arc::new(MockIntegration::with_content(b"image"));
        let service = ImageReplyService::new(
            integration.clone(),
            CatDetector::new(format!("{}/vision", server.url())),
            Some(Translator::new("key").with_endpoint(format!("{}/deepl", server.url()))),
        );

        let outcome = service
            .handle(&ImageMessage::new("token-1", "msg-1"))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            ReplyOutcome::Replied {
                text: "Meow, Certainly! \\ ニャー、確かに！".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn keeps_english_when_translation_fails() {
        let mut server = mockito::Server::new_async().await;
        vision_returning(&mut server, cat_response(0.85)).await;
        server
            .mock("POST", "/deepl")
            .with_status(500)
            .with_body("{}")
            .create_async()
            .await;

        let integration = Arc::new(MockIntegration::with_content(b"image"));
        let service = ImageReplyService::new(
            integration.clone(),
            CatDetector::new(format!("{}/vision", server.url())),
            Some(Translator::new("key").with_endpoint(format!("{}/deepl", server.url()))),
        );

        let outcome = service
            .handle(&ImageMessage::new("token-1", "msg-1"))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            ReplyOutcome::Replied {
                text: "Meow, Certainly!".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn fetch_failures_propagate() {
        let integration = Arc::new(MockIntegration::failing_fetch());
        let service = ImageReplyService::new(
            integration.clone(),
            CatDetector::new("http://localhost:1/vision"),
            None,
        );

        let err = service
            .handle(&ImageMessage::new("token-1", "msg-1"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::ExternalService(_)));
        assert!(integration.replies().is_empty());
    }
}
