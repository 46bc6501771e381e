//! LINE Integration for Neko
//!
//! This crate provides LINE Messaging API integration for the Neko
//! cat-detection bot: the HTTP client, the webhook payload types, and
//! the `MessagingIntegration` implementation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use neko_integration_line::{LineConfig, LineIntegration};
//!
//! let config = LineConfig::new("your-channel-access-token");
//! let integration = LineIntegration::new(config);
//! ```

mod client;
mod config;
mod integration;
mod webhook;

pub use client::{LineClient, LineError};
pub use config::{LineConfig, DEFAULT_API_BASE, DEFAULT_DATA_API_BASE};
pub use integration::LineIntegration;
pub use webhook::{CallbackRequest, EventSource, MessagePayload, WebhookEvent};
