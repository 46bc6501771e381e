//! Neko Domain Library
//!
//! Core domain types and interfaces for the Neko cat-detection bot.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (ImageMessage, LabelAnnotation, ReplyMessage)
//!   - `value_objects/`: Immutable value types (CatVerdict)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `integration`: Messaging platform interface
//!
//! - **Services** (`services/`): External service clients
//!   - `vision`: Google Cloud Vision label detection
//!   - `translate`: DeepL English-to-Japanese translation
//!
//! # Usage
//!
//! ```rust,ignore
//! use neko::domain::{CatVerdict, LabelAnnotation};
//! use neko::ports::MessagingIntegration;
//! use neko::services::CatDetector;
//! ```

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use domain::{CatVerdict, DomainError, ImageMessage, LabelAnnotation, ReplyMessage};
pub use ports::MessagingIntegration;
pub use services::{CatDetector, TranslateError, Translator, VisionError};
