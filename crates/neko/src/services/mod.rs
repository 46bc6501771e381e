//! External Service Clients
//!
//! Thin reqwest clients for the third-party services the bot relies
//! on: image labeling (Google Cloud Vision) and translation (DeepL).

pub mod translate;
pub mod vision;

// Re-exports
pub use translate::{TranslateError, Translator};
pub use vision::{CatDetector, VisionError};
