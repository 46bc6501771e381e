//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - ImageMessage: image event the bot is allowed to reply to
//! - LabelAnnotation: one label from the image-labeling service
//! - ReplyMessage: outbound text message for the reply API

mod event;
mod label;
mod reply;

pub use event::*;
pub use label::*;
pub use reply::*;
