//! LabelAnnotation Entity
//!
//! A single label produced by the image-labeling service.

use serde::{Deserialize, Serialize};

/// A label attached to an image by the labeling service
///
/// Deserialized directly from the Vision API wire format. The service
/// returns annotations in descending confidence order and that order is
/// preserved wherever labels are passed around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelAnnotation {
    /// Human-readable label text (e.g. "Cat", "Whiskers")
    pub description: String,
    /// Confidence score in [0, 1]
    pub score: f32,
}

impl LabelAnnotation {
    /// Create a new label annotation
    pub fn new(description: impl Into<String>, score: f32) -> Self {
        Self {
            description: description.into(),
            score,
        }
    }
}
