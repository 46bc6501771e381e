//! CatVerdict - Outcome of classifying an image's labels

use serde::{Deserialize, Serialize};

use crate::domain::entities::LabelAnnotation;

/// How many non-cat labels to name in the suggestion reply
const SUGGESTION_LIMIT: usize = 3;

/// Outcome of inspecting an image's labels for a cat
///
/// Three states keep "the service said it is not a cat" distinct from
/// "the service gave us nothing to judge by". Only the first two
/// produce a reply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum CatVerdict {
    /// A label reads "cat" (case-insensitive); carries its score
    Cat { score: f32 },
    /// Labels were returned but none of them is "cat"
    NotCat { candidates: Vec<String> },
    /// No usable labels came back
    Unavailable,
}

impl CatVerdict {
    /// Classify a label list
    ///
    /// Labels are scanned in service order and the first one whose
    /// description equals "cat" ignoring case wins. With no labels at
    /// all there is nothing to judge by, so the verdict is
    /// `Unavailable`.
    pub fn from_labels(labels: &[LabelAnnotation]) -> Self {
        if labels.is_empty() {
            return Self::Unavailable;
        }

        for label in labels {
            if label.description.eq_ignore_ascii_case("cat") {
                return Self::Cat { score: label.score };
            }
        }

        Self::NotCat {
            candidates: labels
                .iter()
                .take(SUGGESTION_LIMIT)
                .map(|label| label.description.clone())
                .collect(),
        }
    }

    /// Reply text for this verdict
    ///
    /// `Unavailable` has nothing worth saying and yields `None`.
    pub fn reply_text(&self) -> Option<String> {
        match self {
            Self::Cat { score } => Some(format!("Meow, {}", confidence_phrase(*score))),
            Self::NotCat { candidates } => Some(format!(
                "Oops, it's not cat! Is it among {}?",
                join_candidates(candidates)
            )),
            Self::Unavailable => None,
        }
    }

    /// Whether a cat was found
    pub fn is_cat(&self) -> bool {
        matches!(self, Self::Cat { .. })
    }
}

/// English confidence phrase for a cat score
///
/// Thresholds are half-open and checked highest first, so a score
/// sitting exactly on a boundary gets the stronger phrase.
pub fn confidence_phrase(score: f32) -> &'static str {
    if score >= 0.9 {
        "Abusolutely!!" // sic
    } else if score >= 0.8 {
        "Certainly!"
    } else if score >= 0.6 {
        "Probably"
    } else if score >= 0.4 {
        "Maybe?"
    } else {
        "Possibly..."
    }
}

/// Join candidate labels as "a, b or c" (also handles one or two)
fn join_candidates(candidates: &[String]) -> String {
    match candidates.len() {
        0 => String::new(),
        1 => candidates[0].clone(),
        n => format!("{} or {}", candidates[..n - 1].join(", "), candidates[n - 1]),
    }
}
