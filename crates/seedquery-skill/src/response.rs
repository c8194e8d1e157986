//! Response composition.
//!
//! Wraps reply text into the two shapes the voice platform accepts. No length
//! or content checks are made here.

use crate::types::Response;

/// Build a reply: with a card when `card_title` is given, spoken only otherwise.
/// The card body is always the spoken text.
pub fn tell(text: impl Into<String>, card_title: Option<&str>) -> Response {
    let text = text.into();
    match card_title {
        Some(title) => Response::CardSpeech {
            card_body: text.clone(),
            text,
            card_title: title.to_string(),
        },
        None => Response::PlainSpeech { text },
    }
}

/// Composer bound to the product's fixed card title.
#[derive(Debug, Clone)]
pub struct ResponseComposer {
    card_title: String,
}

impl Default for ResponseComposer {
    fn default() -> Self {
        Self::new("SEED Information")
    }
}

impl ResponseComposer {
    pub fn new(card_title: impl Into<String>) -> Self {
        Self {
            card_title: card_title.into(),
        }
    }

    pub fn card_title(&self) -> &str {
        &self.card_title
    }

    pub fn card(&self, text: impl Into<String>) -> Response {
        tell(text, Some(&self.card_title))
    }

    pub fn plain(&self, text: impl Into<String>) -> Response {
        tell(text, None)
    }
}
