#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use serde::{Deserialize, Serialize};

pub mod format;
pub mod handler;
pub mod lookup;
pub mod matcher;
pub mod tokenizer;

pub use format::{REPLY_TRAILER, compose_reply, format_card_line, format_failure_line};
pub use handler::CardCaller;
pub use lookup::{CardSearch, Lookup, lookup};
pub use matcher::{JaroWinkler, Similarity, pick_best};
pub use tokenizer::extract_tokens;

/// A single candidate returned by the card search collaborator.
///
/// Only the fields the reply actually links to are kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardRecord {
    pub name: String,
    /// `image_uris.normal`
    pub image_url: Option<String>,
    /// `related_uris.gatherer`
    pub gatherer_url: Option<String>,
    /// `scryfall_uri`
    pub scryfall_url: String,
    /// `uri`, the API object for the card
    pub text_url: String,
}

impl CardRecord {
    /// Record with only a name set; the remaining links are empty.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: None,
            gatherer_url: None,
            scryfall_url: String::new(),
            text_url: String::new(),
        }
    }
}
