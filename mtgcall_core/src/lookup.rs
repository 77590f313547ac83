//! Per-token dispatch to the card search collaborator.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::CardRecord;

/// A free-text card search backend.
///
/// Implementations receive the raw token and are responsible for escaping it.
/// An empty `Vec` means the backend found nothing; `Err` means the request
/// itself failed (transport, status, decoding).
#[async_trait]
pub trait CardSearch: Send + Sync {
    async fn search(&self, query: &str) -> anyhow::Result<Vec<CardRecord>>;
}

/// Outcome of looking up one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Non-empty candidate list in backend order.
    Candidates(Vec<CardRecord>),
    /// Nothing usable came back, either an empty result or a failed request.
    NoData,
}

/// Look up a single token.
///
/// Failures never escape: both an empty result and a transport error become
/// [`Lookup::NoData`], only the log level differs.
pub async fn lookup<S: CardSearch + ?Sized>(search: &S, token: &str) -> Lookup {
    match search.search(token).await {
        Ok(cards) if cards.is_empty() => {
            debug!("No cards found for \"{token}\"");
            Lookup::NoData
        }
        Ok(cards) => {
            debug!("Found {} candidate(s) for \"{token}\"", cards.len());
            Lookup::Candidates(cards)
        }
        Err(e) => {
            warn!("Card search failed for \"{token}\": {e:#}");
            Lookup::NoData
        }
    }
}
