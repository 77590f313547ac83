//! Message text in, reply body out.

use tracing::info;

use crate::{
    CardSearch, JaroWinkler, Lookup, Similarity, compose_reply, extract_tokens, format_card_line,
    format_failure_line, lookup, pick_best,
};

/// Answers `[[card name]]` calls in a piece of text.
///
/// Holds no per-message state; the same caller can serve any number of
/// messages. Posting the reply is left to whoever calls [`Self::reply_for`].
pub struct CardCaller<S, M = JaroWinkler> {
    search: S,
    metric: M,
}

impl<S: CardSearch> CardCaller<S> {
    pub const fn new(search: S) -> Self {
        Self {
            search,
            metric: JaroWinkler,
        }
    }
}

impl<S: CardSearch, M: Similarity> CardCaller<S, M> {
    /// Swap the similarity used to choose between candidates.
    #[must_use]
    pub fn with_metric<N: Similarity>(self, metric: N) -> CardCaller<S, N> {
        CardCaller {
            search: self.search,
            metric,
        }
    }

    /// Build the reply for `text`, or `None` when it calls no cards.
    ///
    /// Produces exactly one line per token, in token order. Tokens are looked
    /// up one after another.
    pub async fn reply_for(&self, text: &str) -> Option<String> {
        let tokens = extract_tokens(text);
        if tokens.is_empty() {
            return None;
        }

        info!("Looking up {} card(s): {:?}", tokens.len(), tokens);

        let mut lines = Vec::with_capacity(tokens.len());
        for token in &tokens {
            lines.push(self.line_for(token).await);
        }

        Some(compose_reply(&lines))
    }

    async fn line_for(&self, token: &str) -> String {
        match lookup(&self.search, token).await {
            Lookup::Candidates(cards) => pick_best(token, &cards, &self.metric)
                .map_or_else(|| format_failure_line(token), format_card_line),
            Lookup::NoData => format_failure_line(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardRecord;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records queries and answers from a fixed table; unknown names fail.
    #[derive(Default)]
    struct Table {
        rows: Vec<(&'static str, Vec<CardRecord>)>,
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CardSearch for Table {
        async fn search(&self, query: &str) -> anyhow::Result<Vec<CardRecord>> {
            if let Ok(mut seen) = self.seen.lock() {
                seen.push(query.to_string());
            }
            self.rows
                .iter()
                .find(|(q, _)| *q == query)
                .map(|(_, cards)| cards.clone())
                .ok_or_else(|| anyhow::anyhow!("503 Service Unavailable"))
        }
    }

    #[tokio::test]
    async fn no_tokens_means_no_reply_and_no_lookups() {
        let caller = CardCaller::new(Table::default());
        assert!(caller.reply_for("nothing to see here").await.is_none());
        assert!(caller.search.seen.lock().map(|s| s.is_empty()).unwrap_or(false));
    }

    #[tokio::test]
    async fn one_line_per_token_in_order() {
        let table = Table {
            rows: vec![
                ("Opt", vec![CardRecord::named("Opt")]),
                ("Empty", Vec::new()),
            ],
            ..Table::default()
        };
        let caller = CardCaller::new(table);

        let reply = caller
            .reply_for("[[Opt]] then [[Broken]] then [[Empty]]")
            .await;

        let Some(reply) = reply else {
            panic!("expected a reply");
        };
        let lines: Vec<&str> = reply.lines().take(3).collect();
        assert!(lines[0].starts_with("* [Opt]("));
        assert_eq!(lines[1], "* Unable to retrieve information for \"Broken\"");
        assert_eq!(lines[2], "* Unable to retrieve information for \"Empty\"");
        assert!(reply.ends_with("\n\n---\n[[card name]] to call"));

        let seen = caller.search.seen.lock().map(|s| s.clone()).unwrap_or_default();
        assert_eq!(seen, vec!["Opt", "Broken", "Empty"]);
    }

    #[tokio::test]
    async fn custom_metric_drives_selection() {
        let table = Table {
            rows: vec![(
                "bolt",
                vec![CardRecord::named("Lightning Bolt"), CardRecord::named("Boltwing")],
            )],
            ..Table::default()
        };
        let prefer_second = |a: &str, _: &str| if a == "boltwing" { 1.0 } else { 0.0 };
        let caller = CardCaller::new(table).with_metric(prefer_second);

        let reply = caller.reply_for("[[bolt]]").await.unwrap_or_default();
        assert!(reply.starts_with("* [Boltwing]("));
    }
}
