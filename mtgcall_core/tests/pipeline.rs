//! End-to-end tests of the reply pipeline with an in-memory search backend.

use async_trait::async_trait;
use mtgcall_core::{CardCaller, CardRecord, CardSearch};

struct NothingFound;

#[async_trait]
impl CardSearch for NothingFound {
    async fn search(&self, _query: &str) -> anyhow::Result<Vec<CardRecord>> {
        Ok(Vec::new())
    }
}

struct Offline;

#[async_trait]
impl CardSearch for Offline {
    async fn search(&self, _query: &str) -> anyhow::Result<Vec<CardRecord>> {
        anyhow::bail!("error sending request for url (https://api.scryfall.com/cards/search)")
    }
}

struct Bolts;

#[async_trait]
impl CardSearch for Bolts {
    async fn search(&self, _query: &str) -> anyhow::Result<Vec<CardRecord>> {
        Ok(vec![
            card("Lightning Strike", "strike"),
            card("Lightning Bolt", "bolt"),
            card("Chain Lightning", "chain"),
        ])
    }
}

fn card(name: &str, slug: &str) -> CardRecord {
    CardRecord {
        name: name.to_string(),
        image_url: Some(format!("https://cards.scryfall.io/normal/{slug}.jpg?1")),
        gatherer_url: Some(format!("https://gatherer.wizards.com/{slug}")),
        scryfall_url: format!("https://scryfall.com/card/{slug}"),
        text_url: format!("https://api.scryfall.com/cards/{slug}"),
    }
}

#[tokio::test]
async fn empty_search_renders_placeholder_reply() {
    let caller = CardCaller::new(NothingFound);
    assert_eq!(
        caller.reply_for("Try [[Foo]]").await.as_deref(),
        Some("* Unable to retrieve information for \"Foo\"\n\n---\n[[card name]] to call")
    );
}

#[tokio::test]
async fn transport_failure_renders_same_placeholder() {
    let caller = CardCaller::new(Offline);
    assert_eq!(
        caller.reply_for("Try [[Foo]]").await.as_deref(),
        Some("* Unable to retrieve information for \"Foo\"\n\n---\n[[card name]] to call")
    );
}

#[tokio::test]
async fn text_without_calls_gets_no_reply() {
    let caller = CardCaller::new(Bolts);
    assert!(caller.reply_for("no cards [here]").await.is_none());
}

#[tokio::test]
async fn best_candidate_is_formatted() {
    let caller = CardCaller::new(Bolts);
    assert_eq!(
        caller.reply_for("Just [[lightning bolt]] it").await.as_deref(),
        Some(
            "* [Lightning Bolt](https://cards.scryfall.io/normal/bolt.jpg?1&utm_source=lemmy) - \
             [(G)](https://gatherer.wizards.com/bolt&utm_source=lemmy) \
             [(SF)](https://scryfall.com/card/bolt) \
             [(txt)](https://api.scryfall.com/cards/bolt?utm_source=lemmy&format=text)\
             \n\n---\n[[card name]] to call"
        )
    );
}
