//! Markdown rendering of reply lines and the reply body.

use crate::CardRecord;

const UTM_SOURCE: &str = "utm_source=lemmy";

/// Appended after the card lines of every reply.
pub const REPLY_TRAILER: &str = "\n\n---\n[[card name]] to call";

/// Render one card as `Name - (G) (SF) (txt)`:
///
/// * `Name`: image link
/// * `(G)`: Gatherer page
/// * `(SF)`: Scryfall page
/// * `(txt)`: plain-text API view
///
/// Missing links leave their slot empty; URLs are not validated.
#[must_use]
pub fn format_card_line(card: &CardRecord) -> String {
    let image = card.image_url.as_deref().unwrap_or_default();
    let gatherer = card.gatherer_url.as_deref().unwrap_or_default();

    format!(
        "[{name}]({image}&{UTM_SOURCE}) - [(G)]({gatherer}&{UTM_SOURCE}) [(SF)]({scryfall}) [(txt)]({text}?{UTM_SOURCE}&format=text)",
        name = card.name,
        scryfall = card.scryfall_url,
        text = card.text_url,
    )
}

/// Placeholder line for a token that produced no card.
#[must_use]
pub fn format_failure_line(token: &str) -> String {
    format!("Unable to retrieve information for \"{token}\"")
}

/// Join lines into a bulleted reply followed by [`REPLY_TRAILER`].
///
/// Callers only compose a reply when at least one token was found.
#[must_use]
pub fn compose_reply<S: AsRef<str>>(lines: &[S]) -> String {
    let body = lines
        .iter()
        .map(|line| format!("* {}", line.as_ref()))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{body}{REPLY_TRAILER}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shivan() -> CardRecord {
        CardRecord {
            name: "Shivan Dragon".to_string(),
            image_url: Some("https://img/x.png".to_string()),
            gatherer_url: Some("https://gatherer/x".to_string()),
            scryfall_url: "https://scryfall/x".to_string(),
            text_url: "https://api/x".to_string(),
        }
    }

    #[test]
    fn card_line_has_all_four_links() {
        assert_eq!(
            format_card_line(&shivan()),
            "[Shivan Dragon](https://img/x.png&utm_source=lemmy) - [(G)](https://gatherer/x&utm_source=lemmy) [(SF)](https://scryfall/x) [(txt)](https://api/x?utm_source=lemmy&format=text)"
        );
    }

    #[test]
    fn missing_links_leave_slots_empty() {
        let card = CardRecord {
            image_url: None,
            gatherer_url: None,
            ..shivan()
        };
        assert_eq!(
            format_card_line(&card),
            "[Shivan Dragon](&utm_source=lemmy) - [(G)](&utm_source=lemmy) [(SF)](https://scryfall/x) [(txt)](https://api/x?utm_source=lemmy&format=text)"
        );
    }

    #[test]
    fn failure_line_quotes_token() {
        assert_eq!(
            format_failure_line("Nonexistent Card"),
            "Unable to retrieve information for \"Nonexistent Card\""
        );
    }

    #[test]
    fn reply_bullets_lines_and_appends_trailer() {
        assert_eq!(
            compose_reply(&["A", "B"]),
            "* A\n* B\n\n---\n[[card name]] to call"
        );
    }
}
