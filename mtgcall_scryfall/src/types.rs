//! Subset of the Scryfall card object used for replies.

use mtgcall_core::CardRecord;
use serde::Deserialize;

/// Body of `GET /cards/search`.
///
/// A search without matches answers with an error object that has no
/// `data` field, so `data` is optional.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Option<Vec<ScryfallCard>>,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScryfallCard {
    pub name: String,
    pub uri: String,
    pub scryfall_uri: String,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
    #[serde(default)]
    pub related_uris: Option<RelatedUris>,
    #[serde(default)]
    pub card_faces: Option<Vec<CardFace>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageUris {
    #[serde(default)]
    pub normal: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelatedUris {
    #[serde(default)]
    pub gatherer: Option<String>,
}

/// One face of a multi-faced card; only the images are read.
#[derive(Debug, Clone, Deserialize)]
pub struct CardFace {
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
}

impl ScryfallCard {
    /// Normal-size image, falling back to the front face for double-faced
    /// cards which carry no top-level `image_uris`.
    #[must_use]
    pub fn normal_image(&self) -> Option<&str> {
        self.image_uris
            .as_ref()
            .and_then(|i| i.normal.as_deref())
            .or_else(|| {
                self.card_faces
                    .as_ref()
                    .and_then(|faces| faces.first())
                    .and_then(|face| face.image_uris.as_ref())
                    .and_then(|i| i.normal.as_deref())
            })
    }
}

impl From<ScryfallCard> for CardRecord {
    fn from(card: ScryfallCard) -> Self {
        Self {
            image_url: card.normal_image().map(str::to_string),
            gatherer_url: card.related_uris.and_then(|r| r.gatherer),
            name: card.name,
            scryfall_url: card.scryfall_uri,
            text_url: card.uri,
        }
    }
}
