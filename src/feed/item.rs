// SPDX-License-Identifier: MPL-2.0
//! Photo records and wire decoding.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A single photo returned by the feed endpoint.
///
/// Items are immutable once fetched; identity is the `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoItem {
    pub id: u64,
    pub title: String,
    /// Full-size image URL.
    pub url: String,
    /// Smaller preview, when the endpoint provides one.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// Wire-lenient photo record. The endpoint is not under our control, so
/// every field an item needs may be absent or null on individual records.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPhoto {
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    thumbnail_url: Option<String>,
}

impl RawPhoto {
    fn into_item(self) -> Option<PhotoItem> {
        Some(PhotoItem {
            id: self.id?,
            title: self.title?,
            url: self.url?,
            thumbnail_url: self.thumbnail_url,
        })
    }
}

/// Decodes a feed response body.
///
/// Records missing any of `id`, `title`, or `url` are dropped individually;
/// the rest of the batch is kept. Returns the valid items together with the
/// number of records skipped.
///
/// # Errors
///
/// Returns a decode error when the body is not a JSON array at all.
pub fn decode_feed(body: &str) -> Result<(Vec<PhotoItem>, usize)> {
    let raw: Vec<RawPhoto> = serde_json::from_str(body)?;

    let total = raw.len();
    let items: Vec<PhotoItem> = raw.into_iter().filter_map(RawPhoto::into_item).collect();
    let skipped = total - items.len();

    Ok((items, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn decodes_complete_records() {
        let body = r#"[
            {"albumId": 1, "id": 1, "title": "accusamus", "url": "https://example.com/1.png", "thumbnailUrl": "https://example.com/t1.png"},
            {"albumId": 1, "id": 2, "title": "reprehenderit", "url": "https://example.com/2.png"}
        ]"#;

        let (items, skipped) = decode_feed(body).expect("decode failed");
        assert_eq!(skipped, 0);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].title, "accusamus");
        assert_eq!(
            items[0].thumbnail_url.as_deref(),
            Some("https://example.com/t1.png")
        );
        assert_eq!(items[1].thumbnail_url, None);
    }

    #[test]
    fn skips_records_missing_required_fields() {
        let body = r#"[
            {"id": 1, "title": "ok", "url": "https://example.com/1.png"},
            {"id": 2, "url": "https://example.com/2.png"},
            {"title": "no id", "url": "https://example.com/3.png"},
            {"id": 4, "title": "no url"}
        ]"#;

        let (items, skipped) = decode_feed(body).expect("decode failed");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
        assert_eq!(skipped, 3);
    }

    #[test]
    fn rejects_non_array_bodies() {
        assert!(matches!(
            decode_feed(r#"{"error": "rate limited"}"#),
            Err(Error::Decode(_))
        ));
        assert!(matches!(decode_feed("not json"), Err(Error::Decode(_))));
    }

    #[test]
    fn empty_array_is_a_valid_empty_feed() {
        let (items, skipped) = decode_feed("[]").expect("decode failed");
        assert!(items.is_empty());
        assert_eq!(skipped, 0);
    }
}
