// SPDX-License-Identifier: MPL-2.0
//! One-shot HTTP fetches for the photo feed and card images.

use crate::error::{Error, Result};
use crate::feed::item::{self, PhotoItem};
use iced::widget::image;

/// A successfully decoded feed response.
#[derive(Debug, Clone)]
pub struct FeedBatch {
    pub items: Vec<PhotoItem>,
    /// Records dropped during decoding because required fields were missing.
    pub skipped: usize,
}

fn client() -> Result<reqwest::Client> {
    // Build client with explicit redirect policy and user agent
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent("IcedSwipe/0.2.0")
        .build()
        .map_err(|e| Error::Fetch(e.to_string()))
}

/// Fetches the photo feed from `endpoint`.
///
/// One-shot: no retry, timeout, or cancellation policy beyond what the HTTP
/// client applies by default. A failure leaves the caller's deck untouched.
///
/// # Errors
///
/// Returns [`Error::Fetch`] on connection failures or non-success HTTP
/// statuses, and [`Error::Decode`] when the body is not a JSON array.
pub async fn fetch_photos(endpoint: String) -> Result<FeedBatch> {
    let response = client()?
        .get(&endpoint)
        .send()
        .await
        .map_err(|e| Error::Fetch(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::Fetch(format!("HTTP status: {}", response.status())));
    }

    let body = response
        .text()
        .await
        .map_err(|e| Error::Fetch(e.to_string()))?;

    let (items, skipped) = item::decode_feed(&body)?;
    Ok(FeedBatch { items, skipped })
}

/// Fetches one card image and wraps the bytes in an Iced image handle.
///
/// # Errors
///
/// Returns [`Error::Fetch`] on connection failures or non-success HTTP
/// statuses. Decoding of the bytes is deferred to the renderer.
pub async fn fetch_image(url: String) -> Result<image::Handle> {
    let response = client()?
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::Fetch(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::Fetch(format!("HTTP status: {}", response.status())));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::Fetch(e.to_string()))?;

    Ok(image::Handle::from_bytes(bytes.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_from_invalid_endpoint_reports_fetch_error() {
        // Malformed URL: fails in the client before touching the network
        let result = fetch_photos("not a url".to_string()).await;
        match result {
            Err(Error::Fetch(message)) => assert!(!message.is_empty()),
            other => panic!("expected Fetch error, got {other:?}"),
        }
    }

    #[test]
    fn client_builds() {
        assert!(client().is_ok());
    }
}
