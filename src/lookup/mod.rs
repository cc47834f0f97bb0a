//! Image lookup client.
//!
//! Resolves a free-text car name to an image URL through an external service.
//! The lookup is best-effort enrichment: every failure (transport, HTTP status,
//! timeout, unexpected body) resolves to `None` and the workflow carries on
//! without an image.
//!
//! # Protocol
//!
//! `GET {endpoint}?searchTerm=<name>` answers with an XML document whose first
//! `<string>` element holds the URL:
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <string xmlns="http://carimagery.com/">https://example.com/ferrari.jpg</string>
//! ```

use crate::domain::error::{CarFavoritesError, Result};
use regex::Regex;
use reqwest::blocking::Client;
use std::sync::OnceLock;
use std::time::Duration;

/// Resolves car names to image URLs.
pub trait ImageLookup: Send {
    /// Returns the image URL for `name`, or `None` when nothing usable came back.
    fn lookup(&self, name: &str) -> Option<String>;
}

/// HTTP implementation of [`ImageLookup`].
#[derive(Debug, Clone)]
pub struct HttpImageLookup {
    client: Client,
    endpoint: String,
}

impl HttpImageLookup {
    /// Creates a lookup client for the given service endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`CarFavoritesError::Config`] if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("car-favorites/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CarFavoritesError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    fn fetch(&self, name: &str) -> Result<String> {
        let body = self
            .client
            .get(&self.endpoint)
            .query(&[("searchTerm", name)])
            .send()?
            .error_for_status()?
            .text()?;
        Ok(body)
    }
}

impl ImageLookup for HttpImageLookup {
    fn lookup(&self, name: &str) -> Option<String> {
        let _span = tracing::debug_span!("image_lookup", car_name = %name).entered();

        match self.fetch(name) {
            Ok(body) => {
                let url = extract_image_url(&body);
                tracing::debug!(found = url.is_some(), "image lookup finished");
                url
            }
            Err(e) => {
                tracing::warn!(error = %e, "image lookup failed");
                None
            }
        }
    }
}

/// Pulls the text of the first `<string ...>` element out of a response body.
///
/// Returns `None` when there is no such element or its text is blank.
///
/// # Examples
///
/// ```
/// use car_favorites::lookup::extract_image_url;
///
/// let body = r#"<string xmlns="http://carimagery.com/">http://img/ferrari.png</string>"#;
/// assert_eq!(extract_image_url(body).as_deref(), Some("http://img/ferrari.png"));
/// assert_eq!(extract_image_url("<html>oops</html>"), None);
/// ```
#[must_use]
pub fn extract_image_url(body: &str) -> Option<String> {
    static STRING_ELEMENT: OnceLock<Option<Regex>> = OnceLock::new();

    let pattern = STRING_ELEMENT
        .get_or_init(|| Regex::new(r"<string[^>]*>(.*?)</string>").ok())
        .as_ref()?;

    let value = pattern.captures(body)?.get(1)?.as_str().trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_url_from_service_document() {
        let body = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\r\n\
                    <string xmlns=\"http://carimagery.com/\">https://img.example/ferrari.jpg</string>";

        assert_eq!(extract_image_url(body).as_deref(), Some("https://img.example/ferrari.jpg"));
    }

    #[test]
    fn takes_the_first_string_element() {
        let body = "<string>http://a.png</string><string>http://b.png</string>";
        assert_eq!(extract_image_url(body).as_deref(), Some("http://a.png"));
    }

    #[test]
    fn blank_or_missing_value_is_none() {
        assert_eq!(extract_image_url("<string xmlns=\"x\"></string>"), None);
        assert_eq!(extract_image_url("<string>   </string>"), None);
        assert_eq!(extract_image_url(""), None);
        assert_eq!(extract_image_url("<strings>http://x</strings>"), None);
    }

    #[test]
    fn unreachable_service_resolves_to_none() {
        let lookup = HttpImageLookup::new("http://127.0.0.1:9/GetImageUrl", Duration::from_millis(500)).unwrap();
        assert_eq!(lookup.lookup("Ferrari"), None);
    }
}
