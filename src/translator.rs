//! Transport layer: one GET per call, no retries.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::config::Config;
use crate::consts::{headers, limits};
use crate::error::TranslateError;
use crate::request::TranslationRequest;
use crate::response::{extract, parse};

/// Reusable translation client.
///
/// Cloning is cheap and clones share the underlying connection pool, so one
/// instance can serve any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct Translator {
    client: Client,
    endpoint: Url,
}

impl Translator {
    /// Client pointed at the public endpoint with the 30 second timeout.
    pub fn new() -> Result<Self, TranslateError> {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Self::with_client(client, &config.endpoint)
    }

    /// Use a caller-built client. Its timeout settings are left untouched.
    pub fn with_client(client: Client, endpoint: &str) -> Result<Self, TranslateError> {
        let endpoint = Url::parse(endpoint)?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Translate `text` from `source_lang` to `target_lang`.
    ///
    /// Input errors come back before any I/O. A non-200 reply is reported
    /// without reading the body.
    pub async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError> {
        let url = TranslationRequest::new(text, source_lang, target_lang).build_url(&self.endpoint)?;

        log::debug!(
            "Translating {} -> {}: {:?}",
            source_lang,
            target_lang,
            truncate_text(text, limits::LOG_PREVIEW_CHARS)
        );

        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, headers::CONTENT_TYPE)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            log::warn!("Translation endpoint answered {}", status);
            return Err(TranslateError::UnexpectedStatus { code: status.as_u16() });
        }

        let body = response.bytes().await?;
        let raw = parse(&body).map_err(|e| {
            log::warn!("Undecodable translation body ({} bytes): {}", body.len(), e);
            e
        })?;

        extract(&raw)
    }
}

fn truncate_text(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut preview: String = s.chars().take(max_chars).collect();
    preview.push_str("...");
    preview
}

/// One-shot helper that builds a default [`Translator`] for a single call.
/// Hold on to a `Translator` instead when translating more than once.
pub async fn translate(
    text: &str,
    source_lang: &str,
    target_lang: &str,
) -> Result<String, TranslateError> {
    Translator::new()?.translate(text, source_lang, target_lang).await
}
