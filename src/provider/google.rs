use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{
    Deserialize,
    Serialize,
};

use super::{
    ProviderDetection,
    ProviderError,
    ProviderTranslation,
    TranslationProvider,
};
use crate::config::ProviderConfig;

/// Path of the v2 translate endpoint.
const TRANSLATE_PATH: &str = "/language/translate/v2";

/// Path of the v2 detect endpoint.
const DETECT_PATH: &str = "/language/translate/v2/detect";

/// Client for the Google Cloud Translation v2 REST API.
pub struct GoogleTranslateProvider {
    /// HTTP client carrying the request timeout
    client: reqwest::Client,
    /// API root without trailing slash
    base_url: String,
    /// API key; checked on every call
    api_key: Option<String>,
    /// Variable the key is expected in, for error messages
    api_key_env: String,
    /// Request timeout, reported on expiry
    timeout: Duration,
}

impl fmt::Debug for GoogleTranslateProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleTranslateProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Body of a translate request.
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    /// Text to translate
    q: &'a str,
    /// Omitted for auto-detection
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    /// Target language
    target: &'a str,
    /// Always "text" so markup is not interpreted
    format: &'static str,
}

/// Body of a detect request.
#[derive(Debug, Serialize)]
struct DetectRequest<'a> {
    /// Text to classify
    q: &'a str,
}

/// `{"data": ...}` wrapper used by every v2 response.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    /// Payload
    data: T,
}

/// Translate response payload.
#[derive(Debug, Deserialize)]
struct TranslateData {
    /// One entry per `q`
    translations: Vec<TranslatedText>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslatedText {
    /// Translation
    translated_text: String,
    /// Present when no source was sent
    detected_source_language: Option<String>,
}

/// Detect response payload.
#[derive(Debug, Deserialize)]
struct DetectData {
    /// One list of candidates per `q`
    detections: Vec<Vec<DetectedLanguage>>,
}

#[derive(Debug, Deserialize)]
struct DetectedLanguage {
    /// Language code
    language: String,
    /// 0.0–1.0; absent for some languages
    #[serde(default)]
    confidence: Option<f64>,
}

/// Converts a 0.0–1.0 confidence to a rounded percentage.
#[allow(clippy::float_arithmetic, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent(confidence: f64) -> u8 {
    (confidence.clamp(0.0, 1.0) * 100.0).round() as u8
}

impl GoogleTranslateProvider {
    /// Builds a client from provider settings.
    ///
    /// # Errors
    /// The HTTP client cannot be constructed.
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client =
            reqwest::Client::builder().timeout(timeout).build().map_err(ProviderError::Request)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
            api_key_env: config.api_key_env.clone(),
            timeout,
        })
    }

    /// The configured key, or `MissingCredential`.
    fn api_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ProviderError::MissingCredential { variable: self.api_key_env.clone() })
    }

    /// Maps transport errors, distinguishing timeouts. The URL carries the key and is dropped.
    fn transport_error(&self, error: reqwest::Error) -> ProviderError {
        if error.is_timeout() {
            ProviderError::Timeout(self.timeout)
        } else {
            ProviderError::Request(error.without_url())
        }
    }

    /// POSTs `body` to `path` and decodes the `data` payload.
    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ProviderError>
    where
        B: Serialize + Sync + ?Sized,
        T: for<'de> Deserialize<'de>,
    {
        let key = self.api_key()?;
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "Calling translation provider");

        let response = self
            .client
            .post(&url)
            .query(&[("key", key)])
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status: status.as_u16(), body });
        }

        let envelope: Envelope<T> = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(self.timeout)
            } else {
                ProviderError::Decode(e.without_url().to_string())
            }
        })?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslateProvider {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<ProviderTranslation, ProviderError> {
        let source = (!source.is_empty() && source != "auto").then_some(source);
        let request = TranslateRequest { q: text, source, target, format: "text" };

        let data: TranslateData = self.post(TRANSLATE_PATH, &request).await?;
        let translation = data
            .translations
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Decode("response contained no translations".to_string()))?;

        Ok(ProviderTranslation {
            translated_text: translation.translated_text,
            detected_source_language: translation.detected_source_language,
        })
    }

    async fn detect(&self, text: &str) -> Result<ProviderDetection, ProviderError> {
        let data: DetectData = self.post(DETECT_PATH, &DetectRequest { q: text }).await?;
        let detection = data
            .detections
            .into_iter()
            .next()
            .and_then(|candidates| candidates.into_iter().next())
            .ok_or_else(|| ProviderError::Decode("response contained no detections".to_string()))?;

        Ok(ProviderDetection {
            language: detection.language,
            confidence: detection.confidence.map_or(0, percent),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.984, 98)]
    #[case(0.987, 99)]
    #[case(1.7, 100)]
    #[case(-0.2, 0)]
    fn percent_rounds_and_clamps(#[case] confidence: f64, #[case] expected: u8) {
        assert_that!(percent(confidence), eq(expected));
    }

    #[rstest]
    fn translate_request_omits_auto_source() {
        let request = TranslateRequest { q: "hi", source: None, target: "fr", format: "text" };

        let json = serde_json::to_value(&request).unwrap();

        assert_that!(json, eq(&serde_json::json!({"q": "hi", "target": "fr", "format": "text"})));
    }

    #[rstest]
    #[tokio::test]
    async fn missing_key_fails_before_request() {
        // Unroutable base URL: reaching the network would surface as a request error.
        let config = ProviderConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..ProviderConfig::default()
        };
        let provider = GoogleTranslateProvider::new(&config).unwrap();

        let result = provider.translate("hello", "en", "fr").await;

        assert!(matches!(result, Err(ProviderError::MissingCredential { .. })));
    }

    #[rstest]
    fn debug_redacts_key() {
        let config =
            ProviderConfig { api_key: Some("very-secret".to_string()), ..ProviderConfig::default() };
        let provider = GoogleTranslateProvider::new(&config).unwrap();

        assert_that!(format!("{provider:?}"), not(contains_substring("very-secret")));
    }
}
