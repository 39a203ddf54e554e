use crate::domain::error::AstroError;
use crate::domain::traits::Translator;
use async_trait::async_trait;
use reqwest::Client;

const TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Translator backed by the public Google Translate endpoint.
///
/// The backend call is awaited in-line and bounded by the shared client
/// timeout; callers see a plain synchronous-looking result with no
/// cancellation beyond that timeout.
pub struct GoogleTranslator {
    client: Client,
}

impl GoogleTranslator {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn name(&self) -> &str {
        "google"
    }

    async fn translate(&self, text: &str, lang_code: &str) -> Result<String, AstroError> {
        let params = [
            ("client", "gtx"),
            ("sl", "auto"),
            ("tl", lang_code),
            ("dt", "t"),
            ("q", text),
        ];

        let response: serde_json::Value = self
            .client
            .get(TRANSLATE_URL)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // Response shape: [[["translated","original",...],...],...]
        let segments = response
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| AstroError::Api("Unexpected translate response shape".to_string()))?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(part) = segment.get(0).and_then(|v| v.as_str()) {
                translated.push_str(part);
            }
        }

        if translated.is_empty() {
            return Err(AstroError::Api(
                "Translate response contained no text".to_string(),
            ));
        }

        Ok(translated)
    }
}
