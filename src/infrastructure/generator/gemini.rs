use crate::domain::error::AstroError;
use crate::domain::traits::InsightGenerator;
use crate::domain::zodiac::ZodiacSign;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

const GENERATE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const INSIGHT_PROMPT: &str = "You are a warm, concise astrologer. Write a short daily \
insight of one or two sentences for {name}, whose zodiac sign is {zodiac}. Respond in \
{language} and address {name} by name. No preamble, no disclaimers.";

// Gemini generateContent request/response structures
#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Insight generator backed by the Gemini generateContent API.
///
/// The model is asked to answer directly in the requested language, so
/// no separate translation step runs for this variant. Calls are
/// bounded by the shared client timeout and retried a configured number
/// of times on 429/5xx/transport errors; after that the deterministic
/// fallback sentence is returned instead of an error.
pub struct GeminiGenerator {
    client: Client,
    api_key: String,
    model: String,
    max_retries: u32,
}

impl GeminiGenerator {
    pub fn new(client: Client, api_key: String, model: String, max_retries: u32) -> Self {
        Self {
            client,
            api_key,
            model,
            max_retries,
        }
    }

    fn build_prompt(zodiac: ZodiacSign, name: &str, language: &str) -> String {
        INSIGHT_PROMPT
            .replace("{name}", name)
            .replace("{zodiac}", zodiac.as_str())
            .replace("{language}", language)
    }

    async fn request_insight(&self, prompt: &str) -> Result<String, AstroError> {
        let url = format!("{}/{}:generateContent", GENERATE_URL, self.model);
        let payload = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let mut attempt = 0u32;
        loop {
            let send_result = self
                .client
                .post(&url)
                .query(&[("key", self.api_key.as_str())])
                .json(&payload)
                .send()
                .await;

            match send_result {
                Ok(response) => {
                    let status = response.status();
                    if !status.is_success() {
                        if (status.as_u16() == 429 || status.is_server_error())
                            && attempt < self.max_retries
                        {
                            attempt += 1;
                            sleep(Duration::from_millis(150 * u64::from(attempt))).await;
                            continue;
                        }
                        let body = response.text().await.unwrap_or_default();
                        return Err(AstroError::Api(format!(
                            "Gemini API error {}: {}",
                            status, body
                        )));
                    }

                    let body: GenerateResponse = response.json().await?;
                    let text = body
                        .candidates
                        .and_then(|mut candidates| {
                            if candidates.is_empty() {
                                None
                            } else {
                                candidates.swap_remove(0).content
                            }
                        })
                        .and_then(|content| content.parts.into_iter().next())
                        .map(|part| part.text.trim().to_string())
                        .filter(|text| !text.is_empty());

                    return text.ok_or_else(|| {
                        AstroError::Api("Gemini response contained no text".to_string())
                    });
                }
                Err(e) => {
                    if attempt < self.max_retries {
                        attempt += 1;
                        sleep(Duration::from_millis(150 * u64::from(attempt))).await;
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }
    }
}

#[async_trait]
impl InsightGenerator for GeminiGenerator {
    fn name(&self) -> &str {
        "gemini"
    }

    fn localizes(&self) -> bool {
        true
    }

    async fn generate(&self, zodiac: ZodiacSign, name: &str, language: &str) -> String {
        let prompt = Self::build_prompt(zodiac, name, language);
        match self.request_insight(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    backend = self.name(),
                    error = %e,
                    "insight generation failed, using fallback"
                );
                fallback_insight(zodiac, name)
            }
        }
    }
}

/// Deterministic sentence used when the model backend is unavailable.
pub fn fallback_insight(zodiac: ZodiacSign, name: &str) -> String {
    format!(
        "{}, as a {}, your grounded nature will guide you today.",
        name, zodiac
    )
}
