// Gemini generateContent implementation of the brief polisher.
//
// Calls the REST API directly. Server-side (5xx) failures are transient and
// retried with exponential backoff; content-policy blocks, empty candidate
// lists, and incomplete responses are terminal. Safety filters are relaxed
// in the request — creative music briefs trip them easily — but the service
// can still block for core policy reasons, which surfaces as a terminal
// error.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::traits::BriefPolisher;
use crate::brief::SYSTEM_INSTRUCTION;

/// Retries after the initial attempt, on server-side failures only.
const MAX_RETRIES: u32 = 3;

/// Sampling temperature — a little creativity, still on-brief.
const TEMPERATURE: f64 = 0.7;

const SAFETY_CATEGORIES: &[&str] = &[
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
    "HARM_CATEGORY_CIVIC_INTEGRITY",
];

/// Gemini-backed prompt polisher.
pub struct GeminiPolisher {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiPolisher {
    /// Create a polisher for the given API key and model id.
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    /// Override the API endpoint (tests point this at a local server).
    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = endpoint;
        self
    }

    fn request_body(&self, creative_brief: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: ContentBlock {
                parts: vec![TextPart {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            contents: vec![ContentBlock {
                parts: vec![TextPart {
                    text: creative_brief.to_string(),
                }],
            }],
            safety_settings: SAFETY_CATEGORIES
                .iter()
                .map(|category| SafetySetting {
                    category: category.to_string(),
                    threshold: "BLOCK_NONE".to_string(),
                })
                .collect(),
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
            },
        }
    }
}

#[async_trait]
impl BriefPolisher for GeminiPolisher {
    async fn polish(&self, creative_brief: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );
        let body = self.request_body(creative_brief);

        let mut attempt = 0u32;
        let response = loop {
            let response = self
                .client
                .post(&url)
                .json(&body)
                .send()
                .await
                .context("Failed to reach the Gemini API")?;

            if response.status().is_server_error() {
                if attempt < MAX_RETRIES {
                    let wait = Duration::from_secs(1u64 << attempt);
                    warn!(
                        status = response.status().as_u16(),
                        attempt = attempt + 1,
                        wait_secs = wait.as_secs(),
                        "Gemini API server error, retrying"
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                    continue;
                }
                anyhow::bail!(
                    "Gemini API server error after {} attempts. The service may be temporarily unavailable.",
                    MAX_RETRIES + 1
                );
            }

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                anyhow::bail!("Gemini API returned {status}: {body}");
            }

            break response;
        };

        let result: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse the Gemini API response")?;

        if let Some(feedback) = &result.prompt_feedback {
            if let Some(reason) = &feedback.block_reason {
                anyhow::bail!(
                    "Your brief was blocked for violating core safety policies which cannot be disabled. Reason: {reason}"
                );
            }
        }

        let candidate = match result.candidates.first() {
            Some(candidate) => candidate,
            None => anyhow::bail!(
                "No response candidates generated. Please try modifying your creative brief."
            ),
        };

        if candidate.finish_reason.as_deref() != Some("STOP") {
            anyhow::bail!(
                "The response was incomplete. Finish reason: {}. Please try again.",
                candidate.finish_reason.as_deref().unwrap_or("UNKNOWN")
            );
        }

        let text: String = candidate
            .content
            .as_ref()
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            anyhow::bail!("The response contained no text content.");
        }

        debug!(chars = text.len(), model = %self.model, "Polished prompt received");
        Ok(text)
    }
}

// --- Gemini REST request/response types ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: ContentBlock,
    contents: Vec<ContentBlock>,
    safety_settings: Vec<SafetySetting>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct ContentBlock {
    parts: Vec<TextPart>,
}

#[derive(Serialize)]
struct TextPart {
    text: String,
}

#[derive(Serialize)]
struct SafetySetting {
    category: String,
    threshold: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}
