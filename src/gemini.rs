//! Client for the Gemini `generateContent` REST endpoint.
//!
//! Each request is stateless: a single prompt string goes in, a single text
//! completion comes out. No conversation history or streaming.

use serde::{Deserialize, Serialize};
use serenity::async_trait;
use thiserror::Error;
use tracing::{debug, info};

/// The fixed model identifier requested for every completion.
pub const GEMINI_MODEL: &str = "gemini-pro";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub type GeminiResult<T> = Result<T, GeminiError>;

#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("API communication failure: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Unable to parse response JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A collaborator that can turn a prompt into completion text.
///
/// `Ok(None)` means the request succeeded but no text came back (safety
/// block, empty candidate list); callers treat that as a distinct outcome
/// rather than an error.
#[async_trait]
pub trait Completion: Send + Sync {
    async fn generate(&self, prompt: &str) -> GeminiResult<Option<String>>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        debug!("Creating new GeminiClient instance");
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[async_trait]
impl Completion for GeminiClient {
    async fn generate(&self, prompt: &str) -> GeminiResult<Option<String>> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, GEMINI_MODEL
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        info!("Sending completion request to model '{}'", GEMINI_MODEL);
        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&text)?;

        let completion = extract_text(&parsed);
        debug!(
            "Completion response contained {} characters",
            completion.as_deref().map_or(0, |t| t.chars().count())
        );
        Ok(completion)
    }
}

/// Pulls the completion text out of the first candidate, if any. Candidates
/// withheld for safety carry no content and map to `None`.
fn extract_text(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let text: String = content
        .parts
        .iter()
        .map(|part| part.text.as_str())
        .collect();
    if text.is_empty() { None } else { Some(text) }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}
