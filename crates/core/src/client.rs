//! Client for the hosted chat-completion endpoint.

use crate::error::{CompletionError, ModelParseError};
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const COMPLETIONS_PATH: &str = "v1/chat/completions";

// Fixed sampling parameters: a low temperature favours deterministic output
// and the token bound caps each analysis at one screenful of prose.
const MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f32 = 0.3;

/// Completion models exposed to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelId {
    #[default]
    #[serde(rename = "gpt-4o")]
    Gpt4o,
    #[serde(rename = "gpt-4-turbo")]
    Gpt4Turbo,
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
}

impl ModelId {
    /// All selectable models, default first.
    pub const ALL: [ModelId; 3] = [ModelId::Gpt4o, ModelId::Gpt4Turbo, ModelId::Gpt35Turbo];

    /// The identifier sent on the wire to the completion endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Gpt4o => "gpt-4o",
            ModelId::Gpt4Turbo => "gpt-4-turbo",
            ModelId::Gpt35Turbo => "gpt-3.5-turbo",
        }
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ModelId {
    type Err = ModelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gpt-4o" => Ok(ModelId::Gpt4o),
            "gpt-4-turbo" => Ok(ModelId::Gpt4Turbo),
            "gpt-3.5-turbo" => Ok(ModelId::Gpt35Turbo),
            other => Err(ModelParseError::Unknown(other.to_owned())),
        }
    }
}

/// Client for an OpenAI-compatible chat-completion service.
///
/// One instance is shared across the whole process. The bearer credential is
/// read once at construction and never validated eagerly; a missing key
/// surfaces as an authentication failure from the first call. There are no
/// retries and no explicit timeout beyond transport defaults.
#[derive(Clone)]
pub struct CompletionClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl CompletionClient {
    /// Creates a client from `OPENAI_API_KEY` and (optionally)
    /// `OPENAI_BASE_URL` in the environment.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        Self::new(base_url, api_key)
    }

    /// Creates a client against an explicit endpoint, used by tests to point
    /// at a mock server.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Issues a single chat-completion request and returns the generated text.
    ///
    /// # Errors
    ///
    /// - `CompletionError::Network` if the request never got a response
    /// - `CompletionError::Auth` on a 401 or 403 from the endpoint
    /// - `CompletionError::Upstream` on any other non-success status
    /// - `CompletionError::MalformedResponse` if the body cannot be decoded
    ///   or carries no message content
    pub async fn complete(
        &self,
        model: ModelId,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, CompletionError> {
        let payload = serde_json::json!({
            "model": model.as_str(),
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt }
            ],
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
        });

        let mut headers = HeaderMap::new();
        if let Ok(auth_value) = format!("Bearer {}", self.api_key).parse() {
            headers.insert(AUTHORIZATION, auth_value);
        }

        let res = self
            .http
            .post(format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                COMPLETIONS_PATH
            ))
            .headers(headers)
            .json(&payload)
            .send()
            .await
            .map_err(CompletionError::Network)?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                return Err(CompletionError::Auth {
                    status: status.as_u16(),
                    body,
                });
            }
            return Err(CompletionError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionRes = res
            .json()
            .await
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                CompletionError::MalformedResponse("response contained no choices".to_owned())
            })
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionRes {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}
