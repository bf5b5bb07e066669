//! Vertex AI Gemini client.
//!
//! Talks to the `generateContent` REST endpoint of a Vertex AI publisher
//! model and extracts the first text part of the first candidate.
//!
//! Requests are authorized with a bearer token. A token set in the
//! configuration is used verbatim; otherwise one is taken per request from
//! Application Default Credentials, which cache and refresh it.

use std::sync::Arc;

use async_trait::async_trait;
use gcp_auth::TokenProvider;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use super::{GenerationError, SamplingConfig, TextGenerator};
use crate::core::config::VertexConfig;

/// Location served by the un-prefixed global endpoint.
const GLOBAL_LOCATION: &str = "global";

/// OAuth scope required by Vertex AI.
const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Where bearer tokens come from.
enum Credentials {
    /// A fixed token from the environment.
    Static(String),
    /// Application Default Credentials, resolved on first use.
    ApplicationDefault(OnceCell<Arc<dyn TokenProvider>>),
}

impl Credentials {
    async fn bearer_token(&self) -> Result<String, GenerationError> {
        match self {
            Self::Static(token) => Ok(token.clone()),
            Self::ApplicationDefault(provider) => {
                let provider = provider.get_or_try_init(gcp_auth::provider).await?;
                let token = provider.token(&[CLOUD_PLATFORM_SCOPE]).await?;
                Ok(token.as_str().to_string())
            }
        }
    }
}

/// Vertex AI `generateContent` client.
pub struct VertexClient {
    http: reqwest::Client,
    endpoint: String,
    credentials: Credentials,
    sampling: SamplingConfig,
}

impl VertexClient {
    /// Create a client for the configured project, location and model.
    pub fn new(config: &VertexConfig, sampling: SamplingConfig) -> Result<Self, GenerationError> {
        let credentials = match &config.access_token {
            Some(token) => {
                info!("Using access token from GOOGLE_CLOUD_ACCESS_TOKEN");
                Credentials::Static(token.clone())
            }
            None => {
                if config.credentials_file.is_none() {
                    warn!(
                        "GOOGLE_APPLICATION_CREDENTIALS not set. Using application default credentials."
                    );
                }
                Credentials::ApplicationDefault(OnceCell::new())
            }
        };

        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint_for(config),
            credentials,
            sampling,
        })
    }

    /// The `generateContent` URL this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, body: &GenerateContentRequest) -> Result<String, GenerationError> {
        debug!("POST {}", self.endpoint);

        let token = self.credentials.bearer_token().await?;
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status { status, body });
        }

        let reply: GenerateContentResponse = response.json().await?;
        extract_text(reply)
    }
}

#[async_trait]
impl TextGenerator for VertexClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = GenerateContentRequest::new(prompt, &self.sampling, true);
        self.send(&body).await
    }

    async fn generate_current(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = GenerateContentRequest::new(prompt, &self.sampling, false);
        self.send(&body).await
    }
}

/// Build the `generateContent` URL for a configuration.
///
/// The global location uses `aiplatform.googleapis.com`; regional locations
/// use their `{location}-` prefixed host.
pub fn endpoint_for(config: &VertexConfig) -> String {
    let host = if config.location == GLOBAL_LOCATION {
        "aiplatform.googleapis.com".to_string()
    } else {
        format!("{}-aiplatform.googleapis.com", config.location)
    };

    format!(
        "https://{}/v1/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
        host, config.project_id, config.location, config.model
    )
}

fn extract_text(reply: GenerateContentResponse) -> Result<String, GenerationError> {
    let candidate = reply
        .candidates
        .into_iter()
        .next()
        .ok_or(GenerationError::NoCandidates)?;

    candidate
        .content
        .and_then(|content| content.parts.into_iter().next())
        .map(|part| part.text)
        .ok_or(GenerationError::NoParts)
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    generation_config: RequestGenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    role: &'static str,
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestGenerationConfig {
    temperature: f32,
    top_p: f32,
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    include_thoughts: bool,
}

impl GenerateContentRequest {
    fn new(prompt: &str, sampling: &SamplingConfig, with_thinking: bool) -> Self {
        Self {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: RequestGenerationConfig {
                temperature: sampling.temperature,
                top_p: sampling.top_p,
                max_output_tokens: sampling.max_output_tokens,
                thinking_config: with_thinking.then(|| ThinkingConfig {
                    include_thoughts: sampling.include_thoughts,
                }),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vertex_config(location: &str) -> VertexConfig {
        VertexConfig {
            project_id: "demo-project".to_string(),
            location: location.to_string(),
            model: "gemini-2.0-flash".to_string(),
            access_token: None,
            credentials_file: None,
        }
    }

    #[test]
    fn test_endpoint_global() {
        assert_eq!(
            endpoint_for(&vertex_config("global")),
            "https://aiplatform.googleapis.com/v1/projects/demo-project/locations/global/publishers/google/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_endpoint_regional() {
        let endpoint = endpoint_for(&vertex_config("us-central1"));
        assert!(endpoint.starts_with("https://us-central1-aiplatform.googleapis.com/"));
        assert!(endpoint.contains("/locations/us-central1/"));
    }

    #[test]
    fn test_request_body_with_thinking() {
        let body = GenerateContentRequest::new("hello", &SamplingConfig::default(), true);
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 8192);
        assert_eq!(
            value["generationConfig"]["thinkingConfig"],
            json!({ "includeThoughts": false })
        );
    }

    #[test]
    fn test_request_body_without_thinking() {
        let body = GenerateContentRequest::new("hello", &SamplingConfig::default(), false);
        let value = serde_json::to_value(&body).unwrap();
        assert!(value["generationConfig"].get("thinkingConfig").is_none());
        assert!(value["generationConfig"].get("topP").is_some());
    }

    #[test]
    fn test_extract_text_first_part() {
        let reply: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "first" }, { "text": "second" }] } },
                { "content": { "parts": [{ "text": "other candidate" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(extract_text(reply).unwrap(), "first");
    }

    #[test]
    fn test_extract_text_no_candidates() {
        let reply: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(
            extract_text(reply),
            Err(GenerationError::NoCandidates)
        ));
    }

    #[test]
    fn test_extract_text_no_parts() {
        let reply: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        }))
        .unwrap();
        assert!(matches!(extract_text(reply), Err(GenerationError::NoParts)));
    }

    #[test]
    fn test_client_keeps_endpoint() {
        let client = VertexClient::new(&vertex_config("global"), SamplingConfig::default()).unwrap();
        assert!(client.endpoint().ends_with("gemini-2.0-flash:generateContent"));
        assert!(matches!(
            client.credentials,
            Credentials::ApplicationDefault(_)
        ));
    }

    #[tokio::test]
    async fn test_configured_token_overrides_default_credentials() {
        let mut config = vertex_config("global");
        config.access_token = Some("ya29.static".to_string());
        let client = VertexClient::new(&config, SamplingConfig::default()).unwrap();

        assert_eq!(
            client.credentials.bearer_token().await.unwrap(),
            "ya29.static"
        );
    }
}
