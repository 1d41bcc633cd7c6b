//! Kie.ai API client.

use super::types::{GenerateMusicRequest, GenerateTaskData, KieEnvelope};
use medley_media::media::GenerationError;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

/// HTTP client for the Kie.ai task API.
#[derive(Clone)]
pub struct KieClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl KieClient {
    /// Creates a new client.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.kie.ai".to_string(),
        }
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Starts a music generation task.
    pub async fn start_generation(
        &self,
        request: &GenerateMusicRequest,
    ) -> Result<GenerateTaskData, GenerationError> {
        let url = format!("{}/api/v1/generate", self.base_url);
        let data = self.execute(self.client.post(&url).json(request)).await?;

        serde_json::from_value(data).map_err(|err| {
            GenerationError::InvalidResponse(format!("failed to parse generate response: {err}"))
        })
    }

    /// Fetches the record of a previously started task.
    ///
    /// Returns the raw `data` payload; callers parse the parts they need and
    /// keep the rest intact.
    pub async fn record_info(&self, task_id: &str) -> Result<Value, GenerationError> {
        let url = format!("{}/api/v1/generate/record-info", self.base_url);
        self.execute(self.client.get(&url).query(&[("taskId", task_id)]))
            .await
    }

    /// Sends a request and unwraps the Kie response envelope.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value, GenerationError> {
        let response = request
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|err| GenerationError::Http(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| GenerationError::Http(err.to_string()))?;

        if status.as_u16() == 401 {
            return Err(GenerationError::Auth(body));
        }

        if !status.is_success() {
            return Err(GenerationError::Provider {
                status: Some(status.as_u16()),
                message: body,
                source: None,
            });
        }

        let envelope: KieEnvelope = serde_json::from_str(&body).map_err(|err| {
            GenerationError::InvalidResponse(format!(
                "failed to parse response: {err}\nbody: {body}"
            ))
        })?;

        // The API reports failures inside the envelope even on HTTP 200.
        if envelope.code != 200 {
            return Err(GenerationError::Provider {
                status: None,
                message: format!("kie error {}: {}", envelope.code, envelope.msg),
                source: None,
            });
        }

        envelope
            .data
            .ok_or_else(|| GenerationError::InvalidResponse("kie response has no data".to_string()))
    }
}

impl core::fmt::Debug for KieClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KieClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
