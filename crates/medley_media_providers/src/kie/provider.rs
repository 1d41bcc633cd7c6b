//! Kie.ai [`MediaProvider`] implementation.

use super::client::KieClient;
use super::types::{GenerateMusicRequest, GenerateOptions, RecordInfoData, SunoTrack};
use async_trait::async_trait;
use medley_media::ProviderConfigs;
use medley_media::media::{
    GenerateParams, GenerationError, MediaProvider, MediaType, TaskInfo, TaskQuery, TaskResult,
    TaskStatus, Track,
};
use serde_json::Value;

/// Kie.ai [`MediaProvider`] implementation.
///
/// Generation is asynchronous on the provider side: `generate` returns a
/// pending task and callers poll it through the [`TaskQuery`] capability.
#[derive(Debug)]
pub struct KieProvider {
    configs: ProviderConfigs,
    default_model: Option<String>,
    client: KieClient,
}

impl KieProvider {
    /// Creates a new provider.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            configs: ProviderConfigs::new(),
            default_model: None,
            client: KieClient::new(api_key),
        }
    }

    /// Creates a provider that reads the API key from the specified
    /// environment variable.
    ///
    /// # Panics
    ///
    /// Panics if the environment variable is not set.
    #[must_use]
    pub fn from_env(env_var: &str) -> Self {
        let api_key = std::env::var(env_var).unwrap_or_else(|_| {
            panic!(
                "Environment variable {env_var} for KieProvider not set. Please set it to your Kie.ai API key."
            );
        });
        Self::new(api_key)
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.configs
            .insert("base_url".to_string(), Value::String(base_url.clone()));
        self.client = self.client.with_base_url(base_url);
        self
    }

    /// Sets the model used when a request names none.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        self.configs
            .insert("model".to_string(), Value::String(model.clone()));
        self.default_model = Some(model);
        self
    }
}

#[async_trait]
impl MediaProvider for KieProvider {
    fn name(&self) -> &str {
        "kie"
    }

    fn configs(&self) -> &ProviderConfigs {
        &self.configs
    }

    async fn generate(&self, params: GenerateParams) -> Result<TaskResult, GenerationError> {
        let request = convert_request(&params, self.default_model.as_deref())?;

        let task = self.client.start_generation(&request).await?;

        Ok(TaskResult::new(TaskStatus::Pending, task.task_id))
    }

    fn task_query(&self) -> Option<&dyn TaskQuery> {
        Some(self)
    }
}

#[async_trait]
impl TaskQuery for KieProvider {
    async fn query(&self, task_id: &str) -> Result<TaskResult, GenerationError> {
        let data = self.client.record_info(task_id).await?;

        let record: RecordInfoData = serde_json::from_value(data.clone()).map_err(|err| {
            GenerationError::InvalidResponse(format!("failed to parse task record: {err}"))
        })?;

        Ok(convert_record(record, data))
    }
}

fn convert_request(
    params: &GenerateParams,
    default_model: Option<&str>,
) -> Result<GenerateMusicRequest, GenerationError> {
    if params.media_type != MediaType::Music {
        return Err(GenerationError::UnsupportedMedia(format!(
            "Kie cannot generate {} content",
            params.media_type
        )));
    }

    let options: GenerateOptions = match params.options.clone() {
        Some(value) => serde_json::from_value(value).map_err(|err| {
            GenerationError::InvalidRequest(format!("malformed kie options: {err}"))
        })?,
        None => GenerateOptions::default(),
    };

    // Style or title implies the caller wants custom mode unless they said
    // otherwise.
    let custom_mode = options
        .custom_mode
        .unwrap_or(options.style.is_some() || options.title.is_some());

    Ok(GenerateMusicRequest {
        prompt: params.prompt.clone(),
        style: options.style,
        title: options.title,
        custom_mode,
        instrumental: options.instrumental.unwrap_or(false),
        model: params
            .model
            .clone()
            .or_else(|| default_model.map(str::to_string)),
        call_back_url: params.callback_url.clone(),
    })
}

fn convert_record(record: RecordInfoData, raw: Value) -> TaskResult {
    let status = convert_status(&record.status);

    let tracks = record
        .response
        .and_then(|response| response.suno_data)
        .map(|tracks| tracks.into_iter().map(convert_track).collect());

    TaskResult {
        status,
        task_id: record.task_id,
        info: Some(TaskInfo {
            tracks,
            status: Some(record.status),
            error_code: record.error_code.map(|code| match code {
                Value::String(code) => code,
                other => other.to_string(),
            }),
            error_message: record.error_message,
            create_time: record.create_time,
        }),
        raw: Some(raw),
    }
}

fn convert_status(status: &str) -> TaskStatus {
    match status {
        "PENDING" => TaskStatus::Pending,
        "TEXT_SUCCESS" | "FIRST_SUCCESS" => TaskStatus::Processing,
        "SUCCESS" => TaskStatus::Success,
        "CREATE_TASK_FAILED" | "GENERATE_AUDIO_FAILED" | "CALLBACK_EXCEPTION"
        | "SENSITIVE_WORD_ERROR" => TaskStatus::Failed,
        other => {
            tracing::warn!("unknown kie task status '{other}', treating as processing");
            TaskStatus::Processing
        }
    }
}

fn convert_track(track: SunoTrack) -> Track {
    Track {
        id: track.id,
        create_time: track.create_time,
        // Finished tracks carry audioUrl; in-flight ones only stream.
        audio_url: track
            .audio_url
            .or(track.stream_audio_url)
            .unwrap_or_default(),
        image_url: track.image_url.unwrap_or_default(),
        duration: track.duration.unwrap_or(0.0),
        prompt: track.prompt.unwrap_or_default(),
        title: track.title.unwrap_or_default(),
        // Kie reports style only through the tag list.
        tags: track.tags.clone().unwrap_or_default(),
        style: track.tags.unwrap_or_default(),
        model: track.model_name,
        artist: None,
        album: None,
    }
}
