//! Core types for media generation requests and results.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque provider configuration.
///
/// The shape is provider-specific; the manager never interprets it.
pub type ProviderConfigs = serde_json::Map<String, Value>;

// ─────────────────────
// Media Types
// ─────────────────────

/// The kind of media a generation request produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Music and song generation.
    Music,
    /// Still image generation.
    Image,
    /// Video generation.
    Video,
    /// Plain text generation.
    Text,
    /// Speech synthesis.
    Speech,
}

impl MediaType {
    /// All media types, in canonical order.
    pub const ALL: [MediaType; 5] = [
        MediaType::Music,
        MediaType::Image,
        MediaType::Video,
        MediaType::Text,
        MediaType::Speech,
    ];

    /// Returns the lowercase wire name of this media type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Music => "music",
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Text => "text",
            MediaType::Speech => "speech",
        }
    }
}

impl core::fmt::Display for MediaType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────
// Generation Request
// ─────────────────────

/// A media generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateParams {
    /// The kind of media to generate.
    pub media_type: MediaType,
    /// The generation prompt.
    pub prompt: String,
    /// Provider model to use, if the provider supports more than one.
    pub model: Option<String>,
    /// Provider-specific request options, forwarded uninterpreted.
    pub options: Option<Value>,
    /// URL the provider should notify when the task completes.
    pub callback_url: Option<String>,
    /// Whether the provider should stream partial results.
    pub stream: Option<bool>,
    /// Whether the provider should run the task asynchronously.
    #[serde(rename = "async")]
    pub background: Option<bool>,
}

impl GenerateParams {
    /// Creates a new generation request.
    ///
    /// # Example
    ///
    /// ```rust
    /// use medley_media::media::{GenerateParams, MediaType};
    ///
    /// let params = GenerateParams::new(MediaType::Music, "a rainy lo-fi beat");
    /// ```
    #[must_use]
    pub fn new(media_type: MediaType, prompt: impl Into<String>) -> Self {
        Self {
            media_type,
            prompt: prompt.into(),
            model: None,
            options: None,
            callback_url: None,
            stream: None,
            background: None,
        }
    }

    /// Sets the provider model.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets provider-specific request options.
    #[must_use]
    pub fn options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }

    /// Sets the completion callback URL.
    #[must_use]
    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    /// Requests streaming of partial results.
    #[must_use]
    pub fn stream(mut self, stream: bool) -> Self {
        self.stream = Some(stream);
        self
    }

    /// Requests asynchronous task execution.
    #[must_use]
    pub fn background(mut self, background: bool) -> Self {
        self.background = Some(background);
        self
    }
}

// ─────────────────────
// Task Results
// ─────────────────────

/// Lifecycle state of a generation task.
///
/// The manager carries this label through unchanged; transitions happen
/// inside provider backends and whatever polls [`query`](crate::MediaManager::query).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// The task has been accepted but not started.
    Pending,
    /// The provider is working on the task.
    Processing,
    /// The task finished and results are available.
    Success,
    /// The task failed.
    Failed,
}

/// One generated track in a task's results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Provider-assigned track identifier.
    pub id: Option<String>,
    /// Creation time in epoch milliseconds.
    pub create_time: Option<i64>,
    /// URL of the generated audio.
    pub audio_url: String,
    /// URL of the cover image.
    pub image_url: String,
    /// Duration in seconds.
    pub duration: f64,
    /// The prompt the track was generated from.
    pub prompt: String,
    /// Track title.
    pub title: String,
    /// Comma-separated style tags.
    pub tags: String,
    /// Musical style.
    pub style: String,
    /// Model that produced the track.
    pub model: Option<String>,
    /// Artist name, if assigned.
    pub artist: Option<String>,
    /// Album name, if assigned.
    pub album: Option<String>,
}

/// Structured details of a generation task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskInfo {
    /// Generated tracks, once available.
    pub tracks: Option<Vec<Track>>,
    /// The provider's own task status string.
    pub status: Option<String>,
    /// Provider error code, if the task failed.
    pub error_code: Option<String>,
    /// Provider error message, if the task failed.
    pub error_message: Option<String>,
    /// Task creation time in epoch milliseconds.
    pub create_time: Option<i64>,
}

/// The result of a `generate` or `query` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
    /// Lifecycle state of the task.
    pub status: TaskStatus,
    /// Provider-assigned task identifier.
    pub task_id: String,
    /// Structured task details, when the provider reports them.
    pub info: Option<TaskInfo>,
    /// Raw provider-specific payload, passed through unmodified.
    pub raw: Option<Value>,
}

impl TaskResult {
    /// Creates a result with no details attached.
    #[must_use]
    pub fn new(status: TaskStatus, task_id: impl Into<String>) -> Self {
        Self {
            status,
            task_id: task_id.into(),
            info: None,
            raw: None,
        }
    }

    /// Attaches structured task details.
    #[must_use]
    pub fn with_info(mut self, info: TaskInfo) -> Self {
        self.info = Some(info);
        self
    }

    /// Attaches the raw provider payload.
    #[must_use]
    pub fn with_raw(mut self, raw: Value) -> Self {
        self.raw = Some(raw);
        self
    }
}
