//! Wire types for the Kie.ai task API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The envelope every Kie response arrives in.
#[derive(Debug, Deserialize)]
pub(crate) struct KieEnvelope {
    pub code: i64,
    pub msg: String,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Request body for `POST /api/v1/generate`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateMusicRequest {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub custom_mode: bool,
    pub instrumental: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_back_url: Option<String>,
}

/// Provider-specific knobs accepted through `GenerateParams::options`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct GenerateOptions {
    pub style: Option<String>,
    pub title: Option<String>,
    pub custom_mode: Option<bool>,
    pub instrumental: Option<bool>,
}

/// `data` payload of a successful generate call.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateTaskData {
    pub task_id: String,
}

/// `data` payload of a record-info call.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecordInfoData {
    pub task_id: String,
    pub status: String,
    #[serde(default)]
    pub response: Option<RecordInfoResponse>,
    // The API reports numeric or string error codes depending on the failure.
    #[serde(default)]
    pub error_code: Option<Value>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub create_time: Option<i64>,
}

/// Generated output attached to a task record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecordInfoResponse {
    #[serde(default)]
    pub suno_data: Option<Vec<SunoTrack>>,
}

/// One generated track as Kie reports it.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct SunoTrack {
    pub id: Option<String>,
    pub audio_url: Option<String>,
    pub stream_audio_url: Option<String>,
    pub image_url: Option<String>,
    pub prompt: Option<String>,
    pub model_name: Option<String>,
    pub title: Option<String>,
    pub tags: Option<String>,
    pub create_time: Option<i64>,
    pub duration: Option<f64>,
}
