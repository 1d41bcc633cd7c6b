//! Shared test helpers for provider integration tests.

use std::sync::Once;

use medley_media::MediaManager;
use medley_media::media::{GenerateParams, MediaType};

static INIT: Once = Once::new();

/// Initialize environment variables from `.env` file (once).
pub fn init_env() {
    INIT.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

/// A short instrumental request that providers finish quickly.
pub fn music_params() -> GenerateParams {
    GenerateParams::new(MediaType::Music, "a short calm piano loop")
        .options(serde_json::json!({"instrumental": true}))
}

/// Starts a task on the manager's default provider and polls it once.
pub async fn start_and_poll(manager: &MediaManager) {
    let task = manager
        .generate(music_params(), None)
        .await
        .expect("generation should start a task");
    assert!(!task.task_id.is_empty(), "task should have an identifier");

    let polled = manager
        .query(&task.task_id, None)
        .await
        .expect("task should be queryable");
    assert_eq!(polled.task_id, task.task_id);
    assert!(polled.info.is_some(), "record should carry task info");
}
