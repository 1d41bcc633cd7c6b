//! Kie.ai provider backend.
//!
//! Uses the Kie.ai music generation task API: generation starts a
//! provider-side task and results are fetched by polling the task record.
//!
//! ```no_run
//! # use medley_media::MediaManager;
//! # use medley_media_providers::kie::KieProvider;
//! # use std::sync::Arc;
//! # let mut manager = MediaManager::new();
//!
//! manager.register_default(Arc::new(KieProvider::from_env("KIE_API_KEY")));
//! ```

mod client;
mod provider;
mod types;

pub use provider::KieProvider;
