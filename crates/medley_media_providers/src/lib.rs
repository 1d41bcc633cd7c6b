//! Provider backends for the Medley media manager.
//!
//! Each backend implements [`MediaProvider`](medley_media::media::MediaProvider) and registers with a
//! [`MediaManager`](medley_media::MediaManager) at startup, giving request handlers uniform access to different
//! generation services.
//!
//! # Supported Providers
//!
//! | Provider | Feature Flag | Description |
//! |----------|--------------|-------------|
//! | Kie.ai | `kie` (default) | Music generation via the Kie.ai task API |
//!
//! # Feature Flags
//!
//! Each provider is gated behind a feature flag to avoid pulling in unnecessary dependencies.
//!
//! ```toml
//! # Enable only Kie.ai (default)
//! medley_media_providers = { path = "../medley_media_providers" }
//! ```
//!
//! # Usage
//!
//! ```no_run
//! # #[cfg(feature = "kie")]
//! # {
//! use medley_media::MediaManager;
//! use medley_media_providers::KieProvider;
//! use std::sync::Arc;
//!
//! let mut manager = MediaManager::new();
//! manager.register_default(Arc::new(KieProvider::from_env("KIE_API_KEY")));
//! # }
//! ```

#[cfg(feature = "kie")]
pub mod kie;

#[cfg(feature = "kie")]
pub use kie::KieProvider;
