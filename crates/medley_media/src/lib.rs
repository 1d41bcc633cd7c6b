//! Media provider interface and registry for Medley.
//!
//! Provides a unified interface for AI media generation, decoupling consumers
//! from provider implementations.
//!
//! # Overview
//!
//! - Provider-agnostic: Consumers depend only on this crate, not specific
//!   provider backends.
//!
//! - Named dispatch with a default: Requests route to a provider by name, or
//!   to a configured default when no name is given.
//!
//! - Capability-checked: Task polling is an optional provider capability,
//!   verified before dispatch.
//!
//! # Example
//!
//! ```ignore
//! use medley_media::MediaManager;
//! use medley_media::media::{GenerateParams, MediaType};
//! use std::sync::Arc;
//!
//! let mut manager = MediaManager::new();
//! manager.register_default(Arc::new(KieProvider::from_env("KIE_API_KEY")));
//!
//! let params = GenerateParams::new(MediaType::Music, "a rainy lo-fi beat");
//! let task = manager.generate(params, None).await?;
//! let status = manager.query(&task.task_id, None).await?;
//! ```

mod error;
pub mod media;
mod registry;

pub use error::DispatchError;
pub use media::ProviderConfigs;
pub use registry::MediaManager;
