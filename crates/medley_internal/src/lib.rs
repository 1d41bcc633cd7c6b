//! # Medley Internal Library
//!
//! Re-exports the core Medley crates for convenience.

/// Core types, provider contract, and the media manager.
pub use medley_media;

/// Provider backend implementations.
pub use medley_media_providers;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use medley_media::media::{
        GenerateParams, GenerationError, MediaProvider, MediaType, TaskInfo, TaskQuery,
        TaskResult, TaskStatus, Track,
    };
    pub use medley_media::{DispatchError, MediaManager, ProviderConfigs};
}
