//! The [`MediaProvider`] trait for media generation backends.

use super::error::GenerationError;
use super::types::{GenerateParams, ProviderConfigs, TaskResult};
use async_trait::async_trait;

/// Trait implemented by media generation backends.
///
/// Every provider can start generation tasks. Task polling is optional:
/// providers that support it expose the [`TaskQuery`] capability through
/// [`task_query`](Self::task_query), and the manager checks for it before
/// dispatching a query.
#[async_trait]
pub trait MediaProvider: Send + Sync + 'static {
    /// The provider's name, used for lookup by the manager.
    ///
    /// Expected to be unique among registered providers; uniqueness is not
    /// enforced at registration.
    fn name(&self) -> &str;

    /// The provider's configuration blob.
    ///
    /// Opaque to the manager; the shape is provider-specific.
    fn configs(&self) -> &ProviderConfigs;

    /// Starts a generation task.
    ///
    /// # Arguments
    ///
    /// * `params` - The generation request
    async fn generate(&self, params: GenerateParams) -> Result<TaskResult, GenerationError>;

    /// Returns the task-query capability, if this provider supports polling.
    fn task_query(&self) -> Option<&dyn TaskQuery> {
        None
    }
}

/// Optional provider capability for polling task state.
#[async_trait]
pub trait TaskQuery: Send + Sync {
    /// Fetches the current state of a previously started task.
    ///
    /// # Arguments
    ///
    /// * `task_id` - The provider-assigned task identifier
    async fn query(&self, task_id: &str) -> Result<TaskResult, GenerationError>;
}
