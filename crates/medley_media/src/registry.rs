//! Media provider registry.

use crate::error::DispatchError;
use crate::media::{GenerateParams, MediaProvider, MediaType, TaskResult};
use parking_lot::RwLock;
use std::sync::Arc;

/// Registry and dispatch point for media generation providers.
///
/// # For Consumers
///
/// Call [`generate()`](Self::generate) and [`query()`](Self::query) with an
/// optional provider name. Named requests resolve by exact name match;
/// unnamed requests go to the default provider.
///
/// # For Provider Authors
///
/// Providers implement [`MediaProvider`] and are registered once at startup,
/// before the manager is shared with request-handling code. Registration
/// takes `&mut self`; dispatch takes `&self`, so the borrow checker enforces
/// that registration happens before concurrent use.
///
/// ```
/// # use medley_media::MediaManager;
/// # use medley_media::media::{GenerateParams, GenerationError, MediaProvider, ProviderConfigs, TaskResult, TaskStatus};
/// # use async_trait::async_trait;
/// # use std::sync::Arc;
///
/// # struct MyProvider { configs: ProviderConfigs }
///
/// # impl MyProvider { fn new() -> Self { Self { configs: ProviderConfigs::new() } } }
///
/// # #[async_trait]
/// # impl MediaProvider for MyProvider {
/// #   fn name(&self) -> &str { "my_provider" }
/// #   fn configs(&self) -> &ProviderConfigs { &self.configs }
/// #   async fn generate(&self, _params: GenerateParams) -> Result<TaskResult, GenerationError> {
/// #     unimplemented!()
/// #   }
/// # }
///
/// let mut manager = MediaManager::new();
/// manager.register_default(Arc::new(MyProvider::new()));
///
/// assert_eq!(manager.provider_names(), vec!["my_provider".to_string()]);
/// ```
#[derive(Default)]
pub struct MediaManager {
    // Providers in registration order. Names are not checked for
    // uniqueness; lookup returns the first match.
    providers: Vec<Arc<dyn MediaProvider>>,
    // Explicitly configured default, or the memoized first-registered
    // fallback once `default_provider()` has resolved it.
    default_provider: RwLock<Option<Arc<dyn MediaProvider>>>,
}

impl core::fmt::Debug for MediaManager {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MediaManager")
            .field("providers", &self.provider_names())
            .finish()
    }
}

impl MediaManager {
    /// Creates an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider.
    ///
    /// Providers are kept in registration order. Registering a second
    /// provider under an already-used name is not an error; lookups return
    /// the earlier registration.
    pub fn register<P: MediaProvider>(&mut self, provider: Arc<P>) {
        self.providers.push(provider as Arc<dyn MediaProvider>);
    }

    /// Registers a provider and makes it the default.
    ///
    /// The last provider registered through this method wins; an earlier
    /// default is silently replaced.
    pub fn register_default<P: MediaProvider>(&mut self, provider: Arc<P>) {
        let provider = provider as Arc<dyn MediaProvider>;
        self.providers.push(Arc::clone(&provider));
        *self.default_provider.get_mut() = Some(provider);
    }

    /// Returns a provider by name.
    ///
    /// Scans providers in registration order and returns the first match.
    #[must_use]
    pub fn get_provider(&self, name: impl AsRef<str>) -> Option<Arc<dyn MediaProvider>> {
        let name = name.as_ref();
        self.providers.iter().find(|p| p.name() == name).cloned()
    }

    /// Checks if a provider is registered.
    #[must_use]
    pub fn has_provider(&self, name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        self.providers.iter().any(|p| p.name() == name)
    }

    /// Lists registered provider names in registration order.
    ///
    /// Duplicate names appear as often as they were registered.
    #[must_use]
    pub fn provider_names(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name().to_string()).collect()
    }

    /// Lists the media types requests can ask for.
    #[must_use]
    pub fn media_types(&self) -> &'static [MediaType] {
        &MediaType::ALL
    }

    /// Returns the default provider.
    ///
    /// If no default was registered explicitly, the first-registered
    /// provider is chosen on first access and memoized for the manager's
    /// lifetime. Returns `None` if the manager is empty.
    #[must_use]
    pub fn default_provider(&self) -> Option<Arc<dyn MediaProvider>> {
        if let Some(provider) = self.default_provider.read().clone() {
            return Some(provider);
        }

        // Double-checked under the write lock so concurrent first accesses
        // memoize the same provider.
        let mut slot = self.default_provider.write();
        if slot.is_none() {
            *slot = self.providers.first().cloned();
        }
        slot.clone()
    }

    /// Starts a generation task on the named or default provider.
    ///
    /// The provider's result is returned unmodified; the manager adds no
    /// retry, timeout, or validation.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::ProviderNotFound`] if `provider` names an
    /// unregistered provider, [`DispatchError::NoProviderConfigured`] if no
    /// name was given and the manager is empty, and passes provider
    /// failures through untouched.
    pub async fn generate(
        &self,
        params: GenerateParams,
        provider: Option<&str>,
    ) -> Result<TaskResult, DispatchError> {
        let provider = self.resolve(provider)?;
        Ok(provider.generate(params).await?)
    }

    /// Polls a task on the named or default provider.
    ///
    /// # Errors
    ///
    /// Resolution errors are as for [`generate()`](Self::generate). Also
    /// returns [`DispatchError::QueryUnsupported`] if the resolved provider
    /// has no [`TaskQuery`](crate::media::TaskQuery) capability; in that
    /// case no provider operation is invoked.
    pub async fn query(
        &self,
        task_id: &str,
        provider: Option<&str>,
    ) -> Result<TaskResult, DispatchError> {
        let provider = self.resolve(provider)?;
        let query = provider
            .task_query()
            .ok_or_else(|| DispatchError::QueryUnsupported(provider.name().to_string()))?;
        Ok(query.query(task_id).await?)
    }

    fn resolve(&self, provider: Option<&str>) -> Result<Arc<dyn MediaProvider>, DispatchError> {
        match provider {
            Some(name) => self
                .get_provider(name)
                .ok_or_else(|| DispatchError::ProviderNotFound(name.to_string())),
            None => self
                .default_provider()
                .ok_or(DispatchError::NoProviderConfigured),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{GenerationError, ProviderConfigs, TaskInfo, TaskQuery, TaskStatus, Track};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubProvider {
        name: &'static str,
        configs: ProviderConfigs,
        queryable: bool,
        generate_calls: AtomicUsize,
        query_calls: AtomicUsize,
    }

    impl StubProvider {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                configs: ProviderConfigs::new(),
                queryable: false,
                generate_calls: AtomicUsize::new(0),
                query_calls: AtomicUsize::new(0),
            }
        }

        fn queryable(name: &'static str) -> Self {
            Self {
                queryable: true,
                ..Self::new(name)
            }
        }

        fn generate_count(&self) -> usize {
            self.generate_calls.load(Ordering::SeqCst)
        }

        fn query_count(&self) -> usize {
            self.query_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MediaProvider for StubProvider {
        fn name(&self) -> &str {
            self.name
        }

        fn configs(&self) -> &ProviderConfigs {
            &self.configs
        }

        async fn generate(&self, _params: GenerateParams) -> Result<TaskResult, GenerationError> {
            self.generate_calls.fetch_add(1, Ordering::SeqCst);
            Ok(TaskResult::new(
                TaskStatus::Pending,
                format!("{}-task", self.name),
            ))
        }

        fn task_query(&self) -> Option<&dyn TaskQuery> {
            self.queryable.then_some(self as &dyn TaskQuery)
        }
    }

    #[async_trait]
    impl TaskQuery for StubProvider {
        async fn query(&self, task_id: &str) -> Result<TaskResult, GenerationError> {
            self.query_calls.fetch_add(1, Ordering::SeqCst);
            Ok(TaskResult::new(TaskStatus::Success, task_id))
        }
    }

    fn params() -> GenerateParams {
        GenerateParams::new(MediaType::Music, "a rainy lo-fi beat")
    }

    #[test]
    fn provider_names_keep_registration_order_and_duplicates() {
        let mut manager = MediaManager::new();
        manager.register(Arc::new(StubProvider::new("alpha")));
        manager.register(Arc::new(StubProvider::new("beta")));
        manager.register(Arc::new(StubProvider::new("alpha")));

        assert_eq!(manager.provider_names(), vec!["alpha", "beta", "alpha"]);
        assert!(manager.has_provider("beta"));
        assert!(!manager.has_provider("gamma"));
    }

    #[test]
    fn lookup_returns_first_match_on_duplicate_names() {
        let first = Arc::new(StubProvider::new("dup"));
        let second = Arc::new(StubProvider::new("dup"));

        let mut manager = MediaManager::new();
        manager.register(Arc::clone(&first));
        manager.register(Arc::clone(&second));

        let found = manager.get_provider("dup").unwrap();
        assert!(Arc::ptr_eq(
            &found,
            &(first as Arc<dyn MediaProvider>)
        ));
    }

    #[test]
    fn media_types_lists_fixed_enumeration() {
        let manager = MediaManager::new();
        let names: Vec<&str> = manager.media_types().iter().map(MediaType::as_str).collect();
        assert_eq!(names, vec!["music", "image", "video", "text", "speech"]);
    }

    #[test]
    fn default_is_none_on_empty_manager() {
        let manager = MediaManager::new();
        assert!(manager.default_provider().is_none());
    }

    #[test]
    fn default_falls_back_to_first_registered_and_memoizes() {
        let first = Arc::new(StubProvider::new("first"));

        let mut manager = MediaManager::new();
        manager.register(Arc::clone(&first));
        manager.register(Arc::new(StubProvider::new("second")));

        let resolved = manager.default_provider().unwrap();
        assert!(Arc::ptr_eq(
            &resolved,
            &(Arc::clone(&first) as Arc<dyn MediaProvider>)
        ));

        // Later registrations do not disturb the memoized fallback.
        manager.register(Arc::new(StubProvider::new("third")));
        let again = manager.default_provider().unwrap();
        assert!(Arc::ptr_eq(&again, &(first as Arc<dyn MediaProvider>)));
    }

    #[test]
    fn explicit_default_wins_and_last_registration_takes_over() {
        let second = Arc::new(StubProvider::new("second"));
        let third = Arc::new(StubProvider::new("third"));

        let mut manager = MediaManager::new();
        manager.register(Arc::new(StubProvider::new("first")));
        manager.register_default(Arc::clone(&second));
        manager.register_default(Arc::clone(&third));

        let resolved = manager.default_provider().unwrap();
        assert!(Arc::ptr_eq(&resolved, &(third as Arc<dyn MediaProvider>)));
        assert_eq!(manager.provider_names(), vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn generate_routes_to_explicit_default_only() {
        let plain = Arc::new(StubProvider::new("plain"));
        let preferred = Arc::new(StubProvider::new("preferred"));

        let mut manager = MediaManager::new();
        manager.register(Arc::clone(&plain));
        manager.register_default(Arc::clone(&preferred));

        let result = manager.generate(params(), None).await.unwrap();

        assert_eq!(result.task_id, "preferred-task");
        assert_eq!(preferred.generate_count(), 1);
        assert_eq!(plain.generate_count(), 0);
    }

    #[tokio::test]
    async fn generate_with_unknown_name_fails_without_dispatch() {
        let registered = Arc::new(StubProvider::new("registered"));

        let mut manager = MediaManager::new();
        manager.register(Arc::clone(&registered));

        let err = manager.generate(params(), Some("missing")).await.unwrap_err();

        assert!(matches!(err, DispatchError::ProviderNotFound(name) if name == "missing"));
        assert_eq!(registered.generate_count(), 0);
    }

    #[tokio::test]
    async fn generate_on_empty_manager_fails() {
        let manager = MediaManager::new();

        let err = manager.generate(params(), None).await.unwrap_err();

        assert!(matches!(err, DispatchError::NoProviderConfigured));
    }

    #[tokio::test]
    async fn query_without_capability_fails_without_dispatch() {
        let plain = Arc::new(StubProvider::new("plain"));

        let mut manager = MediaManager::new();
        manager.register(Arc::clone(&plain));

        let err = manager.query("task-1", Some("plain")).await.unwrap_err();

        assert!(matches!(err, DispatchError::QueryUnsupported(name) if name == "plain"));
        assert_eq!(plain.generate_count(), 0);
        assert_eq!(plain.query_count(), 0);
    }

    #[tokio::test]
    async fn query_routes_to_capable_provider() {
        let poller = Arc::new(StubProvider::queryable("poller"));

        let mut manager = MediaManager::new();
        manager.register(Arc::clone(&poller));

        let result = manager.query("task-7", None).await.unwrap();

        assert_eq!(result.task_id, "task-7");
        assert_eq!(result.status, TaskStatus::Success);
        assert_eq!(poller.query_count(), 1);
    }

    #[tokio::test]
    async fn provider_results_pass_through_unmodified() {
        struct RichProvider {
            configs: ProviderConfigs,
        }

        #[async_trait]
        impl MediaProvider for RichProvider {
            fn name(&self) -> &str {
                "rich"
            }

            fn configs(&self) -> &ProviderConfigs {
                &self.configs
            }

            async fn generate(
                &self,
                _params: GenerateParams,
            ) -> Result<TaskResult, GenerationError> {
                Ok(rich_result())
            }
        }

        fn rich_result() -> TaskResult {
            TaskResult::new(TaskStatus::Success, "task-42")
                .with_info(TaskInfo {
                    tracks: Some(vec![Track {
                        id: Some("trk-1".to_string()),
                        create_time: Some(1_754_000_000_000),
                        audio_url: "https://cdn.example.com/trk-1.mp3".to_string(),
                        image_url: "https://cdn.example.com/trk-1.png".to_string(),
                        duration: 183.4,
                        prompt: "a rainy lo-fi beat".to_string(),
                        title: "Rainfall".to_string(),
                        tags: "lo-fi, chill".to_string(),
                        style: "lo-fi".to_string(),
                        model: Some("v2".to_string()),
                        artist: None,
                        album: None,
                    }]),
                    status: Some("SUCCESS".to_string()),
                    error_code: None,
                    error_message: None,
                    create_time: Some(1_754_000_000_000),
                })
                .with_raw(json!({"vendor": {"quota": 3}}))
        }

        let mut manager = MediaManager::new();
        manager.register(Arc::new(RichProvider {
            configs: ProviderConfigs::new(),
        }));

        let result = manager.generate(params(), Some("rich")).await.unwrap();

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::to_value(rich_result()).unwrap()
        );
    }

    #[tokio::test]
    async fn provider_errors_propagate_untouched() {
        struct FailingProvider {
            configs: ProviderConfigs,
        }

        #[async_trait]
        impl MediaProvider for FailingProvider {
            fn name(&self) -> &str {
                "failing"
            }

            fn configs(&self) -> &ProviderConfigs {
                &self.configs
            }

            async fn generate(
                &self,
                _params: GenerateParams,
            ) -> Result<TaskResult, GenerationError> {
                Err(GenerationError::Auth("bad api key".to_string()))
            }
        }

        let mut manager = MediaManager::new();
        manager.register(Arc::new(FailingProvider {
            configs: ProviderConfigs::new(),
        }));

        let err = manager.generate(params(), None).await.unwrap_err();

        assert!(matches!(
            err,
            DispatchError::Generation(GenerationError::Auth(message)) if message == "bad api key"
        ));
    }
}
