use crate::domain::StoreConfig;
use crate::ports::DescriptorStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: DescriptorStore> {
    config: StoreConfig,
    store: S,
}

impl<S: DescriptorStore> AppContext<S> {
    /// Create a new application context.
    pub fn new(config: StoreConfig, store: S) -> Self {
        Self { config, store }
    }

    /// Get a reference to the store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Get a reference to the descriptor store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
