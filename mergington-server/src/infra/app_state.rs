use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};
use mergington_core::ActivityRegistry;

use crate::infra::config::Config;

/// Shared handles every request handler receives.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ActivityRegistry>,
    pub config: Arc<Config>,
    pub started_at: DateTime<Utc>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("registry", &self.registry)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(config: Arc<Config>, registry: Arc<ActivityRegistry>) -> Self {
        Self {
            registry,
            config,
            started_at: Utc::now(),
        }
    }

    /// State backed by a freshly seeded registry.
    pub fn seeded(config: Arc<Config>) -> Self {
        Self::new(config, Arc::new(ActivityRegistry::seeded()))
    }

    pub fn registry(&self) -> &ActivityRegistry {
        &self.registry
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
