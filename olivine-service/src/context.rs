use std::sync::Arc;

use crate::registry::{global_registry, ServiceExecutorRegistry};

/// Which call shape a service request is dispatched through.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DispatchMode {
    /// One execution over the whole input binding stream.
    #[default]
    Bulk,
    /// One execution per individual input binding.
    Single,
}

/// Execution context for one service dispatch. Carries the configuration
/// that picks the call shape and, optionally, a registry overriding the
/// process-wide default.
#[derive(Clone, Default)]
pub struct ExecContext {
    mode: DispatchMode,
    registry: Option<Arc<ServiceExecutorRegistry>>,
}

impl ExecContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: DispatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_registry(mut self, registry: ServiceExecutorRegistry) -> Self {
        self.registry = Some(Arc::new(registry));
        self
    }

    pub fn mode(&self) -> DispatchMode {
        self.mode
    }

    /// The registry this dispatch runs against: the context override if
    /// present, the global default otherwise.
    pub fn registry(&self) -> Arc<ServiceExecutorRegistry> {
        match &self.registry {
            Some(registry) => registry.clone(),
            None => global_registry(),
        }
    }
}
