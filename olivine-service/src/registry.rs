use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use olivine::error::OlivineResult;

use crate::binding::{Binding, BindingStream};
use crate::context::ExecContext;
use crate::op::ServiceOp;

/// Whole-stream call shape: one execution over the entire input binding
/// stream.
#[async_trait]
pub trait ServiceExecutorBulk: Send + Sync {
    async fn create_execution(
        &self,
        op: &ServiceOp,
        input: BindingStream,
        cx: &ExecContext,
    ) -> OlivineResult<BindingStream>;
}

/// Per-binding call shape: one execution per individual input binding.
#[async_trait]
pub trait ServiceExecutor: Send + Sync {
    async fn create_execution(
        &self,
        op: &ServiceOp,
        binding: &Binding,
        cx: &ExecContext,
    ) -> OlivineResult<BindingStream>;
}

/// A link in the bulk chain. A link either handles the request itself or
/// forwards it, possibly modified, to the remainder of the chain.
#[async_trait]
pub trait ChainingServiceExecutorBulk: Send + Sync {
    async fn create_execution(
        &self,
        op: &ServiceOp,
        input: BindingStream,
        cx: &ExecContext,
        chain: &dyn ServiceExecutorBulk,
    ) -> OlivineResult<BindingStream>;
}

/// A link in the single chain.
#[async_trait]
pub trait ChainingServiceExecutor: Send + Sync {
    async fn create_execution(
        &self,
        op: &ServiceOp,
        binding: &Binding,
        cx: &ExecContext,
        chain: &dyn ServiceExecutor,
    ) -> OlivineResult<BindingStream>;
}

/// Ordered registry of executor links for both call shapes.
///
/// The most recently added link runs first, so callers can interpose in
/// front of previously registered handlers.
#[derive(Clone, Default)]
pub struct ServiceExecutorRegistry {
    bulk_chain: Vec<Arc<dyn ChainingServiceExecutorBulk>>,
    single_chain: Vec<Arc<dyn ChainingServiceExecutor>>,
}

impl ServiceExecutorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_bulk_link(&mut self, link: Arc<dyn ChainingServiceExecutorBulk>) {
        self.bulk_chain.insert(0, link);
    }

    pub fn add_single_link(&mut self, link: Arc<dyn ChainingServiceExecutor>) {
        self.single_chain.insert(0, link);
    }

    pub fn bulk_chain(&self) -> &[Arc<dyn ChainingServiceExecutorBulk>] {
        &self.bulk_chain
    }

    pub fn single_chain(&self) -> &[Arc<dyn ChainingServiceExecutor>] {
        &self.single_chain
    }
}

lazy_static! {
    static ref GLOBAL_REGISTRY: RwLock<Arc<ServiceExecutorRegistry>> =
        RwLock::new(Arc::new(ServiceExecutorRegistry::new()));
}

/// The process-wide default registry, used when the execution context does
/// not carry an override.
pub fn global_registry() -> Arc<ServiceExecutorRegistry> {
    GLOBAL_REGISTRY
        .read()
        .expect("service registry lock poisoned")
        .clone()
}

pub fn set_global_registry(registry: ServiceExecutorRegistry) {
    *GLOBAL_REGISTRY
        .write()
        .expect("service registry lock poisoned") = Arc::new(registry);
}
