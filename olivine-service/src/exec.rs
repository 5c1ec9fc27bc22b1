use std::sync::Arc;

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use log::trace;

use olivine::error::{OlivineError, OlivineResult};

use crate::binding::{Binding, BindingStream};
use crate::context::{DispatchMode, ExecContext};
use crate::op::ServiceOp;
use crate::registry::{
    ServiceExecutor, ServiceExecutorBulk, ServiceExecutorRegistry,
};

/// Walks a registry's bulk chain by position. Each link receives the
/// remainder of the chain as its continuation; a link past the end means no
/// registered executor accepted the request.
pub struct ServiceExecutorBulkOverRegistry {
    registry: Arc<ServiceExecutorRegistry>,
    pos: usize,
}

impl ServiceExecutorBulkOverRegistry {
    pub fn new(registry: Arc<ServiceExecutorRegistry>) -> Self {
        Self { registry, pos: 0 }
    }
}

#[async_trait]
impl ServiceExecutorBulk for ServiceExecutorBulkOverRegistry {
    async fn create_execution(
        &self,
        op: &ServiceOp,
        input: BindingStream,
        cx: &ExecContext,
    ) -> OlivineResult<BindingStream> {
        match self.registry.bulk_chain().get(self.pos) {
            Some(link) => {
                trace!("dispatching {} to bulk link {}", op, self.pos);
                let rest = Self {
                    registry: self.registry.clone(),
                    pos: self.pos + 1,
                };
                link.create_execution(op, input, cx, &rest).await
            }
            None => Err(OlivineError::NoServiceExecutor(format!(
                "bulk chain exhausted after {} links for {}",
                self.pos, op
            ))),
        }
    }
}

/// Walks a registry's single chain by position.
pub struct ServiceExecutorOverRegistry {
    registry: Arc<ServiceExecutorRegistry>,
    pos: usize,
}

impl ServiceExecutorOverRegistry {
    pub fn new(registry: Arc<ServiceExecutorRegistry>) -> Self {
        Self { registry, pos: 0 }
    }
}

#[async_trait]
impl ServiceExecutor for ServiceExecutorOverRegistry {
    async fn create_execution(
        &self,
        op: &ServiceOp,
        binding: &Binding,
        cx: &ExecContext,
    ) -> OlivineResult<BindingStream> {
        match self.registry.single_chain().get(self.pos) {
            Some(link) => {
                trace!("dispatching {} to single link {}", op, self.pos);
                let rest = Self {
                    registry: self.registry.clone(),
                    pos: self.pos + 1,
                };
                link.create_execution(op, binding, cx, &rest).await
            }
            None => Err(OlivineError::NoServiceExecutor(format!(
                "single chain exhausted after {} links for {}",
                self.pos, op
            ))),
        }
    }
}

/// Entry into the service executor chain; the route from the query engine.
///
/// Picks the call shape from the execution context. In bulk mode the whole
/// input stream is handed to the bulk chain at once; in single mode the
/// single chain is driven once per input binding and the per-binding result
/// streams are concatenated in input order.
pub async fn service_exec(
    op: &ServiceOp,
    input: BindingStream,
    cx: &ExecContext,
) -> OlivineResult<BindingStream> {
    let registry = cx.registry();
    match cx.mode() {
        DispatchMode::Bulk => {
            ServiceExecutorBulkOverRegistry::new(registry)
                .create_execution(op, input, cx)
                .await
        }
        DispatchMode::Single => {
            let walker = Arc::new(ServiceExecutorOverRegistry::new(registry));
            let op = op.clone();
            let cx = cx.clone();
            let output = input
                .and_then(move |binding| {
                    let walker = walker.clone();
                    let op = op.clone();
                    let cx = cx.clone();
                    async move { walker.create_execution(&op, &binding, &cx).await }
                })
                .try_flatten();
            Ok(output.boxed())
        }
    }
}
