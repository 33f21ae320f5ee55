use std::sync::Arc;
use tgbot_core::{execute, ExecutionError, Executor, Method};
use tracing::{debug, warn};

/// Bot API client: a shared executor that submits method objects.
#[derive(Clone)]
pub struct Bot {
    executor: Arc<dyn Executor>,
}

impl Bot {
    pub fn new(executor: impl Executor + 'static) -> Self {
        Self {
            executor: Arc::new(executor),
        }
    }

    pub fn from_shared(executor: Arc<dyn Executor>) -> Self {
        Self { executor }
    }

    /// Submit a method and map its result. The method is consumed.
    pub async fn send<M: Method>(&self, method: M) -> Result<M::Output, ExecutionError> {
        debug!("telegram {}: submitting", M::NAME);
        let result = execute(method, self.executor.as_ref()).await;
        if let Err(ref e) = result {
            warn!("telegram {} failed: {e}", M::NAME);
        }
        result
    }
}
