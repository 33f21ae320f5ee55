use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::{
    codec::{self, ResultShape},
    error::{DecodeError, EncodeError, ExecutionError},
    payload::Payload,
};

/// The transport.
///
/// Performs one round trip for a named method and hands back the raw
/// `result` body of the response envelope (`None` when the envelope had
/// no result). Retries, timeouts, and rate limiting belong here.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(
        &self,
        method: &str,
        payload: Payload,
    ) -> Result<Option<Value>, ExecutionError>;
}

/// One remote operation.
///
/// Required parameters are bound by the constructor, optional ones by
/// consuming setters. The result mapping is fixed by [`Method::SHAPE`].
pub trait Method: Serialize + Send {
    /// Typed result of a successful call.
    type Output: DeserializeOwned;

    /// Bot API method name, appended to the endpoint URL.
    const NAME: &'static str;

    const SHAPE: ResultShape;

    /// Project the parameters onto the wire. Methods with file
    /// parameters override this to route uploads.
    fn payload(&self) -> Result<Payload, EncodeError> {
        Payload::from_params(self)
    }

    fn map_result(raw: Option<Value>) -> Result<Self::Output, DecodeError> {
        codec::map_result(Self::SHAPE, raw)
    }
}

/// Submit a method. The method is consumed and cannot be resubmitted.
pub async fn execute<M, E>(method: M, executor: &E) -> Result<M::Output, ExecutionError>
where
    M: Method,
    E: Executor + ?Sized,
{
    let payload = method.payload()?;
    drop(method);
    let raw = executor.execute(M::NAME, payload).await?;
    Ok(M::map_result(raw)?)
}
