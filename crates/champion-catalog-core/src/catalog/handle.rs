use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::task::JoinHandle;

use crate::api::LoadError;

/// A catalog load running on the Tokio runtime.
///
/// Await it to get the load result, or drop it to let the load finish
/// unobserved.
#[derive(Debug)]
pub struct LoadHandle {
    task: JoinHandle<Result<(), LoadError>>,
}

impl LoadHandle {
    pub(crate) fn new(task: JoinHandle<Result<(), LoadError>>) -> Self {
        Self { task }
    }

    /// Cancel the load. Awaiting the handle afterwards yields `LoadError::Cancelled`
    /// unless the load had already completed.
    pub fn abort(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Future for LoadHandle {
    type Output = Result<(), LoadError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.task).poll(cx).map(|joined| match joined {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(LoadError::Cancelled),
            Err(e) => Err(LoadError::TaskFailed(e.to_string())),
        })
    }
}
