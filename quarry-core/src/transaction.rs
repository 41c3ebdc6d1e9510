use crate::{Executor, Result};
use std::future::Future;

/// Executor whose statements are applied atomically on commit.
pub trait Transaction<'c>: Executor {
    fn commit(self) -> impl Future<Output = Result<()>> + Send;
    fn rollback(self) -> impl Future<Output = Result<()>> + Send;
}
