use crate::{Executor, Result, Transaction};
use std::future::Future;

pub trait Connection: Executor {
    /// Start a transaction, borrowing the connection until it is committed or rolled back.
    fn begin(&mut self) -> impl Future<Output = Result<impl Transaction<'_>>> + Send;
}
