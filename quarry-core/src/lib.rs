mod as_value;
mod binder;
mod connection;
mod db_handle;
mod entity;
mod executor;
mod expression;
mod literal;
mod pagination;
mod query;
mod sql_writer;
mod statement;
mod transaction;
mod util;
mod value;

pub use ::anyhow::Context;
pub use as_value::*;
pub use binder::*;
pub use connection::*;
pub use db_handle::*;
pub use entity::*;
pub use executor::*;
pub use expression::*;
pub use literal::*;
pub use pagination::*;
pub use query::*;
pub use sql_writer::*;
pub use statement::*;
pub use transaction::*;
pub use util::*;
pub use value::*;
pub mod stream {
    pub use ::futures::stream::*;
}
pub use ::futures::future;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
