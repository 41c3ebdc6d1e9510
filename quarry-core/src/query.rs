use crate::{InsertValues, Statement, Update, Value};
use std::sync::Arc;

/// Anything that can be sent to an [`Executor`](crate::Executor) as SQL text.
pub trait AsQuery {
    fn as_query(self) -> String;
}

impl AsQuery for String {
    fn as_query(self) -> String {
        self
    }
}

impl AsQuery for &String {
    fn as_query(self) -> String {
        self.clone()
    }
}

impl AsQuery for &str {
    fn as_query(self) -> String {
        self.to_owned()
    }
}

impl AsQuery for Statement {
    fn as_query(self) -> String {
        self.into()
    }
}

impl AsQuery for &Statement {
    fn as_query(self) -> String {
        self.as_str().to_owned()
    }
}

impl AsQuery for InsertValues {
    fn as_query(self) -> String {
        self.build().into()
    }
}

impl AsQuery for Update {
    fn as_query(self) -> String {
        self.build().into()
    }
}

/// Metadata about modify operations (INSERT/UPDATE/DELETE).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowsAffected {
    /// Total number of rows impacted.
    pub rows_affected: u64,
    /// Row id of the last inserted row, when the engine reports it.
    pub last_affected_id: Option<i64>,
}

/// Shared reference-counted column name list.
pub type RowNames = Arc<[String]>;
/// Owned row value slice matching `RowNames` length.
pub type Row = Box<[Value]>;

/// A fetched row with its column labels.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLabeled {
    /// Column names.
    pub labels: RowNames,
    /// Data values (aligned by index with `labels`).
    pub values: Row,
}

impl RowLabeled {
    pub fn new(names: RowNames, values: Row) -> Self {
        Self {
            labels: names,
            values,
        }
    }
    pub fn names(&self) -> &[String] {
        &self.labels
    }
    pub fn values(&self) -> &[Value] {
        &self.values
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    pub fn get_column(&self, name: &str) -> Option<&Value> {
        self.labels
            .iter()
            .position(|v| v == name)
            .and_then(|i| self.values.get(i))
    }
}

/// Items emitted by `Executor::run`, either rows or modify results.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    /// A labeled row.
    Row(RowLabeled),
    /// A modify effect aggregation.
    Affected(RowsAffected),
}

impl Extend<RowsAffected> for RowsAffected {
    fn extend<T: IntoIterator<Item = RowsAffected>>(&mut self, iter: T) {
        for elem in iter {
            self.rows_affected += elem.rows_affected;
            if elem.last_affected_id.is_some() {
                self.last_affected_id = elem.last_affected_id;
            }
        }
    }
}

impl From<RowLabeled> for Row {
    fn from(value: RowLabeled) -> Self {
        value.values
    }
}

impl From<RowLabeled> for QueryResult {
    fn from(value: RowLabeled) -> Self {
        QueryResult::Row(value)
    }
}

impl From<RowsAffected> for QueryResult {
    fn from(value: RowsAffected) -> Self {
        QueryResult::Affected(value)
    }
}
