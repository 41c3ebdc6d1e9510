use futures::stream;
use quarry::{
    Connection, Error, Executor, QueryResult, Result, RowLabeled, RowNames, RowsAffected,
    Transaction, Value, stream::Stream,
};
use std::{collections::HashMap, future::Future};

#[derive(Debug, Clone)]
enum Reply {
    Rows(RowNames, Vec<Vec<Value>>),
    Affected(RowsAffected),
    Fail(String),
}

/// In-memory connection answering scripted statements.
///
/// Every statement received is recorded, transaction boundaries appear as
/// `BEGIN`, `COMMIT` and `ROLLBACK`. A statement without a scripted reply
/// affects no rows.
#[derive(Debug, Default)]
pub struct MockConnection {
    replies: HashMap<String, Reply>,
    log: Vec<String>,
}

impl MockConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_query(mut self, sql: &str, labels: &[&str], rows: Vec<Vec<Value>>) -> Self {
        let labels: RowNames = labels.iter().map(|v| v.to_string()).collect();
        self.replies
            .insert(sql.to_owned(), Reply::Rows(labels, rows));
        self
    }

    pub fn on_execute(mut self, sql: &str, rows_affected: u64, last_affected_id: Option<i64>) -> Self {
        self.replies.insert(
            sql.to_owned(),
            Reply::Affected(RowsAffected {
                rows_affected,
                last_affected_id,
            }),
        );
        self
    }

    pub fn on_error(mut self, sql: &str, message: &str) -> Self {
        self.replies
            .insert(sql.to_owned(), Reply::Fail(message.to_owned()));
        self
    }

    /// Statements received so far.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    fn answer(&mut self, query: String) -> Vec<Result<QueryResult>> {
        let reply = self.replies.get(&query).cloned();
        self.log.push(query);
        match reply {
            Some(Reply::Rows(labels, rows)) => rows
                .into_iter()
                .map(|v| Ok(RowLabeled::new(labels.clone(), v.into()).into()))
                .collect(),
            Some(Reply::Affected(v)) => vec![Ok(v.into())],
            Some(Reply::Fail(message)) => vec![Err(Error::msg(message))],
            None => vec![Ok(RowsAffected::default().into())],
        }
    }
}

impl Executor for MockConnection {
    fn run(&mut self, query: String) -> impl Stream<Item = Result<QueryResult>> + Send {
        stream::iter(self.answer(query))
    }
}

impl Connection for MockConnection {
    fn begin(&mut self) -> impl Future<Output = Result<impl Transaction<'_>>> + Send {
        self.log.push("BEGIN".into());
        async move { Ok(MockTransaction { connection: self }) }
    }
}

pub struct MockTransaction<'c> {
    connection: &'c mut MockConnection,
}

impl Executor for MockTransaction<'_> {
    fn run(&mut self, query: String) -> impl Stream<Item = Result<QueryResult>> + Send {
        stream::iter(self.connection.answer(query))
    }
}

impl<'c> Transaction<'c> for MockTransaction<'c> {
    fn commit(self) -> impl Future<Output = Result<()>> + Send {
        self.connection.log.push("COMMIT".into());
        async { Ok(()) }
    }

    fn rollback(self) -> impl Future<Output = Result<()>> + Send {
        self.connection.log.push("ROLLBACK".into());
        async { Ok(()) }
    }
}
