use crate::{Conflict, Expression, Literal, SQLITE_WRITER, SqlWriter, Statement};
use std::fmt::{self, Debug};

/// INSERT producer: `INSERT[ OR <MODE>] INTO <table>`.
///
/// A fresh insert moves to one of two states: [`Insert::put`] accumulates
/// column/value pairs ([`InsertValues`]), [`Insert::columns`] declares a column
/// list filled by `DEFAULT VALUES` or a sub-select ([`InsertColumns`]).
/// Both end in a finished [`Statement`].
#[derive(Clone)]
pub struct Insert {
    writer: &'static dyn SqlWriter,
    conflict: Option<Conflict>,
    table: String,
}

impl Insert {
    pub fn produce(table: impl Expression) -> Self {
        Self::with_conflict(table, None)
    }

    pub fn with_conflict(table: impl Expression, conflict: Option<Conflict>) -> Self {
        let mut name = String::new();
        table.write_query(&SQLITE_WRITER, &mut name);
        Self {
            writer: &SQLITE_WRITER,
            conflict,
            table: name,
        }
    }

    pub fn or_rollback(table: impl Expression) -> Self {
        Self::with_conflict(table, Some(Conflict::Rollback))
    }

    pub fn or_replace(table: impl Expression) -> Self {
        Self::with_conflict(table, Some(Conflict::Replace))
    }

    pub fn or_ignore(table: impl Expression) -> Self {
        Self::with_conflict(table, Some(Conflict::Ignore))
    }

    pub fn or_abort(table: impl Expression) -> Self {
        Self::with_conflict(table, Some(Conflict::Abort))
    }

    pub fn or_fail(table: impl Expression) -> Self {
        Self::with_conflict(table, Some(Conflict::Fail))
    }

    /// Conflict mode and literals are rendered by `writer`.
    pub fn with_writer(mut self, writer: &'static dyn SqlWriter) -> Self {
        self.writer = writer;
        self
    }

    pub fn conflict(&self) -> Option<Conflict> {
        self.conflict
    }

    fn head(self) -> Statement {
        let mut statement = Statement::new().with_writer(self.writer);
        statement.push_keyword("INSERT");
        let mut prefix = String::new();
        self.writer.write_conflict(&mut prefix, self.conflict);
        statement.push_str(&prefix);
        statement.push_str(" INTO ");
        statement.push_str(&self.table);
        statement
    }

    /// Start accumulating column/value pairs.
    pub fn put(self, column: impl Expression, value: impl Literal) -> InsertValues {
        InsertValues {
            statement: self.head(),
            columns: String::new(),
            values: String::new(),
            count: 0,
        }
        .put(column, value)
    }

    /// Explicit column list: `(<columns>)`.
    pub fn columns<I, E>(self, columns: I) -> InsertColumns
    where
        I: IntoIterator<Item = E>,
        E: Expression,
    {
        let mut statement = self.head();
        statement.push_str("(");
        statement.push_expressions(columns);
        statement.push_str(")");
        InsertColumns { statement }
    }

    /// `INSERT INTO <table> DEFAULT VALUES`
    pub fn default_values(self) -> Statement {
        default_values(self.head())
    }
}

impl Debug for Insert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Insert")
            .field("conflict", &self.conflict)
            .field("table", &self.table)
            .finish()
    }
}

fn default_values(mut statement: Statement) -> Statement {
    statement.push_keyword("DEFAULT VALUES");
    statement
}

/// Insert accumulating column/value pairs, rendered once by [`InsertValues::build`].
#[derive(Debug, Clone)]
pub struct InsertValues {
    statement: Statement,
    columns: String,
    values: String,
    count: usize,
}

impl InsertValues {
    pub fn put(mut self, column: impl Expression, value: impl Literal) -> Self {
        if self.count > 0 {
            self.columns.push_str(", ");
            self.values.push_str(", ");
        }
        let writer = self.statement.writer();
        column.write_query(writer, &mut self.columns);
        value.write_literal(writer, &mut self.values);
        self.count += 1;
        self
    }

    /// Number of columns put so far.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `<prefix>(<columns>) VALUES(<values>)`
    pub fn build(self) -> Statement {
        let mut statement = self.statement;
        statement.push_str("(");
        statement.push_str(&self.columns);
        statement.push_str(") VALUES(");
        statement.push_str(&self.values);
        statement.push_str(")");
        statement
    }
}

/// Insert with an explicit column list.
#[derive(Debug, Clone)]
pub struct InsertColumns {
    statement: Statement,
}

impl InsertColumns {
    pub fn default_values(self) -> Statement {
        default_values(self.statement)
    }

    /// Rows produced by a sub-select: `<prefix>(<columns>) (<select>)`.
    pub fn entry(mut self, select: &Statement) -> Statement {
        self.statement.push_str(" (");
        self.statement.push_str(select.as_str());
        self.statement.push_str(")");
        self.statement
    }
}
