use crate::{Conflict, Expression, Literal, SQLITE_WRITER, SqlWriter, Statement};
use std::fmt::{self, Debug};

/// UPDATE producer: `UPDATE[ OR <MODE>] <table> SET <column> = <value>, ...`.
///
/// Finalized by [`Update::where_`] or [`Update::build`], the resulting
/// statement no longer accepts assignments.
#[derive(Clone)]
pub struct Update {
    writer: &'static dyn SqlWriter,
    conflict: Option<Conflict>,
    table: String,
    sets: String,
    assignments: usize,
}

impl Update {
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
            sets: String::new(),
            assignments: 0,
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

    /// The conflict mode and the literals set from now on are rendered by `writer`.
    pub fn with_writer(mut self, writer: &'static dyn SqlWriter) -> Self {
        self.writer = writer;
        self
    }

    pub fn conflict(&self) -> Option<Conflict> {
        self.conflict
    }

    /// Append `<column> = <value>`.
    pub fn set(mut self, column: impl Expression, value: impl Literal) -> Self {
        if self.assignments > 0 {
            self.sets.push(',');
        }
        self.sets.push(' ');
        column.write_query(self.writer, &mut self.sets);
        self.sets.push_str(" = ");
        value.write_literal(self.writer, &mut self.sets);
        self.assignments += 1;
        self
    }

    pub fn where_(self, operand: impl Expression) -> Statement {
        self.build().where_(operand)
    }

    pub fn build(self) -> Statement {
        let mut statement = Statement::new().with_writer(self.writer);
        statement.push_keyword("UPDATE");
        let mut prefix = String::new();
        self.writer.write_conflict(&mut prefix, self.conflict);
        statement.push_str(&prefix);
        statement.push_str(" ");
        statement.push_str(&self.table);
        statement.push_str(" SET");
        statement.push_str(&self.sets);
        statement
    }
}

impl Debug for Update {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Update")
            .field("conflict", &self.conflict)
            .field("table", &self.table)
            .field("sets", &self.sets)
            .finish()
    }
}
