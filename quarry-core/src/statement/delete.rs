use crate::{Expression, Statement};

/// DELETE producer.
pub struct Delete;

impl Delete {
    /// `DELETE FROM <table>`
    pub fn produce(table: impl Expression) -> Statement {
        let mut statement = Statement::new();
        statement.push_keyword("DELETE");
        statement.from([table])
    }

    /// `TRUNCATE <table>`, not understood by every engine.
    pub fn truncate(table: impl Expression) -> Statement {
        let mut statement = Statement::new();
        statement.push_keyword("TRUNCATE ");
        statement.push_expression(table);
        statement
    }
}
