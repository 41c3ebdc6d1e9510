use crate::{Expr, Expression, Statement};

/// SELECT producer.
pub struct Select;

impl Select {
    /// `SELECT <columns>`, or `SELECT *` when no column is given.
    pub fn produce<I, E>(columns: I) -> Statement
    where
        I: IntoIterator<Item = E>,
        E: Expression,
    {
        Self::columns("SELECT", columns)
    }

    /// `SELECT *`
    pub fn all() -> Statement {
        Self::produce(Vec::<Expr>::new())
    }

    pub fn distinct<I, E>(columns: I) -> Statement
    where
        I: IntoIterator<Item = E>,
        E: Expression,
    {
        Self::columns("SELECT DISTINCT", columns)
    }

    pub fn distinct_all() -> Statement {
        Self::distinct(Vec::<Expr>::new())
    }

    /// `SELECT count(*)`
    pub fn row_count() -> Statement {
        Self::produce([Expr::count()])
    }

    /// Compound of the sub-queries joined by `UNION` (`distinct`) or `UNION ALL`.
    ///
    /// The result keeps the writer of the first sub-query.
    pub fn union<'a, I>(distinct: bool, sub_queries: I) -> Statement
    where
        I: IntoIterator<Item = &'a Statement>,
    {
        let mut statement = Statement::new();
        let separator = if distinct { " UNION " } else { " UNION ALL " };
        for (i, sub_query) in sub_queries.into_iter().enumerate() {
            if i > 0 {
                statement.push_str(separator);
            } else {
                statement = statement.with_writer(sub_query.writer());
            }
            statement.push_str(sub_query.as_str());
        }
        statement
    }

    fn columns<I, E>(keyword: &str, columns: I) -> Statement
    where
        I: IntoIterator<Item = E>,
        E: Expression,
    {
        let mut statement = Statement::new();
        statement.push_keyword(keyword);
        statement.push_str(" ");
        let mut columns = columns.into_iter().peekable();
        if columns.peek().is_none() {
            statement.push_str("*");
        } else {
            statement.push_expressions(columns);
        }
        statement
    }
}
