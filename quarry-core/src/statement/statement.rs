use crate::{Expression, Literal, SQLITE_WRITER, SqlWriter, separated_by};
use std::fmt::{self, Debug, Display};

/// SQL text assembled clause by clause.
///
/// The composer knows no grammar: every operation appends its keyword and
/// operands, it is up to the caller to chain clauses in a legal order.
/// Every keyword but the first one is preceded by a single space.
///
/// ```
/// use quarry_core::Select;
/// let statement = Select::all()
///     .from(["T"])
///     .where_("col")
///     .eq(1)
///     .and("col2")
///     .gt(5)
///     .order_by(["col3"])
///     .desc()
///     .limit_offset(10, 20);
/// assert_eq!(
///     statement.as_str(),
///     "SELECT * FROM T WHERE col = 1 AND col2 > 5 ORDER BY col3 DESC LIMIT 10 OFFSET 20",
/// );
/// ```
#[derive(Clone)]
pub struct Statement {
    sql: String,
    writer: &'static dyn SqlWriter,
}

impl Statement {
    pub fn new() -> Self {
        Self {
            sql: String::with_capacity(512),
            writer: &SQLITE_WRITER,
        }
    }

    /// Statement pre-seeded with some text.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            writer: &SQLITE_WRITER,
        }
    }

    /// Render the literals appended from now on with `writer`.
    pub fn with_writer(mut self, writer: &'static dyn SqlWriter) -> Self {
        self.writer = writer;
        self
    }

    pub fn writer(&self) -> &'static dyn SqlWriter {
        self.writer
    }

    pub fn as_str(&self) -> &str {
        &self.sql
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sql.len()
    }

    /// Independent statement with the same text, further operations don't affect `self`.
    pub fn copy(&self) -> Statement {
        self.clone()
    }

    pub(crate) fn push_str(&mut self, value: &str) {
        self.sql.push_str(value);
    }

    pub(crate) fn push_keyword(&mut self, keyword: &str) {
        if !self.sql.is_empty() {
            self.sql.push(' ');
        }
        self.sql.push_str(keyword);
    }

    pub(crate) fn push_expression(&mut self, expression: impl Expression) {
        expression.write_query(self.writer, &mut self.sql);
    }

    pub(crate) fn push_literal(&mut self, value: impl Literal) {
        value.write_literal(self.writer, &mut self.sql);
    }

    pub(crate) fn push_expressions<I, E>(&mut self, expressions: I)
    where
        I: IntoIterator<Item = E>,
        E: Expression,
    {
        let writer = self.writer;
        separated_by(
            &mut self.sql,
            expressions,
            |out, v| v.write_query(writer, out),
            ", ",
        );
    }

    fn clause<I, E>(mut self, keyword: &str, operands: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Expression,
    {
        self.push_keyword(keyword);
        self.sql.push(' ');
        self.push_expressions(operands);
        self
    }

    fn condition(mut self, keyword: &str, operand: impl Expression) -> Self {
        self.push_keyword(keyword);
        self.sql.push(' ');
        self.push_expression(operand);
        self
    }

    /// `FROM <tables>`, each table is a name or an aliased expression.
    pub fn from<I, E>(self, tables: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Expression,
    {
        self.clause("FROM", tables)
    }

    /// `WHERE <operand>`, usually a column, a function or an `EXISTS` expression.
    pub fn where_(self, operand: impl Expression) -> Self {
        self.condition("WHERE", operand)
    }

    pub fn and(self, operand: impl Expression) -> Self {
        self.condition("AND", operand)
    }

    pub fn or(self, operand: impl Expression) -> Self {
        self.condition("OR", operand)
    }

    pub fn order_by<I, E>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Expression,
    {
        self.clause("ORDER BY", columns)
    }

    pub fn asc(mut self) -> Self {
        self.push_keyword("ASC");
        self
    }

    pub fn desc(mut self) -> Self {
        self.push_keyword("DESC");
        self
    }

    pub fn group_by<I, E>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Expression,
    {
        self.clause("GROUP BY", columns)
    }

    pub fn having(self, operand: impl Expression) -> Self {
        self.condition("HAVING", operand)
    }

    pub fn limit(mut self, row_amount: u64) -> Self {
        self.push_keyword("LIMIT ");
        self.push_literal(row_amount);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.push_keyword("OFFSET ");
        self.push_literal(offset);
        self
    }

    /// `LIMIT <row_amount> OFFSET <offset>`
    pub fn limit_offset(self, row_amount: u64, offset: u64) -> Self {
        self.limit(row_amount).offset(offset)
    }

    fn compare(mut self, op: &str, value: impl Literal) -> Self {
        self.push_keyword(op);
        self.sql.push(' ');
        self.push_literal(value);
        self
    }

    pub fn eq(self, value: impl Literal) -> Self {
        self.compare("=", value)
    }

    /// `<> <value>`
    pub fn neq(self, value: impl Literal) -> Self {
        self.compare("<>", value)
    }

    pub fn gt(self, value: impl Literal) -> Self {
        self.compare(">", value)
    }

    pub fn egt(self, value: impl Literal) -> Self {
        self.compare(">=", value)
    }

    pub fn lt(self, value: impl Literal) -> Self {
        self.compare("<", value)
    }

    pub fn elt(self, value: impl Literal) -> Self {
        self.compare("<=", value)
    }

    pub fn is_null(mut self) -> Self {
        self.push_keyword("IS NULL");
        self
    }

    pub fn is_not_null(mut self) -> Self {
        self.push_keyword("IS NOT NULL");
        self
    }

    /// `IN (<literals>)`
    pub fn in_values<I, L>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Literal,
    {
        self.push_keyword("IN (");
        let writer = self.writer;
        separated_by(
            &mut self.sql,
            values,
            |out, v| v.write_literal(writer, out),
            ", ",
        );
        self.sql.push(')');
        self
    }

    /// `IN (<statement>)`, the sub-query must return a single column.
    pub fn in_query(mut self, statement: &Statement) -> Self {
        self.push_keyword("IN (");
        self.sql.push_str(statement.as_str());
        self.sql.push(')');
        self
    }

    pub fn not_in_values<I, L>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Literal,
    {
        self.push_keyword("NOT");
        self.in_values(values)
    }

    pub fn not_in_query(mut self, statement: &Statement) -> Self {
        self.push_keyword("NOT");
        self.in_query(statement)
    }

    pub fn between(mut self, former: impl Literal, later: impl Literal) -> Self {
        self.push_keyword("BETWEEN ");
        self.push_literal(former);
        self.push_keyword("AND ");
        self.push_literal(later);
        self
    }

    /// `LIKE '<pattern>'`, the pattern is quoted and escaped.
    pub fn like(mut self, pattern: impl AsRef<str>) -> Self {
        self.push_keyword("LIKE ");
        self.writer.write_value_string(&mut self.sql, pattern.as_ref());
        self
    }

    pub fn like_contains(self, keyword: impl AsRef<str>) -> Self {
        self.like(format!("%{}%", keyword.as_ref()))
    }

    pub fn like_starts_with(self, keyword: impl AsRef<str>) -> Self {
        self.like(format!("{}%", keyword.as_ref()))
    }

    pub fn like_ends_with(self, keyword: impl AsRef<str>) -> Self {
        self.like(format!("%{}", keyword.as_ref()))
    }

    /// `REGEXP '<regexp>'`, the expression is not escaped.
    pub fn regexp(mut self, regexp: impl AsRef<str>) -> Self {
        self.push_keyword("REGEXP '");
        self.sql.push_str(regexp.as_ref());
        self.sql.push('\'');
        self
    }

    pub fn join(self, table: impl Expression) -> Self {
        self.condition("JOIN", table)
    }

    pub fn natural_join(self, table: impl Expression) -> Self {
        self.condition("NATURAL JOIN", table)
    }

    pub fn cross_join(self, table: impl Expression) -> Self {
        self.condition("CROSS JOIN", table)
    }

    pub fn left_join(self, table: impl Expression) -> Self {
        self.condition("LEFT JOIN", table)
    }

    pub fn left_natural_join(self, table: impl Expression) -> Self {
        self.condition("NATURAL LEFT JOIN", table)
    }

    /// Join predicate.
    pub fn on(self, operand: impl Expression) -> Self {
        self.condition("ON", operand)
    }

    /// `USING (<columns>)`
    pub fn using<I, E>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Expression,
    {
        self.push_keyword("USING (");
        self.push_expressions(columns);
        self.sql.push(')');
        self
    }

    /// Append a literal with no leading space.
    pub fn append(mut self, value: impl Literal) -> Self {
        self.push_literal(value);
        self
    }
}

impl Default for Statement {
    fn default() -> Self {
        Self::new()
    }
}

impl Expression for Statement {
    fn write_query(&self, _writer: &dyn SqlWriter, out: &mut String) {
        out.push_str(&self.sql);
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

impl Debug for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Statement").field(&self.sql).finish()
    }
}

impl PartialEq for Statement {
    fn eq(&self, other: &Self) -> bool {
        self.sql == other.sql
    }
}

impl AsRef<str> for Statement {
    fn as_ref(&self) -> &str {
        &self.sql
    }
}

impl From<Statement> for String {
    fn from(value: Statement) -> Self {
        value.sql
    }
}
