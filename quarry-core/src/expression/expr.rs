use crate::{Expression, SqlWriter, Statement, separated_by};
use std::{borrow::Cow, fmt::Display};

/// SQL sub-expression.
///
/// Wrappers never touch what they hold, a nested statement is captured as
/// finished text and rendered as is.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Name or fragment written verbatim: `product_name`, `price * 2`.
    Raw(Cow<'static, str>),
    /// `<expression> AS <alias>`.
    Aliased {
        expression: Box<Expr>,
        alias: Cow<'static, str>,
    },
    /// `<scope>.<column>`.
    Scoped {
        scope: Cow<'static, str>,
        column: Box<Expr>,
    },
    /// `<name>(<args>)`, a lone `*` argument gives `count(*)`.
    Function {
        name: Cow<'static, str>,
        args: Vec<Expr>,
    },
    /// `EXISTS (<statement>)`.
    Exists(Statement),
    /// `NOT EXISTS (<statement>)`.
    NotExists(Statement),
    /// `(<statement>)`.
    Parenthesized(Statement),
    /// Text handed to the writer's unescaped path, never quoted.
    Unescaped(Cow<'static, str>),
}

impl Expr {
    pub fn raw(value: impl Into<Cow<'static, str>>) -> Self {
        Self::Raw(value.into())
    }

    /// `table AS alias`, `(SELECT ...) AS alias`.
    pub fn alias(expression: impl Into<Expr>, alias: impl Into<Cow<'static, str>>) -> Self {
        Self::Aliased {
            expression: Box::new(expression.into()),
            alias: alias.into(),
        }
    }

    /// Qualify `column` with `scope`, either a table name or an aliased expression.
    pub fn scoped(scope: impl crate::Scope, column: impl Into<Expr>) -> Self {
        Self::Scoped {
            scope: scope.scope_name(),
            column: Box::new(column.into()),
        }
    }

    pub fn call<I, A>(name: impl Into<Cow<'static, str>>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Expr>,
    {
        Self::Function {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn exists(statement: &Statement) -> Self {
        Self::Exists(statement.copy())
    }

    pub fn not_exists(statement: &Statement) -> Self {
        Self::NotExists(statement.copy())
    }

    pub fn parenthesize(statement: &Statement) -> Self {
        Self::Parenthesized(statement.copy())
    }

    pub fn unescaped(value: impl Into<Cow<'static, str>>) -> Self {
        Self::Unescaped(value.into())
    }

    /// The alias name, if this is an aliased expression.
    pub fn alias_name(&self) -> Option<&str> {
        match self {
            Self::Aliased { alias, .. } => Some(alias),
            _ => None,
        }
    }

    /// `<alias>.<column>` for aliased expressions, `<self>.<column>` otherwise.
    pub fn column(&self, column: impl Into<Expr>) -> Expr {
        Expr::scoped(self, column)
    }

    /// Render with the default writer.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_query(&crate::SQLITE_WRITER, &mut out);
        out
    }
}

impl Expression for Expr {
    fn write_query(&self, writer: &dyn SqlWriter, out: &mut String) {
        match self {
            Expr::Raw(v) => out.push_str(v),
            Expr::Aliased { expression, alias } => {
                expression.write_query(writer, out);
                out.push_str(" AS ");
                out.push_str(alias);
            }
            Expr::Scoped { scope, column } => {
                out.push_str(scope);
                out.push('.');
                column.write_query(writer, out);
            }
            Expr::Function { name, args } => {
                out.push_str(name);
                out.push('(');
                separated_by(out, args, |out, v| v.write_query(writer, out), ", ");
                out.push(')');
            }
            Expr::Exists(statement) => {
                out.push_str("EXISTS (");
                out.push_str(statement.as_str());
                out.push(')');
            }
            Expr::NotExists(statement) => {
                out.push_str("NOT EXISTS (");
                out.push_str(statement.as_str());
                out.push(')');
            }
            Expr::Parenthesized(statement) => {
                out.push('(');
                out.push_str(statement.as_str());
                out.push(')');
            }
            Expr::Unescaped(v) => writer.write_unescaped(out, v),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&'static str> for Expr {
    fn from(value: &'static str) -> Self {
        Self::Raw(value.into())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Raw(value.into())
    }
}

impl From<Cow<'static, str>> for Expr {
    fn from(value: Cow<'static, str>) -> Self {
        Self::Raw(value)
    }
}

impl From<&Expr> for Expr {
    fn from(value: &Expr) -> Self {
        value.clone()
    }
}
