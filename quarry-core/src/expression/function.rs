use crate::Expr;

/// Built-in SQLite function calls.
impl Expr {
    /// `count(*)`
    pub fn count() -> Self {
        Self::call("count", ["*"])
    }
    pub fn count_of(expression: impl Into<Expr>) -> Self {
        Self::call("count", [expression])
    }
    pub fn max(expression: impl Into<Expr>) -> Self {
        Self::call("max", [expression])
    }
    pub fn min(expression: impl Into<Expr>) -> Self {
        Self::call("min", [expression])
    }
    pub fn avg(expression: impl Into<Expr>) -> Self {
        Self::call("avg", [expression])
    }
    pub fn sum(expression: impl Into<Expr>) -> Self {
        Self::call("sum", [expression])
    }
    pub fn abs(expression: impl Into<Expr>) -> Self {
        Self::call("abs", [expression])
    }
    pub fn upper(expression: impl Into<Expr>) -> Self {
        Self::call("upper", [expression])
    }
    pub fn lower(expression: impl Into<Expr>) -> Self {
        Self::call("lower", [expression])
    }
    pub fn length(expression: impl Into<Expr>) -> Self {
        Self::call("length", [expression])
    }
    pub fn last_insert_rowid() -> Self {
        Self::call("last_insert_rowid", Vec::<Expr>::new())
    }
    pub fn sqlite_version() -> Self {
        Self::call("sqlite_version", Vec::<Expr>::new())
    }
    pub fn random() -> Self {
        Self::call("random", Vec::<Expr>::new())
    }
}
