use crate::SqlWriter;
use std::borrow::Cow;

/// A renderable SQL fragment used as clause operand: table and column names,
/// wrapped expressions, nested statements.
///
/// Operands are written verbatim, only [`Literal`](crate::Literal) values get quoted.
pub trait Expression {
    /// Serialize the expression into the output string using the sql writer.
    fn write_query(&self, writer: &dyn SqlWriter, out: &mut String);
}

impl<T: Expression + ?Sized> Expression for &T {
    fn write_query(&self, writer: &dyn SqlWriter, out: &mut String) {
        (*self).write_query(writer, out);
    }
}

impl Expression for str {
    fn write_query(&self, _writer: &dyn SqlWriter, out: &mut String) {
        out.push_str(self);
    }
}

impl Expression for String {
    fn write_query(&self, _writer: &dyn SqlWriter, out: &mut String) {
        out.push_str(self);
    }
}

impl Expression for Cow<'_, str> {
    fn write_query(&self, _writer: &dyn SqlWriter, out: &mut String) {
        out.push_str(self);
    }
}
