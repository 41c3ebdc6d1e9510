use crate::{Expr, Expression, SqlWriter, Statement, Value};
use std::borrow::Cow;

/// Operand rendered as SQL literal: strings are quoted and escaped, numbers and
/// booleans use their natural text, nulls become `null`.
///
/// Expressions and statements are literals too, they render verbatim, so a
/// comparison can target another column (`.eq(Expr::scoped("cat", "id"))`).
pub trait Literal {
    fn write_literal(&self, writer: &dyn SqlWriter, out: &mut String);
}

impl<T: Literal + ?Sized> Literal for &T {
    fn write_literal(&self, writer: &dyn SqlWriter, out: &mut String) {
        (*self).write_literal(writer, out);
    }
}

impl Literal for Value {
    fn write_literal(&self, writer: &dyn SqlWriter, out: &mut String) {
        writer.write_value(out, self);
    }
}

impl Literal for str {
    fn write_literal(&self, writer: &dyn SqlWriter, out: &mut String) {
        writer.write_value_string(out, self);
    }
}

impl Literal for String {
    fn write_literal(&self, writer: &dyn SqlWriter, out: &mut String) {
        writer.write_value_string(out, self);
    }
}

impl Literal for Cow<'_, str> {
    fn write_literal(&self, writer: &dyn SqlWriter, out: &mut String) {
        writer.write_value_string(out, self);
    }
}

impl Literal for bool {
    fn write_literal(&self, writer: &dyn SqlWriter, out: &mut String) {
        writer.write_value_bool(out, *self);
    }
}

macro_rules! impl_literal_integer {
    ($($source:ty),+ $(,)?) => {
        $(
            impl Literal for $source {
                fn write_literal(&self, _writer: &dyn SqlWriter, out: &mut String) {
                    let mut buffer = itoa::Buffer::new();
                    out.push_str(buffer.format(*self));
                }
            }
        )+
    };
}

impl_literal_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Literal for f32 {
    fn write_literal(&self, writer: &dyn SqlWriter, out: &mut String) {
        writer.write_value(out, &Value::Float32(Some(*self)));
    }
}

impl Literal for f64 {
    fn write_literal(&self, writer: &dyn SqlWriter, out: &mut String) {
        writer.write_value(out, &Value::Float64(Some(*self)));
    }
}

impl Literal for [u8] {
    fn write_literal(&self, writer: &dyn SqlWriter, out: &mut String) {
        writer.write_value_blob(out, self);
    }
}

impl Literal for Vec<u8> {
    fn write_literal(&self, writer: &dyn SqlWriter, out: &mut String) {
        writer.write_value_blob(out, self);
    }
}

impl<T: Literal> Literal for Option<T> {
    fn write_literal(&self, writer: &dyn SqlWriter, out: &mut String) {
        match self {
            Some(v) => v.write_literal(writer, out),
            None => writer.write_value_none(out),
        }
    }
}

impl Literal for Expr {
    fn write_literal(&self, writer: &dyn SqlWriter, out: &mut String) {
        self.write_query(writer, out);
    }
}

impl Literal for Statement {
    fn write_literal(&self, writer: &dyn SqlWriter, out: &mut String) {
        self.write_query(writer, out);
    }
}
