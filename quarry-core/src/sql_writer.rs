use crate::{Conflict, Value};

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}
macro_rules! write_float {
    ($this:ident, $out:ident, $value:expr) => {{
        if $value.is_infinite() {
            $this.write_value_infinity($out, $value.is_sign_negative());
        } else if $value.is_nan() {
            $this.write_value_nan($out);
        } else {
            let mut buffer = ryu::Buffer::new();
            $out.push_str(buffer.format($value));
        }
    }};
}

/// Dialect printer turning values into SQL literals.
///
/// Every method has a default matching SQLite, a dialect only overrides what differs.
pub trait SqlWriter: Send + Sync {
    fn as_dyn(&self) -> &dyn SqlWriter;

    /// Escape occurrences of `search` char with `replace` while copying into buffer.
    fn write_escaped(&self, out: &mut String, value: &str, search: char, replace: &str) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == search {
                out.push_str(&value[position..i]);
                out.push_str(replace);
                position = i + c.len_utf8();
            }
        }
        out.push_str(&value[position..]);
    }

    /// Render a value as literal.
    fn write_value(&self, out: &mut String, value: &Value) {
        match value {
            v if v.is_null() => self.write_value_none(out),
            Value::Boolean(Some(v)) => self.write_value_bool(out, *v),
            Value::Int16(Some(v)) => write_integer!(out, *v),
            Value::Int32(Some(v)) => write_integer!(out, *v),
            Value::Int64(Some(v)) => write_integer!(out, *v),
            Value::Float32(Some(v)) => write_float!(self, out, *v),
            Value::Float64(Some(v)) => write_float!(self, out, *v),
            Value::Varchar(Some(v)) => self.write_value_string(out, v),
            Value::Blob(Some(v)) => self.write_value_blob(out, v),
            _ => self.write_value_none(out),
        }
    }

    /// Render the null literal.
    fn write_value_none(&self, out: &mut String) {
        out.push_str("null");
    }

    fn write_value_bool(&self, out: &mut String, value: bool) {
        out.push_str(["false", "true"][value as usize]);
    }

    /// SQLite has no infinity literal, an overflowing real evaluates to it.
    fn write_value_infinity(&self, out: &mut String, negative: bool) {
        if negative {
            out.push('-');
        }
        out.push_str("1.0e+10000");
    }

    fn write_value_nan(&self, out: &mut String) {
        self.write_value_none(out);
    }

    /// Quote a string literal, doubling every single quote it contains.
    fn write_value_string(&self, out: &mut String, value: &str) {
        out.push('\'');
        self.write_escaped(out, value, '\'', "''");
        out.push('\'');
    }

    fn write_value_blob(&self, out: &mut String, value: &[u8]) {
        out.push_str("X'");
        out.push_str(&hex::encode_upper(value));
        out.push('\'');
    }

    /// Raw text, emitted verbatim.
    fn write_unescaped(&self, out: &mut String, value: &str) {
        out.push_str(value);
    }

    /// The ` OR <MODE>` fragment of INSERT and UPDATE, nothing for the default mode.
    fn write_conflict(&self, out: &mut String, conflict: Option<Conflict>) {
        if let Some(conflict) = conflict {
            out.push_str(" OR ");
            out.push_str(conflict.keyword());
        }
    }
}

/// Writer for the SQLite dialect, relying on every default of [`SqlWriter`].
#[derive(Default, Debug, Clone, Copy)]
pub struct SqliteSqlWriter {}

impl SqliteSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl SqlWriter for SqliteSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }
}

pub(crate) static SQLITE_WRITER: SqliteSqlWriter = SqliteSqlWriter::new();

/// Render a single literal with the default writer.
pub fn literal(value: impl crate::Literal) -> String {
    let mut out = String::new();
    value.write_literal(&SQLITE_WRITER, &mut out);
    out
}
