use crate::{Expr, Expression};
use std::borrow::Cow;

/// Prefix of a qualified column.
pub trait Scope {
    fn scope_name(&self) -> Cow<'static, str>;
}

impl<T: Scope + ?Sized> Scope for &T {
    fn scope_name(&self) -> Cow<'static, str> {
        (*self).scope_name()
    }
}

impl Scope for &'static str {
    fn scope_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(*self)
    }
}

impl Scope for String {
    fn scope_name(&self) -> Cow<'static, str> {
        Cow::Owned(self.clone())
    }
}

impl Scope for Expr {
    fn scope_name(&self) -> Cow<'static, str> {
        match self {
            Expr::Aliased { alias, .. } => alias.clone(),
            Expr::Raw(v) => v.clone(),
            _ => {
                let mut out = String::new();
                self.write_query(&crate::SQLITE_WRITER, &mut out);
                out.into()
            }
        }
    }
}
