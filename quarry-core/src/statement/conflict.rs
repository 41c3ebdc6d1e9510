use std::fmt::Display;

/// Constraint violation resolution of INSERT and UPDATE (`INSERT OR <MODE> ...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conflict {
    Rollback,
    Replace,
    Ignore,
    Abort,
    Fail,
}

impl Conflict {
    pub fn keyword(&self) -> &'static str {
        match self {
            Conflict::Rollback => "ROLLBACK",
            Conflict::Replace => "REPLACE",
            Conflict::Ignore => "IGNORE",
            Conflict::Abort => "ABORT",
            Conflict::Fail => "FAIL",
        }
    }
}

impl Display for Conflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
