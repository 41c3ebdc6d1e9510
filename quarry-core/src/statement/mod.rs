mod conflict;
mod delete;
mod insert;
mod select;
mod statement;
mod update;

pub use conflict::*;
pub use delete::*;
pub use insert::*;
pub use select::*;
pub use statement::*;
pub use update::*;
