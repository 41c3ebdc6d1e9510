mod expr;
mod expression;
mod function;
mod scope;

pub use expr::*;
pub use expression::*;
pub use scope::*;
