//! Fluent SQLite statement composer with literal escaping, row-to-entity
//! binding and pagination.
//!
//! ```
//! use quarry::{Expr, Insert, Select};
//!
//! let insert = Insert::produce("Products")
//!     .put("name", "Chais")
//!     .put("price", 18.0)
//!     .build();
//! assert_eq!(
//!     insert.as_str(),
//!     "INSERT INTO Products(name, price) VALUES('Chais', 18.0)",
//! );
//!
//! let pod = Expr::alias("Products", "pod");
//! let select = Select::produce([pod.column("product_name")])
//!     .from([&pod])
//!     .where_(pod.column("price"))
//!     .gt(20);
//! assert_eq!(
//!     select.as_str(),
//!     "SELECT pod.product_name FROM Products AS pod WHERE pod.price > 20",
//! );
//! ```
pub use quarry_core::*;
pub use quarry_macros::Entity;
