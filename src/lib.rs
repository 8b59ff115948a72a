//! # relnode
//!
//! Aliased relation nodes that join by association and render to SQL.
//!
//! ## Quick Start
//!
//! ```rust
//! use relnode::prelude::*;
//!
//! # fn main() -> relnode::Result<()> {
//! let customers = Table::new("customers")
//!     .with_column(Column::new("id", "integer").primary())
//!     .with_column(Column::new("name", "text"));
//! let orders = Table::new("orders")
//!     .with_column(Column::new("id", "integer").primary())
//!     .with_column(Column::new("customer_id", "integer"))
//!     .references("customer_id", &customers, "id");
//!
//! let o = RelationNode::new(orders.into_relation()).with_alias("o");
//! let c = RelationNode::new(customers.into_relation()).with_alias("c");
//!
//! let join = o.join(c)?;
//! assert_eq!(join.on_clause(), "on (o.customer_id=c.id)");
//!
//! let sql = Select::from(join).to_sql(&Dialect::SQLite)?;
//! assert!(sql.starts_with("select o.id, o.customer_id, c.id, c.name from"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Dialects
//!
//! | Database   | Identifier quote | Full join keyword |
//! |------------|------------------|-------------------|
//! | SQLite     | `"`              | `full join`       |
//! | PostgreSQL | `"`              | `full outer join` |
//! | MySQL      | `` ` ``          | unsupported       |

/// Result type for relnode operations
pub use relnode_core::error::Result;

/// Database dialect enum
pub use relnode_types::Dialect;

/// Error types
pub mod error {
    pub use relnode_core::error::RelnodeError;
}

/// Core types shared by every dialect.
pub mod core {
    pub use relnode_core::*;
}

/// Everything needed to describe relations, join them and render SQL.
pub mod prelude {
    pub use relnode_core::{
        Association, Column, ColumnRef, DEFAULT_ALIAS, Dialect, JoinKind, JoinNode, JoinType,
        MAX_NESTING_DEPTH, OrderBy, Projection, Relation, RelationKind, RelationNode, Select,
        SqlDialect, Table, TableNode, View, ViewNode, base_relation,
    };
}
