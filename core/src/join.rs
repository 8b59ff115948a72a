//! Join types
//!
//! The keyword spelling is dialect-specific; see [`SqlDialect::join_keyword`].
//!
//! [`SqlDialect::join_keyword`]: crate::SqlDialect::join_keyword

use crate::dialect::Dialect;

/// The type of JOIN operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum JoinType {
    #[default]
    Inner,
    Left,
    Right,
    Full,
}

impl JoinType {
    pub const ALL: [JoinType; 4] = [
        JoinType::Inner,
        JoinType::Left,
        JoinType::Right,
        JoinType::Full,
    ];

    /// The keyword for this join type in the given dialect.
    pub const fn keyword(self, dialect: Dialect) -> &'static str {
        match (self, dialect) {
            (JoinType::Inner, _) => "inner join",
            (JoinType::Left, _) => "left join",
            (JoinType::Right, _) => "right join",
            (JoinType::Full, Dialect::PostgreSQL) => "full outer join",
            (JoinType::Full, Dialect::SQLite | Dialect::MySQL) => "full join",
        }
    }
}
