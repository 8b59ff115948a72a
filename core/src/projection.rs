use crate::prelude::*;
use crate::{Relation, SqlDialect};
use compact_str::CompactString;

/// A selectable expression derived from a node.
#[derive(Debug, Clone)]
pub enum Projection {
    /// Every column of the relation behind `alias`
    Record {
        alias: CompactString,
        relation: Arc<dyn Relation>,
    },
    /// A single `alias.column`
    Column {
        alias: CompactString,
        column: CompactString,
    },
}

impl Projection {
    pub fn record(alias: impl Into<CompactString>, relation: Arc<dyn Relation>) -> Self {
        Self::Record {
            alias: alias.into(),
            relation,
        }
    }

    pub fn column(alias: impl Into<CompactString>, column: impl Into<CompactString>) -> Self {
        Self::Column {
            alias: alias.into(),
            column: column.into(),
        }
    }

    pub fn alias(&self) -> &str {
        match self {
            Self::Record { alias, .. } | Self::Column { alias, .. } => alias,
        }
    }

    /// `o.id, o.customer_id` for a record (or `o.*` without declared
    /// columns), `o.column` for a column.
    pub fn to_sql<D: SqlDialect + ?Sized>(&self, _dialect: &D) -> String {
        match self {
            Self::Record { alias, relation } if relation.columns().is_empty() => {
                format!("{}.*", alias)
            }
            Self::Record { alias, relation } => relation
                .columns()
                .iter()
                .map(|column| format!("{}.{}", alias, column.name()))
                .collect::<Vec<_>>()
                .join(", "),
            Self::Column { alias, column } => format!("{}.{}", alias, column),
        }
    }
}

impl PartialEq for Projection {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Record { alias, relation },
                Self::Record {
                    alias: other_alias,
                    relation: other_relation,
                },
            ) => alias == other_alias && **relation == **other_relation,
            (
                Self::Column { alias, column },
                Self::Column {
                    alias: other_alias,
                    column: other_column,
                },
            ) => alias == other_alias && column == other_column,
            _ => false,
        }
    }
}

impl Eq for Projection {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Column, Dialect, Table};

    #[test]
    fn test_record_lists_columns() {
        let table = Table::new("orders")
            .with_columns([Column::new("id", "integer"), Column::new("total", "real")])
            .into_relation();
        let projection = Projection::record("o", table);
        assert_eq!(projection.to_sql(&Dialect::SQLite), "o.id, o.total");
    }

    #[test]
    fn test_record_without_columns_is_star() {
        let projection = Projection::record("t", Table::new("t").into_relation());
        assert_eq!(projection.to_sql(&Dialect::SQLite), "t.*");
    }

    #[test]
    fn test_column_projection() {
        let projection = Projection::column("c", "name");
        assert_eq!(projection.alias(), "c");
        assert_eq!(projection.to_sql(&Dialect::PostgreSQL), "c.name");
        assert_ne!(projection, Projection::column("o", "name"));
    }
}
