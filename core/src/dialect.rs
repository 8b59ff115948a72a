//! SQL rendering for nodes.
//!
//! Nodes never format SQL themselves; they hand themselves to a
//! [`SqlDialect`]. Aliases and `alias.column` references are emitted as
//! given, relation names are quoted.

use crate::prelude::*;
use crate::{JoinNode, JoinType, Relation, RelationNode};

/// Re-export the unified Dialect enum from relnode-types
pub use relnode_types::Dialect;

pub trait SqlDialect {
    /// Quotes a single identifier, doubling embedded quote characters.
    fn quote_ident(&self, ident: &str) -> String {
        quote_with(ident, '"')
    }

    fn join_keyword(&self, join_type: JoinType) -> &'static str;

    /// `"schema"."name"` or `"name"`.
    fn qualified_name(&self, relation: &dyn Relation) -> String {
        match relation.schema() {
            Some(schema) => format!(
                "{}.{}",
                self.quote_ident(schema),
                self.quote_ident(relation.name())
            ),
            None => self.quote_ident(relation.name()),
        }
    }

    fn table_alias(&self, table: &dyn Relation, alias: &str) -> String {
        format!("{} as {}", self.qualified_name(table), alias)
    }

    fn view_alias(&self, view: &dyn Relation, alias: &str) -> String {
        format!("{} as {}", self.qualified_name(view), alias)
    }

    /// Limit value emitted ahead of an offset when no limit was set.
    /// `None` if the dialect accepts a bare `offset`.
    fn unbounded_limit(&self) -> Option<&'static str> {
        None
    }

    /// Renders `<left> <keyword> <right> on (...)`. A join on the right
    /// side is parenthesized.
    fn join(&self, join: &JoinNode) -> String {
        let left = join.left().to_sql(self);
        let right = match join.right() {
            RelationNode::Join(_) => format!("({})", join.right().to_sql(self)),
            node => node.to_sql(self),
        };
        format!(
            "{} {} {} {}",
            left,
            self.join_keyword(join.join_type()),
            right,
            join.on_clause()
        )
    }
}

impl SqlDialect for Dialect {
    fn quote_ident(&self, ident: &str) -> String {
        quote_with(ident, self.quote_char())
    }

    fn join_keyword(&self, join_type: JoinType) -> &'static str {
        join_type.keyword(*self)
    }

    fn unbounded_limit(&self) -> Option<&'static str> {
        match self {
            Dialect::SQLite => Some("-1"),
            // largest unsigned bigint
            Dialect::MySQL => Some("18446744073709551615"),
            Dialect::PostgreSQL => None,
        }
    }
}

fn quote_with(ident: &str, quote: char) -> String {
    let mut out = String::with_capacity(ident.len() + 2);
    out.push(quote);
    for ch in ident.chars() {
        if ch == quote {
            out.push(quote);
        }
        out.push(ch);
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Table;

    #[test]
    fn test_quote_ident() {
        assert_eq!(Dialect::SQLite.quote_ident("orders"), "\"orders\"");
        assert_eq!(Dialect::MySQL.quote_ident("orders"), "`orders`");
        assert_eq!(Dialect::PostgreSQL.quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn test_table_alias() {
        let table = Table::new("orders").in_schema("sales");
        assert_eq!(
            Dialect::PostgreSQL.table_alias(&table, "o"),
            "\"sales\".\"orders\" as o"
        );
        assert_eq!(Dialect::MySQL.table_alias(&table, "o"), "`sales`.`orders` as o");
    }

    #[test]
    fn test_unbounded_limit() {
        assert_eq!(Dialect::SQLite.unbounded_limit(), Some("-1"));
        assert_eq!(Dialect::MySQL.unbounded_limit(), Some("18446744073709551615"));
        assert_eq!(Dialect::PostgreSQL.unbounded_limit(), None);
    }
}
