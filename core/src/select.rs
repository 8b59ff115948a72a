//! A small SELECT builder over a node tree.
//!
//! Rendering works on a copy of the tree: leaves still carrying
//! [`DEFAULT_ALIAS`] receive a query-unique `this<N>` alias first, and join
//! predicates made stale by that renaming are recomputed. Predicates that
//! were already stale before rendering are left alone.

use crate::prelude::*;
use crate::{DEFAULT_ALIAS, Projection, RelationNode, RelnodeError, Result, SqlDialect};
use compact_str::{CompactString, format_compact};
use hashbrown::HashSet;
use smallvec::SmallVec;

/// Sort direction for ORDER BY clauses
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OrderBy {
    #[default]
    Asc,
    Desc,
}

impl OrderBy {
    pub const fn as_str(self) -> &'static str {
        match self {
            OrderBy::Asc => "asc",
            OrderBy::Desc => "desc",
        }
    }
}

/// Represents an ORDER BY clause in a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByClause {
    /// The expression to order by.
    pub expr: CompactString,
    /// The direction to sort (ASC or DESC).
    pub direction: OrderBy,
}

impl OrderByClause {
    pub fn new(expr: impl Into<CompactString>, direction: OrderBy) -> Self {
        Self {
            expr: expr.into(),
            direction,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Select {
    from: RelationNode,
    projections: Option<Vec<Projection>>,
    filters: SmallVec<[CompactString; 2]>,
    order_by: SmallVec<[OrderByClause; 2]>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl Select {
    pub fn from(node: impl Into<RelationNode>) -> Self {
        Self {
            from: node.into(),
            projections: None,
            filters: SmallVec::new(),
            order_by: SmallVec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Replaces the default projections (every record in the tree).
    ///
    /// Explicit projections are rendered verbatim and are not touched by
    /// alias disambiguation.
    pub fn columns(mut self, projections: impl IntoIterator<Item = Projection>) -> Self {
        self.projections = Some(projections.into_iter().collect());
        self
    }

    /// Adds a `where` condition; several are conjoined with `and`.
    pub fn filter(mut self, condition: impl Into<CompactString>) -> Self {
        self.filters.push(condition.into());
        self
    }

    pub fn order_by(mut self, expr: impl Into<CompactString>, direction: OrderBy) -> Self {
        self.order_by.push(OrderByClause::new(expr, direction));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn node(&self) -> &RelationNode {
        &self.from
    }

    pub fn node_mut(&mut self) -> &mut RelationNode {
        &mut self.from
    }

    pub fn into_node(self) -> RelationNode {
        self.from
    }

    pub fn to_sql<D: SqlDialect + ?Sized>(&self, dialect: &D) -> Result<String> {
        let mut from = self.from.clone();
        disambiguate_aliases(&mut from);

        let projections = match &self.projections {
            Some(projections) if projections.is_empty() => {
                return Err(RelnodeError::EmptyProjection);
            }
            Some(projections) => projections.clone(),
            None => from.projections(),
        };

        let mut sql = String::from("select ");
        sql.push_str(
            &projections
                .iter()
                .map(|projection| projection.to_sql(dialect))
                .collect::<Vec<_>>()
                .join(", "),
        );
        sql.push_str(" from ");
        sql.push_str(&from.to_sql(dialect));

        if !self.filters.is_empty() {
            sql.push_str(" where ");
            sql.push_str(
                &self
                    .filters
                    .iter()
                    .map(CompactString::as_str)
                    .collect::<Vec<_>>()
                    .join(" and "),
            );
        }

        if !self.order_by.is_empty() {
            sql.push_str(" order by ");
            sql.push_str(
                &self
                    .order_by
                    .iter()
                    .map(|clause| format!("{} {}", clause.expr, clause.direction.as_str()))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
        }

        match (self.limit, self.offset) {
            (Some(limit), _) => sql.push_str(&format!(" limit {}", limit)),
            (None, Some(_)) => {
                if let Some(unbounded) = dialect.unbounded_limit() {
                    sql.push_str(" limit ");
                    sql.push_str(unbounded);
                }
            }
            (None, None) => {}
        }
        if let Some(offset) = self.offset {
            sql.push_str(&format!(" offset {}", offset));
        }

        relnode_trace_render!(sql);
        Ok(sql)
    }
}

/// Renames every leaf still aliased [`DEFAULT_ALIAS`] to `this<N>`, in
/// left-to-right leaf order, skipping names already used in the tree.
/// Returns how many leaves were renamed.
///
/// Joins whose predicate goes stale because of the renaming are
/// refreshed; joins that were stale beforehand stay as they are.
pub fn disambiguate_aliases(node: &mut RelationNode) -> usize {
    let mut taken = HashSet::new();
    collect_aliases(node, &mut taken);

    let mut stale_before = Vec::new();
    collect_staleness(node, &mut stale_before);

    let mut counter = 0;
    let renamed = rename_defaults(node, &mut taken, &mut counter);
    if renamed > 0 {
        refresh_newly_stale(node, &mut stale_before.into_iter());
    }
    renamed
}

fn collect_aliases(node: &RelationNode, taken: &mut HashSet<CompactString>) {
    match node {
        RelationNode::Join(join) => {
            collect_aliases(join.left(), taken);
            collect_aliases(join.right(), taken);
        }
        leaf => {
            taken.insert(CompactString::new(leaf.alias()));
        }
    }
}

// pre-order over joins; refresh_newly_stale must walk the same order
fn collect_staleness(node: &RelationNode, out: &mut Vec<bool>) {
    if let RelationNode::Join(join) = node {
        out.push(join.is_predicate_stale());
        collect_staleness(join.left(), out);
        collect_staleness(join.right(), out);
    }
}

fn rename_defaults(
    node: &mut RelationNode,
    taken: &mut HashSet<CompactString>,
    counter: &mut usize,
) -> usize {
    if let RelationNode::Join(join) = node {
        return rename_defaults(join.left_mut(), taken, counter)
            + rename_defaults(join.right_mut(), taken, counter);
    }
    if node.alias() != DEFAULT_ALIAS {
        return 0;
    }

    let alias = loop {
        *counter += 1;
        let candidate = format_compact!("{}{}", DEFAULT_ALIAS, counter);
        if !taken.contains(&candidate) {
            break candidate;
        }
    };
    taken.insert(alias.clone());
    relnode_trace_alias!(DEFAULT_ALIAS, alias);
    node.set_alias(alias);
    1
}

fn refresh_newly_stale(node: &mut RelationNode, stale_before: &mut impl Iterator<Item = bool>) {
    if let RelationNode::Join(join) = node {
        let was_stale = stale_before.next().unwrap_or(true);
        refresh_newly_stale(join.left_mut(), stale_before);
        refresh_newly_stale(join.right_mut(), stale_before);
        if !was_stale && join.is_predicate_stale() {
            join.refresh_predicate();
        }
    }
}
