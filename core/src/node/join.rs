use crate::prelude::*;
use crate::{Association, JoinType, Projection, RelationNode, Result, SqlDialect};
use compact_str::{CompactString, format_compact};
use smallvec::SmallVec;

/// How a join's predicate came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    /// Caller-supplied predicate text
    Explicit,
    /// Left side holds the foreign key, right side is referenced
    ChildToParent,
    /// Left side is referenced, right side holds the foreign key
    ParentToChild,
}

/// Two nodes combined under a join type and an `on` predicate.
///
/// A join presents itself as its left side: [`alias`](Self::alias) and the
/// metadata proxies on [`RelationNode`] answer for `left`.
///
/// Association-derived predicates are computed once, from the aliases and
/// base relations the sides had at construction. Re-aliasing a side or
/// replacing it later leaves the predicate text untouched;
/// [`is_predicate_stale`] reports the drift and [`refresh_predicate`]
/// recomputes on request.
///
/// [`is_predicate_stale`]: Self::is_predicate_stale
/// [`refresh_predicate`]: Self::refresh_predicate
#[derive(Debug, Clone)]
pub struct JoinNode {
    kind: JoinKind,
    join_type: JoinType,
    left: RelationNode,
    right: RelationNode,
    association: Option<Association>,
    predicate: CompactString,
    // sides the predicate was derived from: (left, right)
    built_with: (SideStamp, SideStamp),
    conditions: SmallVec<[CompactString; 2]>,
}

impl JoinNode {
    pub fn new(
        left: RelationNode,
        right: RelationNode,
        join_type: JoinType,
        predicate: impl Into<CompactString>,
    ) -> Self {
        Self::build(JoinKind::Explicit, join_type, left, right, None, predicate.into())
    }

    /// `child left join parent on (child.fk=parent.key)`
    pub fn child_to_parent(
        child: RelationNode,
        parent: RelationNode,
        association: Association,
    ) -> Self {
        let predicate = derive_predicate(
            JoinKind::ChildToParent,
            &association,
            child.alias(),
            parent.alias(),
        );
        Self::build(
            JoinKind::ChildToParent,
            JoinType::Left,
            child,
            parent,
            Some(association),
            predicate,
        )
    }

    /// `parent left join child on (parent.key=child.fk)`
    pub fn parent_to_child(
        parent: RelationNode,
        child: RelationNode,
        association: Association,
    ) -> Self {
        let predicate = derive_predicate(
            JoinKind::ParentToChild,
            &association,
            parent.alias(),
            child.alias(),
        );
        Self::build(
            JoinKind::ParentToChild,
            JoinType::Left,
            parent,
            child,
            Some(association),
            predicate,
        )
    }

    fn build(
        kind: JoinKind,
        join_type: JoinType,
        left: RelationNode,
        right: RelationNode,
        association: Option<Association>,
        predicate: CompactString,
    ) -> Self {
        let built_with = (SideStamp::of(&left), SideStamp::of(&right));
        Self {
            kind,
            join_type,
            left,
            right,
            association,
            predicate,
            built_with,
            conditions: SmallVec::new(),
        }
    }

    #[inline]
    pub fn kind(&self) -> JoinKind {
        self.kind
    }

    #[inline]
    pub fn join_type(&self) -> JoinType {
        self.join_type
    }

    #[inline]
    pub fn left(&self) -> &RelationNode {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &RelationNode {
        &self.right
    }

    pub fn left_mut(&mut self) -> &mut RelationNode {
        &mut self.left
    }

    pub fn right_mut(&mut self) -> &mut RelationNode {
        &mut self.right
    }

    /// The association the predicate was derived from; `None` for explicit joins.
    pub fn association(&self) -> Option<&Association> {
        self.association.as_ref()
    }

    /// The base predicate, without auxiliary conditions.
    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    pub fn conditions(&self) -> &[CompactString] {
        &self.conditions
    }

    /// Always the left side's alias.
    #[inline]
    pub fn alias(&self) -> &str {
        self.left.alias()
    }

    /// Re-aliases the left side.
    pub fn set_alias(&mut self, alias: impl Into<CompactString>) -> &mut Self {
        self.left.set_alias(alias);
        self
    }

    /// Appends a condition, conjoined with the base predicate on render.
    pub fn on(&mut self, condition: impl Into<CompactString>) -> &mut Self {
        self.conditions.push(condition.into());
        self
    }

    /// `on (<predicate> and <condition> ...)`
    pub fn on_clause(&self) -> String {
        let mut clause = String::with_capacity(self.predicate.len() + 8);
        clause.push_str("on (");
        clause.push_str(&self.predicate);
        for condition in &self.conditions {
            clause.push_str(" and ");
            clause.push_str(condition);
        }
        clause.push(')');
        clause
    }

    /// Swaps the left side in place. Join type and predicate are kept.
    pub fn replace_left(&mut self, node: impl Into<RelationNode>) -> &mut Self {
        self.left = node.into();
        self.warn_if_stale();
        self
    }

    /// Swaps the right side in place. Join type and predicate are kept.
    pub fn replace_right(&mut self, node: impl Into<RelationNode>) -> &mut Self {
        self.right = node.into();
        self.warn_if_stale();
        self
    }

    /// True when an association-derived predicate no longer matches the
    /// sides: an alias changed, or a side now wraps a different base
    /// relation. Explicit predicates are never stale.
    pub fn is_predicate_stale(&self) -> bool {
        self.association.is_some()
            && (!self.built_with.0.matches(&self.left)
                || !self.built_with.1.matches(&self.right))
    }

    /// Recomputes an association-derived predicate from the current aliases.
    ///
    /// Only done while the sides still wrap the relations the association
    /// connects; after a side was replaced by an unrelated relation the
    /// join stays stale. Auxiliary conditions are caller text and stay as
    /// they are.
    pub fn refresh_predicate(&mut self) -> &mut Self {
        let Some(association) = &self.association else {
            return self;
        };
        let (child, parent) = match self.kind {
            JoinKind::ParentToChild => (&self.right, &self.left),
            JoinKind::ChildToParent | JoinKind::Explicit => (&self.left, &self.right),
        };
        let connects = child.relation().qualified_name()
            == association.child_column().relation_name()
            && parent.relation().qualified_name() == association.parent_column().relation_name();
        if !connects {
            relnode_warn_stale!(self.predicate, self.left.alias(), self.right.alias());
            return self;
        }

        self.predicate = derive_predicate(
            self.kind,
            association,
            self.left.alias(),
            self.right.alias(),
        );
        self.built_with = (SideStamp::of(&self.left), SideStamp::of(&self.right));
        self
    }

    /// Left projections followed by right projections.
    pub fn projections(&self) -> Vec<Projection> {
        let mut projections = self.left.projections();
        projections.extend(self.right.projections());
        projections
    }

    pub fn to_sql<D: SqlDialect + ?Sized>(&self, dialect: &D) -> String {
        dialect.join(self)
    }

    /// Joins another node onto this join, inferring direction from the
    /// join's left side.
    pub fn join(self, other: impl Into<RelationNode>) -> Result<JoinNode> {
        RelationNode::from(self).join(other)
    }

    pub fn into_node(self) -> RelationNode {
        self.into()
    }

    fn warn_if_stale(&self) {
        if self.is_predicate_stale() {
            relnode_warn_stale!(self.predicate, self.left.alias(), self.right.alias());
        }
    }
}

/// Alias and base relation of one side, as seen when the predicate was derived.
#[derive(Debug, Clone)]
struct SideStamp {
    alias: CompactString,
    relation: CompactString,
}

impl SideStamp {
    fn of(node: &RelationNode) -> Self {
        Self {
            alias: CompactString::new(node.alias()),
            relation: CompactString::new(node.relation().qualified_name()),
        }
    }

    fn matches(&self, node: &RelationNode) -> bool {
        self.alias.as_str() == node.alias()
            && self.relation.as_str() == node.relation().qualified_name()
    }
}

fn derive_predicate(
    kind: JoinKind,
    association: &Association,
    left_alias: &str,
    right_alias: &str,
) -> CompactString {
    let child = association.child_column().column_name();
    let parent = association.parent_column().column_name();
    match kind {
        JoinKind::ParentToChild => {
            format_compact!("{}.{}={}.{}", left_alias, parent, right_alias, child)
        }
        JoinKind::ChildToParent | JoinKind::Explicit => {
            format_compact!("{}.{}={}.{}", left_alias, child, right_alias, parent)
        }
    }
}
