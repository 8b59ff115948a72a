//! Relation nodes: aliased tables, views and joins.
//!
//! [`RelationNode`] is a closed sum over the leaf kinds and [`JoinNode`].
//! Metadata accessors on a join answer for its left (driving) side, so a
//! join tree can be joined again exactly like a single table.

mod join;
mod leaf;

pub use join::{JoinKind, JoinNode};
pub use leaf::{TableNode, ViewNode};

use crate::prelude::*;
use crate::{
    Association, Column, JoinType, Projection, Relation, RelationKind, RelnodeError, Result,
    SqlDialect,
};
use compact_str::CompactString;
use core::any::TypeId;
use core::hash::{Hash, Hasher};

/// Alias every node starts with. The select builder replaces it with a
/// query-unique name before rendering.
pub const DEFAULT_ALIAS: &str = "this";

/// Join levels [`base_relation`] walks before giving up. Association
/// lookups on a tree nested deeper than this fail with
/// [`RelnodeError::NestingTooDeep`].
pub const MAX_NESTING_DEPTH: usize = 1024;

#[derive(Debug, Clone)]
pub enum RelationNode {
    Table(TableNode),
    View(ViewNode),
    Join(Box<JoinNode>),
}

impl RelationNode {
    /// Wraps a relation in the leaf matching its kind.
    pub fn new(relation: Arc<dyn Relation>) -> Self {
        match relation.kind() {
            RelationKind::Table => Self::table(relation),
            RelationKind::View => Self::view(relation),
        }
    }

    pub fn table(relation: Arc<dyn Relation>) -> Self {
        Self::Table(TableNode::new(relation))
    }

    pub fn view(relation: Arc<dyn Relation>) -> Self {
        Self::View(ViewNode::new(relation))
    }

    pub fn alias(&self) -> &str {
        match self {
            Self::Table(node) => node.alias(),
            Self::View(node) => node.alias(),
            Self::Join(node) => node.alias(),
        }
    }

    /// Sets the alias and hands back the same node.
    ///
    /// The alias is not validated. An empty alias resets to
    /// [`DEFAULT_ALIAS`]. On a join this re-aliases the left side.
    pub fn set_alias(&mut self, alias: impl Into<CompactString>) -> &mut Self {
        match self {
            Self::Table(node) => {
                node.set_alias(alias);
            }
            Self::View(node) => {
                node.set_alias(alias);
            }
            Self::Join(node) => {
                node.set_alias(alias);
            }
        }
        self
    }

    pub fn with_alias(mut self, alias: impl Into<CompactString>) -> Self {
        self.set_alias(alias);
        self
    }

    /// The relation this node presents: the wrapped one for leaves, the
    /// left-most leaf's for joins.
    pub fn relation(&self) -> &Arc<dyn Relation> {
        let mut current = self;
        loop {
            match current {
                Self::Table(node) => return node.relation(),
                Self::View(node) => return node.relation(),
                Self::Join(node) => current = node.left(),
            }
        }
    }

    pub fn relation_name(&self) -> &str {
        self.relation().name()
    }

    pub fn columns(&self) -> &[Column] {
        self.relation().columns()
    }

    pub fn primary_key(&self) -> Option<&Column> {
        self.relation().primary_key()
    }

    pub fn associations(&self) -> &[Association] {
        self.relation().associations()
    }

    pub fn record_type(&self) -> Option<TypeId> {
        self.relation().record_type()
    }

    /// A single whole-record projection for leaves; both sides, left first,
    /// for joins.
    pub fn projections(&self) -> Vec<Projection> {
        match self {
            Self::Table(node) => vec![Projection::record(node.alias(), node.relation().clone())],
            Self::View(node) => vec![Projection::record(node.alias(), node.relation().clone())],
            Self::Join(node) => node.projections(),
        }
    }

    pub fn to_sql<D: SqlDialect + ?Sized>(&self, dialect: &D) -> String {
        match self {
            Self::Table(node) => dialect.table_alias(node.relation().as_ref(), node.alias()),
            Self::View(node) => dialect.view_alias(node.relation().as_ref(), node.alias()),
            Self::Join(node) => dialect.join(node),
        }
    }

    /// The association through which `candidate` is this node's parent.
    ///
    /// Both nodes are unwrapped to their base relations first, so aliases
    /// and join wrappers never take part in the lookup.
    pub fn parent_association(&self, candidate: &RelationNode) -> Result<Option<&Association>> {
        let child = base_relation(self)?;
        let parent = base_relation(candidate)?;
        Ok(child.parent_association(parent.as_ref()))
    }

    /// Joins `parent` onto this node, which holds the foreign key.
    pub fn join_child_to_parent(
        self,
        parent: impl Into<RelationNode>,
        association: Association,
    ) -> JoinNode {
        JoinNode::child_to_parent(self, parent.into(), association)
    }

    /// Joins `child`, which holds the foreign key, onto this node.
    pub fn join_parent_to_child(
        self,
        child: impl Into<RelationNode>,
        association: Association,
    ) -> JoinNode {
        JoinNode::parent_to_child(self, child.into(), association)
    }

    /// Joins with an explicit type and predicate; no association involved.
    pub fn join_on(
        self,
        other: impl Into<RelationNode>,
        join_type: JoinType,
        predicate: impl Into<CompactString>,
    ) -> JoinNode {
        JoinNode::new(self, other.into(), join_type, predicate)
    }

    /// Joins `other`, inferring direction from association metadata.
    ///
    /// If this node references `other` the result is a child-to-parent
    /// join; otherwise, if `other` references this node, a parent-to-child
    /// join. When both hold, child-to-parent wins.
    ///
    /// Either side may itself be a join nested up to [`MAX_NESTING_DEPTH`]
    /// levels on its left spine; deeper trees yield
    /// [`RelnodeError::NestingTooDeep`]. Use [`RelationNode::join_on`] to
    /// extend such a tree, it does no lookup.
    pub fn join(self, other: impl Into<RelationNode>) -> Result<JoinNode> {
        let other = other.into();

        if let Some(association) = self.parent_association(&other)?.cloned() {
            relnode_trace_join!(
                JoinKind::ChildToParent,
                self.relation_name(),
                other.relation_name()
            );
            return Ok(JoinNode::child_to_parent(self, other, association));
        }

        if let Some(association) = other.parent_association(&self)?.cloned() {
            relnode_trace_join!(
                JoinKind::ParentToChild,
                self.relation_name(),
                other.relation_name()
            );
            return Ok(JoinNode::parent_to_child(self, other, association));
        }

        Err(RelnodeError::JoinResolution {
            left: CompactString::new(self.relation().qualified_name()),
            right: CompactString::new(other.relation().qualified_name()),
        })
    }

    pub fn is_join(&self) -> bool {
        matches!(self, Self::Join(_))
    }

    pub fn as_join(&self) -> Option<&JoinNode> {
        match self {
            Self::Join(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_join_mut(&mut self) -> Option<&mut JoinNode> {
        match self {
            Self::Join(node) => Some(node),
            _ => None,
        }
    }
}

/// Unwraps `node` to the concrete relation behind it, following join left
/// sides for at most [`MAX_NESTING_DEPTH`] levels.
pub fn base_relation(node: &RelationNode) -> Result<&Arc<dyn Relation>> {
    let mut current = node;
    for _ in 0..=MAX_NESTING_DEPTH {
        match current {
            RelationNode::Table(leaf) => return Ok(leaf.relation()),
            RelationNode::View(leaf) => return Ok(leaf.relation()),
            RelationNode::Join(join) => current = join.left(),
        }
    }
    Err(RelnodeError::NestingTooDeep {
        depth: MAX_NESTING_DEPTH,
    })
}

impl From<TableNode> for RelationNode {
    fn from(node: TableNode) -> Self {
        Self::Table(node)
    }
}

impl From<ViewNode> for RelationNode {
    fn from(node: ViewNode) -> Self {
        Self::View(node)
    }
}

impl From<JoinNode> for RelationNode {
    fn from(node: JoinNode) -> Self {
        Self::Join(Box::new(node))
    }
}

impl From<Arc<dyn Relation>> for RelationNode {
    fn from(relation: Arc<dyn Relation>) -> Self {
        Self::new(relation)
    }
}

// Identity is the base relation; alias and node kind are presentation.
impl PartialEq for RelationNode {
    fn eq(&self, other: &Self) -> bool {
        **self.relation() == **other.relation()
    }
}

impl Eq for RelationNode {}

impl Hash for RelationNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.relation().qualified_name().hash(state);
    }
}
