use crate::prelude::*;
use crate::schema::{Association, Column};
use core::any::TypeId;
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    Table,
    View,
}

/// A named source of records.
///
/// Relations are immutable metadata; nodes share them through `Arc`.
/// Identity is the qualified name: two relations with the same
/// `schema.name` are the same relation.
pub trait Relation: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    fn schema(&self) -> Option<&str> {
        None
    }

    /// `schema.name`, or just `name` without a schema.
    fn qualified_name(&self) -> Cow<'_, str> {
        match self.schema() {
            Some(schema) => Cow::Owned(format!("{}.{}", schema, self.name())),
            None => Cow::Borrowed(self.name()),
        }
    }

    fn kind(&self) -> RelationKind;

    /// Columns in declaration order.
    fn columns(&self) -> &[Column];

    fn primary_key(&self) -> Option<&Column> {
        self.columns().iter().find(|column| column.is_primary_key())
    }

    /// Foreign keys declared by this relation (this relation is the child).
    fn associations(&self) -> &[Association];

    fn record_type(&self) -> Option<TypeId> {
        None
    }

    fn column(&self, name: &str) -> Option<&Column> {
        self.columns().iter().find(|column| column.name() == name)
    }

    /// The association in which `other` is the parent, if this relation
    /// holds a foreign key referencing it. The first declared one wins.
    fn parent_association(&self, other: &dyn Relation) -> Option<&Association> {
        let parent = other.qualified_name();
        self.associations()
            .iter()
            .find(|association| association.references(&parent))
    }
}

impl PartialEq for dyn Relation {
    fn eq(&self, other: &Self) -> bool {
        self.qualified_name() == other.qualified_name()
    }
}

impl Eq for dyn Relation {}
