use crate::prelude::*;
use crate::schema::{
    Association, Column, Relation, RelationKind, RelationShape, impl_shape_builder,
};
use compact_str::CompactString;
use core::any::TypeId;

/// A named, stored query that is read like a table.
#[derive(Debug, Clone, Default)]
pub struct View {
    shape: RelationShape,
    definition: Option<CompactString>,
}

impl View {
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            shape: RelationShape::new(name),
            definition: None,
        }
    }

    /// The SELECT text backing the view. Informational only; nodes always
    /// reference the view by name.
    pub fn with_definition(mut self, definition: impl Into<CompactString>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }
}

impl_shape_builder!(View);

impl Relation for View {
    fn name(&self) -> &str {
        &self.shape.name
    }

    fn schema(&self) -> Option<&str> {
        self.shape.schema.as_deref()
    }

    fn qualified_name(&self) -> Cow<'_, str> {
        self.shape.qualified_name()
    }

    fn kind(&self) -> RelationKind {
        RelationKind::View
    }

    fn columns(&self) -> &[Column] {
        &self.shape.columns
    }

    fn associations(&self) -> &[Association] {
        &self.shape.associations
    }

    fn record_type(&self) -> Option<TypeId> {
        self.shape.record_type
    }
}
