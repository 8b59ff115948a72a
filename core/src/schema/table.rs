use crate::prelude::*;
use crate::schema::{
    Association, Column, Relation, RelationKind, RelationShape, impl_shape_builder,
};
use compact_str::CompactString;
use core::any::TypeId;

/// A base table.
///
/// ```
/// use relnode_core::{Column, Table};
///
/// let customers = Table::new("customers")
///     .with_column(Column::new("id", "integer").primary())
///     .with_column(Column::new("name", "text"));
/// let orders = Table::new("orders")
///     .with_column(Column::new("id", "integer").primary())
///     .with_column(Column::new("customer_id", "integer"))
///     .references("customer_id", &customers, "id");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
    shape: RelationShape,
}

impl Table {
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            shape: RelationShape::new(name),
        }
    }
}

impl_shape_builder!(Table);

impl Relation for Table {
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
        RelationKind::Table
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
