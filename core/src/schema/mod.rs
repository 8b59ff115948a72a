//! Structural metadata the node algebra reads: columns, associations and
//! the [`Relation`] trait with its table and view implementations.

mod association;
mod column;
mod relation;
mod table;
mod view;

pub use association::{Association, ColumnRef};
pub use column::Column;
pub use relation::{Relation, RelationKind};
pub use table::Table;
pub use view::View;

use crate::prelude::*;
use compact_str::CompactString;
use core::any::TypeId;
use smallvec::SmallVec;

/// Shared storage behind [`Table`] and [`View`].
#[derive(Debug, Clone, Default)]
pub(crate) struct RelationShape {
    pub(crate) name: CompactString,
    pub(crate) schema: Option<CompactString>,
    pub(crate) columns: SmallVec<[Column; 8]>,
    pub(crate) associations: SmallVec<[Association; 2]>,
    pub(crate) record_type: Option<TypeId>,
}

impl RelationShape {
    pub(crate) fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub(crate) fn qualified_name(&self) -> Cow<'_, str> {
        match &self.schema {
            Some(schema) => Cow::Owned(format!("{}.{}", schema, self.name)),
            None => Cow::Borrowed(self.name.as_str()),
        }
    }

    /// Declares that `column` on this relation references `parent_column`
    /// on `parent`.
    pub(crate) fn push_reference(
        &mut self,
        column: &str,
        parent: &dyn Relation,
        parent_column: &str,
    ) {
        let child = ColumnRef::new(self.qualified_name(), column);
        let parent = ColumnRef::new(parent.qualified_name(), parent_column);
        self.associations.push(Association::new(child, parent));
    }
}

/// Builder methods shared by [`Table`] and [`View`].
macro_rules! impl_shape_builder {
    ($ty:ident) => {
        impl $ty {
            /// Places the relation in a schema (`schema.name`).
            ///
            /// Call before [`references`](Self::references): associations record the
            /// qualified name at declaration time.
            pub fn in_schema(mut self, schema: impl Into<CompactString>) -> Self {
                self.shape.schema = Some(schema.into());
                self
            }

            /// Appends a column.
            pub fn with_column(mut self, column: Column) -> Self {
                self.shape.columns.push(column);
                self
            }

            /// Appends several columns in order.
            pub fn with_columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
                self.shape.columns.extend(columns);
                self
            }

            /// Declares a foreign key from `column` to `parent.parent_column`.
            pub fn references(
                mut self,
                column: &str,
                parent: &dyn Relation,
                parent_column: &str,
            ) -> Self {
                self.shape.push_reference(column, parent, parent_column);
                self
            }

            /// Tags the relation with the record type it maps to.
            pub fn record<T: 'static>(mut self) -> Self {
                self.shape.record_type = Some(TypeId::of::<T>());
                self
            }

            /// Erases the concrete type for use in nodes.
            pub fn into_relation(self) -> Arc<dyn Relation> {
                Arc::new(self)
            }
        }
    };
}

pub(crate) use impl_shape_builder;
