use compact_str::CompactString;
use core::fmt;

/// A column addressed by the qualified name of its relation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    relation: CompactString,
    column: CompactString,
}

impl ColumnRef {
    pub fn new(relation: impl AsRef<str>, column: impl AsRef<str>) -> Self {
        Self {
            relation: CompactString::new(relation),
            column: CompactString::new(column),
        }
    }

    #[inline]
    pub fn relation_name(&self) -> &str {
        &self.relation
    }

    #[inline]
    pub fn column_name(&self) -> &str {
        &self.column
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.relation, self.column)
    }
}

/// A directed foreign-key relationship.
///
/// The child column lives on the "many" side and holds the key; the parent
/// column is the referenced one. Direction never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Association {
    child: ColumnRef,
    parent: ColumnRef,
}

impl Association {
    pub fn new(child: ColumnRef, parent: ColumnRef) -> Self {
        Self { child, parent }
    }

    #[inline]
    pub fn child_column(&self) -> &ColumnRef {
        &self.child
    }

    #[inline]
    pub fn parent_column(&self) -> &ColumnRef {
        &self.parent
    }

    /// True when the association points at a relation with this qualified name.
    #[inline]
    pub fn references(&self, relation: &str) -> bool {
        self.parent.relation == relation
    }
}

impl fmt::Display for Association {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.child, self.parent)
    }
}
