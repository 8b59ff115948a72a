use crate::node::DEFAULT_ALIAS;
use crate::prelude::*;
use crate::Relation;
use compact_str::CompactString;

macro_rules! leaf_node {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            relation: Arc<dyn Relation>,
            alias: CompactString,
        }

        impl $name {
            pub fn new(relation: Arc<dyn Relation>) -> Self {
                Self {
                    relation,
                    alias: CompactString::const_new(DEFAULT_ALIAS),
                }
            }

            #[inline]
            pub fn alias(&self) -> &str {
                &self.alias
            }

            pub fn set_alias(&mut self, alias: impl Into<CompactString>) -> &mut Self {
                let alias = alias.into();
                self.alias = if alias.is_empty() {
                    CompactString::const_new(DEFAULT_ALIAS)
                } else {
                    alias
                };
                self
            }

            #[inline]
            pub fn relation(&self) -> &Arc<dyn Relation> {
                &self.relation
            }
        }
    };
}

leaf_node!(
    /// A table with an alias; renders as `"table" as alias`.
    TableNode
);

leaf_node!(
    /// A view with an alias; renders as `"view" as alias`.
    ViewNode
);
