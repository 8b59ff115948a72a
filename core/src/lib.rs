//! Relation nodes, association-inferred joins and SQL rendering.
//!
//! A [`RelationNode`] wraps a table or view with an alias. Nodes combine
//! through [`RelationNode::join`] into a [`JoinNode`] tree, which is itself
//! a node and renders to SQL through a [`SqlDialect`].

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Internal prelude for std/alloc compatibility
#[allow(unused_imports)]
pub(crate) mod prelude {
    #[cfg(feature = "std")]
    pub use std::{
        borrow::Cow,
        boxed::Box,
        format,
        string::{String, ToString},
        sync::Arc,
        vec,
        vec::Vec,
    };

    #[cfg(not(feature = "std"))]
    pub use alloc::{
        borrow::Cow,
        boxed::Box,
        format,
        string::{String, ToString},
        sync::Arc,
        vec,
        vec::Vec,
    };
}

#[macro_use]
pub mod tracing;

pub mod dialect;
pub mod error;
pub mod join;
pub mod node;
pub mod projection;
pub mod schema;
pub mod select;

pub use dialect::{Dialect, SqlDialect};
pub use error::{RelnodeError, Result};
pub use join::JoinType;
pub use node::{
    DEFAULT_ALIAS, JoinKind, JoinNode, MAX_NESTING_DEPTH, RelationNode, TableNode, ViewNode,
    base_relation,
};
pub use projection::Projection;
pub use schema::{Association, Column, ColumnRef, Relation, RelationKind, Table, View};
pub use select::{OrderBy, OrderByClause, Select, disambiguate_aliases};
