//! Shared type definitions for relnode
//!
//! This crate holds the pieces of vocabulary that every other relnode crate
//! agrees on:
//!
//! - [`Dialect`] - Database dialect enum (SQLite, PostgreSQL, MySQL)
//!
//! # Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `serde` - Enable serde serialization/deserialization

#![cfg_attr(not(feature = "std"), no_std)]

mod dialect;

pub use dialect::{Dialect, DialectParseError};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::Dialect;
}
