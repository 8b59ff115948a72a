use compact_str::CompactString;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelnodeError {
    /// Neither relation declares an association to the other
    #[error("no association found between `{left}` and `{right}`")]
    JoinResolution {
        left: CompactString,
        right: CompactString,
    },

    /// Unwrapping a node to its base relation walked too many join levels
    #[error("relation node nesting exceeds {depth} levels")]
    NestingTooDeep { depth: usize },

    /// A select was given an explicit, empty projection list
    #[error("select has no projections")]
    EmptyProjection,
}

/// Result type for node and query building operations
pub type Result<T> = core::result::Result<T, RelnodeError>;
