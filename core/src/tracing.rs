//! Tracing utilities for join inference and SQL rendering.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level event describing how a join was resolved.
///
/// ```ignore
/// relnode_trace_join!(kind, "orders", "customers");
/// ```
#[macro_export]
macro_rules! relnode_trace_join {
    ($kind:expr, $left:expr, $right:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(kind = ?$kind, left = %$left, right = %$right, "relnode.join");
        #[cfg(not(feature = "tracing"))]
        let _ = (&$kind, &$left, &$right);
    };
}

/// Emit a debug-level event with rendered SQL text.
#[macro_export]
macro_rules! relnode_trace_render {
    ($sql:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(sql = %$sql, "relnode.render");
        #[cfg(not(feature = "tracing"))]
        let _ = &$sql;
    };
}

/// Emit a trace-level event when the select builder renames a default alias.
#[macro_export]
macro_rules! relnode_trace_alias {
    ($from:expr, $to:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(from = %$from, to = %$to, "relnode.alias");
        #[cfg(not(feature = "tracing"))]
        let _ = (&$from, &$to);
    };
}

/// Emit a warn-level event when a join predicate no longer matches its sides.
#[macro_export]
macro_rules! relnode_warn_stale {
    ($predicate:expr, $left:expr, $right:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!(
            predicate = %$predicate,
            left = %$left,
            right = %$right,
            "relnode.stale_predicate"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = (&$predicate, &$left, &$right);
    };
}
