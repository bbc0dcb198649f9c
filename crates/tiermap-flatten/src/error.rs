//! Error types for hierarchy flattening.

use thiserror::Error;

/// Errors that can occur during a flattening traversal.
///
/// There is no recoverable-error taxonomy here: a missing root is a
/// defined case (an empty table), and a malformed tree is a
/// precondition violation. The one failure a caller can opt into is the
/// depth guard, for input whose depth is not trusted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlattenError {
    /// Traversal descended past the configured depth limit.
    ///
    /// Raised only when [`FlattenerConfig::max_depth`] is set. With no
    /// limit, arbitrarily deep (or cyclic) input is a precondition
    /// violation rather than a handled error.
    ///
    /// [`FlattenerConfig::max_depth`]: crate::FlattenerConfig::max_depth
    #[error("depth limit exceeded: reached depth {depth} with limit {limit}")]
    DepthLimitExceeded {
        /// Depth the traversal reached.
        depth: usize,
        /// Configured limit.
        limit: usize,
    },
}

/// Result type for flattening operations.
pub type FlattenResult<T> = std::result::Result<T, FlattenError>;
