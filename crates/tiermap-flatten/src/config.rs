//! Configuration for the hierarchy flattener.

/// Configuration for [`HierarchyFlattener`](crate::HierarchyFlattener).
///
/// # Example
///
/// ```rust
/// use tiermap_flatten::FlattenerConfig;
///
/// let config = FlattenerConfig::builder().with_max_depth(64).build();
/// assert_eq!(config.max_depth, Some(64));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlattenerConfig {
    /// Maximum root-to-node path length the traversal may reach
    /// (None = unlimited).
    ///
    /// Recursion depth equals tree depth, so a limit doubles as a
    /// fail-fast guard against cyclic input that would otherwise never
    /// terminate.
    pub max_depth: Option<usize>,
}

impl FlattenerConfig {
    /// Creates a new builder for FlattenerConfig.
    pub fn builder() -> FlattenerConfigBuilder {
        FlattenerConfigBuilder::default()
    }
}

/// Builder for FlattenerConfig.
#[derive(Debug, Clone, Default)]
pub struct FlattenerConfigBuilder {
    max_depth: Option<usize>,
}

impl FlattenerConfigBuilder {
    /// Sets the maximum traversal depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Builds the FlattenerConfig.
    pub fn build(self) -> FlattenerConfig {
        FlattenerConfig {
            max_depth: self.max_depth,
        }
    }
}
