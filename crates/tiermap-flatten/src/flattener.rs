//! The hierarchy flattener: tree in, ancestor lookup table out.

use std::collections::HashMap;
use std::time::Instant;

use tiermap::{Item, ItemNode, NodeId, TreeNode};

use crate::config::FlattenerConfig;
use crate::error::FlattenResult;
use crate::result::{AncestorMap, FlattenStats};
use crate::traverser::{snapshot, Step, Traverser};

/// Flattens four-tier classification trees into ancestor lookup tables.
///
/// One flattener serves any number of calls. Each call walks the given
/// tree exactly once, builds a fresh table, and leaves the tree
/// untouched; the flattener retains nothing between calls.
///
/// # Example
///
/// ```rust
/// use tiermap::{Tier, TreeNode};
/// use tiermap_flatten::HierarchyFlattener;
///
/// // Tier1(122) -> Tier2(233) -> Tier4(444, leaf), skipping Tier3
/// let root = TreeNode::new(122, Tier::Tier1).with_child(
///     TreeNode::new(233, Tier::Tier2).with_child(TreeNode::leaf(444, Tier::Tier4)),
/// );
///
/// let table = HierarchyFlattener::new().map_leaves_to_ancestors(Some(&root))?;
/// let hierarchy = table.get(&444).unwrap();
///
/// assert_eq!(hierarchy.tier2, Some(233));
/// assert_eq!(hierarchy.tier3, None); // skipped tiers stay absent
/// # Ok::<(), tiermap_flatten::FlattenError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct HierarchyFlattener {
    config: FlattenerConfig,
}

impl HierarchyFlattener {
    /// Creates a flattener with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a flattener with the given configuration.
    pub fn with_config(config: FlattenerConfig) -> Self {
        Self { config }
    }

    /// Maps every leaf node to its ancestor snapshot.
    ///
    /// Walks the tree pre-order. A node qualifies precisely when its
    /// `leaf` flag is set; the flag is trusted over the children list,
    /// so a flagged leaf is never descended into even if a malformed
    /// tree gives it children. Passing `None` yields an empty table.
    ///
    /// # Errors
    ///
    /// Returns [`FlattenError::DepthLimitExceeded`] when a configured
    /// depth limit is crossed.
    ///
    /// [`FlattenError::DepthLimitExceeded`]: crate::FlattenError::DepthLimitExceeded
    pub fn map_leaves_to_ancestors(
        &self,
        root: Option<&TreeNode>,
    ) -> FlattenResult<AncestorMap<NodeId>> {
        let Some(root) = root else {
            return Ok(AncestorMap::empty());
        };

        let start = Instant::now();
        let mut entries = HashMap::new();
        let mut traverser = Traverser::new(self.config.max_depth);

        traverser.walk(root, &mut |node, path| {
            if node.leaf {
                entries.insert(node.id, snapshot(path));
                Step::Prune
            } else {
                Step::Descend
            }
        })?;

        Ok(AncestorMap::new(
            entries,
            FlattenStats::new(start.elapsed(), traverser.nodes_visited(), traverser.deepest()),
        ))
    }

    /// Maps every attached item to its ancestor snapshot.
    ///
    /// Walks the tree pre-order, visiting every node. At a node holding
    /// one or more items the snapshot is computed once and every item
    /// at that node is bound to it, so items sharing a node share an
    /// equal hierarchy value. Traversal always continues into children:
    /// a node can both hold items and have item-bearing descendants,
    /// each producing its own entries. Passing `None` yields an empty
    /// table.
    ///
    /// # Errors
    ///
    /// Returns [`FlattenError::DepthLimitExceeded`] when a configured
    /// depth limit is crossed.
    ///
    /// [`FlattenError::DepthLimitExceeded`]: crate::FlattenError::DepthLimitExceeded
    pub fn map_items_to_ancestors(
        &self,
        root: Option<&ItemNode>,
    ) -> FlattenResult<AncestorMap<Item>> {
        let Some(root) = root else {
            return Ok(AncestorMap::empty());
        };

        let start = Instant::now();
        let mut entries = HashMap::new();
        let mut traverser = Traverser::new(self.config.max_depth);

        traverser.walk(root, &mut |node, path| {
            if !node.items.is_empty() {
                let hierarchy = snapshot(path);
                for item in &node.items {
                    entries.insert(item.clone(), hierarchy);
                }
            }
            Step::Descend
        })?;

        Ok(AncestorMap::new(
            entries,
            FlattenStats::new(start.elapsed(), traverser.nodes_visited(), traverser.deepest()),
        ))
    }
}
