//! Traits for walking caller-owned trees.
//!
//! This module defines the [`HierarchyNode`] trait, the seam between
//! the traversal and the concrete tree shapes. Both shapes from the
//! model crate implement it; implement it for your own node type to
//! drive the same traversal over a different shape.
//!
//! # Example: Implementing HierarchyNode for a custom shape
//!
//! ```rust
//! use tiermap::{NodeId, Tier};
//! use tiermap_flatten::HierarchyNode;
//!
//! struct Category {
//!     id: NodeId,
//!     tier: Tier,
//!     subcategories: Vec<Category>,
//! }
//!
//! impl HierarchyNode for Category {
//!     fn id(&self) -> NodeId {
//!         self.id
//!     }
//!
//!     fn tier(&self) -> Tier {
//!         self.tier
//!     }
//!
//!     fn children(&self) -> &[Self] {
//!         &self.subcategories
//!     }
//! }
//! ```

use tiermap::{ItemNode, NodeId, Tier, TreeNode};

/// Trait for tree shapes the flattener can traverse.
///
/// A node exposes its identity, its rank, and its owned children; the
/// traversal reconstructs ancestry from the path it walked, so no
/// parent pointers are required.
pub trait HierarchyNode {
    /// Node identifier, unique within the tree (caller-guaranteed).
    fn id(&self) -> NodeId;

    /// Classification rank of this node.
    fn tier(&self) -> Tier;

    /// Child subtrees, in traversal order.
    fn children(&self) -> &[Self]
    where
        Self: Sized;
}

impl HierarchyNode for TreeNode {
    fn id(&self) -> NodeId {
        self.id
    }

    fn tier(&self) -> Tier {
        self.tier
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

impl HierarchyNode for ItemNode {
    fn id(&self) -> NodeId {
        self.id
    }

    fn tier(&self) -> Tier {
        self.tier
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}
