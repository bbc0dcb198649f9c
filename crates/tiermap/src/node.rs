//! Tree node shapes and the item payload.
//!
//! Two shapes cover the two ways a classification tree marks its
//! interesting nodes: [`TreeNode`] flags leaves explicitly, [`ItemNode`]
//! attaches domain items. Both own their children exclusively (strict
//! tree, no shared subtrees), so ancestry is reconstructed from the
//! traversal path rather than stored on the node.

use std::fmt;

use crate::{NodeId, Tier};

/// An opaque domain payload attached to a node.
///
/// Items compare by value, so two items with the same name are the same
/// key in an ancestor table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Name identifying the item.
    pub name: String,
}

impl Item {
    /// Creates an item with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A classification node that marks leaves with an explicit flag.
///
/// The flag is set independently of the children list. In a well-formed
/// tree it correlates with having no children, but consumers trust the
/// flag, not the list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeNode {
    /// Identifier, unique within a tree (caller-guaranteed).
    pub id: NodeId,
    /// Classification rank of this node.
    pub tier: Tier,
    /// Marks this node as a leaf.
    pub leaf: bool,
    /// Child subtrees, in traversal order.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Creates a non-leaf node with no children.
    pub fn new(id: NodeId, tier: Tier) -> Self {
        Self {
            id,
            tier,
            leaf: false,
            children: Vec::new(),
        }
    }

    /// Creates a leaf node.
    pub fn leaf(id: NodeId, tier: Tier) -> Self {
        Self {
            id,
            tier,
            leaf: true,
            children: Vec::new(),
        }
    }

    /// Appends one child subtree.
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Appends child subtrees in order.
    pub fn with_children(mut self, children: impl IntoIterator<Item = TreeNode>) -> Self {
        self.children.extend(children);
        self
    }
}

/// A classification node that holds attached domain items.
///
/// There is no leaf concept in this shape: any node at any depth may
/// carry items, and a node can both hold items and have descendants.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemNode {
    /// Identifier, unique within a tree (caller-guaranteed).
    pub id: NodeId,
    /// Classification rank of this node.
    pub tier: Tier,
    /// Items attached directly to this node.
    pub items: Vec<Item>,
    /// Child subtrees, in traversal order.
    pub children: Vec<ItemNode>,
}

impl ItemNode {
    /// Creates a node with no items and no children.
    pub fn new(id: NodeId, tier: Tier) -> Self {
        Self {
            id,
            tier,
            items: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Attaches one item.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Attaches items in order.
    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items.extend(items);
        self
    }

    /// Appends one child subtree.
    pub fn with_child(mut self, child: ItemNode) -> Self {
        self.children.push(child);
        self
    }

    /// Appends child subtrees in order.
    pub fn with_children(mut self, children: impl IntoIterator<Item = ItemNode>) -> Self {
        self.children.extend(children);
        self
    }
}
