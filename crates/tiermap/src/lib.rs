//! # tiermap
//!
//! Data model for four-tier classification trees.
//!
//! This crate provides the tree shapes and snapshot type consumed by the
//! [`tiermap-flatten`] engine:
//!
//! - **Tier**: the four ordered classification ranks, broadest to narrowest
//! - **TreeNode**: tree shape that marks leaves with an explicit flag
//! - **ItemNode**: tree shape that attaches domain items to nodes
//! - **Hierarchy**: the nearest-ancestor-per-tier snapshot for one path
//!
//! ## Building a tree
//!
//! Nodes own their children exclusively, so trees are assembled bottom-up
//! with the fluent constructors:
//!
//! ```rust
//! use tiermap::{Tier, TreeNode};
//!
//! let root = TreeNode::new(101, Tier::Tier1).with_child(
//!     TreeNode::new(201, Tier::Tier2).with_child(TreeNode::leaf(401, Tier::Tier4)),
//! );
//!
//! assert_eq!(root.children.len(), 1);
//! assert!(root.children[0].children[0].leaf);
//! ```
//!
//! ## Attaching items
//!
//! ```rust
//! use tiermap::{Item, ItemNode, Tier};
//!
//! let root = ItemNode::new(103, Tier::Tier1)
//!     .with_item(Item::new("Guitar"))
//!     .with_item(Item::new("Piano"));
//!
//! assert_eq!(root.items.len(), 2);
//! ```
//!
//! ## Tier quick reference
//!
//! | Tier | Level | Scope |
//! |------|-------|-------|
//! | [`Tier::Tier1`] | 1 | broadest |
//! | [`Tier::Tier2`] | 2 | |
//! | [`Tier::Tier3`] | 3 | |
//! | [`Tier::Tier4`] | 4 | narrowest |
//!
//! Children may skip tiers: a `Tier1` node's child can sit at `Tier3`
//! directly. Nothing in this crate assumes contiguous ranks.
//!
//! [`tiermap-flatten`]: https://docs.rs/tiermap-flatten

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod hierarchy;
mod node;
mod tier;

pub use hierarchy::Hierarchy;
pub use node::{Item, ItemNode, TreeNode};
pub use tier::Tier;

/// Node identifier type (64-bit unsigned integer).
///
/// Identifiers are unique within a tree; uniqueness is guaranteed by the
/// caller, never checked here.
pub type NodeId = u64;
