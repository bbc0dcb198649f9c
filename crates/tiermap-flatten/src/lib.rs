//! # tiermap-flatten
//!
//! Flattening engine for four-tier classification trees.
//!
//! The engine walks a caller-owned tree depth-first and produces a flat
//! lookup table associating each interesting node (a flagged leaf, or a
//! node holding domain items) with the ids of its nearest ancestors at
//! each tier. Consumers then answer "which tier-1/2/3/4 ancestor does
//! this node or item belong to?" in O(1), without re-walking the tree.
//!
//! ## Quick Start
//!
//! ```rust
//! use tiermap::{Tier, TreeNode};
//! use tiermap_flatten::HierarchyFlattener;
//!
//! // Tier1(101) -> Tier2(201) -> Tier3(301) -> Tier4(401, leaf)
//! let root = TreeNode::new(101, Tier::Tier1).with_child(
//!     TreeNode::new(201, Tier::Tier2).with_child(
//!         TreeNode::new(301, Tier::Tier3).with_child(TreeNode::leaf(401, Tier::Tier4)),
//!     ),
//! );
//!
//! let flattener = HierarchyFlattener::new();
//! let table = flattener.map_leaves_to_ancestors(Some(&root))?;
//!
//! let hierarchy = table.get(&401).unwrap();
//! assert_eq!(hierarchy.tier1, Some(101));
//! assert_eq!(hierarchy.tier4, Some(401));
//! # Ok::<(), tiermap_flatten::FlattenError>(())
//! ```
//!
//! ## The two tree shapes
//!
//! | Shape | Qualifying entry | Table key |
//! |-------|------------------|-----------|
//! | [`TreeNode`] (leaf flag) | every flagged leaf | [`NodeId`] |
//! | [`ItemNode`] (attached items) | every attached item | [`Item`] |
//!
//! Both operations share one traversal: pre-order DFS with a mutable
//! path stack, pushed on entry and popped after a subtree completes, so
//! sibling branches never observe each other's nodes. The snapshot for
//! a node scans the full root-to-node path; when a tier repeats on one
//! path the deeper occurrence wins.
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/Deserialize derives on the model types
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                  tiermap-flatten                  │
//! │                                                  │
//! │  HierarchyFlattener                              │
//! │  ├── walk tree pre-order (via HierarchyNode)     │
//! │  ├── keep root→current path on a stack           │
//! │  ├── snapshot nearest ancestor id per tier       │
//! │  └── return AncestorMap with traversal stats     │
//! │                                                  │
//! │  Dependencies:                                   │
//! │  └── tiermap - Tier, TreeNode, ItemNode, Hierarchy │
//! └──────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod error;
mod flattener;
mod result;
mod traits;
mod traverser;

// Public re-exports
pub use config::{FlattenerConfig, FlattenerConfigBuilder};
pub use error::{FlattenError, FlattenResult};
pub use flattener::HierarchyFlattener;
pub use result::{AncestorMap, FlattenStats};
pub use traits::HierarchyNode;

// Re-export commonly used types from the model crate for convenience
pub use tiermap::{Hierarchy, Item, ItemNode, NodeId, Tier, TreeNode};
