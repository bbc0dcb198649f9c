//! Ancestor snapshots produced by flattening.

use std::fmt;

use crate::{NodeId, Tier};

/// Snapshot of the nearest ancestor id at each tier for one
/// root-to-node path.
///
/// Each field holds the id of the nearest node at that tier on the path,
/// inclusive of the node itself (a node is its own ancestor at its own
/// tier), or `None` when no node at that tier appears on the path.
/// Tiers absent from a path stay absent: nothing is inferred or
/// interpolated for a skipped tier.
///
/// # Example
///
/// ```rust
/// use tiermap::{Hierarchy, Tier};
///
/// let hierarchy = Hierarchy::new(Some(122), Some(233), None, Some(444));
/// assert_eq!(hierarchy.get(Tier::Tier2), Some(233));
/// assert_eq!(hierarchy.get(Tier::Tier3), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hierarchy {
    /// Nearest tier-1 ancestor id, if any.
    pub tier1: Option<NodeId>,
    /// Nearest tier-2 ancestor id, if any.
    pub tier2: Option<NodeId>,
    /// Nearest tier-3 ancestor id, if any.
    pub tier3: Option<NodeId>,
    /// Nearest tier-4 ancestor id, if any.
    pub tier4: Option<NodeId>,
}

impl Hierarchy {
    /// Creates a snapshot from per-tier ancestor ids.
    pub fn new(
        tier1: Option<NodeId>,
        tier2: Option<NodeId>,
        tier3: Option<NodeId>,
        tier4: Option<NodeId>,
    ) -> Self {
        Self {
            tier1,
            tier2,
            tier3,
            tier4,
        }
    }

    /// Returns the nearest ancestor id at `tier`, if any.
    pub fn get(&self, tier: Tier) -> Option<NodeId> {
        match tier {
            Tier::Tier1 => self.tier1,
            Tier::Tier2 => self.tier2,
            Tier::Tier3 => self.tier3,
            Tier::Tier4 => self.tier4,
        }
    }

    /// Records `id` as the nearest node at `tier`, replacing any id
    /// recorded earlier.
    ///
    /// When a path carries two nodes of the same tier, the one recorded
    /// last wins, so a root-to-node scan resolves to the deeper node.
    pub fn record(&mut self, tier: Tier, id: NodeId) {
        match tier {
            Tier::Tier1 => self.tier1 = Some(id),
            Tier::Tier2 => self.tier2 = Some(id),
            Tier::Tier3 => self.tier3 = Some(id),
            Tier::Tier4 => self.tier4 = Some(id),
        }
    }

    /// Iterates `(tier, ancestor id)` pairs in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, Option<NodeId>)> + '_ {
        Tier::ALL.into_iter().map(move |tier| (tier, self.get(tier)))
    }

    /// Returns true if no tier has a recorded ancestor.
    pub fn is_empty(&self) -> bool {
        Tier::ALL.into_iter().all(|tier| self.get(tier).is_none())
    }
}

impl fmt::Display for Hierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, (_, id)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match id {
                Some(id) => write!(f, "{id}")?,
                None => write!(f, "-")?,
            }
        }
        write!(f, ")")
    }
}
