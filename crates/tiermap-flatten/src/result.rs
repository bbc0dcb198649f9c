//! Result table and statistics for flattening operations.

use std::collections::hash_map;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use tiermap::Hierarchy;

/// Flat ancestor lookup table produced by a flattening operation.
///
/// Maps each qualifying key (a leaf node id, or an item) to the
/// [`Hierarchy`] snapshot for its position in the tree. The table is a
/// fresh, independent value: mutating it does not affect the source
/// tree, and repeated calls over an unchanged tree produce equal
/// tables.
///
/// # Example
///
/// ```rust
/// use tiermap::{Tier, TreeNode};
/// use tiermap_flatten::HierarchyFlattener;
///
/// let root = TreeNode::new(1, Tier::Tier1).with_child(TreeNode::leaf(2, Tier::Tier2));
/// let table = HierarchyFlattener::new().map_leaves_to_ancestors(Some(&root))?;
///
/// assert_eq!(table.count(), 1);
/// assert!(table.contains(&2));
/// assert_eq!(table.get(&2).unwrap().tier1, Some(1));
/// # Ok::<(), tiermap_flatten::FlattenError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AncestorMap<K> {
    /// Snapshot per qualifying key.
    pub entries: HashMap<K, Hierarchy>,
    /// Traversal statistics.
    pub stats: FlattenStats,
}

impl<K: Eq + Hash> AncestorMap<K> {
    /// Creates a table from entries and statistics.
    pub fn new(entries: HashMap<K, Hierarchy>, stats: FlattenStats) -> Self {
        Self { entries, stats }
    }

    /// Creates an empty table.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
            stats: FlattenStats::default(),
        }
    }

    /// Returns the number of qualifying entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entry qualified.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the ancestor snapshot for a key.
    pub fn get(&self, key: &K) -> Option<&Hierarchy> {
        self.entries.get(key)
    }

    /// Checks whether a key qualified.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns an iterator over `(key, snapshot)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Hierarchy)> {
        self.entries.iter()
    }
}

impl<K> IntoIterator for AncestorMap<K> {
    type Item = (K, Hierarchy);
    type IntoIter = hash_map::IntoIter<K, Hierarchy>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a AncestorMap<K> {
    type Item = (&'a K, &'a Hierarchy);
    type IntoIter = hash_map::Iter<'a, K, Hierarchy>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Statistics from a flattening traversal.
#[derive(Debug, Clone, Default)]
pub struct FlattenStats {
    /// Total traversal duration.
    pub duration: Duration,
    /// Number of nodes entered during the traversal.
    pub nodes_visited: usize,
    /// Length of the deepest root-to-node path entered.
    pub max_depth: usize,
}

impl FlattenStats {
    /// Creates new traversal stats.
    pub fn new(duration: Duration, nodes_visited: usize, max_depth: usize) -> Self {
        Self {
            duration,
            nodes_visited,
            max_depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiermap::NodeId;

    fn sample_map() -> AncestorMap<NodeId> {
        let mut entries = HashMap::new();
        entries.insert(401, Hierarchy::new(Some(101), Some(201), Some(301), Some(401)));
        entries.insert(444, Hierarchy::new(Some(122), Some(233), None, Some(444)));
        AncestorMap::new(entries, FlattenStats::default())
    }

    #[test]
    fn test_empty_map() {
        let map: AncestorMap<NodeId> = AncestorMap::empty();
        assert_eq!(map.count(), 0);
        assert!(map.is_empty());
        assert!(!map.contains(&401));
    }

    #[test]
    fn test_lookup() {
        let map = sample_map();
        assert_eq!(map.count(), 2);
        assert!(map.contains(&401));
        assert_eq!(map.get(&401).unwrap().tier3, Some(301));
        assert_eq!(map.get(&444).unwrap().tier3, None);
        assert!(map.get(&999).is_none());
    }

    #[test]
    fn test_iter() {
        let map = sample_map();
        let keys: Vec<NodeId> = map.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&401));
        assert!(keys.contains(&444));
    }

    #[test]
    fn test_into_iter_owned_and_borrowed() {
        let map = sample_map();

        let borrowed: Vec<NodeId> = (&map).into_iter().map(|(k, _)| *k).collect();
        assert_eq!(borrowed.len(), 2);

        let owned: Vec<(NodeId, Hierarchy)> = map.into_iter().collect();
        assert_eq!(owned.len(), 2);
    }

    #[test]
    fn test_stats() {
        let stats = FlattenStats::new(Duration::from_micros(50), 7, 4);
        assert_eq!(stats.duration, Duration::from_micros(50));
        assert_eq!(stats.nodes_visited, 7);
        assert_eq!(stats.max_depth, 4);
    }
}
