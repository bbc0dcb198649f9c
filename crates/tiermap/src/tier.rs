//! The four ordered classification tiers.

use std::fmt;

/// Classification rank of a node, from broadest (`Tier1`) to narrowest
/// (`Tier4`).
///
/// Purely descriptive: ordering and level lookup are the only behavior.
/// Derived `Ord` follows rank order, so `Tier::Tier1 < Tier::Tier4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    /// Broadest rank (level 1).
    Tier1,
    /// Second rank (level 2).
    Tier2,
    /// Third rank (level 3).
    Tier3,
    /// Narrowest rank (level 4).
    Tier4,
}

impl Tier {
    /// All tiers in rank order, broadest first.
    pub const ALL: [Tier; 4] = [Tier::Tier1, Tier::Tier2, Tier::Tier3, Tier::Tier4];

    /// Returns the numeric level of this tier (1..=4).
    pub fn level(self) -> u8 {
        match self {
            Tier::Tier1 => 1,
            Tier::Tier2 => 2,
            Tier::Tier3 => 3,
            Tier::Tier4 => 4,
        }
    }

    /// Looks up a tier by its numeric level.
    ///
    /// Returns `None` for levels outside 1..=4.
    pub fn from_level(level: u8) -> Option<Tier> {
        match level {
            1 => Some(Tier::Tier1),
            2 => Some(Tier::Tier2),
            3 => Some(Tier::Tier3),
            4 => Some(Tier::Tier4),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tier{}", self.level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert_eq!(Tier::Tier1.level(), 1);
        assert_eq!(Tier::Tier2.level(), 2);
        assert_eq!(Tier::Tier3.level(), 3);
        assert_eq!(Tier::Tier4.level(), 4);
    }

    #[test]
    fn test_ord_follows_rank() {
        assert!(Tier::Tier1 < Tier::Tier2);
        assert!(Tier::Tier2 < Tier::Tier3);
        assert!(Tier::Tier3 < Tier::Tier4);
    }

    #[test]
    fn test_from_level_round_trips() {
        for tier in Tier::ALL {
            assert_eq!(Tier::from_level(tier.level()), Some(tier));
        }
    }

    #[test]
    fn test_from_level_rejects_out_of_range() {
        assert_eq!(Tier::from_level(0), None);
        assert_eq!(Tier::from_level(5), None);
    }

    #[test]
    fn test_all_is_in_rank_order() {
        let levels: Vec<u8> = Tier::ALL.iter().map(|t| t.level()).collect();
        assert_eq!(levels, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Tier::Tier1.to_string(), "tier1");
        assert_eq!(Tier::Tier4.to_string(), "tier4");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Tier::Tier3).unwrap();
        let back: Tier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Tier::Tier3);
    }
}
