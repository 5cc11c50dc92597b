//! Swerve adjacency: which zones' maneuvers may apply as swerves for a clicked zone

use crate::types::ZONE_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Arcs in order around one side of the ship. Neighbours in this chain are adjacent.
pub const ARC_CHAIN: [&str; 5] = ["front", "forwardquarter", "abeam", "rearquarter", "rear"];

/// Range qualifiers the standard board uses
pub const STANDARD_QUALIFIERS: [&str; 2] = ["green", "red"];

/// Zone name → directionally adjacent zone names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwerveAdjacency {
    pub adjacent: HashMap<String, Vec<String>>,
}

impl SwerveAdjacency {
    /// Neighbouring arcs along [`ARC_CHAIN`], within the same qualifier
    pub fn standard() -> Self {
        let mut adjacent = HashMap::new();
        for qualifier in STANDARD_QUALIFIERS {
            for (i, arc) in ARC_CHAIN.iter().enumerate() {
                let mut neighbours = Vec::new();
                if i > 0 {
                    neighbours.push(zone(ARC_CHAIN[i - 1], qualifier));
                }
                if i + 1 < ARC_CHAIN.len() {
                    neighbours.push(zone(ARC_CHAIN[i + 1], qualifier));
                }
                adjacent.insert(zone(arc, qualifier), neighbours);
            }
        }
        SwerveAdjacency { adjacent }
    }

    /// Zones adjacent to `zone`, empty if it has none
    pub fn neighbours(&self, zone: &str) -> &[String] {
        self.adjacent.get(zone).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn zone(arc: &str, qualifier: &str) -> String {
    format!("{}{}{}", arc, ZONE_SEPARATOR, qualifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_chain_ends() {
        let adjacency = SwerveAdjacency::standard();
        assert_eq!(adjacency.neighbours("front_green"), ["forwardquarter_green"]);
        assert_eq!(adjacency.neighbours("rear_red"), ["rearquarter_red"]);
    }

    #[test]
    fn test_standard_chain_middle() {
        let adjacency = SwerveAdjacency::standard();
        assert_eq!(
            adjacency.neighbours("abeam_green"),
            ["forwardquarter_green", "rearquarter_green"]
        );
    }

    #[test]
    fn test_standard_is_symmetric_relation() {
        let adjacency = SwerveAdjacency::standard();
        for (zone, neighbours) in &adjacency.adjacent {
            for n in neighbours {
                assert!(adjacency.neighbours(n).contains(zone), "{} <-> {}", zone, n);
            }
        }
    }

    #[test]
    fn test_unknown_zone_has_no_neighbours() {
        assert!(SwerveAdjacency::standard().neighbours("dorsal_green").is_empty());
    }
}
