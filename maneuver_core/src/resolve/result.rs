//! Resolution result types

use crate::types::{Bearing, DieRoll, Maneuver, TargetSide};
use serde::{Deserialize, Serialize};

/// One primary maneuver and the swerves that go with it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryManeuver {
    pub maneuver: Maneuver,
    /// Column it came from; `None` for non-symmetric arcs or when both columns agree
    pub side: Option<TargetSide>,
    /// Bearing-compatible maneuvers from adjacent zones, in adjacency order
    pub swerves: Vec<Maneuver>,
}

impl PrimaryManeuver {
    pub fn new(maneuver: Maneuver, side: Option<TargetSide>) -> Self {
        PrimaryManeuver {
            maneuver,
            side,
            swerves: Vec::new(),
        }
    }

    pub fn bearing(&self) -> Bearing {
        self.maneuver.bearing()
    }

    pub fn has_swerves(&self) -> bool {
        !self.swerves.is_empty()
    }
}

/// Everything a zone click produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub zone: String,
    pub roll: DieRoll,
    pub primaries: Vec<PrimaryManeuver>,
}

impl Resolution {
    pub fn swerve_count(&self) -> usize {
        self.primaries.iter().map(|p| p.swerves.len()).sum()
    }
}
