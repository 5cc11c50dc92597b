//! Maneuver resolution - Apply a die roll to a ship's maneuver table

use super::result::{PrimaryManeuver, Resolution};
use crate::swerve::SwerveAdjacency;
use crate::table::{LookupError, ManeuverTable};
use crate::types::{DieRoll, MalformedZone, ZoneName, TargetSide};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error(transparent)]
    MalformedZone(#[from] MalformedZone),
    #[error("Missing maneuver entry for {zone}: {source}")]
    MissingEntry {
        zone: String,
        #[source]
        source: LookupError,
    },
}

/// The primary maneuver set for a zone
///
/// Symmetric arcs look up both target-side columns. When both columns give the
/// same maneuver it is returned once with no side; otherwise right comes first.
pub fn primary_maneuvers(
    zone: &ZoneName,
    table: &ManeuverTable,
    roll: DieRoll,
) -> Result<Vec<PrimaryManeuver>, LookupError> {
    if !zone.arc.is_symmetric() {
        let maneuver = table.direct(zone, roll)?;
        return Ok(vec![PrimaryManeuver::new(maneuver.clone(), None)]);
    }

    let right = table.sided(zone, TargetSide::Right, roll)?;
    let left = table.sided(zone, TargetSide::Left, roll)?;
    if right == left {
        Ok(vec![PrimaryManeuver::new(right.clone(), None)])
    } else {
        Ok(vec![
            PrimaryManeuver::new(right.clone(), Some(TargetSide::Right)),
            PrimaryManeuver::new(left.clone(), Some(TargetSide::Left)),
        ])
    }
}

/// Resolve a zone click: primary maneuvers, then bearing-filtered swerves
///
/// Swerve candidates are the primary sets of every adjacent zone for the same
/// roll. A candidate is kept for a primary when the two bearings match or
/// either one is indeterminate. Candidates are never themselves swerved.
pub fn resolve(
    zone_name: &str,
    table: &ManeuverTable,
    roll: DieRoll,
    adjacency: &SwerveAdjacency,
) -> Result<Resolution, ResolveError> {
    let zone = ZoneName::parse(zone_name)?;

    let mut primaries =
        primary_maneuvers(&zone, table, roll).map_err(|source| ResolveError::MissingEntry {
            zone: zone_name.to_string(),
            source,
        })?;

    // adjacency is keyed on arc and qualifier only
    let key = zone.to_string();
    let mut candidates = Vec::new();
    for neighbour in adjacency.neighbours(&key) {
        let adjacent = match ZoneName::parse(neighbour) {
            Ok(adjacent) => adjacent,
            Err(e) => {
                log::warn!("Skipping swerve source: {}", e);
                continue;
            }
        };
        match primary_maneuvers(&adjacent, table, roll) {
            Ok(found) => candidates.extend(found.into_iter().map(|p| p.maneuver)),
            Err(e) => log::warn!("Skipping swerve source {}: {}", neighbour, e),
        }
    }

    for primary in &mut primaries {
        let bearing = primary.bearing();
        primary.swerves = candidates
            .iter()
            .filter(|candidate| bearing.compatible_with(candidate.bearing()))
            .cloned()
            .collect();
    }

    log::debug!(
        "Resolved {} on {}: {} primary, {} swerve",
        zone_name,
        roll,
        primaries.len(),
        primaries.iter().map(|p| p.swerves.len()).sum::<usize>()
    );

    Ok(Resolution {
        zone: zone_name.to_string(),
        roll,
        primaries,
    })
}
