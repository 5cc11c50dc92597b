//! Static data tables: per-ship maneuver tables and the global zone map

use crate::types::{DieRoll, Maneuver, TargetSide, ZoneName};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Die face (`"1"`..`"6"`) → maneuver text
pub type FaceTable = BTreeMap<String, Maneuver>;

/// Entry for one arc/range pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeEntry {
    /// Symmetric arcs: `target_side_right` / `target_side_left` → faces
    Sided(HashMap<String, FaceTable>),
    /// Everything else: faces directly
    Direct(FaceTable),
}

/// A lookup the table has no answer for
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("no arc '{0}' in maneuver table")]
    Arc(String),
    #[error("no range '{range}' under arc '{arc}'")]
    Range { arc: String, range: String },
    #[error("'{0}' has no target-side columns")]
    NotSided(String),
    #[error("'{0}' is split by target side")]
    NotDirect(String),
    #[error("'{zone}' has no column '{side}'")]
    Side { zone: String, side: String },
    #[error("'{zone}' has no entry for roll {roll}")]
    Face { zone: String, roll: DieRoll },
}

/// Per-ship maneuver table: arc → range → entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManeuverTable {
    pub arcs: HashMap<String, HashMap<String, RangeEntry>>,
}

impl ManeuverTable {
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn entry(&self, zone: &ZoneName) -> Result<&RangeEntry, LookupError> {
        let ranges = self
            .arcs
            .get(zone.arc.label())
            .ok_or_else(|| LookupError::Arc(zone.arc.label().to_string()))?;
        ranges.get(&zone.qualifier).ok_or_else(|| LookupError::Range {
            arc: zone.arc.label().to_string(),
            range: zone.qualifier.clone(),
        })
    }

    /// Look up a single column of a symmetric arc
    pub fn sided(
        &self,
        zone: &ZoneName,
        side: TargetSide,
        roll: DieRoll,
    ) -> Result<&Maneuver, LookupError> {
        let faces = match self.entry(zone)? {
            RangeEntry::Sided(sides) => {
                sides
                    .get(side.table_key())
                    .ok_or_else(|| LookupError::Side {
                        zone: zone.to_string(),
                        side: side.table_key().to_string(),
                    })?
            }
            RangeEntry::Direct(_) => return Err(LookupError::NotSided(zone.to_string())),
        };
        face(faces, zone, roll)
    }

    /// Look up a non-symmetric arc
    pub fn direct(&self, zone: &ZoneName, roll: DieRoll) -> Result<&Maneuver, LookupError> {
        match self.entry(zone)? {
            RangeEntry::Direct(faces) => face(faces, zone, roll),
            RangeEntry::Sided(_) => Err(LookupError::NotDirect(zone.to_string())),
        }
    }
}

fn face<'a>(faces: &'a FaceTable, zone: &ZoneName, roll: DieRoll) -> Result<&'a Maneuver, LookupError> {
    faces.get(&roll.to_string()).ok_or_else(|| LookupError::Face {
        zone: zone.to_string(),
        roll,
    })
}

/// Global zone name → SVG point string map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneMap {
    pub zones: BTreeMap<String, String>,
}

impl ZoneMap {
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.zones.iter().map(|(name, points)| (name.as_str(), points.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"{
        "front": { "green": { "1": "1 Straight", "3": "1 Left" } },
        "abeam": {
            "green": {
                "target_side_right": { "3": "2 Right" },
                "target_side_left": { "3": "2 Left" }
            }
        }
    }"#;

    fn roll(face: u8) -> DieRoll {
        DieRoll::new(face).unwrap()
    }

    #[test]
    fn test_parse_mixed_entries() {
        let table = ManeuverTable::from_json(TABLE).unwrap();
        let front = ZoneName::parse("front_green").unwrap();
        let abeam = ZoneName::parse("abeam_green").unwrap();

        assert!(matches!(table.entry(&front), Ok(RangeEntry::Direct(_))));
        assert!(matches!(table.entry(&abeam), Ok(RangeEntry::Sided(_))));
        assert_eq!(table.direct(&front, roll(3)).unwrap().text(), "1 Left");
        assert_eq!(
            table.sided(&abeam, TargetSide::Left, roll(3)).unwrap().text(),
            "2 Left"
        );
    }

    #[test]
    fn test_lookup_errors() {
        let table = ManeuverTable::from_json(TABLE).unwrap();
        let front = ZoneName::parse("front_green").unwrap();
        let abeam = ZoneName::parse("abeam_green").unwrap();

        assert!(matches!(table.direct(&front, roll(6)), Err(LookupError::Face { .. })));
        assert!(matches!(
            table.direct(&ZoneName::parse("front_red").unwrap(), roll(1)),
            Err(LookupError::Range { .. })
        ));
        assert!(matches!(
            table.direct(&ZoneName::parse("rear_green").unwrap(), roll(1)),
            Err(LookupError::Arc(_))
        ));
        assert!(matches!(table.direct(&abeam, roll(3)), Err(LookupError::NotDirect(_))));
        assert!(matches!(
            table.sided(&front, TargetSide::Right, roll(3)),
            Err(LookupError::NotSided(_))
        ));
    }

    #[test]
    fn test_zone_map_sorted() {
        let map = ZoneMap::from_json(r#"{"rear_green": "0,0 1,0 1,1", "front_green": "2,2 3,2 3,3"}"#)
            .unwrap();
        let names: Vec<_> = map.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["front_green", "rear_green"]);
        assert_eq!(map.len(), 2);
    }
}
