//! Core types: zone names, arcs, die rolls, maneuvers and bearings

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Separator between the arc and the range/side qualifier in a zone name
pub const ZONE_SEPARATOR: char = '_';

/// Ship-relative sector a zone belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arc {
    Front,
    Rear,
    Abeam,
    ForwardQuarter,
    RearQuarter,
    /// Any arc label the board uses that isn't one of the standard five
    Other(String),
}

impl Arc {
    pub fn from_label(label: &str) -> Self {
        match label {
            "front" => Arc::Front,
            "rear" => Arc::Rear,
            "abeam" => Arc::Abeam,
            "forwardquarter" => Arc::ForwardQuarter,
            "rearquarter" => Arc::RearQuarter,
            other => Arc::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Arc::Front => "front",
            Arc::Rear => "rear",
            Arc::Abeam => "abeam",
            Arc::ForwardQuarter => "forwardquarter",
            Arc::RearQuarter => "rearquarter",
            Arc::Other(label) => label,
        }
    }

    /// Symmetric arcs carry separate tables for a target on the right or the left
    pub fn is_symmetric(&self) -> bool {
        matches!(self, Arc::Abeam | Arc::ForwardQuarter | Arc::RearQuarter)
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Zone name could not be split into arc and qualifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Bad zone name: {0}")]
pub struct MalformedZone(pub String);

/// A clickable zone, `<arc>_<qualifier>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneName {
    pub arc: Arc,
    /// Range band or side label, e.g. `green`
    pub qualifier: String,
}

impl ZoneName {
    /// Split a zone name on its first separator. Segments past the second are ignored.
    pub fn parse(name: &str) -> Result<Self, MalformedZone> {
        if !name.contains(ZONE_SEPARATOR) {
            return Err(MalformedZone(name.to_string()));
        }
        let mut parts = name.split(ZONE_SEPARATOR);
        let arc = parts.next().unwrap_or_default();
        let qualifier = parts.next().unwrap_or_default();
        Ok(ZoneName {
            arc: Arc::from_label(arc),
            qualifier: qualifier.to_string(),
        })
    }
}

impl fmt::Display for ZoneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.arc, ZONE_SEPARATOR, self.qualifier)
    }
}

/// Result of a six-sided die
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieRoll(u8);

impl DieRoll {
    pub const FACES: u8 = 6;

    pub fn new(face: u8) -> Option<Self> {
        (1..=Self::FACES).contains(&face).then_some(DieRoll(face))
    }

    /// Roll a d6
    pub fn roll(rng: &mut impl Rng) -> Self {
        DieRoll(rng.gen_range(1..=Self::FACES))
    }

    pub fn face(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DieRoll {
    type Error = String;

    fn try_from(face: u8) -> Result<Self, Self::Error> {
        DieRoll::new(face).ok_or_else(|| format!("die face {} out of range 1-6", face))
    }
}

impl From<DieRoll> for u8 {
    fn from(roll: DieRoll) -> u8 {
        roll.0
    }
}

impl fmt::Display for DieRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inferred turning direction of a maneuver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bearing {
    Right,
    Left,
    /// Neither "right" nor "left" appears in the text
    None,
}

impl Bearing {
    /// Case-insensitive substring match. "right" wins if both appear.
    pub fn infer(text: &str) -> Self {
        let lower = text.to_lowercase();
        if lower.contains("right") {
            Bearing::Right
        } else if lower.contains("left") {
            Bearing::Left
        } else {
            Bearing::None
        }
    }

    pub fn is_determinate(self) -> bool {
        self != Bearing::None
    }

    /// Equal bearings, or either side indeterminate
    pub fn compatible_with(self, other: Bearing) -> bool {
        self == other || !self.is_determinate() || !other.is_determinate()
    }
}

/// A maneuver as written in the table, `"<speed> <vector words>"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Maneuver(pub String);

impl Maneuver {
    pub fn new(text: impl Into<String>) -> Self {
        Maneuver(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    /// First token of the trimmed text
    pub fn speed_token(&self) -> &str {
        self.0.split_whitespace().next().unwrap_or("")
    }

    /// Remaining tokens joined with `-`, lower-cased
    pub fn vector_token(&self) -> String {
        self.0
            .split_whitespace()
            .skip(1)
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase()
    }

    pub fn bearing(&self) -> Bearing {
        Bearing::infer(&self.0)
    }
}

impl fmt::Display for Maneuver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which target-side column a primary maneuver came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetSide {
    Right,
    Left,
}

impl TargetSide {
    pub fn table_key(self) -> &'static str {
        match self {
            TargetSide::Right => "target_side_right",
            TargetSide::Left => "target_side_left",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TargetSide::Right => "right",
            TargetSide::Left => "left",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_parse_zone_name() {
        let zone = ZoneName::parse("forwardquarter_green").unwrap();
        assert_eq!(zone.arc, Arc::ForwardQuarter);
        assert_eq!(zone.qualifier, "green");
        assert!(zone.arc.is_symmetric());
        assert_eq!(zone.to_string(), "forwardquarter_green");
    }

    #[test]
    fn test_parse_zone_name_extra_segments() {
        let zone = ZoneName::parse("front_red_extra").unwrap();
        assert_eq!(zone.arc, Arc::Front);
        assert_eq!(zone.qualifier, "red");
    }

    #[test]
    fn test_malformed_zone_name() {
        assert_eq!(
            ZoneName::parse("frontgreen"),
            Err(MalformedZone("frontgreen".to_string()))
        );
    }

    #[test]
    fn test_unknown_arc_is_direct() {
        let zone = ZoneName::parse("dorsal_green").unwrap();
        assert_eq!(zone.arc, Arc::Other("dorsal".to_string()));
        assert!(!zone.arc.is_symmetric());
    }

    #[test]
    fn test_die_roll_range() {
        assert!(DieRoll::new(0).is_none());
        assert!(DieRoll::new(7).is_none());
        assert_eq!(DieRoll::new(6).map(DieRoll::face), Some(6));

        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let face = DieRoll::roll(&mut rng).face();
            assert!((1..=6).contains(&face));
        }
    }

    #[test]
    fn test_bearing_inference() {
        assert_eq!(Bearing::infer("1 Left"), Bearing::Left);
        assert_eq!(Bearing::infer("3 Hard RIGHT"), Bearing::Right);
        assert_eq!(Bearing::infer("2 Straight"), Bearing::None);
        // substring, not word match
        assert_eq!(Bearing::infer("2 Leftish"), Bearing::Left);
    }

    #[test]
    fn test_bearing_compatibility() {
        assert!(Bearing::Left.compatible_with(Bearing::Left));
        assert!(Bearing::Left.compatible_with(Bearing::None));
        assert!(Bearing::None.compatible_with(Bearing::Right));
        assert!(!Bearing::Left.compatible_with(Bearing::Right));
    }

    #[test]
    fn test_maneuver_tokens() {
        let maneuver = Maneuver::new("  2 Hard Right ");
        assert_eq!(maneuver.speed_token(), "2");
        assert_eq!(maneuver.vector_token(), "hard-right");

        let bare = Maneuver::new("3");
        assert_eq!(bare.speed_token(), "3");
        assert_eq!(bare.vector_token(), "");
    }
}
