//! Maneuver resolution - Turn a zone click and a die roll into maneuvers and swerves

mod resolution;
mod result;

pub use resolution::{primary_maneuvers, resolve, ResolveError};
pub use result::{PrimaryManeuver, Resolution};
