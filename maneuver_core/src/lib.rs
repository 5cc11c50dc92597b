//! maneuver_core - Starship maneuver lookup for the tabletop ship board
//!
//! This library provides:
//! - DataCache: Lazily loaded zone map and per-ship maneuver tables
//! - Maneuver resolution: Zone + die roll → primary maneuvers and swerves
//! - Overlay / ResultView: View models for the board and the results
//! - Session: The select-ship → click-zone flow with its state

pub mod cache;
pub mod config;
pub mod geometry;
pub mod prelude;
pub mod render;
pub mod resolve;
pub mod session;
pub mod swerve;
pub mod table;
pub mod types;

// Re-export core types for convenience
pub use cache::{DataCache, DataSource, FsSource, LoadError, MemorySource};
pub use config::{default_config, AppConfig, ConfigError, ShipEntry};
pub use geometry::{Point, Polygon, ViewBox};
pub use render::{IconPaths, ManeuverCard, Overlay, ResultBlock, ResultView};
pub use resolve::{resolve, PrimaryManeuver, Resolution, ResolveError};
pub use session::{ClickOutcome, Session, SessionError, ShipBoard};
pub use swerve::SwerveAdjacency;
pub use table::{ManeuverTable, ZoneMap};
pub use types::{Arc, Bearing, DieRoll, Maneuver, TargetSide, ZoneName};
