//! Prelude module for convenient imports
//!
//! ```rust
//! use maneuver_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Arc, Bearing, DieRoll, Maneuver, TargetSide, ZoneName};
pub use crate::table::{ManeuverTable, ZoneMap};

// Resolution
pub use crate::resolve::{resolve, Resolution, ResolveError};
pub use crate::swerve::SwerveAdjacency;

// Data loading
pub use crate::cache::{DataCache, DataSource, FsSource, LoadError};

// Rendering and session
pub use crate::render::{Overlay, ResultView};
pub use crate::session::{Session, SessionError};

// Config
pub use crate::config::{default_config, AppConfig};
